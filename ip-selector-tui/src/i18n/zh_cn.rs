//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "IP 优选",
        quit: "退出",
    },

    hints: HintTexts {
        keys: KeyNames {
            tab: "Tab",
            arrows_ud: "↑↓",
            space: "空格",
            select: "Alt+s",
            sync: "Alt+y",
            refresh: "Alt+r",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            move_up_down: "移动",
            choose: "选择",
            submit: "开始优选",
            sync: "同步 DNS",
            refresh: "刷新",
        },
    },

    editor: EditorTexts {
        title: "IP 段",
        placeholder: "每行一个 IP 段，例如 173.245.48.0/20",
    },

    candidates: CandidatesTexts {
        title: "优选结果",
        columns: ["IP 地址", "已发送", "已接收", "丢包率", "平均延迟", "下载速度 (MB/s)"],
        empty: "暂无结果，按 Alt+s 开始优选",
        updated_at: "更新于",
    },

    banner: BannerTexts {
        loading: "处理中...",
    },

    status_bar: StatusBarTexts {
        job_in_progress: "已有优选任务在运行",
        backend_unreachable: "无法连接后端",
        restore_failed: "无法恢复已保存的 IP 段",
        persist_failed: "无法保存 IP 段",
    },
};
