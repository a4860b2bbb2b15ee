//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, BannerTexts, CandidatesTexts, CommonTexts, EditorTexts, HintTexts, KeyNames,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "IP Selector",
        quit: "Quit",
    },

    hints: HintTexts {
        keys: KeyNames {
            tab: "Tab",
            arrows_ud: "↑↓",
            space: "Space",
            select: "Alt+s",
            sync: "Alt+y",
            refresh: "Alt+r",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move",
            choose: "Choose",
            submit: "Select IPs",
            sync: "Sync DNS",
            refresh: "Refresh",
        },
    },

    editor: EditorTexts {
        title: "IP Ranges",
        placeholder: "One range per line, e.g. 173.245.48.0/20",
    },

    candidates: CandidatesTexts {
        title: "Selected IPs",
        columns: ["IP", "Sent", "Received", "Loss", "Latency", "Speed (MB/s)"],
        empty: "No candidates yet. Press Alt+s to start a selection.",
        updated_at: "updated",
    },

    banner: BannerTexts {
        loading: "Working...",
    },

    status_bar: StatusBarTexts {
        job_in_progress: "A selection job is already running",
        backend_unreachable: "Backend unreachable",
        restore_failed: "Could not restore saved ranges",
        persist_failed: "Could not save ranges",
    },
};
