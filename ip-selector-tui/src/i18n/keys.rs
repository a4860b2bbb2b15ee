//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 3. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 地址段编辑器
    pub editor: EditorTexts,
    /// 候选表格
    pub candidates: CandidatesTexts,
    /// 横幅
    pub banner: BannerTexts,
    /// 状态栏提示
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub tab: &'static str,
    pub arrows_ud: &'static str,
    pub space: &'static str,
    pub select: &'static str,
    pub sync: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub choose: &'static str,
    pub submit: &'static str,
    pub sync: &'static str,
    pub refresh: &'static str,
}

// ============================================================================
// 面板
// ============================================================================

pub struct EditorTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
}

pub struct CandidatesTexts {
    pub title: &'static str,
    /// 表头，超出部分用 `#n` 补齐
    pub columns: [&'static str; 6],
    pub empty: &'static str,
    pub updated_at: &'static str,
}

pub struct BannerTexts {
    pub loading: &'static str,
}

pub struct StatusBarTexts {
    pub job_in_progress: &'static str,
    pub backend_unreachable: &'static str,
    pub restore_failed: &'static str,
    pub persist_failed: &'static str,
}
