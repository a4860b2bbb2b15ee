//! 地址段输入服务
//!
//! 保存/恢复操作员最后输入的地址段文本，并按空行策略拆分。

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::PanelContext;
use crate::types::AddressRangeList;

/// 地址段输入服务
pub struct RangeInputService {
    ctx: Arc<PanelContext>,
}

impl RangeInputService {
    #[must_use]
    pub fn new(ctx: Arc<PanelContext>) -> Self {
        Self { ctx }
    }

    /// 恢复上次保存的文本，没有则使用默认地址段列表
    pub async fn restore(&self) -> CoreResult<String> {
        let settings = &self.ctx.settings;
        match self.ctx.input_store.get(&settings.storage_key).await? {
            Some(text) => Ok(text),
            None => Ok(settings.default_ranges.join("\n")),
        }
    }

    /// 保存去除首尾空白后的文本
    pub async fn persist(&self, raw: &str) -> CoreResult<()> {
        self.ctx
            .input_store
            .set(&self.ctx.settings.storage_key, raw.trim())
            .await
    }

    /// 将文本拆分为待提交的地址段列表
    pub fn ranges(&self, raw: &str) -> AddressRangeList {
        AddressRangeList::parse(raw, self.ctx.settings.blank_lines)
    }
}
