//! DNS 同步服务
//!
//! 校验唯一选中的候选地址后再发起同步请求。校验失败不会产生网络请求。

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::services::{PanelContext, SelectionResultStore};
use crate::types::{RowId, SUCCESS_MESSAGE, UiTransition};
use crate::utils::ipv4::parse_ipv4;

/// DNS 同步服务
pub struct DnsSyncGate {
    ctx: Arc<PanelContext>,
    results: Arc<SelectionResultStore>,
}

impl DnsSyncGate {
    #[must_use]
    pub fn new(ctx: Arc<PanelContext>, results: Arc<SelectionResultStore>) -> Self {
        Self { ctx, results }
    }

    /// 将 DNS 记录同步到选中行的地址
    pub async fn sync(&self, selection: Option<RowId>) -> CoreResult<()> {
        let address = self.selected_address(selection).await.map_err(|e| {
            let err = CoreError::Validation(e);
            self.ctx.report_failure("DNS sync", &err);
            err
        })?;

        log::info!("Syncing DNS record to {address}");
        self.ctx.emit(UiTransition::Loading);

        match self.ctx.backend.sync_dns(&address).await {
            Ok(()) => {
                self.ctx
                    .emit(UiTransition::Succeeded(SUCCESS_MESSAGE.to_string()));
                Ok(())
            }
            Err(e) => {
                let err = CoreError::Sync(e);
                self.ctx.report_failure("DNS sync", &err);
                Err(err)
            }
        }
    }

    async fn selected_address(&self, selection: Option<RowId>) -> Result<String, ValidationError> {
        let row_id = selection.ok_or(ValidationError::NoSelection)?;
        let record = self
            .results
            .lookup(row_id)
            .await
            .ok_or(ValidationError::StaleSelection)?;

        let address = record
            .field(self.ctx.settings.address_field)
            .unwrap_or_default();
        parse_ipv4(address)?;
        Ok(address.to_string())
    }
}
