use serde::{Deserialize, Serialize};

use ip_selector_client::CandidateRecord;

/// Identity of one rendered candidate row.
///
/// `generation` changes on every refresh, so a row id taken from an older
/// table never resolves against a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
    pub generation: u64,
    pub index: usize,
}

/// A candidate record together with its row identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    pub id: RowId,
    pub record: CandidateRecord,
}

impl CandidateRow {
    pub fn new(id: RowId, record: CandidateRecord) -> Self {
        Self { id, record }
    }

    /// Address column, by position.
    pub fn address(&self, field: usize) -> Option<&str> {
        self.record.field(field)
    }
}
