//! 候选表格消息处理

use crate::message::TableMessage;
use crate::model::CandidatesState;

pub fn update(table: &mut CandidatesState, msg: TableMessage) {
    match msg {
        TableMessage::SelectPrevious => table.select_previous(),
        TableMessage::SelectNext => table.select_next(),
        TableMessage::SelectFirst => table.select_first(),
        TableMessage::SelectLast => table.select_last(),
        TableMessage::Choose => table.choose_current(),
    }
}
