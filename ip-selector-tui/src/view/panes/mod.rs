pub mod candidates;
pub mod editor;
