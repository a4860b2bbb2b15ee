//! Utility modules

pub mod ipv4;
