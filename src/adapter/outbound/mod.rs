//! Outbound adapters (driven side).

pub mod http;
pub mod storage;
