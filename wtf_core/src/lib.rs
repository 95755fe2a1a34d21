//! `wtf_core`：纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：终端前端与测试共用同一套逻辑
//! - **分层清晰**：session -> processor -> engine -> scorer -> filter -> 输出（`UiState`）
//! - **句柄稳定**：候选只存在于 `CandidateStore`，其他地方只持有 `CandidateId`
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod filter;
pub mod key_event;
pub mod model;
pub mod processor;
pub mod query;
pub mod scorer;
pub mod session;
pub mod store;
pub mod surface;
pub mod viewport;
