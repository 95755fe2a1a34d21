//! 终端层：`Surface` 的实现与绘制。
//!
//! - `TtySurface`：基于 crossterm 的真实终端
//! - `MemorySurface`：内存缓冲，供测试与无终端环境使用
//! - `draw`：把 `UiState` 画到任意 `Surface`
use std::io;

use thiserror::Error;

pub mod draw;
pub mod grid;
mod memory;
mod tty;

pub use memory::MemorySurface;
pub use tty::{TtySurface, map_key};

#[derive(Debug, Error)]
pub enum TermError {
    /// 终端无法进入 raw mode / 备用屏幕。
    #[error("initializing terminal failed: {0}")]
    Init(#[source] io::Error),
}
