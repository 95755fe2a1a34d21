//! `surface`：终端绘制面的抽象。
//!
//! core 不关心绘制面来自真实终端还是内存缓冲；
//! 初始化/关闭由实现方的构造与 `Drop` 负责。
use std::io;

use crate::key_event::InputEvent;

/// 前景色（背景始终为终端默认色）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Red,
    Green,
    Yellow,
}

/// 单元格样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Color,
    pub bold: bool,
}

impl Style {
    pub const fn fg(fg: Color) -> Self {
        Self { fg, bold: false }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub trait Surface {
    /// 当前尺寸：(宽, 高)
    fn size(&self) -> (u16, u16);
    /// 清空后台缓冲
    fn clear(&mut self);
    /// 写一个单元格；超出范围的坐标被忽略
    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style);
    fn set_cursor(&mut self, x: u16, y: u16);
    /// 把后台缓冲刷到屏幕
    fn present(&mut self) -> io::Result<()>;
    /// 阻塞等待下一个事件
    fn next_event(&mut self) -> io::Result<InputEvent>;
}
