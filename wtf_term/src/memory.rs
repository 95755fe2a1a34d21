use std::collections::VecDeque;
use std::io;

use wtf_core::{
    key_event::InputEvent,
    surface::{Style, Surface},
};

use crate::grid::Grid;

/// 内存绘制面：事件来自预置队列，画面留在缓冲里供检查。
///
/// 用于无终端环境下驱动完整的读事件/绘制循环。
#[derive(Debug, Clone)]
pub struct MemorySurface {
    grid: Grid,
    events: VecDeque<InputEvent>,
    /// `present` 被调用的次数
    pub frames: usize,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid: Grid::new(width, height),
            events: VecDeque::new(),
            frames: 0,
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// 模拟终端尺寸变化（不产生事件）。
    pub fn resize(&mut self, width: u16, height: u16) {
        self.grid.resize(width, height);
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> (u16, u16) {
        self.grid.size()
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.grid.set(x, y, ch, style);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.grid.set_cursor(x, y);
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more events"))
    }
}
