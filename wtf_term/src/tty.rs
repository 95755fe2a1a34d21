//! crossterm 终端绘制面。
//!
//! 标准输入通常是管道，所以键盘事件和画面都走控制终端（unix 上为 `/dev/tty`），
//! 标准输出留给最终结果。
use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color as TermColor, Print, SetAttribute, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, info};
use wtf_core::{
    key_event::InputEvent,
    surface::{Color, Style, Surface},
};

use crate::{TermError, draw::list_rows, grid::Grid};

/// 真实终端：raw mode + 备用屏幕，`Drop` 时恢复。
pub struct TtySurface {
    out: Box<dyn Write + Send>,
    grid: Grid,
}

impl TtySurface {
    pub fn new() -> Result<Self, TermError> {
        let mut out = open_tty().map_err(TermError::Init)?;
        terminal::enable_raw_mode().map_err(TermError::Init)?;
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(TermError::Init(err));
        }
        let (width, height) = match terminal::size() {
            Ok(size) => size,
            Err(err) => {
                let _ = execute!(out, LeaveAlternateScreen);
                let _ = terminal::disable_raw_mode();
                return Err(TermError::Init(err));
            }
        };
        info!(width, height, "terminal initialised");
        Ok(Self {
            out,
            grid: Grid::new(width, height),
        })
    }
}

#[cfg(unix)]
fn open_tty() -> io::Result<Box<dyn Write + Send>> {
    let tty = std::fs::OpenOptions::new().write(true).open("/dev/tty")?;
    Ok(Box::new(tty))
}

#[cfg(not(unix))]
fn open_tty() -> io::Result<Box<dyn Write + Send>> {
    Ok(Box::new(io::stderr()))
}

impl Drop for TtySurface {
    fn drop(&mut self) {
        let _ = execute!(self.out, SetAttribute(Attribute::Reset), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Surface for TtySurface {
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
        let (_, height) = self.grid.size();
        queue!(self.out, Hide)?;
        for y in 0..height {
            queue!(self.out, MoveTo(0, y))?;
            let mut current: Option<Style> = None;
            for cell in self.grid.row(y) {
                let Some(ch) = cell.ch else { continue };
                if current != Some(cell.style) {
                    apply_style(&mut self.out, cell.style)?;
                    current = Some(cell.style);
                }
                queue!(self.out, Print(ch))?;
            }
        }
        let (cx, cy) = self.grid.cursor();
        queue!(self.out, SetAttribute(Attribute::Reset), MoveTo(cx, cy), Show)?;
        self.out.flush()
    }

    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            let ev = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
                Event::Resize(width, height) => {
                    debug!(width, height, "terminal resized");
                    self.grid.resize(width, height);
                    InputEvent::Resize {
                        rows: list_rows(height),
                    }
                }
                _ => continue,
            };
            return Ok(ev);
        }
    }
}

fn apply_style(out: &mut impl Write, style: Style) -> io::Result<()> {
    let fg = match style.fg {
        Color::Default => TermColor::Reset,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
    };
    queue!(out, SetAttribute(Attribute::Reset), SetForegroundColor(fg))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

/// 把 crossterm 按键翻译成逻辑事件。
pub fn map_key(key: KeyEvent) -> InputEvent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => InputEvent::Escape,
        KeyCode::Char('a') if ctrl => InputEvent::Home,
        KeyCode::Char('e') if ctrl => InputEvent::End,
        KeyCode::Char('h') if ctrl => InputEvent::Backspace,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
            InputEvent::Ignored
        }
        KeyCode::Char(ch) => InputEvent::Char(ch),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Enter,
        KeyCode::Esc => InputEvent::Escape,
        KeyCode::Left => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        KeyCode::Up => InputEvent::Up,
        KeyCode::Down => InputEvent::Down,
        KeyCode::Home => InputEvent::Home,
        KeyCode::End => InputEvent::End,
        _ => InputEvent::Ignored,
    }
}
