//! 把 `UiState` 画到任意 `Surface` 上。
//!
//! 画面自查询行开始按逻辑行编号：
//! - 第 0 行：提示符 + 查询，光标停在查询光标处
//! - 第 1 行：状态栏 `- 可见数/总数 -----`
//! - 第 2 行起：视口内的候选；选中行带选择符并加粗，命中字符标红
//!
//! 自下而上布局时逻辑行 0 在屏幕最底部。
use unicode_width::UnicodeWidthChar;
use wtf_core::{
    config::Layout,
    model::{Row, UiState},
    surface::{Color, Style, Surface},
};

/// 查询行和状态栏占用的行数。
const HEADER_ROWS: u16 = 2;

/// 列表可用的行数（至少一行）。
pub fn list_rows(height: u16) -> usize {
    usize::from(height.saturating_sub(HEADER_ROWS).max(1))
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub prompt: &'static str,
    pub prompt_style: Style,
    pub selector: &'static str,
    pub selector_style: Style,
    pub status_fill: char,
    pub status_style: Style,
    pub marker_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt: ">",
            prompt_style: Style::fg(Color::Yellow),
            selector: "|",
            selector_style: Style::fg(Color::Green).bold(),
            status_fill: '-',
            status_style: Style::fg(Color::Yellow),
            marker_style: Style::fg(Color::Red).bold(),
        }
    }
}

pub fn draw(surface: &mut impl Surface, ui: &UiState<'_>, layout: Layout, theme: &Theme) {
    surface.clear();
    let (_, height) = surface.size();
    let line = |y: u16| -> Option<u16> {
        (y < height).then(|| match layout {
            Layout::BottomUp => height - 1 - y,
            Layout::TopDown => y,
        })
    };

    // 查询行
    if let Some(y) = line(0) {
        let x = put_str(surface, 0, y, theme.prompt, theme.prompt_style) + 1;
        put_str(surface, x, y, &ui.query, Style::default());
        let before: u16 = ui
            .query
            .chars()
            .take(ui.cursor)
            .map(|c| c.width().unwrap_or(0) as u16)
            .sum();
        surface.set_cursor(x + before, y);
    }

    // 状态栏
    if let Some(y) = line(1) {
        let mut fill = [0u8; 4];
        let fill = theme.status_fill.encode_utf8(&mut fill);
        let status = format!("{fill} {}/{}", ui.visible, ui.total);
        let mut x = put_str(surface, 0, y, &status, theme.status_style) + 1;
        let (width, _) = surface.size();
        // 零宽填充字符画不出任何东西，不再前进就停下
        while x < width {
            let next = put_str(surface, x, y, fill, theme.status_style);
            if next == x {
                break;
            }
            x = next;
        }
    }

    for (i, row) in ui.rows.iter().enumerate() {
        let Some(y) = u16::try_from(i)
            .ok()
            .and_then(|i| i.checked_add(HEADER_ROWS))
            .and_then(line)
        else {
            break;
        };
        draw_row(surface, y, row, theme);
    }
}

fn draw_row(surface: &mut impl Surface, y: u16, row: &Row<'_>, theme: &Theme) {
    let mut base = Style::default();
    if row.selected {
        put_str(surface, 0, y, theme.selector, theme.selector_style);
        base = base.bold();
    }
    let (width, _) = surface.size();
    let mut x = str_width(theme.selector) + 1;
    let marks = row.candidate.matched();
    for (i, ch) in row.candidate.text().chars().enumerate() {
        if x >= width {
            break;
        }
        let style = if marks.get(i).copied().unwrap_or(false) {
            theme.marker_style
        } else {
            base
        };
        x = put_char(surface, x, y, ch, style);
    }
}

/// 写一个字符，返回下一列。控制字符显示为 `?`，零宽字符被跳过。
fn put_char(surface: &mut impl Surface, x: u16, y: u16, ch: char, style: Style) -> u16 {
    let (ch, w) = if ch.is_control() {
        ('?', 1)
    } else {
        (ch, ch.width().unwrap_or(0) as u16)
    };
    if w == 0 {
        return x;
    }
    surface.set_cell(x, y, ch, style);
    x.saturating_add(w)
}

fn put_str(surface: &mut impl Surface, x: u16, y: u16, s: &str, style: Style) -> u16 {
    s.chars().fold(x, |x, ch| put_char(surface, x, y, ch, style))
}

fn str_width(s: &str) -> u16 {
    s.chars().map(|c| c.width().unwrap_or(0) as u16).sum()
}
