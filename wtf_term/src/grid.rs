//! 后台单元格缓冲，真实终端与内存绘制面共用。
use unicode_width::UnicodeWidthChar;
use wtf_core::surface::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// `None` 表示宽字符占用的第二格
    pub ch: Option<char>,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: Some(' '),
            style: Style::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: (u16, u16),
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            cursor: (0, 0),
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self::new(width, height);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        let Some(i) = self.index(x, y) else { return };
        self.cells[i] = Cell {
            ch: Some(ch),
            style,
        };
        if ch.width() == Some(2) {
            if let Some(tail) = self.index(x + 1, y) {
                self.cells[tail] = Cell { ch: None, style };
            }
        }
    }

    /// 一行的单元格。
    pub fn row(&self, y: u16) -> &[Cell] {
        match self.index(0, y) {
            Some(start) => &self.cells[start..start + usize::from(self.width)],
            None => &[],
        }
    }

    /// 一行的纯文本（宽字符的第二格不输出），去掉行尾空白。
    pub fn row_text(&self, y: u16) -> String {
        let text: String = self.row(y).iter().filter_map(|c| c.ch).collect();
        text.trim_end().to_owned()
    }
}
