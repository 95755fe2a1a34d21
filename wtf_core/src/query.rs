//! `query`：查询文本与光标。
//!
//! 光标以字符为单位，始终满足 `0 <= cursor <= len`。

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    chars: Vec<char>,
    cursor: usize,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// 在光标处插入并右移光标。
    pub fn insert(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// 删除光标前一个字符；没有可删的字符时返回 `false`。
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 || self.chars.is_empty() {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }
}
