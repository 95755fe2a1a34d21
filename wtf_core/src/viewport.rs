//! `viewport`：选中行与滚动窗口。
//!
//! 可见列表非空时始终满足 `scroll <= selected < scroll + rows`；
//! 可见列表为空时 `selected = scroll = 0`。

/// 导航方向（与按键的对应关系由布局决定）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 可见列表中的下一项（越界回到 0）
    Next,
    /// 可见列表中的上一项（越界回到末尾）
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    selected: usize,
    scroll: usize,
    /// 可显示的行数，至少为 1
    rows: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self {
            selected: 0,
            scroll: 0,
            rows: rows.max(1),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 可见列表变化后调用。
    ///
    /// 列表缩短到选中行之下时，选中最后一项并把滚动归零，然后重新贴合。
    pub fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
            self.scroll = 0;
            return;
        }
        if self.selected >= count {
            self.selected = count - 1;
            self.scroll = 0;
        }
        self.scroll_to_fit();
    }

    /// 调整 `scroll`，让选中行落在窗口内。
    pub fn scroll_to_fit(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.rows {
            self.scroll = self.selected + 1 - self.rows;
        }
    }

    pub fn navigate(&mut self, direction: Direction, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = match direction {
            Direction::Next => (self.selected + 1) % count,
            Direction::Prev if self.selected == 0 => count - 1,
            Direction::Prev => self.selected - 1,
        };
        self.scroll_to_fit();
    }

    /// 终端尺寸变化：更新行数，滚动归零后重新贴合。
    pub fn resize(&mut self, rows: usize) {
        self.rows = rows.max(1);
        self.scroll = 0;
        self.scroll_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(selected: usize, scroll: usize, rows: usize) -> Viewport {
        Viewport {
            selected,
            scroll,
            rows,
        }
    }

    #[test]
    fn next_wraps_to_first() {
        let mut v = at(4, 2, 3);
        v.navigate(Direction::Next, 5);
        assert_eq!((v.selected(), v.scroll()), (0, 0));
    }

    #[test]
    fn prev_wraps_to_last_and_scrolls() {
        let mut v = Viewport::new(3);
        v.navigate(Direction::Prev, 10);
        assert_eq!((v.selected(), v.scroll()), (9, 7));
    }

    #[test]
    fn navigation_is_noop_when_empty() {
        let mut v = Viewport::new(3);
        v.navigate(Direction::Next, 0);
        v.navigate(Direction::Prev, 0);
        assert_eq!(v, Viewport::new(3));
    }

    #[test]
    fn clamp_on_shrink_selects_last_and_resets_scroll() {
        let mut v = at(8, 6, 3);
        v.clamp(4);
        assert_eq!((v.selected(), v.scroll()), (3, 1));
    }

    #[test]
    fn clamp_to_empty_resets_everything() {
        let mut v = at(8, 6, 3);
        v.clamp(0);
        assert_eq!((v.selected(), v.scroll()), (0, 0));
    }

    #[test]
    fn resize_refits_from_top() {
        let mut v = at(5, 5, 1);
        v.resize(4);
        assert_eq!((v.selected(), v.scroll(), v.rows()), (5, 2, 4));
    }

    #[test]
    fn row_budget_never_zero() {
        let mut v = Viewport::new(0);
        assert_eq!(v.rows(), 1);
        v.resize(0);
        v.navigate(Direction::Next, 3);
        assert_eq!((v.selected(), v.scroll()), (1, 1));
    }
}
