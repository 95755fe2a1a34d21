use crate::model::CandidateId;

/// 输入事件（逻辑按键事件）。
///
/// 说明：
/// - `Session`/processor 只关心"语义事件"，不关心具体终端键值。
/// - 终端层负责把系统事件转换成这些事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// 输入一个字符（插入到查询光标处）
    Char(char),
    /// 删除光标前一个字符
    Backspace,
    /// 查询光标左移 / 右移
    Left,
    Right,
    /// 查询光标移到行首（Ctrl-A）
    Home,
    /// 查询光标移到行尾（Ctrl-E）
    End,
    /// 列表导航
    Up,
    Down,
    /// 终端尺寸变化，携带可用于列表的行数
    Resize { rows: usize },
    /// 确认当前选中项
    Enter,
    /// 放弃
    Escape,
    /// 其他事件（鼠标、功能键等），忽略
    Ignored,
}

/// 处理事件产生的动作（对宿主的"副作用"请求）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 确认：带上选中条目；可见列表为空时为 `None`
    Accept(Option<CandidateId>),
    /// 取消
    Cancel,
}

/// 会话状态：`Active` 为初始状态，其余两个为终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Active,
    Accepted(Option<CandidateId>),
    Cancelled,
}

impl SessionState {
    pub fn is_finished(self) -> bool {
        !matches!(self, SessionState::Active)
    }
}

impl From<Action> for SessionState {
    fn from(action: Action) -> Self {
        match action {
            Action::Accept(id) => SessionState::Accepted(id),
            Action::Cancel => SessionState::Cancelled,
        }
    }
}
