use std::borrow::Cow;

/// 候选条目（输入中的一行），可被 UI 展示与用户选择。
///
/// 注意：`text`/`raw` 在会话期间只读；`inaccuracy/distance/matched` 是评分状态，
/// 每次重新评分时原地改写，条目本身永远不会被移动或重新分配。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 展示与评分用的文本（非 UTF-8 字节已被替换）
    pub(crate) text: String,
    /// 原始字节；仅当与 `text` 不一致时才保存
    raw: Option<Box<[u8]>>,
    /// 文本的字符数（`matched` 的长度）
    len: usize,
    /// 未匹配查询字符产生的惩罚，只用于过滤
    pub(crate) inaccuracy: usize,
    /// 排序分数（越小越靠前），可能为负
    pub(crate) distance: i64,
    /// 与文本字符一一对应：该位置是否命中当前查询
    pub(crate) matched: Box<[bool]>,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            raw: None,
            len,
            inaccuracy: 0,
            distance: 0,
            matched: vec![false; len].into_boxed_slice(),
        }
    }

    /// 由一行原始字节构造；非 UTF-8 的行保留原字节用于输出。
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => Self::new(text),
            Cow::Owned(text) => Self {
                raw: Some(bytes.into()),
                ..Self::new(text)
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 确认后应原样写出的字节。
    pub fn bytes(&self) -> &[u8] {
        self.raw.as_deref().unwrap_or(self.text.as_bytes())
    }

    /// 字符数（不是字节数）。
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn inaccuracy(&self) -> usize {
        self.inaccuracy
    }

    pub fn distance(&self) -> i64 {
        self.distance
    }

    pub fn matched(&self) -> &[bool] {
        &self.matched
    }

    /// 清除所有命中标记（空查询时调用）。
    pub(crate) fn clear_markers(&mut self) {
        self.matched.fill(false);
    }
}

impl From<&str> for Candidate {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Candidate {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&[u8]> for Candidate {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// 指向 `CandidateStore` 中某个条目的稳定句柄。
///
/// 可见列表只保存句柄，不保存引用，因此不受存储布局影响。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateId(pub(crate) usize);

impl CandidateId {
    /// 在存储中的下标（即输入顺序）。
    pub fn index(self) -> usize {
        self.0
    }
}

/// 视口中的一行。
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub candidate: &'a Candidate,
    /// 是否为当前选中行
    pub selected: bool,
}

/// 会话给 UI 的"快照视图"。
///
/// 设计目标：
/// - UI 层只读 `UiState`，不直接读写 `Context`
/// - 渲染只需要这一份数据
#[derive(Debug, Clone)]
pub struct UiState<'a> {
    /// 当前查询
    pub query: String,
    /// 查询中的光标位置（字符下标）
    pub cursor: usize,
    /// 通过过滤的条目数
    pub visible: usize,
    /// 全部条目数
    pub total: usize,
    /// 视口内的行，按可见列表顺序（第一行即 `scroll` 位置）
    pub rows: Vec<Row<'a>>,
}
