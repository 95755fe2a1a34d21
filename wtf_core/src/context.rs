//! `Context`：processor 链共享的唯一状态容器。
//!
//! 约定：
//! - `query`：用户正在输入的查询（含光标）
//! - `visible`：通过过滤的条目句柄，按距离排好序
//! - `viewport`：选中行与滚动窗口，只索引 `visible`
use crate::{
    engine::EngineFacade,
    key_event::Action,
    model::{CandidateId, Row, UiState},
    query::Query,
    viewport::{Direction, Viewport},
};

/// 查找会话上下文：processor 链共享的唯一状态。
#[derive(Debug, Clone)]
pub struct Context {
    pub query: Query,
    pub visible: Vec<CandidateId>,
    pub viewport: Viewport,
}

impl Context {
    /// 初始状态：空查询，全部条目可见。
    pub fn new(engine: &mut dyn EngineFacade, rows: usize) -> Self {
        let mut ctx = Self {
            query: Query::new(),
            visible: Vec::new(),
            viewport: Viewport::new(rows),
        };
        ctx.refilter(engine);
        ctx
    }

    /// 查询文本变化后：重建可见列表，再把视口夹回合法范围。
    pub fn refilter(&mut self, engine: &mut dyn EngineFacade) {
        self.visible = engine.rebuild(&self.query.text());
        self.viewport.clamp(self.visible.len());
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.viewport.navigate(direction, self.visible.len());
    }

    pub fn selected(&self) -> Option<CandidateId> {
        self.visible.get(self.viewport.selected()).copied()
    }

    /// Enter 的默认行为：确认选中项（列表为空时不带值）。
    pub fn accept(&self) -> Action {
        Action::Accept(self.selected())
    }

    /// 生成 UI 层只读快照。
    pub fn ui_state<'a>(&self, engine: &'a dyn EngineFacade) -> UiState<'a> {
        let selected = self.viewport.selected();
        let start = self.viewport.scroll().min(self.visible.len());
        let end = (start + self.viewport.rows()).min(self.visible.len());
        let rows = self.visible[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, &id)| {
                engine.candidate(id).map(|candidate| Row {
                    candidate,
                    selected: start + offset == selected,
                })
            })
            .collect();
        UiState {
            query: self.query.text(),
            cursor: self.query.cursor(),
            visible: self.visible.len(),
            total: engine.total(),
            rows,
        }
    }
}
