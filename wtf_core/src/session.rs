//! `Session`：对上层（CLI/终端）提供的会话对象。
//!
//! `Session` 自身不做业务逻辑判断，而是：
//! - 持有引擎（候选存储 + 评分 + 过滤）与 `Context`（状态）
//! - 持有 processors 链
//! - 把每次 `InputEvent` 依次交给 processors，直到被消费
//! - 把产生的 `Action` 折算成 `SessionState`；进入终态后不再接受事件

use tracing::{info, trace};

use crate::{
    config::Config,
    context::Context,
    engine::Engine,
    key_event::{InputEvent, SessionState},
    model::{Candidate, UiState},
    processor::{EditingProcessor, ExitProcessor, NavigationProcessor, ProcessStatus, Processor},
    scorer::Scorer,
};

/// 查找会话（一次选择过程的状态机容器）。
pub struct Session<S> {
    engine: Engine<S>,
    ctx: Context,
    processors: Vec<Box<dyn Processor>>,
    state: SessionState,
}

impl<S> Session<S>
where
    S: Scorer,
{
    /// 创建会话，并组装默认 processors 链。
    ///
    /// `rows` 是列表可用的行数。`config` 整体生效：过滤阈值写入引擎，
    /// `layout` 决定上下键的导航方向。
    pub fn new(engine: Engine<S>, config: &Config, rows: usize) -> Self {
        let mut engine = engine.with_config(config);
        let ctx = Context::new(&mut engine, rows);
        info!(total = engine.store().len(), rows, "session started");
        Self {
            engine,
            ctx,
            processors: vec![
                Box::new(EditingProcessor),
                Box::new(NavigationProcessor {
                    layout: config.layout,
                }),
                Box::new(ExitProcessor),
            ],
            state: SessionState::Active,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// 获取当前 UI 快照（只读）。
    pub fn ui_state(&self) -> UiState<'_> {
        self.ctx.ui_state(&self.engine)
    }

    /// 确认的条目（仅在 `Accepted(Some(_))` 时有值）。
    pub fn selection(&self) -> Option<&Candidate> {
        match self.state {
            SessionState::Accepted(Some(id)) => self.engine.store().get(id),
            _ => None,
        }
    }

    /// 处理一个输入事件，返回处理后的会话状态。
    pub fn handle(&mut self, ev: InputEvent) -> SessionState {
        if self.state.is_finished() {
            return self.state;
        }
        trace!(?ev, "input event");
        for p in &mut self.processors {
            let (status, actions) = p.process(&mut self.engine, &mut self.ctx, &ev);
            if let Some(action) = actions.into_iter().last() {
                self.state = action.into();
            }
            if status == ProcessStatus::Consume {
                break;
            }
        }
        if self.state.is_finished() {
            info!(state = ?self.state, "session finished");
        }
        self.state
    }
}
