//! `processor`：输入事件处理链。
//!
//! 按顺序处理 `InputEvent`，对 `Context` 做状态变更，并可产生 `Action`（确认/取消）。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `EditingProcessor`：编辑查询（Char/Backspace/光标移动），文本变化时重建可见列表
//! - `NavigationProcessor`：列表导航与终端尺寸变化
//! - `ExitProcessor`：Enter 确认、Escape 取消

use tracing::trace;

use crate::{
    config::Layout,
    context::Context,
    engine::EngineFacade,
    key_event::{Action, InputEvent},
    viewport::Direction,
};

/// Processor 执行结果：是否"消费"了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理输入事件并改变 Context；必要时产生输出动作。
pub trait Processor: Send + Sync {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>);
}

/// 编辑查询的 processor（插入/退格/光标移动）。
pub struct EditingProcessor;

impl Processor for EditingProcessor {
    fn process(
        &mut self,
        engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Char(ch) => {
                context.query.insert(ch);
                context.refilter(engine);
            }
            InputEvent::Backspace => {
                if context.query.backspace() {
                    context.refilter(engine);
                }
            }
            // 光标移动不触发重新评分
            InputEvent::Left => context.query.move_left(),
            InputEvent::Right => context.query.move_right(),
            InputEvent::Home => context.query.move_home(),
            InputEvent::End => context.query.move_end(),
            _ => return (ProcessStatus::Continue, Vec::new()),
        }
        (ProcessStatus::Consume, Vec::new())
    }
}

/// 列表导航。
///
/// 自下而上布局中 Up 走向下一项（列表向上生长），自上而下布局中 Down 走向下一项。
pub struct NavigationProcessor {
    pub layout: Layout,
}

impl NavigationProcessor {
    fn direction(&self, input_event: &InputEvent) -> Option<Direction> {
        match (self.layout, input_event) {
            (Layout::BottomUp, InputEvent::Up) | (Layout::TopDown, InputEvent::Down) => {
                Some(Direction::Next)
            }
            (Layout::BottomUp, InputEvent::Down) | (Layout::TopDown, InputEvent::Up) => {
                Some(Direction::Prev)
            }
            _ => None,
        }
    }
}

impl Processor for NavigationProcessor {
    fn process(
        &mut self,
        _engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        if let InputEvent::Resize { rows } = *input_event {
            context.viewport.resize(rows);
            return (ProcessStatus::Consume, Vec::new());
        }
        match self.direction(input_event) {
            Some(direction) => {
                context.navigate(direction);
                trace!(selected = context.viewport.selected(), "navigated");
                (ProcessStatus::Consume, Vec::new())
            }
            None => (ProcessStatus::Continue, Vec::new()),
        }
    }
}

pub struct ExitProcessor;

impl Processor for ExitProcessor {
    fn process(
        &mut self,
        _engine: &mut dyn EngineFacade,
        context: &mut Context,
        input_event: &InputEvent,
    ) -> (ProcessStatus, Vec<Action>) {
        match *input_event {
            InputEvent::Enter => (ProcessStatus::Consume, vec![context.accept()]),
            InputEvent::Escape => (ProcessStatus::Consume, vec![Action::Cancel]),
            _ => (ProcessStatus::Continue, Vec::new()),
        }
    }
}
