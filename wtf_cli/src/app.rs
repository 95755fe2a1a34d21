use std::io;

use wtf_core::{
    config::Layout, key_event::SessionState, scorer::Scorer, session::Session, surface::Surface,
};
use wtf_term::draw::{Theme, draw};

/// 阻塞的 读事件 -> 处理 -> 绘制 循环，直到会话进入终态。
pub fn run<S, T>(
    session: &mut Session<S>,
    surface: &mut T,
    layout: Layout,
    theme: &Theme,
) -> io::Result<SessionState>
where
    S: Scorer,
    T: Surface,
{
    while !session.state().is_finished() {
        draw(surface, &session.ui_state(), layout, theme);
        surface.present()?;
        let ev = surface.next_event()?;
        session.handle(ev);
    }
    Ok(session.state())
}
