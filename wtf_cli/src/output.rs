//! 会话结果 -> 标准输出与退出码。
//!
//! - 选中：原始字节 + `\n`，退出码 0
//! - 未选中/取消/启动失败：不输出，退出码 1
//! - 标准输入是终端：用法错误，退出码 2
use std::io::{self, Write};

pub const EXIT_SELECTED: u8 = 0;
pub const EXIT_NO_SELECTION: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

pub const NOT_PIPED: &str = "wtf: expected piped input";

/// 候选必须从管道读入；标准输入是终端时返回用法错误的退出码。
pub fn require_piped(stdin_is_terminal: bool) -> Result<(), u8> {
    if stdin_is_terminal {
        Err(EXIT_USAGE)
    } else {
        Ok(())
    }
}

/// 写出确认的条目并给出退出码。写失败（如管道已关闭）交给调用方处理。
pub fn emit(out: &mut impl Write, selection: Option<&[u8]>) -> io::Result<u8> {
    let Some(bytes) = selection else {
        return Ok(EXIT_NO_SELECTION);
    };
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(EXIT_SELECTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wtf_core::{
        config::Config, engine::Engine, key_event::InputEvent, scorer::FuzzyScorer,
        session::Session,
    };

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn terminal_stdin_is_a_usage_error() {
        assert_eq!(require_piped(true), Err(EXIT_USAGE));
        assert_eq!(require_piped(false), Ok(()));
        assert_eq!(NOT_PIPED, "wtf: expected piped input");
    }

    #[test]
    fn selection_is_written_with_newline() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(emit(&mut out, Some(&b"grape"[..])).unwrap(), EXIT_SELECTED);
        assert_eq!(out, b"grape\n");
    }

    #[test]
    fn no_selection_writes_nothing_and_exits_one() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(emit(&mut out, None).unwrap(), EXIT_NO_SELECTION);
        assert!(out.is_empty());
    }

    #[test]
    fn closed_stdout_is_an_error_not_a_panic() {
        let err = emit(&mut ClosedPipe, Some(&b"grape"[..])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn invalid_utf8_selection_is_written_byte_for_byte() {
        let engine = Engine::new(wtf_source::from_bytes(b"caf\xe9.txt\nnotes\n"), FuzzyScorer);
        let mut s = Session::new(engine, &Config::default(), 10);
        s.handle(InputEvent::Char('c'));
        s.handle(InputEvent::Char('a'));
        s.handle(InputEvent::Enter);

        let mut out: Vec<u8> = Vec::new();
        let code = emit(&mut out, s.selection().map(|c| c.bytes())).unwrap();
        assert_eq!(code, EXIT_SELECTED);
        assert_eq!(out, b"caf\xe9.txt\n");
    }
}
