//! 候选来源：把原始字节切分成候选行。
//!
//! 格式：
//! - 以 `\n` 分行，最后一行没有换行符也会被收录
//! - 空行直接丢弃
//! - 非 UTF-8 的行按有损解码展示，确认后仍输出原始字节
use std::io::{self, Read};

use tracing::debug;
use wtf_core::store::CandidateStore;

/// 读完整个输入并构建候选存储。
pub fn from_reader(mut reader: impl Read) -> io::Result<CandidateStore> {
    let mut buf = Vec::with_capacity(512);
    reader.read_to_end(&mut buf)?;
    let store = from_bytes(&buf);
    debug!(bytes = buf.len(), candidates = store.len(), "read candidates");
    Ok(store)
}

pub fn from_bytes(bytes: &[u8]) -> CandidateStore {
    lines(bytes).collect()
}

/// 按 `\n` 切分并跳过空行。
pub fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    bytes.split(|&b| b == b'\n').filter(|line| !line.is_empty())
}
