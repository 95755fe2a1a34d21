//! `store`：候选条目的唯一持有者。
//!
//! 约定：
//! - 构造完成后条目数量固定（底层是 `Box<[Candidate]>`，不会扩容搬家）
//! - 外部一律通过 `CandidateId` 访问条目
//! - 空字符串不会成为条目
use crate::model::{Candidate, CandidateId};

#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    candidates: Box<[Candidate]>,
}

impl CandidateStore {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Candidate>,
    {
        lines.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.get(id.0)
    }

    /// 按输入顺序列出全部句柄。
    pub fn ids(&self) -> impl Iterator<Item = CandidateId> + use<> {
        (0..self.candidates.len()).map(CandidateId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, c)| (CandidateId(i), c))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (CandidateId, &mut Candidate)> {
        self.candidates
            .iter_mut()
            .enumerate()
            .map(|(i, c)| (CandidateId(i), c))
    }
}

impl<S: Into<Candidate>> FromIterator<S> for CandidateStore {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let candidates: Vec<Candidate> = iter
            .into_iter()
            .map(Into::into)
            .filter(|c| !c.is_empty())
            .collect();
        Self {
            candidates: candidates.into_boxed_slice(),
        }
    }
}
