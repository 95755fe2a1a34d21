//! `filter`：评分之后的后处理（按阈值过滤、按距离排序）。

use crate::{model::CandidateId, store::CandidateStore};

/// Filter：对已评分的句柄列表做后处理。
pub trait Filter: Send + Sync {
    fn apply(&self, store: &CandidateStore, ids: Vec<CandidateId>) -> Vec<CandidateId>;
}

/// 默认 filter：丢弃 `inaccuracy > max_inaccuracy` 的条目，按 `distance` 升序排序。
///
/// 排序是稳定的，距离相同时保持输入顺序。
#[derive(Debug, Clone, Copy)]
pub struct ThresholdSort {
    pub max_inaccuracy: usize,
}

impl Filter for ThresholdSort {
    fn apply(&self, store: &CandidateStore, mut ids: Vec<CandidateId>) -> Vec<CandidateId> {
        ids.retain(|&id| {
            store
                .get(id)
                .is_some_and(|c| c.inaccuracy() <= self.max_inaccuracy)
        });
        ids.sort_by_key(|&id| store.get(id).map_or(i64::MAX, |c| c.distance()));
        ids
    }
}
