use tracing::debug;

use crate::config::Config;
use crate::filter::{Filter, ThresholdSort};
use crate::model::{Candidate, CandidateId};
use crate::scorer::Scorer;
use crate::store::CandidateStore;

/// 引擎：持有全部候选，负责把查询变成可见列表。
///
/// 结构上对应流水线：
/// - engine（编排） -> scorer（逐条评分、写命中标记） -> filter（阈值过滤/排序） -> 可见列表
pub struct Engine<S> {
    /// 候选存储（整个会话唯一的持有者）
    store: CandidateStore,
    /// 评分器
    scorer: S,
    /// 过滤阈值与排序
    filter: ThresholdSort,
}

impl<S> Engine<S>
where
    S: Scorer,
{
    pub fn new(store: CandidateStore, scorer: S) -> Self {
        Self {
            store,
            scorer,
            filter: ThresholdSort {
                max_inaccuracy: Config::default().max_inaccuracy,
            },
        }
    }

    /// 设置过滤阈值（`inaccuracy` 超过该值的条目被丢弃）。
    pub fn max_inaccuracy(mut self, n: usize) -> Self {
        self.filter.max_inaccuracy = n;
        self
    }

    pub fn with_config(self, config: &Config) -> Self {
        self.max_inaccuracy(config.max_inaccuracy)
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    /// 按查询重建可见列表。
    ///
    /// - 空查询：清空所有命中标记，按输入顺序返回全部条目（不评分、不排序）
    /// - 非空查询：逐条评分，交给 filter 过滤并排序；被过滤掉的条目也保留本次的命中标记
    pub fn rebuild(&mut self, query: &str) -> Vec<CandidateId> {
        if query.is_empty() {
            for (_, c) in self.store.iter_mut() {
                c.clear_markers();
            }
            return self.store.ids().collect();
        }

        let mut ids = Vec::with_capacity(self.store.len());
        for (id, c) in self.store.iter_mut() {
            self.scorer.score(c, query);
            ids.push(id);
        }
        let visible = self.filter.apply(&self.store, ids);
        debug!(query, visible = visible.len(), total = self.store.len(), "rebuilt visible set");
        visible
    }
}

/// 给 processors 的对象安全引擎接口（避免在 processors 层引入泛型）。
pub trait EngineFacade {
    /// 重建可见列表
    fn rebuild(&mut self, query: &str) -> Vec<CandidateId>;
    /// 读取单个条目
    fn candidate(&self, id: CandidateId) -> Option<&Candidate>;
    /// 全部条目数
    fn total(&self) -> usize;
}

impl<S> EngineFacade for Engine<S>
where
    S: Scorer,
{
    fn rebuild(&mut self, query: &str) -> Vec<CandidateId> {
        Engine::<S>::rebuild(self, query)
    }

    fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.store.get(id)
    }

    fn total(&self) -> usize {
        self.store.len()
    }
}
