//! 评分、过滤与视口的性质测试。
//!
//! 覆盖：
//! - 可见列表恰好是阈值内的条目，并按 `distance` 升序
//! - 空查询按输入顺序列出全部条目，且没有命中标记
//! - 默认阈值下，条目可见当且仅当查询（忽略大小写）是它的子序列
//! - 同一查询重复评分结果一致
//! - 滚动后选中行始终在窗口内；导航首尾循环

use proptest::prelude::*;
use wtf_core::{
    engine::Engine,
    model::CandidateId,
    scorer::FuzzyScorer,
    store::CandidateStore,
    viewport::{Direction, Viewport},
};

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-dA-D]{1,8}", 0..12)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-dA-D]{1,4}"
}

fn is_subsequence(haystack: &str, needle: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|n| hay.any(|h| h == n))
}

fn engine(lines: &[String]) -> Engine<FuzzyScorer> {
    Engine::new(CandidateStore::new(lines.iter().cloned()), FuzzyScorer)
}

// 阈值过滤 + 排序

proptest! {
    #[test]
    fn visible_set_is_threshold_filter_sorted(
        lines in lines_strategy(),
        query in query_strategy(),
        threshold in 0usize..6,
    ) {
        let mut e = engine(&lines).max_inaccuracy(threshold);
        let visible = e.rebuild(&query);
        let store = e.store();

        let mut expected: Vec<CandidateId> = store
            .iter()
            .filter(|(_, c)| c.inaccuracy() <= threshold)
            .map(|(id, _)| id)
            .collect();
        let mut got = visible.clone();
        expected.sort();
        got.sort();
        prop_assert_eq!(got, expected);

        let distances: Vec<i64> = visible
            .iter()
            .map(|&id| store.get(id).unwrap().distance())
            .collect();
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]), "{:?}", distances);
    }
}

// 空查询复位

proptest! {
    #[test]
    fn empty_query_lists_all_in_order(lines in lines_strategy(), query in query_strategy()) {
        let mut e = engine(&lines);
        e.rebuild(&query);
        let visible = e.rebuild("");
        let all: Vec<CandidateId> = e.store().ids().collect();
        prop_assert_eq!(visible, all);
        prop_assert!(e.store().iter().all(|(_, c)| c.matched().iter().all(|m| !m)));
    }
}

// 默认阈值只放行完整子序列

proptest! {
    #[test]
    fn default_threshold_means_full_subsequence(
        lines in lines_strategy(),
        query in query_strategy(),
    ) {
        let mut e = engine(&lines);
        let visible = e.rebuild(&query);
        for (id, c) in e.store().iter() {
            let expected = is_subsequence(c.text(), &query);
            prop_assert_eq!(visible.contains(&id), expected, "{:?} vs {:?}", c.text(), query);
            prop_assert_eq!(c.inaccuracy() % 2, 0);
            if expected {
                let hits = c.matched().iter().filter(|m| **m).count();
                prop_assert_eq!(hits, query.chars().count());
            }
        }
    }
}

// 确定性

proptest! {
    #[test]
    fn rescoring_is_deterministic(lines in lines_strategy(), query in query_strategy()) {
        let mut e = engine(&lines);
        let first = e.rebuild(&query);
        let snapshot: Vec<(Vec<bool>, i64)> = e
            .store()
            .iter()
            .map(|(_, c)| (c.matched().to_vec(), c.distance()))
            .collect();
        let second = e.rebuild(&query);
        let again: Vec<(Vec<bool>, i64)> = e
            .store()
            .iter()
            .map(|(_, c)| (c.matched().to_vec(), c.distance()))
            .collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(snapshot, again);
    }
}

// 窗口包含选中行

proptest! {
    #[test]
    fn navigation_keeps_selection_in_window(
        rows in 1usize..8,
        count in 1usize..40,
        moves in prop::collection::vec(any::<bool>(), 0..60),
        resize_to in 1usize..8,
    ) {
        let mut v = Viewport::new(rows);
        for (i, next) in moves.iter().enumerate() {
            let dir = if *next { Direction::Next } else { Direction::Prev };
            v.navigate(dir, count);
            if i == moves.len() / 2 {
                v.resize(resize_to);
            }
            prop_assert!(v.selected() < count);
            prop_assert!(v.scroll() <= v.selected());
            prop_assert!(v.selected() < v.scroll() + v.rows());
        }
    }
}

proptest! {
    #[test]
    fn clamp_keeps_selection_in_window(
        rows in 1usize..8,
        before in 1usize..40,
        after in 0usize..40,
        steps in 0usize..40,
    ) {
        let mut v = Viewport::new(rows);
        for _ in 0..steps {
            v.navigate(Direction::Next, before);
        }
        v.clamp(after);
        if after == 0 {
            prop_assert_eq!((v.selected(), v.scroll()), (0, 0));
        } else {
            prop_assert!(v.selected() < after);
            prop_assert!(v.scroll() <= v.selected());
            prop_assert!(v.selected() < v.scroll() + v.rows());
        }
    }
}

// 循环导航

proptest! {
    #[test]
    fn navigation_wraps(rows in 1usize..8, count in 1usize..40) {
        let mut v = Viewport::new(rows);
        v.navigate(Direction::Prev, count);
        prop_assert_eq!(v.selected(), count - 1);
        v.navigate(Direction::Next, count);
        prop_assert_eq!(v.selected(), 0);
    }
}
