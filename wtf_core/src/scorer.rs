//! `scorer`：给单个候选与当前查询打分。
//!
//! 分数由两部分组成：
//! - 贪心子序列扫描（忽略大小写）：得到命中标记、首个命中位置与 `inaccuracy`
//! - Levenshtein 编辑距离（区分大小写，覆盖两串全长）
//!
//! `distance = 编辑距离 + 首个命中位置 + inaccuracy`；完全没有命中时首个命中位置记为 -1。

use crate::model::Candidate;

/// 一次评分的结果（同时已写入候选本身）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub inaccuracy: usize,
    pub distance: i64,
}

/// Scorer：对候选打分并写入命中标记。
pub trait Scorer: Send + Sync {
    fn score(&self, candidate: &mut Candidate, query: &str) -> Score;
}

/// 默认评分器。
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyScorer;

impl Scorer for FuzzyScorer {
    fn score(&self, candidate: &mut Candidate, query: &str) -> Score {
        candidate.clear_markers();

        let query_len = query.chars().count();
        let mut pending = query.chars().peekable();
        let mut first_match: Option<usize> = None;
        let mut hits = 0usize;

        for (i, ch) in candidate.text.chars().enumerate() {
            let Some(&q) = pending.peek() else { break };
            if fold_eq(ch, q) {
                first_match.get_or_insert(i);
                candidate.matched[i] = true;
                hits += 1;
                pending.next();
            }
        }

        // 每个未命中的查询字符计两次。
        let inaccuracy = 2 * (query_len - hits);
        let edit = strsim::levenshtein(&candidate.text, query);
        let first = first_match.map_or(-1, |i| i as i64);
        let distance = edit as i64 + first + inaccuracy as i64;

        candidate.inaccuracy = inaccuracy;
        candidate.distance = distance;
        Score {
            inaccuracy,
            distance,
        }
    }
}

fn fold_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scored(text: &str, query: &str) -> (Candidate, Score) {
        let mut c = Candidate::new(text);
        let s = FuzzyScorer.score(&mut c, query);
        (c, s)
    }

    #[test]
    fn full_subsequence_has_no_inaccuracy() {
        let (c, s) = scored("apple", "ap");
        assert_eq!(s, Score { inaccuracy: 0, distance: 3 });
        assert_eq!(c.matched(), &[true, true, false, false, false]);
    }

    #[test]
    fn first_match_offset_adds_to_distance() {
        let (c, s) = scored("grape", "ap");
        assert_eq!(s.distance, 5);
        assert_eq!(c.matched(), &[false, false, true, true, false]);
    }

    #[test]
    fn unmatched_query_chars_count_twice() {
        let (c, s) = scored("banana", "ap");
        assert_eq!(s.inaccuracy, 2);
        // levenshtein("banana", "ap") = 5, first match at 1
        assert_eq!(s.distance, 5 + 1 + 2);
        assert_eq!(c.matched(), &[false, true, false, false, false, false]);
    }

    #[test]
    fn no_match_at_all_uses_minus_one() {
        let (c, s) = scored("xyz", "ab");
        assert_eq!(s.inaccuracy, 4);
        assert_eq!(s.distance, 3 - 1 + 4);
        assert!(c.matched().iter().all(|m| !m));
    }

    #[test]
    fn matching_folds_case_but_edit_distance_does_not() {
        let (c, s) = scored("Apple", "aP");
        assert_eq!(s.inaccuracy, 0);
        assert_eq!(c.matched(), &[true, true, false, false, false]);
        // "Apple" -> "aP" needs two substitutions and three deletions
        assert_eq!(s.distance, 5);
    }

    #[test]
    fn greedy_scan_takes_earliest_positions() {
        let (c, _) = scored("aab", "ab");
        assert_eq!(c.matched(), &[true, false, true]);
    }

    #[test]
    fn rescoring_replaces_old_markers() {
        let mut c = Candidate::new("abc");
        FuzzyScorer.score(&mut c, "a");
        FuzzyScorer.score(&mut c, "c");
        assert_eq!(c.matched(), &[false, false, true]);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let (c, s) = scored("héllo", "él");
        assert_eq!(s.inaccuracy, 0);
        assert_eq!(c.matched(), &[false, true, true, false, false]);
        // levenshtein("héllo", "él") = 3, first match at 1
        assert_eq!(s.distance, 4);
    }

    #[test]
    fn same_query_twice_is_deterministic() {
        let mut c = Candidate::new("Cargo.toml");
        let first = FuzzyScorer.score(&mut c, "cgt");
        let markers = c.matched().to_vec();
        let second = FuzzyScorer.score(&mut c, "cgt");
        assert_eq!(first, second);
        assert_eq!(markers, c.matched());
    }
}
