//! Subsequence fuzzy matching shared by the directory picker and the diary browser.

use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

/// Pickers never show more than this many ranked candidates.
pub const MAX_PICKER_RESULTS: usize = 50;

const CONSECUTIVE_BONUS: i64 = 2;
const MATCH_BONUS: i64 = 1;
const BOUNDARY_BONUS: i64 = 3;
const LENGTH_BONUS_BASE: i64 = 50;

/// Outcome of matching one query against one target.
///
/// `indices` are character positions in the original target, one per query
/// character, strictly increasing. They are empty unless `matches` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuzzyMatch {
    pub matches: bool,
    pub score: i64,
    pub indices: Vec<usize>,
}

impl FuzzyMatch {
    fn empty_query() -> Self {
        FuzzyMatch {
            matches: true,
            score: 0,
            indices: Vec::new(),
        }
    }

    fn no_match() -> Self {
        FuzzyMatch {
            matches: false,
            score: 0,
            indices: Vec::new(),
        }
    }
}

/// An item that survived ranking, with its match details.
#[derive(Debug, Clone)]
pub struct Ranked<'a, T> {
    pub item: &'a T,
    pub result: FuzzyMatch,
}

fn is_boundary(c: char) -> bool {
    c == '/' || c == '-' || c == '_'
}

fn same_char(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

pub fn fuzzy_match(query: &str, target: &str) -> FuzzyMatch {
    if query.is_empty() {
        return FuzzyMatch::empty_query();
    }

    let query: Vec<char> = query.chars().collect();
    let mut indices = Vec::with_capacity(query.len());
    let mut score = 0;
    let mut last_match: Option<usize> = None;
    let mut prev: Option<char> = None;
    let mut target_len = 0;

    for (i, c) in target.chars().enumerate() {
        target_len = i + 1;

        if indices.len() < query.len() && same_char(c, query[indices.len()]) {
            score += match last_match {
                Some(last) if last + 1 == i => CONSECUTIVE_BONUS,
                _ => MATCH_BONUS,
            };

            if prev.map_or(true, is_boundary) {
                score += BOUNDARY_BONUS;
            }

            indices.push(i);
            last_match = Some(i);
        }

        prev = Some(c);
    }

    if indices.len() < query.len() {
        return FuzzyMatch::no_match();
    }

    score += (LENGTH_BONUS_BASE - target_len as i64).max(0);

    FuzzyMatch {
        matches: true,
        score,
        indices,
    }
}

/// Scores every item against `query`, drops the ones that do not match and
/// orders the rest by score, best first. Items with equal scores keep their
/// input order.
pub fn sort_by_fuzzy_score<'a, T, K, F>(items: &'a [T], query: &str, key: F) -> Vec<Ranked<'a, T>>
where
    T: Sync,
    K: AsRef<str>,
    F: Fn(&'a T) -> K + Sync,
{
    let mut ranked: Vec<Ranked<'a, T>> = items
        .par_iter()
        .map(|item| Ranked {
            item,
            result: fuzzy_match(query, key(item).as_ref()),
        })
        .filter(|r| r.result.matches)
        .collect();

    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked
}

/// Renders `target` with the matched characters emphasised.
pub fn highlight(target: &str, indices: &[usize], color: bool) -> String {
    if !color || indices.is_empty() {
        return target.to_string();
    }

    let mut out = String::with_capacity(target.len() * 2);
    let mut next = indices.iter().peekable();

    for (i, c) in target.chars().enumerate() {
        if next.peek() == Some(&&i) {
            next.next();
            out.push_str(&c.to_string().yellow().bold().to_string());
        } else {
            out.push(c);
        }
    }

    out
}
