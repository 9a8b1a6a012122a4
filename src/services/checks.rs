//! Per-identifier predicates used by the doctor's identifier-set checks.
//!
//! Each `*_ids` helper returns the offending identifiers in input order; an
//! empty result means the database passes that check.

use crate::domain::constants::ALLOWED_ID_PREFIXES;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

// `\w` is spelled out so it stays ASCII-only.
const LOCAL_ID_PATTERN: &str = r"^>([0-9A-Za-z_]+)\|[0-9A-Za-z_]*$";

fn local_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LOCAL_ID_PATTERN).expect("identifier pattern compiles"))
}

/// True when the integer read from the front of `id` is non-zero.
///
/// Reads optional leading whitespace, an optional sign and then decimal
/// digits, allowing single underscores between digits. Parsing stops at the
/// first other character; no digits reads as zero.
pub fn leading_integer_is_nonzero(id: &str) -> bool {
    let s = id.trim_start();
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let mut after_digit = false;
    for c in s.chars() {
        match c {
            '0' => after_digit = true,
            '1'..='9' => return true,
            '_' if after_digit => after_digit = false,
            _ => break,
        }
    }
    false
}

/// Matches `^>(?!gi|bbs)\w+\|\w*$`.
///
/// Such ids collide with the local-id prefixing the search tool applies,
/// except for the allow-listed `gi` and `bbs` forms.
pub fn is_problematic_id(id: &str) -> bool {
    match local_id_regex().captures(id) {
        Some(caps) => {
            let head = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            !ALLOWED_ID_PREFIXES.iter().any(|p| head.starts_with(*p))
        }
        None => false,
    }
}

pub fn numeric_ids(ids: &[String]) -> Vec<&str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| leading_integer_is_nonzero(id))
        .collect()
}

pub fn problematic_ids(ids: &[String]) -> Vec<&str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| is_problematic_id(id))
        .collect()
}

pub fn has_duplicates(ids: &[String]) -> bool {
    let distinct: HashSet<&str> = ids.iter().map(String::as_str).collect();
    distinct.len() != ids.len()
}

/// Ids occurring more than once, each listed once, in first-seen order.
pub fn duplicate_ids(ids: &[String]) -> Vec<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in ids {
        *counts.entry(id.as_str()).or_default() += 1;
    }
    let mut seen = HashSet::new();
    ids.iter()
        .map(String::as_str)
        .filter(|id| counts.get(id).copied().unwrap_or(0) > 1 && seen.insert(*id))
        .collect()
}
