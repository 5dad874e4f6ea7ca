use std::collections::HashSet;

use forge_types::MIN_LEN;

/// The only separator ever placed between tokens.
pub const DOT: &str = ".";

/// Ordered, duplicate-tolerant collection of raw candidates.
///
/// A combination is only recorded when every one of its parts is non-empty,
/// so an absent alias or middle name never produces a truncated candidate.
#[derive(Debug, Default)]
pub struct Combos {
    items: Vec<String>,
}

impl Combos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the concatenation of `parts`, unless any part is empty.
    pub fn add(&mut self, parts: &[&str]) {
        if parts.is_empty() || parts.iter().any(|p| p.is_empty()) {
            return;
        }
        self.items.push(parts.concat());
    }

    /// Append `x`, `sep`, `y`. An empty `sep` joins the two directly.
    pub fn add_sep(&mut self, x: &str, sep: &str, y: &str) {
        if sep.is_empty() {
            self.add(&[x, y]);
        } else {
            self.add(&[x, sep, y]);
        }
    }

    /// Append `parts` followed by each date suffix in turn.
    pub fn add_dated(&mut self, parts: &[&str], dates: &[&str]) {
        for &d in dates {
            let mut with_date = parts.to_vec();
            with_date.push(d);
            self.add(&with_date);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// Trim, drop anything outside `[MIN_LEN, max_len]` characters, and dedupe
/// keeping the first occurrence.
pub fn filter_candidates<I>(candidates: I, max_len: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for candidate in candidates {
        let trimmed = candidate.trim();
        let len = trimmed.chars().count();
        if trimmed.is_empty() || len < MIN_LEN || len > max_len {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            result.push(trimmed.to_string());
        }
    }

    result
}
