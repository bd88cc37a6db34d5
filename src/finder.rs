use std::{collections::HashMap, fmt, str::FromStr};

use anyhow::{anyhow, Result};

use crate::output::BracketStyle;

/// Indices of two elements whose values add up to the target.
///
/// `first` always refers to an element scanned before `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

impl IndexPair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    pub fn render(&self, style: BracketStyle) -> String {
        match style {
            BracketStyle::Spaced => format!("[{}, {}]", self.first, self.second),
            BracketStyle::Compact => format!("[{},{}]", self.first, self.second),
        }
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(BracketStyle::Spaced))
    }
}

impl FromStr for IndexPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| anyhow!("expected an index pair like [i, j], got {:?}", s))?;

        let (first, second) = inner
            .split_once(',')
            .ok_or_else(|| anyhow!("index pair is missing a comma: {:?}", s))?;

        Ok(Self {
            first: first.trim().parse()?,
            second: second.trim().parse()?,
        })
    }
}

/// Scan `nums` left to right and return the first pair summing to `target`.
///
/// The lookup maps each value to the index where it was seen most recently.
/// A repeated value overwrites its earlier index, so a later match pairs with
/// the latest prior occurrence rather than the first one: `[1, 1, 5]` with
/// target 6 yields `[1, 2]`, not `[0, 2]`. Callers expecting first-occurrence
/// semantics should be aware of this.
pub fn find_pair(nums: &[i64], target: i64) -> Option<IndexPair> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (j, &num) in nums.iter().enumerate() {
        // An overflowing complement lies outside i64, so it cannot be a key.
        if let Some(complement) = target.checked_sub(num) {
            if let Some(&i) = seen.get(&complement) {
                log::debug!("complement {} of nums[{}] found at index {}", complement, j, i);
                return Some(IndexPair::new(i, j));
            }
        }
        seen.insert(num, j);
    }

    log::debug!("scanned {} elements without a match", nums.len());
    None
}
