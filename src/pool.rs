//! The multiset of numbers still available to a search branch.

/// Remaining numbers, kept in canonical descending order so that equal pool
/// states compare equal. Each branch of the search owns its own `Pool`;
/// removal never mutates in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    values: Vec<u64>,
}

impl Pool {
    pub fn new(numbers: &[u64]) -> Self {
        let mut values = numbers.to_vec();
        values.sort_unstable_by(|a, b| b.cmp(a));
        Pool { values }
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn count(&self, value: u64) -> usize {
        self.values.iter().filter(|&&v| v == value).count()
    }

    /// Each distinct value, largest first.
    pub fn distinct(&self) -> impl Iterator<Item = u64> + '_ {
        let values = &self.values;
        values
            .iter()
            .enumerate()
            .filter_map(move |(i, &v)| (i == 0 || values[i - 1] != v).then_some(v))
    }

    /// A copy with one occurrence of `value` removed, or `None` when the
    /// pool has no such occurrence left.
    pub fn without(&self, value: u64) -> Option<Pool> {
        let ix = self.values.iter().position(|&v| v == value)?;
        let mut values = self.values.clone();
        values.remove(ix);
        Some(Pool { values })
    }

    /// A copy with one occurrence of every member removed; `None` when any
    /// member's multiplicity is exhausted.
    pub fn without_all(&self, members: &[u64]) -> Option<Pool> {
        let mut pool = self.clone();
        for &member in members {
            pool = pool.without(member)?;
        }
        Some(pool)
    }

    /// Every distinct unordered value pair drawable from the pool,
    /// multiplicity respected (a pair of equal values needs two copies).
    pub fn pairs(&self) -> Vec<(u64, u64)> {
        let mut out = Vec::new();
        for i in 0..self.values.len() {
            for j in i + 1..self.values.len() {
                let pair = (self.values[i], self.values[j]);
                if !out.contains(&pair) {
                    out.push(pair);
                }
            }
        }
        out
    }

    /// The whole pool as a triple, when exactly three numbers remain.
    pub fn as_triple(&self) -> Option<[u64; 3]> {
        match self.values.as_slice() {
            &[a, b, c] => Some([a, b, c]),
            _ => None,
        }
    }
}
