use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;

use crate::expression::Expr;
use crate::ops::Op;
use crate::pool::Pool;

use super::triples::triple_possibilities;

/// An unordered pair or triple of input numbers, identified by value and
/// stored in descending order. Keys from duplicate input values ([8, 8])
/// are as meaningful as any other; multiplicity is enforced by the pool,
/// not the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceKey {
    Pair([u64; 2]),
    Triple([u64; 3]),
}

impl SourceKey {
    pub fn pair(a: u64, b: u64) -> Self {
        debug_assert!(a >= b);
        SourceKey::Pair([a, b])
    }

    pub fn triple(a: u64, b: u64, c: u64) -> Self {
        debug_assert!(a >= b && b >= c);
        SourceKey::Triple([a, b, c])
    }

    /// The input numbers this key consumes.
    pub fn members(&self) -> &[u64] {
        match self {
            SourceKey::Pair(members) => members,
            SourceKey::Triple(members) => members,
        }
    }
}

/// One legal way of collapsing a source key into a single value.
#[derive(Debug, Clone)]
pub struct Possibility {
    pub value: u64,
    pub expr: Rc<Expr>,
}

/// Every reachable pair and triple combination for one puzzle, built once
/// and read-only during the search. Illegal operator results are simply
/// absent. `BTreeMap` keeps iteration deterministic, pairs before triples.
#[derive(Debug, Default)]
pub struct CombinationTable {
    entries: BTreeMap<SourceKey, Vec<Possibility>>,
}

impl CombinationTable {
    pub fn build(numbers: &[u64; 6]) -> Self {
        let mut sorted = *numbers;
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut entries: BTreeMap<SourceKey, Vec<Possibility>> = BTreeMap::new();
        let mut pairs: Vec<[u64; 2]> = Vec::new();
        for i in 0..sorted.len() {
            for j in i + 1..sorted.len() {
                let (a, b) = (sorted[i], sorted[j]);
                let key = SourceKey::pair(a, b);
                if !entries.contains_key(&key) {
                    entries.insert(key, pair_possibilities(a, b));
                    pairs.push([a, b]);
                }
            }
        }

        // A triple only matters because some solutions must collapse three
        // numbers before recombining with the rest. The third member is
        // capped at the pair's smaller element so each unordered triple is
        // generated once.
        let full = Pool::new(&sorted);
        for [a, b] in pairs {
            if let Some(rest) = full.without_all(&[a, b]) {
                for &c in rest.values() {
                    if c <= b {
                        let key = SourceKey::triple(a, b, c);
                        entries
                            .entry(key)
                            .or_insert_with(|| triple_possibilities(a, b, c));
                    }
                }
            }
        }

        let pair_count = entries
            .keys()
            .filter(|k| matches!(k, SourceKey::Pair(_)))
            .count();
        debug!(
            "combination table: {} pair keys, {} triple keys",
            pair_count,
            entries.len() - pair_count
        );
        CombinationTable { entries }
    }

    pub fn get(&self, key: &SourceKey) -> &[Possibility] {
        match self.entries.get(key) {
            Some(possibilities) => possibilities,
            None => &[],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SourceKey, &[Possibility])> {
        self.entries.iter().map(|(key, v)| (key, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn pair_possibilities(a: u64, b: u64) -> Vec<Possibility> {
    let mut out = Vec::new();
    for op in Op::ALL {
        if let Some(value) = op.apply(a, b) {
            out.push(Possibility {
                value,
                expr: Expr::binary(op, Expr::number(a), Expr::number(b)),
            });
        }
    }
    out
}
