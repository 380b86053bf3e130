use std::collections::HashSet;

use log::debug;

/// Accumulates rendered solutions in discovery order.
///
/// The same expression is routinely rediscovered through different search
/// paths (e.g. reaching 25 as 50/2 under one seed and as 100-75 under
/// another produces identical tails); duplicates are collapsed here.
#[derive(Debug, Default)]
pub struct SolutionSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, solution: String) {
        if self.seen.insert(solution.clone()) {
            debug!("solution: {solution}");
            self.ordered.push(solution);
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicates_keeps_order() {
        let mut set = SolutionSet::new();
        set.insert("100+50".to_string());
        set.insert("75*2".to_string());
        set.insert("100+50".to_string());
        assert_eq!(set.len(), 2);
        assert_eq!(set.into_vec(), vec!["100+50", "75*2"]);
    }
}
