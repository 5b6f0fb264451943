use std::cmp::Ordering;

// ordered: distance asc, count desc, term asc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestItem {
    pub term: String,
    pub distance: i64,
    pub count: u64,
}

impl SuggestItem {
    pub fn new(term: impl Into<String>, distance: i64, count: u64) -> Self {
        Self {
            term: term.into(),
            distance,
            count,
        }
    }
}

impl Ord for SuggestItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for SuggestItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Top,
    Closest,
    All,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_distance_then_count_then_term() {
        let mut items = vec![
            SuggestItem::new("b", 1, 5),
            SuggestItem::new("a", 1, 5),
            SuggestItem::new("c", 0, 1),
            SuggestItem::new("d", 1, 10),
        ];
        items.sort();
        let terms: Vec<_> = items.iter().map(|s| s.term.as_str()).collect();
        assert_eq!(terms, vec!["c", "d", "a", "b"]);
    }
}
