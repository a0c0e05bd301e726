//! FAQ accordion state.
//!
//! At most one question is expanded across every category on the page.
//! Items are addressed by a flat index built from their category and
//! position, see [`item_index`].

use serde::Serialize;

/// Stride between categories in the flat item index.
pub const CATEGORY_STRIDE: usize = 100;

/// Flat index of question `question` inside category `category`.
pub fn item_index(category: usize, question: usize) -> usize {
    category * CATEGORY_STRIDE + question
}

/// New open index after a click on `clicked`.
pub fn toggle(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn with_open(index: usize) -> Self {
        Self { open: Some(index) }
    }

    /// Reads the `open` query parameter. Anything that is not a plain
    /// non-negative integer leaves every item closed.
    pub fn from_query(raw: Option<&str>) -> Self {
        let open = raw.and_then(|s| s.trim().parse::<usize>().ok());
        Self { open }
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open index a click on `index` would produce.
    pub fn next_for(&self, index: usize) -> Option<usize> {
        toggle(self.open, index)
    }

    pub fn click(self, index: usize) -> Self {
        Self { open: self.next_for(index) }
    }

    /// Drops an open index that does not name a rendered item.
    pub fn restrict_to(self, known: impl IntoIterator<Item = usize>) -> Self {
        match self.open {
            Some(i) if known.into_iter().any(|k| k == i) => self,
            _ => Self::closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_click_sequence_scenario() {
        let acc = Accordion::closed().click(3);
        assert_eq!(acc.open(), Some(3));
        let acc = acc.click(3);
        assert_eq!(acc.open(), None);
        let acc = acc.click(1);
        assert_eq!(acc.open(), Some(1));
        let acc = acc.click(5);
        assert_eq!(acc.open(), Some(5));
        assert!(!acc.is_open(1));
    }

    #[test]
    fn test_item_index_is_unique_across_categories() {
        assert_eq!(item_index(0, 2), 2);
        assert_eq!(item_index(2, 3), 203);
        assert_ne!(item_index(1, 0), item_index(0, 1));
    }

    #[test]
    fn test_from_query_is_lenient() {
        assert_eq!(Accordion::from_query(Some("203")).open(), Some(203));
        assert_eq!(Accordion::from_query(Some(" 4 ")).open(), Some(4));
        assert_eq!(Accordion::from_query(Some("-1")).open(), None);
        assert_eq!(Accordion::from_query(Some("abc")).open(), None);
        assert_eq!(Accordion::from_query(Some("")).open(), None);
        assert_eq!(Accordion::from_query(None).open(), None);
    }

    #[test]
    fn test_restrict_to_unknown_index_closes() {
        let acc = Accordion::with_open(999).restrict_to([0, 1, 100]);
        assert_eq!(acc, Accordion::closed());
        let acc = Accordion::with_open(100).restrict_to([0, 1, 100]);
        assert_eq!(acc.open(), Some(100));
    }

    proptest! {
        #[test]
        fn prop_clicking_other_item_opens_it(current in proptest::option::of(0usize..1000), clicked in 0usize..1000) {
            prop_assume!(current != Some(clicked));
            prop_assert_eq!(toggle(current, clicked), Some(clicked));
        }

        #[test]
        fn prop_clicking_open_item_closes_it(open in 0usize..1000) {
            prop_assert_eq!(toggle(Some(open), open), None);
        }

        #[test]
        fn prop_at_most_one_open(clicks in proptest::collection::vec(0usize..8, 0..64)) {
            // Reference model: the set of expanded items.
            let mut expanded: BTreeSet<usize> = BTreeSet::new();
            let mut acc = Accordion::closed();
            for c in clicks {
                if expanded.contains(&c) {
                    expanded.remove(&c);
                } else {
                    expanded.clear();
                    expanded.insert(c);
                }
                acc = acc.click(c);
                prop_assert!(expanded.len() <= 1);
                prop_assert_eq!(acc.open(), expanded.iter().next().copied());
            }
        }
    }
}
