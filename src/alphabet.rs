use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A single unit of input, such as a `char` or a byte.
pub trait Symbol: Eq + Hash + Copy + Debug {}

impl<T: Eq + Hash + Copy + Debug> Symbol for T {}

/// The number of occurrences of each distinct symbol in some input.
///
/// Symbols are kept in the order in which they first appeared, which is the
/// order the tree builder uses to break ties between equal weights.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<S: Symbol> {
    counts: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Tabulate the symbols of the given input.
    ///
    /// An empty input yields an empty table.
    pub fn from_symbols<I>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts: Vec<(S, usize)> = Vec::new();
        let mut index = HashMap::new();

        for symbol in input {
            let i = *index.entry(symbol).or_insert_with(|| {
                counts.push((symbol, 0));
                counts.len() - 1
            });
            counts[i].1 += 1;
        }

        Self { counts, index }
    }

    /// How many times the symbol occurred, or `None` if it never did.
    pub fn count(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.counts[i].1)
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The sum of all counts, i.e. the length of the input.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate over `(symbol, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().copied()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::example::ExampleSymbol::{self, *};

    #[test_log::test]
    fn count_abracadabra() {
        let table = FrequencyTable::from_symbols("abracadabra".chars());
        assert_eq!(table.count(&'a'), Some(5));
        assert_eq!(table.count(&'b'), Some(2));
        assert_eq!(table.count(&'r'), Some(2));
        assert_eq!(table.count(&'c'), Some(1));
        assert_eq!(table.count(&'d'), Some(1));
        assert_eq!(table.count(&'z'), None);
        assert_eq!(table.len(), 5);
        assert_eq!(table.total(), 11);
    }

    #[test_log::test]
    fn iterates_in_first_occurrence_order() {
        let table: FrequencyTable<ExampleSymbol> = vec![R, A, B, A, R, C].into_iter().collect();
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(R, 2), (A, 2), (B, 1), (C, 1)]
        );
    }

    #[test_log::test]
    fn empty_input_gives_empty_table() {
        let table = FrequencyTable::<u8>::from_symbols(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.iter().count(), 0);
    }
}
