/// A small alphabet spelling out "abracadabra", shared by the unit tests.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ExampleSymbol {
    A,
    B,
    C,
    D,
    R,
}

/// The message "abracadabra" in example symbols.
///
/// Frequencies: A 5, B 2, R 2, C 1, D 1.
pub fn abracadabra() -> Vec<ExampleSymbol> {
    use ExampleSymbol::*;
    vec![A, B, R, A, C, A, D, A, B, R, A]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alphabet::FrequencyTable;
    use ExampleSymbol::*;

    #[test]
    fn test_frequencies() {
        let table = FrequencyTable::from_symbols(abracadabra());
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(A, 5), (B, 2), (R, 2), (C, 1), (D, 1)]
        );
    }
}
