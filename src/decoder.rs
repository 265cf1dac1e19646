use crate::SINGLE_SYMBOL_BIT;
use crate::alphabet::Symbol;
use crate::tree::{HuffmanTree, Node};
use biterator::Bit;

/// Decodes bit streams produced with the code table of one tree.
#[derive(Debug)]
pub struct Decoder<'t, S: Symbol> {
    tree: &'t HuffmanTree<S>,
}

/// The ways in which a bit stream can fail to decode.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Corruption {
    /// The stream ended part way through a code.
    #[error("stream of {bits} bits ends in the middle of a code")]
    Truncated { bits: usize },
    /// A textual stream contained something other than `0` or `1`.
    #[error("invalid digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
    /// A single-symbol tree was given a bit that is not its one code.
    #[error("unexpected bit at position {position}")]
    UnexpectedBit { position: usize },
}

/// Errors that can occur while decoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Corrupt stream: {0}")]
    CorruptStream(Corruption),
}

/// The symbols of a decoded stream, produced lazily as bits are consumed.
///
/// Yields a single error and then stops if the bits do not split into
/// complete codes of the tree.
#[derive(Debug)]
pub struct DecoderOutput<'t, S, I>
where
    S: Symbol,
    I: Iterator<Item = Bit>,
{
    input: I,
    tree: &'t HuffmanTree<S>,
    /// Bits consumed so far.
    position: usize,
    failed: bool,
}

impl<S: Symbol, I: Iterator<Item = Bit>> DecoderOutput<'_, S, I> {
    fn fail(&mut self, corruption: Corruption) -> Option<Result<S, DecodeError>> {
        log::warn!("Rejecting encoded stream: {corruption}");
        self.failed = true;
        Some(Err(DecodeError::CorruptStream(corruption)))
    }
}

impl<S: Symbol, I: Iterator<Item = Bit>> Iterator for DecoderOutput<'_, S, I> {
    type Item = Result<S, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let tree = self.tree;
        let (mut left, mut right) = match tree.root() {
            Node::Internal { left, right, .. } => (left, right),
            // A lone leaf has no edges to walk; each copy of its one-bit code
            // is one occurrence of the symbol.
            Node::Leaf { symbol, .. } => {
                let bit = self.input.next()?;
                let position = self.position;
                self.position += 1;
                if bit != SINGLE_SYMBOL_BIT {
                    return self.fail(Corruption::UnexpectedBit { position });
                }
                return Some(Ok(*symbol));
            }
        };

        let start = self.position;
        loop {
            let Some(bit) = self.input.next() else {
                if self.position == start {
                    return None;
                }
                let bits = self.position;
                return self.fail(Corruption::Truncated { bits });
            };
            self.position += 1;

            let child = match bit {
                Bit::Zero => left,
                Bit::One => right,
            };
            match child.as_ref() {
                Node::Leaf { symbol, .. } => return Some(Ok(*symbol)),
                Node::Internal {
                    left: next_left,
                    right: next_right,
                    ..
                } => {
                    left = next_left;
                    right = next_right;
                }
            }
        }
    }
}

impl<'t, S: Symbol> Decoder<'t, S> {
    /// Create a decoder for bits encoded with the codes of the given tree.
    pub fn new(tree: &'t HuffmanTree<S>) -> Self {
        Decoder { tree }
    }

    /// Decode a stream of bits as a stream of symbols.
    ///
    /// Each step follows the left child on `Bit::Zero` and the right child on
    /// `Bit::One`, emitting a symbol and returning to the root at every leaf.
    /// The stream must end at the root.
    pub fn decode<I>(&self, input: I) -> DecoderOutput<'t, S, I::IntoIter>
    where
        I: IntoIterator<Item = Bit>,
    {
        DecoderOutput {
            input: input.into_iter(),
            tree: self.tree,
            position: 0,
            failed: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bits::parse_bits;
    use crate::example::{ExampleSymbol, abracadabra};
    use ExampleSymbol::*;

    /// Decode a textual bit string with the tree built from "abracadabra".
    fn decode(text: &str) -> Result<Vec<ExampleSymbol>, DecodeError> {
        let tree = HuffmanTree::from_symbols(abracadabra()).unwrap();
        let decoder = Decoder::new(&tree);
        decoder.decode(parse_bits(text)?).collect()
    }

    #[test_log::test]
    fn decode_empty_stream() {
        assert_eq!(decode(""), Ok(vec![]));
    }

    #[test_log::test]
    fn decode_small_message() {
        assert_eq!(decode("1100100"), Ok(vec![B, A, C]));
    }

    #[test_log::test]
    fn decode_abracadabra() {
        assert_eq!(decode("01101110100010101101110"), Ok(abracadabra()));
    }

    #[test_log::test]
    fn error_on_truncated_stream() {
        assert_eq!(
            decode("011011"),
            Err(DecodeError::CorruptStream(Corruption::Truncated { bits: 6 }))
        );
    }

    #[test_log::test]
    fn output_stops_after_error() {
        let tree = HuffmanTree::from_symbols(abracadabra()).unwrap();
        let bits = parse_bits("01").unwrap();
        let output: Vec<_> = Decoder::new(&tree).decode(bits).collect();
        assert_eq!(
            output,
            vec![
                Ok(A),
                Err(DecodeError::CorruptStream(Corruption::Truncated { bits: 2 }))
            ]
        );
    }

    #[test_log::test]
    fn decode_single_symbol_alphabet() {
        let tree = HuffmanTree::from_symbols("aaaa".chars()).unwrap();
        let decoded: Result<String, _> = Decoder::new(&tree)
            .decode(parse_bits("0000").unwrap())
            .collect();
        assert_eq!(decoded, Ok("aaaa".to_string()));
    }

    #[test_log::test]
    fn error_on_unexpected_bit_for_single_symbol() {
        let tree = HuffmanTree::from_symbols("aaaa".chars()).unwrap();
        let decoded: Result<Vec<_>, _> = Decoder::new(&tree)
            .decode(parse_bits("0010").unwrap())
            .collect();
        assert_eq!(
            decoded,
            Err(DecodeError::CorruptStream(Corruption::UnexpectedBit {
                position: 2
            }))
        );
    }
}
