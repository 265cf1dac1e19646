//! Huffman coding: optimal prefix-free codes for a weighted alphabet, and
//! lossless encoding and decoding of symbol sequences with them.
//!
//! ```
//! use huffman_coding::{Codec, bits::format_bits};
//!
//! let text = "abracadabra";
//! let codec = Codec::from_symbols(text.chars())?;
//!
//! let encoded = codec.encode(text.chars())?;
//! assert_eq!(format_bits(&encoded), "01101110100010101101110");
//!
//! let decoded: String = codec.decode(encoded)?.into_iter().collect();
//! assert_eq!(decoded, text);
//! # Ok::<(), huffman_coding::Error>(())
//! ```

pub mod alphabet;
pub mod bits;
pub mod codec;
pub mod codes;
pub mod decoder;
pub mod encoder;
#[cfg(test)]
mod example;
pub mod tree;

pub use alphabet::{FrequencyTable, Symbol};
pub use codec::Codec;
pub use codes::{Code, CodeGenerator, CodeTable, Traversal};
pub use decoder::{Corruption, DecodeError, Decoder};
pub use encoder::{EncodeError, Encoder};
pub use tree::{BuildError, HuffmanTree, Node};

use biterator::Bit;

/// The code given to the only symbol of a single-symbol alphabet.
pub const SINGLE_SYMBOL_BIT: Bit = Bit::Zero;

/// Trees with more leaves than this are walked with an explicit stack when
/// generating codes, since their height can approach the leaf count.
pub const RECURSION_LEAF_LIMIT: usize = 4096;

/// Any error raised while building, encoding or decoding.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Count the occurrences of each distinct symbol in the input.
pub fn count_frequencies<S, I>(input: I) -> FrequencyTable<S>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    FrequencyTable::from_symbols(input)
}

/// Build the Huffman tree for a non-empty frequency table.
pub fn build_tree<S: Symbol>(
    frequencies: &FrequencyTable<S>,
) -> Result<HuffmanTree<S>, BuildError> {
    HuffmanTree::from_frequencies(frequencies)
}

/// Derive a fresh code table from a tree.
pub fn generate_codes<S: Symbol>(tree: &HuffmanTree<S>) -> CodeTable<S> {
    CodeGenerator::new().generate(tree)
}

/// Encode the input with the given codes.
pub fn encode<S, I>(input: I, codes: &CodeTable<S>) -> Result<Vec<Bit>, EncodeError>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    Encoder::new(codes).encode(input).collect()
}

/// Decode bits produced with the codes of `tree`.
pub fn decode<S, I>(encoded: I, tree: &HuffmanTree<S>) -> Result<Vec<S>, DecodeError>
where
    S: Symbol,
    I: IntoIterator<Item = Bit>,
{
    Decoder::new(tree).decode(encoded).collect()
}

/// Decode a string of `0` and `1` characters produced with the codes of `tree`.
pub fn decode_str<S: Symbol>(
    encoded: &str,
    tree: &HuffmanTree<S>,
) -> Result<Vec<S>, DecodeError> {
    decode(bits::parse_bits(encoded)?, tree)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test_log::test]
    fn single_symbol_alphabet() {
        let tree = build_tree(&count_frequencies("aaaa".chars())).unwrap();
        let codes = generate_codes(&tree);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes.get(&'a').map(Code::to_string), Some("0".to_string()));

        let encoded = encode("aaaa".chars(), &codes).unwrap();
        assert_eq!(bits::format_bits(&encoded), "0000");
        assert_eq!(decode_str("0000", &tree), Ok(vec!['a'; 4]));
    }

    #[test_log::test]
    fn abracadabra_end_to_end() {
        let text = "abracadabra";
        let frequencies = count_frequencies(text.chars());
        assert_eq!(
            frequencies.iter().collect::<Vec<_>>(),
            vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]
        );

        let tree = build_tree(&frequencies).unwrap();
        assert_eq!(tree.weight(), text.len());

        let codes = generate_codes(&tree);
        let encoded = encode(text.chars(), &codes).unwrap();
        let decoded: String = decode(encoded, &tree).unwrap().into_iter().collect();
        assert_eq!(decoded, text);
    }

    #[test_log::test]
    fn decode_str_rejects_bad_digits() {
        let tree = HuffmanTree::from_symbols("ab".chars()).unwrap();
        assert_eq!(
            decode_str("01x", &tree),
            Err(DecodeError::CorruptStream(Corruption::InvalidDigit {
                digit: 'x',
                position: 2,
            }))
        );
    }

    #[test_log::test]
    fn build_tree_rejects_empty_table() {
        let frequencies = count_frequencies("".chars());
        assert_eq!(build_tree(&frequencies), Err(BuildError::EmptyInput));
    }
}
