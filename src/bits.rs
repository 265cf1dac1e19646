//! Conversion between bit sequences and their textual `0`/`1` form.

use crate::decoder::{Corruption, DecodeError};
use biterator::Bit;

/// Render bits as a string of `0` and `1` characters.
pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|bit| bit.to_string()).collect()
}

/// Parse a string of `0` and `1` characters.
///
/// Any other character makes the stream corrupt.
pub fn parse_bits(text: &str) -> Result<Vec<Bit>, DecodeError> {
    text.chars()
        .enumerate()
        .map(|(position, digit)| match digit {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            _ => Err(DecodeError::CorruptStream(Corruption::InvalidDigit {
                digit,
                position,
            })),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use biterator::Bit::{One, Zero};

    #[test]
    fn parse_and_format() {
        let bits = parse_bits("01101").unwrap();
        assert_eq!(bits, vec![Zero, One, One, Zero, One]);
        assert_eq!(format_bits(&bits), "01101");
    }

    #[test]
    fn empty_text() {
        assert_eq!(parse_bits(""), Ok(Vec::new()));
        assert_eq!(format_bits(&[]), "");
    }

    #[test]
    fn error_on_invalid_digit() {
        assert_eq!(
            parse_bits("0120"),
            Err(DecodeError::CorruptStream(Corruption::InvalidDigit {
                digit: '2',
                position: 2,
            }))
        );
    }
}
