use crate::alphabet::Symbol;
use crate::codes::CodeTable;
use biterator::Bit;

/// Encodes symbols with the codes of a single code table.
#[derive(Debug)]
pub struct Encoder<'t, S: Symbol> {
    codes: &'t CodeTable<S>,
}

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("Symbol {symbol} at position {position} has no code")]
    UnknownSymbol { symbol: String, position: usize },
}

/// The bits of an encoded stream, produced lazily as the input is consumed.
///
/// Yields a single error and then stops if the input contains a symbol the
/// code table does not cover.
#[derive(Debug)]
pub struct EncoderOutput<'t, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    input: I,
    codes: &'t CodeTable<S>,
    /// Bits of the current symbol's code not yet emitted.
    pending: &'t [Bit],
    position: usize,
    failed: bool,
}

impl<S: Symbol, I: Iterator<Item = S>> Iterator for EncoderOutput<'_, S, I> {
    type Item = Result<Bit, EncodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while self.pending.is_empty() {
            let symbol = self.input.next()?;
            let codes = self.codes;
            match codes.get(&symbol) {
                Some(code) => self.pending = code.bits(),
                None => {
                    self.failed = true;
                    return Some(Err(EncodeError::UnknownSymbol {
                        symbol: format!("{symbol:?}"),
                        position: self.position,
                    }));
                }
            }
            self.position += 1;
        }

        let pending = self.pending;
        let (&bit, rest) = pending.split_first()?;
        self.pending = rest;
        Some(Ok(bit))
    }
}

impl<'t, S: Symbol> Encoder<'t, S> {
    /// Create an encoder for input drawn from the symbols of the given table.
    pub fn new(codes: &'t CodeTable<S>) -> Self {
        Self { codes }
    }

    /// Encode a stream of symbols as a stream of bits, the concatenation of
    /// each symbol's code in input order.
    pub fn encode<I>(&self, input: I) -> EncoderOutput<'t, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        EncoderOutput {
            input: input.into_iter(),
            codes: self.codes,
            pending: &[],
            position: 0,
            failed: false,
        }
    }
}
