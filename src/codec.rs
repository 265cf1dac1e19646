use crate::Error;
use crate::alphabet::{FrequencyTable, Symbol};
use crate::codes::{CodeGenerator, CodeTable};
use crate::decoder::{DecodeError, Decoder};
use crate::encoder::{EncodeError, Encoder};
use crate::tree::HuffmanTree;
use biterator::Bit;

/// A Huffman tree together with the code table derived from it.
///
/// Keeping both in one value means the table can never be used with a tree
/// it was not generated from.
#[derive(Debug, Clone)]
pub struct Codec<S: Symbol> {
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> Codec<S> {
    /// Build a codec fitted to the symbol frequencies of `input`.
    pub fn from_symbols<I>(input: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_frequencies(&FrequencyTable::from_symbols(input))
    }

    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self, Error> {
        Self::with_generator(frequencies, &CodeGenerator::new())
    }

    /// Build a codec, deriving its codes with the given generator.
    pub fn with_generator(
        frequencies: &FrequencyTable<S>,
        generator: &CodeGenerator,
    ) -> Result<Self, Error> {
        let tree = HuffmanTree::from_frequencies(frequencies)?;
        let codes = generator.generate(&tree);
        Ok(Self { tree, codes })
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn encode<I>(&self, input: I) -> Result<Vec<Bit>, Error>
    where
        I: IntoIterator<Item = S>,
    {
        let bits = Encoder::new(&self.codes)
            .encode(input)
            .collect::<Result<Vec<_>, EncodeError>>()?;
        Ok(bits)
    }

    pub fn decode<I>(&self, input: I) -> Result<Vec<S>, Error>
    where
        I: IntoIterator<Item = Bit>,
    {
        let symbols = Decoder::new(&self.tree)
            .decode(input)
            .collect::<Result<Vec<_>, DecodeError>>()?;
        Ok(symbols)
    }
}
