pub mod dna;
pub mod protein;

use bit_set::BitSet;
use std::borrow::Borrow;

/// A closed set of valid one-byte symbols with a designated ambiguity symbol.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
    ambiguity: u8,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T, ambiguity: u8) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));
        s.insert(ambiguity as usize);

        Alphabet {
            symbols: s,
            ambiguity,
        }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    pub fn ambiguity(&self) -> u8 {
        self.ambiguity
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Which alphabet a sequence is validated against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeqKind {
    #[default]
    Nucleotide,
    Protein,
}

impl SeqKind {
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            SeqKind::Nucleotide => dna::alphabet(),
            SeqKind::Protein => protein::alphabet(),
        }
    }
}
