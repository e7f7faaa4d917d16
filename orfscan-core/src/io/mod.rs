pub mod fasta;


use crate::alphabets::SeqKind;

/// What the parser does with body bytes outside the active alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SymbolPolicy {
    /// Fail on the first invalid symbol and stop reading the stream.
    Strict,
    /// Drop invalid symbols, count them on the record and keep going.
    #[default]
    LenientStrip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    pub kind: SeqKind,
    pub policy: SymbolPolicy,
    /// Reject a header whose identifier was already seen in this stream.
    pub unique_ids: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            kind: SeqKind::Nucleotide,
            policy: SymbolPolicy::LenientStrip,
            unique_ids: true,
        }
    }
}

impl ParseConfig {
    pub fn nucleotide() -> Self {
        Self::default()
    }

    pub fn protein() -> Self {
        Self {
            kind: SeqKind::Protein,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: SymbolPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_unique_ids(mut self, unique_ids: bool) -> Self {
        self.unique_ids = unique_ids;
        self
    }
}

/// A record dropped by a lenient read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub id: Option<Box<str>>,
    pub message: Box<str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadReport<T> {
    pub data: T,
    pub skipped: Vec<SkippedRecord>,
}
