use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid symbol '{ch}' at line {line}, column {column}")]
    InvalidSymbol { ch: char, line: usize, column: usize },

    #[error("invalid frame: {frame} (must be 0, 1, or 2)")]
    InvalidFrame { frame: usize },

    #[error("invalid minimum ORF length: {min_length} (must be at least 1)")]
    InvalidMinLength { min_length: usize },

    #[error("invalid line width: {width} (must be at least 1)")]
    InvalidLineWidth { width: usize },

    #[error("unknown genetic code '{name}'")]
    UnknownGeneticCode { name: String },

    #[error("invalid start codon {codon:?}: {msg}")]
    InvalidStartCodon { codon: String, msg: &'static str },

    #[error("invalid identifier {id:?}: {msg}")]
    InvalidIdentifier { id: String, msg: &'static str },

    #[error("ORF {start}..{end} lies outside a sequence of length {len}")]
    OrfOutOfRange { start: usize, end: usize, len: usize },

    #[error("record '{id}' is not a nucleotide sequence")]
    NotNucleotide { id: String },

    #[error("fasta format error at line {line}: expected header line starting with '>'")]
    MalformedRecord { line: usize },

    #[error("fasta format error at line {line}: empty identifier")]
    EmptyIdentifier { line: usize },

    #[error("fasta format error at line {line}: duplicate identifier '{id}'")]
    DuplicateIdentifier { id: String, line: usize },

    #[error("fasta format error at line {line}: header is not valid UTF-8")]
    HeaderEncoding { line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),
}

impl BioError {
    /// Errors confined to a single record; the stream can resume at the next header.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            BioError::EmptyIdentifier { .. }
                | BioError::DuplicateIdentifier { .. }
                | BioError::HeaderEncoding { .. }
        )
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            BioError::InvalidSymbol { line, .. }
            | BioError::MalformedRecord { line }
            | BioError::EmptyIdentifier { line }
            | BioError::DuplicateIdentifier { line, .. }
            | BioError::HeaderEncoding { line } => Some(*line),
            _ => None,
        }
    }
}

pub type BioResult<T> = Result<T, BioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_level_classification() {
        assert!(BioError::EmptyIdentifier { line: 3 }.is_record_level());
        assert!(BioError::DuplicateIdentifier {
            id: "x".into(),
            line: 1
        }
        .is_record_level());
        assert!(!BioError::MalformedRecord { line: 1 }.is_record_level());
        assert!(!BioError::InvalidMinLength { min_length: 0 }.is_record_level());
    }

    #[test]
    fn messages_carry_context() {
        let err = BioError::InvalidSymbol {
            ch: '#',
            line: 4,
            column: 7,
        };
        assert_eq!(err.to_string(), "invalid symbol '#' at line 4, column 7");
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn value_errors_have_no_line() {
        let err = BioError::OrfOutOfRange {
            start: 3,
            end: 12,
            len: 9,
        };
        assert_eq!(err.to_string(), "ORF 3..12 lies outside a sequence of length 9");
        assert_eq!(err.line(), None);

        let err = BioError::InvalidIdentifier {
            id: "a b".into(),
            msg: "identifier contains whitespace",
        };
        assert_eq!(
            err.to_string(),
            "invalid identifier \"a b\": identifier contains whitespace"
        );
        assert!(!err.is_record_level());
    }
}
