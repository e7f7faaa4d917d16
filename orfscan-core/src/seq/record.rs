use crate::alphabets::{dna, SeqKind};
use crate::error::{BioError, BioResult};
use crate::seq::symbols::InvalidSymbols;

/// One parsed FASTA entry. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    id: Box<str>,
    desc: Box<str>,
    seq: Vec<u8>,
    kind: SeqKind,
    invalid: InvalidSymbols,
}

impl Record {
    /// Builds a record, upper-casing `seq` and validating it against `kind`'s alphabet.
    pub fn new(
        id: impl Into<Box<str>>,
        desc: impl Into<Box<str>>,
        seq: impl Into<Vec<u8>>,
        kind: SeqKind,
    ) -> BioResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(BioError::InvalidIdentifier {
                id: String::new(),
                msg: "identifier is empty",
            });
        }
        if id.contains(char::is_whitespace) {
            return Err(BioError::InvalidIdentifier {
                id: id.into(),
                msg: "identifier contains whitespace",
            });
        }
        let mut seq = seq.into();
        seq.make_ascii_uppercase();
        let alphabet = kind.alphabet();
        if let Some(pos) = seq.iter().position(|&b| !alphabet.contains(b)) {
            return Err(BioError::InvalidChar {
                ch: seq[pos] as char,
                pos,
            });
        }
        Ok(Self::from_parts(id, desc.into(), seq, kind, InvalidSymbols::new()))
    }

    /// Parser-side constructor; the body is already normalized and validated.
    pub(crate) fn from_parts(
        id: Box<str>,
        desc: Box<str>,
        seq: Vec<u8>,
        kind: SeqKind,
        invalid: InvalidSymbols,
    ) -> Self {
        Self {
            id,
            desc,
            seq,
            kind,
            invalid,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header text after the identifier; empty when the header had none.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn kind(&self) -> SeqKind {
        self.kind
    }

    /// Symbols stripped from the body while parsing.
    pub fn invalid_symbols(&self) -> &InvalidSymbols {
        &self.invalid
    }

    pub fn reverse_complement(&self) -> BioResult<Vec<u8>> {
        self.require_nucleotide()?;
        Ok(dna::reverse_complement(&self.seq))
    }

    pub fn into_seq(self) -> Vec<u8> {
        self.seq
    }

    pub(crate) fn require_nucleotide(&self) -> BioResult<()> {
        match self.kind {
            SeqKind::Nucleotide => Ok(()),
            SeqKind::Protein => Err(BioError::NotNucleotide {
                id: self.id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_case() {
        let record = Record::new("g1", "desc", b"atgNNa".to_vec(), SeqKind::Nucleotide).unwrap();
        assert_eq!(record.id(), "g1");
        assert_eq!(record.desc(), "desc");
        assert_eq!(record.seq(), b"ATGNNA");
        assert_eq!(record.len(), 6);
        assert!(record.invalid_symbols().is_empty());
    }

    #[test]
    fn new_rejects_invalid_symbols() {
        let err = Record::new("g1", "", b"AC#T".to_vec(), SeqKind::Nucleotide).unwrap_err();
        match err {
            BioError::InvalidChar { ch, pos } => {
                assert_eq!(ch, '#');
                assert_eq!(pos, 2);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_bad_identifiers() {
        match Record::new("", "", b"ACGT".to_vec(), SeqKind::Nucleotide) {
            Err(BioError::InvalidIdentifier { id, msg }) => {
                assert!(id.is_empty());
                assert_eq!(msg, "identifier is empty");
            }
            other => panic!("expected invalid identifier, got {other:?}"),
        }

        for id in ["a b", "a\x0cb", "a\u{3000}b"] {
            match Record::new(id, "", b"ACGT".to_vec(), SeqKind::Nucleotide) {
                Err(err @ BioError::InvalidIdentifier { .. }) => {
                    assert_eq!(err.line(), None);
                    assert!(!err.is_record_level());
                }
                other => panic!("expected invalid identifier for {id:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn protein_records_have_no_reverse_complement() {
        let protein = Record::new("p1", "", b"MKV*".to_vec(), SeqKind::Protein).unwrap();
        assert!(matches!(
            protein.reverse_complement(),
            Err(BioError::NotNucleotide { .. })
        ));

        let dna = Record::new("d1", "", b"AACG".to_vec(), SeqKind::Nucleotide).unwrap();
        assert_eq!(dna.reverse_complement().unwrap(), b"CGTT");
    }
}
