//! Named NCBI genetic codes and their codon tables.
//!
//! Codons are indexed `b1 * 16 + b2 * 4 + b3` with A=0, C=1, G=2, T/U=3, so
//! each table is a 64-byte product string in AAA, AAC, AAG, AAT, ACA, ...
//! order. Every triple maps to exactly one product; `*` marks terminators.

use crate::error::{BioError, BioResult};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Product emitted for terminator codons when translation is not truncated.
pub const STOP: u8 = b'*';
/// Product emitted for codons containing a non-ACGTU symbol.
pub const UNKNOWN: u8 = b'X';

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (rank, bases) in [b"Aa", b"Cc", b"Gg", b"Tt"].iter().enumerate() {
        for &b in bases.iter() {
            map[b as usize] = rank as u8;
        }
    }
    map[b'U' as usize] = 3;
    map[b'u' as usize] = 3;
    map
});

#[inline]
pub(crate) fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let i1 = BASE_INDEX[codon[0] as usize];
    let i2 = BASE_INDEX[codon[1] as usize];
    let i3 = BASE_INDEX[codon[2] as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        Some(((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize))
    } else {
        None
    }
}

fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = *b"ACGT";
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

const fn starts(codons: &[usize]) -> [bool; 64] {
    let mut s = [false; 64];
    let mut i = 0;
    while i < codons.len() {
        s[codons[i]] = true;
        i += 1;
    }
    s
}

// Start codon indices.
const ATA: usize = 12;
const ATC: usize = 13;
const ATG: usize = 14;
const ATT: usize = 15;
const CTG: usize = 30;
const GTG: usize = 46;
const TTA: usize = 60;
const TTG: usize = 62;

/// An immutable codon-to-product mapping for one genetic code.
#[derive(Debug, PartialEq, Eq)]
pub struct CodonTable {
    id: u8,
    name: &'static str,
    products: [u8; 64],
    starts: [bool; 64],
}

const STANDARD_PRODUCTS: [u8; 64] =
    *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static STANDARD: CodonTable = CodonTable {
    id: 1,
    name: "standard",
    products: STANDARD_PRODUCTS,
    starts: starts(&[ATG, CTG, TTG]),
};

// AGA/AGG stop, ATA Met, TGA Trp.
static VERTEBRATE_MITOCHONDRIAL: CodonTable = CodonTable {
    id: 2,
    name: "vertebrate-mitochondrial",
    products: *b"KNKNTTTT*S*SMIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF",
    starts: starts(&[ATA, ATC, ATG, ATT, GTG]),
};

// ATA Met, CTN Thr, TGA Trp.
static YEAST_MITOCHONDRIAL: CodonTable = CodonTable {
    id: 3,
    name: "yeast-mitochondrial",
    products: *b"KNKNTTTTRSRSMIMIQHQHPPPPRRRRTTTTEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF",
    starts: starts(&[ATA, ATG, GTG]),
};

// TGA Trp.
static MOLD_MITOCHONDRIAL: CodonTable = CodonTable {
    id: 4,
    name: "mold-mitochondrial",
    products: *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF",
    starts: starts(&[ATA, ATC, ATG, ATT, CTG, GTG, TTA, TTG]),
};

// AGA/AGG Ser, ATA Met, TGA Trp.
static INVERTEBRATE_MITOCHONDRIAL: CodonTable = CodonTable {
    id: 5,
    name: "invertebrate-mitochondrial",
    products: *b"KNKNTTTTSSSSMIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSSWCWCLFLF",
    starts: starts(&[ATA, ATC, ATG, ATT, GTG, TTG]),
};

// TAA/TAG Gln.
static CILIATE_NUCLEAR: CodonTable = CodonTable {
    id: 6,
    name: "ciliate",
    products: *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVVQYQYSSSS*CWCLFLF",
    starts: starts(&[ATG]),
};

static BACTERIAL_PLASTID: CodonTable = CodonTable {
    id: 11,
    name: "bacterial",
    products: STANDARD_PRODUCTS,
    starts: starts(&[ATA, ATC, ATG, ATT, CTG, GTG, TTG]),
};

impl CodonTable {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Product for one triple; [`UNKNOWN`] when any base is outside A/C/G/T/U.
    #[inline]
    pub fn translate_codon(&self, codon: &[u8]) -> u8 {
        match codon_index(codon) {
            Some(idx) => self.products[idx],
            None => UNKNOWN,
        }
    }

    #[inline]
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|idx| self.products[idx] == STOP)
    }

    /// Whether the table lists `codon` as an initiation codon.
    #[inline]
    pub fn is_start(&self, codon: &[u8]) -> bool {
        codon_index(codon).is_some_and(|idx| self.starts[idx])
    }

    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&idx| self.products[idx] == STOP)
            .map(index_to_codon)
            .collect()
    }

    pub fn start_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&idx| self.starts[idx])
            .map(index_to_codon)
            .collect()
    }
}

/// Supported genetic codes, numbered as in the NCBI translation tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GeneticCode {
    #[default]
    Standard = 1,
    VertebrateMitochondrial = 2,
    YeastMitochondrial = 3,
    MoldMitochondrial = 4,
    InvertebrateMitochondrial = 5,
    CiliateNuclear = 6,
    BacterialPlastid = 11,
}

impl GeneticCode {
    pub const ALL: [GeneticCode; 7] = [
        GeneticCode::Standard,
        GeneticCode::VertebrateMitochondrial,
        GeneticCode::YeastMitochondrial,
        GeneticCode::MoldMitochondrial,
        GeneticCode::InvertebrateMitochondrial,
        GeneticCode::CiliateNuclear,
        GeneticCode::BacterialPlastid,
    ];

    pub fn table(self) -> &'static CodonTable {
        match self {
            GeneticCode::Standard => &STANDARD,
            GeneticCode::VertebrateMitochondrial => &VERTEBRATE_MITOCHONDRIAL,
            GeneticCode::YeastMitochondrial => &YEAST_MITOCHONDRIAL,
            GeneticCode::MoldMitochondrial => &MOLD_MITOCHONDRIAL,
            GeneticCode::InvertebrateMitochondrial => &INVERTEBRATE_MITOCHONDRIAL,
            GeneticCode::CiliateNuclear => &CILIATE_NUCLEAR,
            GeneticCode::BacterialPlastid => &BACTERIAL_PLASTID,
        }
    }

    pub fn ncbi_id(self) -> u8 {
        self as u8
    }

    pub fn from_ncbi_id(id: u8) -> BioResult<Self> {
        GeneticCode::ALL
            .into_iter()
            .find(|code| code.ncbi_id() == id)
            .ok_or_else(|| BioError::UnknownGeneticCode {
                name: id.to_string(),
            })
    }
}

impl FromStr for GeneticCode {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(id) = key.parse::<u8>() {
            return GeneticCode::from_ncbi_id(id);
        }
        let code = match key.as_str() {
            "standard" => GeneticCode::Standard,
            "vertebrate-mitochondrial" | "mitochondrial" => GeneticCode::VertebrateMitochondrial,
            "yeast-mitochondrial" => GeneticCode::YeastMitochondrial,
            "mold-mitochondrial" | "mycoplasma" => GeneticCode::MoldMitochondrial,
            "invertebrate-mitochondrial" => GeneticCode::InvertebrateMitochondrial,
            "ciliate" => GeneticCode::CiliateNuclear,
            "bacterial" | "plastid" => GeneticCode::BacterialPlastid,
            _ => {
                return Err(BioError::UnknownGeneticCode {
                    name: s.to_string(),
                })
            }
        };
        Ok(code)
    }
}

impl fmt::Display for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table().name())
    }
}
