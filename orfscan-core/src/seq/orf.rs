//! Open reading frame detection over both strands.
//!
//! An ORF begins at a start codon and ends with the first in-frame terminator
//! of the active codon table, terminator included. Each of the six
//! (strand, frame) lanes is scanned once, left to right, so a scan is linear
//! in the sequence length.

use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use crate::genetic_code::{codon_index, CodonTable, GeneticCode};
use crate::seq::record::Record;
use crate::seq::translate::translate;
use crate::seq::{Frame, Strand};
use log::debug;
use std::collections::VecDeque;

/// Which pending start codons a terminator closes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartMode {
    /// Only the first start after the previous terminator opens an ORF.
    #[default]
    FirstStart,
    /// Every start before the terminator yields its own, nested ORF.
    AllStarts,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StartCodons {
    #[default]
    Atg,
    /// Initiation codons listed by the active genetic code.
    Table,
    Custom(Vec<[u8; 3]>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strands {
    #[default]
    Both,
    Forward,
    Reverse,
}

impl Strands {
    fn lanes(self) -> Vec<(Strand, Frame)> {
        let strands: &[Strand] = match self {
            Strands::Both => &[Strand::Forward, Strand::Reverse],
            Strands::Forward => &[Strand::Forward],
            Strands::Reverse => &[Strand::Reverse],
        };
        strands
            .iter()
            .flat_map(|&strand| Frame::ALL.map(|frame| (strand, frame)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfConfig {
    code: GeneticCode,
    min_length: usize,
    start_mode: StartMode,
    start_codons: StartCodons,
    strands: Strands,
}

impl OrfConfig {
    /// `min_length` is in nucleotides, terminator included.
    pub fn new(code: GeneticCode, min_length: usize) -> Self {
        Self {
            code,
            min_length,
            start_mode: StartMode::default(),
            start_codons: StartCodons::default(),
            strands: Strands::default(),
        }
    }

    pub fn with_start_mode(mut self, start_mode: StartMode) -> Self {
        self.start_mode = start_mode;
        self
    }

    pub fn with_start_codons(mut self, start_codons: StartCodons) -> Self {
        self.start_codons = start_codons;
        self
    }

    pub fn with_strands(mut self, strands: Strands) -> Self {
        self.strands = strands;
        self
    }

    pub fn code(&self) -> GeneticCode {
        self.code
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn start_mode(&self) -> StartMode {
        self.start_mode
    }

    pub fn start_codons(&self) -> &StartCodons {
        &self.start_codons
    }

    pub fn strands(&self) -> Strands {
        self.strands
    }

    pub fn validate(&self) -> BioResult<()> {
        self.resolve_starts().map(|_| ())
    }

    /// Validates the configuration and returns the start codons as a codon-index mask.
    pub(crate) fn resolve_starts(&self) -> BioResult<[bool; 64]> {
        if self.min_length == 0 {
            return Err(BioError::InvalidMinLength {
                min_length: self.min_length,
            });
        }

        let codons = match &self.start_codons {
            StartCodons::Atg => vec![*b"ATG"],
            StartCodons::Table => self.code.table().start_codons(),
            StartCodons::Custom(codons) => {
                if codons.is_empty() {
                    return Err(BioError::InvalidStartCodon {
                        codon: String::new(),
                        msg: "no start codons given",
                    });
                }
                codons.clone()
            }
        };

        let table = self.code.table();
        let mut mask = [false; 64];
        for codon in &codons {
            let invalid = |msg| BioError::InvalidStartCodon {
                codon: String::from_utf8_lossy(codon).into_owned(),
                msg,
            };
            let idx = codon_index(codon)
                .ok_or_else(|| invalid("start codons must use A, C, G and T/U only"))?;
            if table.is_stop(codon) {
                return Err(invalid("start codon is a terminator in the active code"));
            }
            mask[idx] = true;
        }
        Ok(mask)
    }
}

/// A start-to-terminator interval on one strand.
///
/// `start` and `end` are offsets into the scanned strand: the forward
/// sequence for [`Strand::Forward`], its reverse complement for
/// [`Strand::Reverse`]. Use [`OrfCandidate::forward_span`] for coordinates
/// on the forward sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrfCandidate {
    pub strand: Strand,
    pub frame: Frame,
    pub start: usize,
    pub end: usize,
}

impl OrfCandidate {
    /// Zero when `end` does not lie past `start`.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Half-open span on the forward strand of a sequence of length `seq_len`.
    ///
    /// Reverse-strand offsets past `seq_len` clamp to 0.
    pub fn forward_span(&self, seq_len: usize) -> (usize, usize) {
        match self.strand {
            Strand::Forward => (self.start, self.end),
            Strand::Reverse => (
                seq_len.saturating_sub(self.end),
                seq_len.saturating_sub(self.start),
            ),
        }
    }

    /// Nucleotides of the ORF read 5' to 3' on its own strand, or `None` when the
    /// candidate does not fit inside `seq`.
    pub fn sequence(&self, seq: &[u8]) -> Option<Vec<u8>> {
        if self.end > seq.len() || self.start > self.end {
            return None;
        }
        let (start, end) = self.forward_span(seq.len());
        let slice = &seq[start..end];
        Some(match self.strand {
            Strand::Forward => slice.to_vec(),
            Strand::Reverse => dna::reverse_complement(slice),
        })
    }

    /// Protein product, terminator excluded.
    pub fn translate(&self, seq: &[u8], table: &CodonTable) -> Option<Vec<u8>> {
        self.sequence(seq)
            .map(|nucleotides| translate(&nucleotides, table, true))
    }
}

/// Scans `record` with the default start policy (first ATG after each terminator).
pub fn find_orfs(record: &Record, code: GeneticCode, min_length: usize) -> BioResult<OrfScan<'_>> {
    OrfScan::new(record, &OrfConfig::new(code, min_length))
}

/// Lazy iterator over the ORF candidates of one sequence.
///
/// Candidates come lane by lane (forward frames, then reverse frames) and
/// by position within a lane.
pub struct OrfScan<'a> {
    forward: &'a [u8],
    reverse: Option<Vec<u8>>,
    table: &'static CodonTable,
    starts: [bool; 64],
    start_mode: StartMode,
    min_length: usize,
    lanes: Vec<(Strand, Frame)>,
    lane: usize,
    pos: usize,
    pending: Vec<usize>,
    ready: VecDeque<OrfCandidate>,
}

impl<'a> OrfScan<'a> {
    pub fn new(record: &'a Record, config: &OrfConfig) -> BioResult<Self> {
        let starts = config.resolve_starts()?;
        record.require_nucleotide()?;
        debug!(
            "scanning '{}' ({} nt): code={}, min_length={}, mode={:?}",
            record.id(),
            record.len(),
            config.code,
            config.min_length,
            config.start_mode
        );
        Ok(Self::with_starts(record.seq(), config, starts))
    }

    /// Scans raw nucleotide bytes; lower case and U are accepted.
    pub fn from_seq(seq: &'a [u8], config: &OrfConfig) -> BioResult<Self> {
        let starts = config.resolve_starts()?;
        Ok(Self::with_starts(seq, config, starts))
    }

    pub(crate) fn with_starts(seq: &'a [u8], config: &OrfConfig, starts: [bool; 64]) -> Self {
        let lanes = config.strands.lanes();
        let pos = lanes.first().map_or(0, |&(_, frame)| frame.offset());
        Self {
            forward: seq,
            reverse: None,
            table: config.code.table(),
            starts,
            start_mode: config.start_mode,
            min_length: config.min_length,
            lanes,
            lane: 0,
            pos,
            pending: Vec::new(),
            ready: VecDeque::new(),
        }
    }

    /// Advances the current lane until it yields candidates or runs out.
    /// Returns `false` once every lane is exhausted.
    fn step(&mut self) -> bool {
        let Some(&(strand, frame)) = self.lanes.get(self.lane) else {
            return false;
        };
        if strand == Strand::Reverse && self.reverse.is_none() {
            self.reverse = Some(dna::reverse_complement(self.forward));
        }
        let seq: &[u8] = match strand {
            Strand::Forward => self.forward,
            Strand::Reverse => self.reverse.as_deref().unwrap_or_default(),
        };

        while self.pos + 3 <= seq.len() {
            let at = self.pos;
            let codon = &seq[at..at + 3];
            self.pos += 3;

            if !self.pending.is_empty() && self.table.is_stop(codon) {
                let end = at + 3;
                for &start in &self.pending {
                    if end - start >= self.min_length {
                        self.ready.push_back(OrfCandidate {
                            strand,
                            frame,
                            start,
                            end,
                        });
                    }
                }
                self.pending.clear();
                if !self.ready.is_empty() {
                    return true;
                }
            } else if codon_index(codon).is_some_and(|idx| self.starts[idx])
                && (self.pending.is_empty() || self.start_mode == StartMode::AllStarts)
            {
                self.pending.push(at);
            }
        }

        // starts without a terminator never form an ORF
        self.pending.clear();
        self.lane += 1;
        if let Some(&(_, next)) = self.lanes.get(self.lane) {
            self.pos = next.offset();
        }
        true
    }
}

impl Iterator for OrfScan<'_> {
    type Item = OrfCandidate;

    fn next(&mut self) -> Option<OrfCandidate> {
        loop {
            if let Some(candidate) = self.ready.pop_front() {
                return Some(candidate);
            }
            if !self.step() {
                return None;
            }
        }
    }
}
