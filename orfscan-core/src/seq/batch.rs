//! Fan-out of ORF search and translation across records.
//!
//! Records and codon tables are read-only once built, so each record is
//! handed to its own worker without locking. With the `parallel` feature
//! disabled the same code runs sequentially.

use crate::error::{BioError, BioResult};
use crate::genetic_code::CodonTable;
use crate::seq::orf::{OrfCandidate, OrfConfig, OrfScan};
use crate::seq::record::Record;
use log::debug;

/// ORF candidates found in one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOrfs<'a> {
    pub record: &'a Record,
    pub orfs: Vec<OrfCandidate>,
}

impl RecordOrfs<'_> {
    pub fn proteins(&self, table: &CodonTable) -> BioResult<Vec<Vec<u8>>> {
        translate_orfs(self.record, &self.orfs, table)
    }
}

/// Scans every record with one configuration.
///
/// The configuration and record kinds are checked before any scanning starts.
pub fn scan_records<'a>(records: &'a [Record], config: &OrfConfig) -> BioResult<Vec<RecordOrfs<'a>>> {
    let starts = config.resolve_starts()?;
    for record in records {
        record.require_nucleotide()?;
    }
    debug!("scanning {} records for ORFs", records.len());

    let out: Vec<RecordOrfs<'a>> = par_map!(records, |record: &'a Record| RecordOrfs {
        record,
        orfs: OrfScan::with_starts(record.seq(), config, starts).collect(),
    });
    Ok(out)
}

/// Protein products of `orfs`, terminator excluded, in candidate order.
///
/// A candidate that does not fit inside `record` fails the whole call.
pub fn translate_orfs(
    record: &Record,
    orfs: &[OrfCandidate],
    table: &CodonTable,
) -> BioResult<Vec<Vec<u8>>> {
    let seq = record.seq();
    par_try_map!(orfs, |orf: &OrfCandidate| orf
        .translate(seq, table)
        .ok_or(BioError::OrfOutOfRange {
            start: orf.start,
            end: orf.end,
            len: seq.len(),
        }))
}
