use super::orf::{OrfConfig, OrfScan, StartMode, Strands};
use super::{scan_records, translate, translate_frame, translate_six_frames, Frame, Record, Strand};
use crate::alphabets::{dna, SeqKind};
use crate::error::BioError;
use crate::genetic_code::{GeneticCode, STOP};

use proptest::prelude::*;
use std::collections::HashSet;

fn acgt(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
        0..max_len,
    )
}

fn iupac(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGTRYSWKMBDHVN".to_vec()), 0..max_len)
}

fn code() -> impl Strategy<Value = GeneticCode> {
    prop::sample::select(GeneticCode::ALL.to_vec())
}

fn strand_seq(seq: &[u8], strand: Strand) -> Vec<u8> {
    match strand {
        Strand::Forward => seq.to_vec(),
        Strand::Reverse => dna::reverse_complement(seq),
    }
}

proptest! {
    #[test]
    fn reverse_complement_is_an_involution(seq in iupac(200)) {
        let rc = dna::reverse_complement(&seq);
        prop_assert_eq!(rc.len(), seq.len());
        prop_assert_eq!(dna::reverse_complement(&rc), seq);
    }

    #[test]
    fn complement_pairs_bases(seq in acgt(100)) {
        for &b in &seq {
            let c = dna::complement(b);
            prop_assert_ne!(b, c);
            prop_assert_eq!(dna::complement(c), b);
        }
    }
}

proptest! {
    #[test]
    fn orfs_are_well_formed(seq in acgt(300), min_codons in 1usize..20, code in code()) {
        let min_length = min_codons * 3;
        let table = code.table();
        let config = OrfConfig::new(code, min_length);
        for orf in OrfScan::from_seq(&seq, &config).unwrap() {
            let strand = strand_seq(&seq, orf.strand);
            prop_assert!(orf.end <= strand.len());
            prop_assert_eq!(orf.len() % 3, 0);
            prop_assert!(orf.len() >= min_length);
            prop_assert_eq!(orf.start % 3, orf.frame.offset());
            prop_assert_eq!(&strand[orf.start..orf.start + 3], b"ATG");
            prop_assert!(table.is_stop(&strand[orf.end - 3..orf.end]));
            for codon in strand[orf.start..orf.end - 3].chunks_exact(3) {
                prop_assert!(!table.is_stop(codon));
            }

            let (lo, hi) = orf.forward_span(seq.len());
            prop_assert!(lo <= hi && hi <= seq.len());
            prop_assert_eq!(orf.sequence(&seq).unwrap(), strand[orf.start..orf.end].to_vec());
        }
    }

    #[test]
    fn all_starts_covers_first_start(seq in acgt(300), min_codons in 1usize..10) {
        let first = OrfConfig::new(GeneticCode::Standard, min_codons * 3);
        let all = first.clone().with_start_mode(StartMode::AllStarts);
        let first: HashSet<_> = OrfScan::from_seq(&seq, &first).unwrap().collect();
        let all: HashSet<_> = OrfScan::from_seq(&seq, &all).unwrap().collect();
        prop_assert!(first.is_subset(&all));
    }

    #[test]
    fn strands_partition_candidates(seq in acgt(200)) {
        let scan = |strands: Strands| {
            let config = OrfConfig::new(GeneticCode::Standard, 3).with_strands(strands);
            OrfScan::from_seq(&seq, &config).unwrap().collect::<Vec<_>>()
        };
        let both = scan(Strands::Both);
        let mut split = scan(Strands::Forward);
        prop_assert!(split.iter().all(|o| o.strand == Strand::Forward));
        split.extend(scan(Strands::Reverse));
        prop_assert_eq!(both, split);
    }

    #[test]
    fn orf_proteins_have_no_terminator(seq in acgt(300)) {
        let table = GeneticCode::Standard.table();
        let config = OrfConfig::new(GeneticCode::Standard, 3);
        for orf in OrfScan::from_seq(&seq, &config).unwrap() {
            let protein = orf.translate(&seq, table).unwrap();
            prop_assert_eq!(protein.len(), orf.len() / 3 - 1);
            prop_assert_eq!(protein.first(), Some(&b'M'));
            prop_assert!(!protein.contains(&STOP));
        }
    }
}

proptest! {
    #[test]
    fn translation_length(seq in iupac(300), code in code()) {
        let table = code.table();
        let full = translate(&seq, table, false);
        prop_assert_eq!(full.len(), seq.len() / 3);

        let truncated = translate(&seq, table, true);
        prop_assert!(full.starts_with(&truncated));
        prop_assert!(!truncated.contains(&STOP));
    }

    #[test]
    fn translation_is_repeatable(seq in acgt(300), code in code(), truncate in any::<bool>()) {
        let table = code.table();
        prop_assert_eq!(translate(&seq, table, truncate), translate(&seq, table, truncate));
    }

    #[test]
    fn six_frames_agree_with_single_frames(seq in acgt(100)) {
        let table = GeneticCode::Standard.table();
        let frames = translate_six_frames(&seq, table);
        let rc = dna::reverse_complement(&seq);
        for (i, frame) in Frame::ALL.into_iter().enumerate() {
            prop_assert_eq!(&frames[i], &translate_frame(&seq, frame, table, false));
            prop_assert_eq!(&frames[i + 3], &translate_frame(&rc, frame, table, false));
        }
    }

    #[test]
    fn batch_scan_matches_per_record_scan(
        seqs in prop::collection::vec(acgt(150), 0..12),
    ) {
        let records: Vec<Record> = seqs
            .into_iter()
            .enumerate()
            .map(|(i, seq)| Record::new(format!("r{i}"), "", seq, SeqKind::Nucleotide).unwrap())
            .collect();
        let config = OrfConfig::new(GeneticCode::Standard, 6);
        let batch = scan_records(&records, &config).unwrap();
        prop_assert_eq!(batch.len(), records.len());
        for (found, record) in batch.iter().zip(&records) {
            prop_assert_eq!(found.record.id(), record.id());
            let expected: Vec<_> = OrfScan::new(record, &config).unwrap().collect();
            prop_assert_eq!(&found.orfs, &expected);
        }
    }
}

#[test]
fn frames_from_offsets() {
    assert_eq!(Frame::try_from(0usize).unwrap(), Frame::One);
    assert_eq!(Frame::try_from(2usize).unwrap(), Frame::Three);
    assert!(matches!(
        Frame::try_from(3usize),
        Err(BioError::InvalidFrame { frame: 3 })
    ));

    let frame = Frame::try_from(1usize).unwrap();
    assert_eq!(
        translate_frame(b"AATGGCC", frame, GeneticCode::Standard.table(), false),
        b"MA"
    );
}
