use crate::alphabets::dna;
use crate::genetic_code::{CodonTable, STOP};
use crate::seq::Frame;

/// Translates every complete triple of `seq`; trailing 1-2 symbols are ignored.
///
/// Triples containing a symbol outside A/C/G/T/U become `X`. With
/// `truncate_at_terminator` the output stops before the first terminator,
/// otherwise terminators are emitted as `*` and translation continues.
pub fn translate(seq: &[u8], table: &CodonTable, truncate_at_terminator: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len() / 3);
    for codon in seq.chunks_exact(3) {
        let aa = table.translate_codon(codon);
        if aa == STOP && truncate_at_terminator {
            break;
        }
        out.push(aa);
    }
    out
}

pub fn translate_frame(
    seq: &[u8],
    frame: Frame,
    table: &CodonTable,
    truncate_at_terminator: bool,
) -> Vec<u8> {
    match seq.get(frame.offset()..) {
        Some(slice) => translate(slice, table, truncate_at_terminator),
        None => Vec::new(),
    }
}

/// Untruncated translations of the three forward frames followed by the three
/// frames of the reverse complement.
pub fn translate_six_frames(seq: &[u8], table: &CodonTable) -> [Vec<u8>; 6] {
    let rc = dna::reverse_complement(seq);
    let [f1, f2, f3] = Frame::ALL.map(|frame| translate_frame(seq, frame, table, false));
    let [r1, r2, r3] = Frame::ALL.map(|frame| translate_frame(&rc, frame, table, false));
    [f1, f2, f3, r1, r2, r3]
}
