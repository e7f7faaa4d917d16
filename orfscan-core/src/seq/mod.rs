pub mod batch;
pub mod orf;
pub mod record;
pub mod symbols;
pub mod translate;

#[cfg(test)]
mod tests;

use crate::error::BioError;

pub use batch::{scan_records, translate_orfs, RecordOrfs};
pub use orf::{find_orfs, OrfCandidate, OrfConfig, OrfScan, StartCodons, StartMode, Strands};
pub use record::Record;
pub use symbols::InvalidSymbols;
pub use translate::{translate, translate_frame, translate_six_frames};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strand {
    Forward,
    Reverse,
}

/// Reading frame, offset 0, 1 or 2 symbols from the start of a strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Frame {
    One,
    Two,
    Three,
}

impl Frame {
    pub const ALL: [Frame; 3] = [Frame::One, Frame::Two, Frame::Three];

    #[inline]
    pub fn offset(self) -> usize {
        match self {
            Frame::One => 0,
            Frame::Two => 1,
            Frame::Three => 2,
        }
    }
}

impl TryFrom<usize> for Frame {
    type Error = BioError;

    fn try_from(frame: usize) -> Result<Self, Self::Error> {
        match frame {
            0 => Ok(Frame::One),
            1 => Ok(Frame::Two),
            2 => Ok(Frame::Three),
            _ => Err(BioError::InvalidFrame { frame }),
        }
    }
}
