use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static PROTEIN: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWYZ*", b'X'));

/// Upper-case IUPAC amino-acid symbols plus `*` for terminators.
pub fn alphabet() -> &'static Alphabet {
    &PROTEIN
}
