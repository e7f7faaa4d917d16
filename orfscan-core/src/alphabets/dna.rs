use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static NUCLEOTIDE: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::new(b"ACGTURYSWKMBDHV", b'N'));

/// Upper-case IUPAC nucleotide symbols, T and U both accepted.
pub fn alphabet() -> &'static Alphabet {
    &NUCLEOTIDE
}

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"AGCTYRWSKMDVHBN"
        .iter()
        .zip(b"TCGARYWSMKHBDVN".iter())
        .for_each(|(&a, &b)| {
            comp[a as usize] = b;
            comp[a as usize + 32] = b + 32;
        });
    comp[b'U' as usize] = b'A';
    comp[b'u' as usize] = b'a';
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

pub fn reverse_complement(text: &[u8]) -> Vec<u8> {
    text.iter().rev().map(|&a| complement(a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
        assert!(alphabet().is_word(b"GAUUACA"));
        assert!(alphabet().is_word(b"ACGTNRY"));
    }

    #[test]
    fn lower_case_is_no_word() {
        assert!(!alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn symbol_is_no_word() {
        assert!(!alphabet().is_word(b"#"));
        assert!(!alphabet().is_word(b"AC GT"));
    }

    #[test]
    fn complement_pairs() {
        assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
        assert_eq!(reverse_complement(b"acgtn"), b"nacgt");
        assert_eq!(reverse_complement(b"RYKM"), b"KMRY");
        assert_eq!(complement(b'U'), b'A');
        assert_eq!(reverse_complement(b""), b"");
    }

    #[test]
    fn unknown_bytes_pass_through() {
        assert_eq!(complement(b'#'), b'#');
        assert_eq!(complement(b'-'), b'-');
    }
}
