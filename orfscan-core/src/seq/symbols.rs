use vector_map::VecMap;

/// Bytes stripped from one record body, counted per symbol.
#[derive(Clone, Debug, Default)]
pub struct InvalidSymbols {
    counts: VecMap<u8, usize>,
    total: usize,
}

impl InvalidSymbols {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, symbol: u8) {
        match self.counts.get_mut(&symbol) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(symbol, 1);
            }
        }
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, symbol: u8) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Distinct stripped symbols with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

impl PartialEq for InvalidSymbols {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total && self.iter().all(|(symbol, count)| other.get(symbol) == count)
    }
}

impl Eq for InvalidSymbols {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_symbol() {
        let mut invalid = InvalidSymbols::new();
        assert!(invalid.is_empty());

        for &b in b"# #." {
            invalid.record(b);
        }

        assert_eq!(invalid.total(), 4);
        assert_eq!(invalid.get(b'#'), 2);
        assert_eq!(invalid.get(b' '), 1);
        assert_eq!(invalid.get(b'Q'), 0);
        assert_eq!(
            invalid.iter().collect::<Vec<_>>(),
            vec![(b'#', 2), (b' ', 1), (b'.', 1)]
        );

        invalid.clear();
        assert!(invalid.is_empty());
        assert_eq!(invalid.get(b'#'), 0);
    }
}
