/// Maximum input length for the naive strategy.
const NAIVE_SELECTION_MAX_LEN: usize = 100;

/// Maximum k for the naive strategy.
const NAIVE_SELECTION_MAX_K: usize = 10;

/// Maximum `k / len` for the heap strategy.
const HEAP_SELECTION_MAX_RATIO: f64 = 0.001;

/// Maximum k for the heap strategy.
const HEAP_SELECTION_MAX_K: usize = 1000;

/// The algorithm a selection is carried out with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Linear scan keeping the current k best, *O*(*n* *k*).
    Naive,
    /// Bounded max-heap of the current k best, *O*(*n* log *k*).
    Heap,
    /// Pattern-defeating quickselect, expected *O*(*n*).
    Quickselect,
}

/// Thresholds used to pick a [`Strategy`].
///
/// These are tuning knobs only. Every strategy produces a correct selection,
/// whatever the thresholds are.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectConfig {
    /// The naive strategy is used when both the input length and k are at most
    /// `naive_max_len` and `naive_max_k`.
    pub naive_max_len: usize,
    pub naive_max_k: usize,
    /// Otherwise the heap strategy is used when `k / len` is at most
    /// `heap_max_ratio` and k is at most `heap_max_k`.
    pub heap_max_ratio: f64,
    pub heap_max_k: usize,
}

impl Default for SelectConfig {
    fn default() -> SelectConfig {
        SelectConfig {
            naive_max_len: NAIVE_SELECTION_MAX_LEN,
            naive_max_k: NAIVE_SELECTION_MAX_K,
            heap_max_ratio: HEAP_SELECTION_MAX_RATIO,
            heap_max_k: HEAP_SELECTION_MAX_K,
        }
    }
}

impl SelectConfig {
    /// The strategy used to select `k` out of `len` elements.
    pub fn strategy(&self, len: usize, k: usize) -> Strategy {
        let k_ratio = k as f64 / len as f64;
        if len <= self.naive_max_len && k <= self.naive_max_k {
            Strategy::Naive
        } else if k_ratio <= self.heap_max_ratio && k <= self.heap_max_k {
            Strategy::Heap
        } else {
            Strategy::Quickselect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regimes() {
        let config = SelectConfig::default();
        assert_eq!(config.strategy(100, 10), Strategy::Naive);
        assert_eq!(config.strategy(11, 5), Strategy::Naive);
        assert_eq!(config.strategy(101, 10), Strategy::Quickselect);
        assert_eq!(config.strategy(100, 11), Strategy::Quickselect);
        assert_eq!(config.strategy(1_000_000, 1000), Strategy::Heap);
        assert_eq!(config.strategy(1_000_000, 1001), Strategy::Quickselect);
        assert_eq!(config.strategy(10_000, 10), Strategy::Heap);
        assert_eq!(config.strategy(10_000, 11), Strategy::Quickselect);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = SelectConfig {
            naive_max_len: 0,
            heap_max_ratio: 0.5,
            ..SelectConfig::default()
        };
        assert_eq!(config.strategy(50, 5), Strategy::Heap);
        assert_eq!(config.strategy(50, 30), Strategy::Quickselect);
    }
}
