//! The working array owned by one engine for the duration of a run.

use crate::key::{comparable_key, precedes, Key};
use crate::sequence::RunStats;
use sortproof_types::{Order, Token, TokenList};
use tracing::trace;

/// Tokens being sorted, with their keys cached alongside.
///
/// The only mutation offered is [`swap`](Self::swap), so the token multiset
/// is conserved across a run. Comparisons and swaps are counted into
/// [`RunStats`].
#[derive(Debug)]
pub struct WorkingArray {
    tokens: Vec<Token>,
    keys: Vec<Key>,
    order: Order,
    stats: RunStats,
}

impl WorkingArray {
    #[must_use]
    pub fn new(values: TokenList, order: Order) -> Self {
        let tokens = values.into_vec();
        let keys = tokens.iter().map(comparable_key).collect();
        Self {
            tokens,
            keys,
            order,
            stats: RunStats::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Copy of the current token order, for a step descriptor.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Token> {
        self.tokens.clone()
    }

    /// Returns `true` when the element at `a` belongs strictly before the
    /// element at `b` under the run's order.
    pub fn precedes(&mut self, a: usize, b: usize) -> bool {
        self.stats.comparisons += 1;
        precedes(self.keys[a], self.keys[b], self.order)
    }

    /// Exchanges the elements at `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) {
        trace!(a, b, left = %self.tokens[a], right = %self.tokens[b], "swap");
        self.tokens.swap(a, b);
        self.keys.swap(a, b);
        self.stats.swaps += 1;
    }

    /// Counts one completed outer iteration or pass.
    pub fn finish_round(&mut self) {
        self.stats.rounds += 1;
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortproof_types::TryNew;

    fn working(texts: &[&str], order: Order) -> WorkingArray {
        let tokens = texts.iter().copied().map(Token::from).collect();
        WorkingArray::new(TokenList::try_new(tokens).expect("non-empty"), order)
    }

    #[test]
    fn swap_moves_tokens_and_keys_together() {
        let mut array = working(&["B", "9"], Order::Ascending);
        assert!(array.precedes(0, 1));
        array.swap(0, 1);
        assert_eq!(array.snapshot(), vec![Token::new("9"), Token::new("B")]);
        assert!(!array.precedes(0, 1));
    }

    #[test]
    fn counts_comparisons_swaps_and_rounds() {
        let mut array = working(&["1", "2", "3"], Order::Descending);
        assert!(array.precedes(2, 0));
        array.swap(0, 2);
        array.finish_round();

        let stats = array.stats();
        assert_eq!(stats.comparisons, 1);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.rounds, 1);
        assert_eq!(array.len(), 3);
        assert!(!array.is_empty());
    }
}
