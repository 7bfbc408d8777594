/// A drawable barrel, numbered 1..=max_token
pub type Token = u8;

/// A player's card: rows of distinct tokens, each row sorted ascending.
/// The token content never changes after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    rows: Vec<Vec<Token>>,
}

impl Card {
    /// Build a card from already-laid-out rows. Each row is sorted here,
    /// so callers only need to supply the right tokens per row.
    pub fn from_rows(rows: Vec<Vec<Token>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.sort_unstable();
                row
            })
            .collect();
        Card { rows }
    }

    pub fn rows(&self) -> &[Vec<Token>] {
        &self.rows
    }

    /// Membership by original token identity; unaffected by marking
    pub fn contains(&self, token: Token) -> bool {
        self.rows.iter().any(|row| row.contains(&token))
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn token_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Fresh mark state for this card, with every cell open
    pub fn new_state(&self) -> CardState {
        CardState {
            cells: self
                .rows
                .iter()
                .map(|row| row.iter().map(|&t| Cell::Open(t)).collect())
                .collect(),
        }
    }
}

/// One position on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open(Token),
    Marked,
}

/// Which cells of a card have been crossed out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    cells: Vec<Vec<Cell>>,
}

impl CardState {
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Cross out every open cell holding `token`.
    /// Returns true if any cell changed; absent tokens are a no-op.
    pub fn mark(&mut self, token: Token) -> bool {
        let mut changed = false;
        for cell in self.cells.iter_mut().flatten() {
            if *cell == Cell::Open(token) {
                *cell = Cell::Marked;
                changed = true;
            }
        }
        changed
    }

    pub fn is_complete(&self) -> bool {
        self.open_count() == 0
    }

    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Open(_)))
            .count()
    }

    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| matches!(c, Cell::Marked))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardGenerator, LotoConfig};
    use crate::rng::GameRng;
    use proptest::prelude::*;

    fn sample_card() -> Card {
        Card::from_rows(vec![
            vec![1, 2, 3, 4, 5],
            vec![6, 7, 8, 9, 10],
            vec![11, 12, 13, 14, 15],
        ])
    }

    #[test]
    fn test_from_rows_sorts_each_row() {
        let card = Card::from_rows(vec![vec![40, 3, 17], vec![90, 1, 55]]);
        assert_eq!(card.rows()[0], vec![3, 17, 40]);
        assert_eq!(card.rows()[1], vec![1, 55, 90]);
    }

    #[test]
    fn test_contains_survives_marking() {
        let card = sample_card();
        let mut state = card.new_state();
        assert!(card.contains(7));
        assert!(state.mark(7));
        assert!(card.contains(7), "marked token still belongs to the card");
        assert!(!card.contains(50));
    }

    #[test]
    fn test_mark_absent_token_is_noop() {
        let card = sample_card();
        let mut state = card.new_state();
        let before = state.clone();
        assert!(!state.mark(50));
        assert_eq!(state, before);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_mark_twice_changes_once() {
        let card = sample_card();
        let mut state = card.new_state();
        assert!(state.mark(1));
        assert!(!state.mark(1));
        assert_eq!(state.marked_count(), 1);
        assert_eq!(state.open_count(), 14);
    }

    #[test]
    fn test_complete_after_all_marked() {
        let card = sample_card();
        let mut state = card.new_state();
        for token in card.tokens() {
            assert!(!state.is_complete());
            state.mark(token);
        }
        assert!(state.is_complete());
        // stays complete no matter what is drawn afterwards
        state.mark(80);
        assert!(state.is_complete());
    }

    proptest! {
        #[test]
        fn prop_marking_keeps_card_invariants(
            seed in any::<u64>(),
            draws in prop::collection::vec(1u8..=90, 0..120),
        ) {
            let generator = CardGenerator::new(LotoConfig::default()).unwrap();
            let card = generator.generate(&mut GameRng::new(Some(seed)));
            let original: Vec<Token> = card.tokens().collect();
            let mut state = card.new_state();
            let mut was_complete = false;

            for token in draws {
                let before = state.clone();
                let changed = state.mark(token);

                if !card.contains(token) {
                    prop_assert!(!changed);
                    prop_assert_eq!(&state, &before);
                }
                prop_assert!(original.iter().all(|&t| card.contains(t)));
                prop_assert!(!was_complete || state.is_complete());
                prop_assert_eq!(state.marked_count() + state.open_count(), original.len());
                was_complete = state.is_complete();
            }
        }
    }
}
