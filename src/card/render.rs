use crate::card::types::{Card, CardState, Cell};
use crate::rng::GameRng;

const MARKED: &str = "-";
const CARD_WIDTH: usize = 26;

/// Lay out each row of a card for display.
///
/// Every row gets `tokens_per_line - 1` blank cells inserted at random
/// positions (never after the last value), each cell right-aligned in width 2.
/// Marked cells show as `-`. The padding is purely visual.
pub fn render_rows(card: &Card, state: &CardState, rng: &mut GameRng) -> Vec<String> {
    card.rows()
        .iter()
        .zip(state.rows())
        .map(|(row, cells)| {
            let mut slots: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Open(token) => token.to_string(),
                    Cell::Marked => MARKED.to_string(),
                })
                .collect();
            for _ in 1..row.len() {
                let at = rng.random_range(slots.len());
                slots.insert(at, String::new());
            }
            slots
                .iter()
                .map(|s| format!("{:>2}", s))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// A framed card block: dash-padded title, the rows, then a closing rule
pub fn render_card(title: &str, card: &Card, state: &CardState, rng: &mut GameRng) -> String {
    let title = format!(" {} ", title);
    let pad = CARD_WIDTH.saturating_sub(title.chars().count());
    let mut out = format!("{}{}{}\n", "-".repeat(pad / 2), title, "-".repeat(pad - pad / 2));
    for line in render_rows(card, state, rng) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&"-".repeat(CARD_WIDTH));
    out
}
