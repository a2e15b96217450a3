use crate::{Action, Card, Resolution, RoundOutcome, RoundReport, SeatSummary, TurnView};

const RULE: &str = "----------------------------------------";
const BANNER: &str = "========================================";

/// The state block shown at the start of every turn.
pub fn render_table(view: &TurnView) -> String {
    let current = &view.seats[view.seat.0];
    let players = view
        .seats
        .iter()
        .map(|seat| format!("{}({})", seat.name, seat.cards))
        .collect::<Vec<_>>()
        .join("  ");
    format!(
        "{RULE}\nTop card: {}\nCurrent player: {} ({} cards)\nPlayers: {}\nDirection: {} | Draw pile: {} cards\n{RULE}",
        view.top_card, current.name, current.cards, players, view.direction, view.draw_pile
    )
}

/// One line per card, prefixed by the index used to select it.
pub fn render_hand(hand: &[Card]) -> String {
    let mut result = String::new();
    for (idx, card) in hand.iter().enumerate() {
        result += &format!("  {}: {}\n", idx, card);
    }
    result
}

pub fn render_stack(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// The announcements for a finished round, in the order they happened.
pub fn describe_round(report: &RoundReport, seats: &[SeatSummary]) -> Vec<String> {
    let mut lines = Vec::new();
    match &report.action {
        Action::Played { cards, .. } => {
            lines.push(format!("{} plays {}", report.name, render_stack(cards)));
        }
        Action::Drew { card, .. } => lines.push(format!("Drew: {}", card)),
        Action::Passed => lines.push(String::from("Deck is empty! Skipping turn.")),
    }
    if report.uno {
        lines.push(format!(">> {} has UNO!", report.name));
    }
    if let Some(resolution) = &report.resolution {
        if let Some(line) = describe_resolution(resolution, seats) {
            lines.push(line);
        }
    }
    match report.outcome {
        RoundOutcome::GameOver { .. } => {
            lines.push(format!(
                "\n{BANNER}\n  {} wins! Congratulations!\n{BANNER}",
                report.name
            ));
        }
        RoundOutcome::Stalemate => {
            lines.push(String::from(
                "\nThe deck is empty and nobody can play. The game ends in a draw.",
            ));
        }
        RoundOutcome::NextRound => {}
    }
    lines
}

fn describe_resolution(resolution: &Resolution, seats: &[SeatSummary]) -> Option<String> {
    let line = match *resolution {
        Resolution::NoEffect => return None,
        Resolution::Skipped { count: 1 } => {
            String::from(">> SKIP! Next player loses their turn.")
        }
        Resolution::Skipped { count } => format!(
            ">> SKIP x{}! Next {} players lose their turn.",
            count, count
        ),
        Resolution::Reversed { .. } => String::from(">> REVERSE! Turn order reversed."),
        Resolution::ReverseCancelled { count } => format!(
            ">> REVERSE x{}! Direction unchanged (cancels out).",
            count
        ),
        Resolution::DrawPenalty {
            victim,
            penalty,
            drawn,
        } => {
            let name = seats
                .get(victim.0)
                .map(|seat| seat.name.as_str())
                .unwrap_or("?");
            let count = penalty / crate::DRAW_TWO_PENALTY;
            let mut line = if count == 1 {
                format!(">> DRAW TWO! {} draws 2 cards and loses their turn.", name)
            } else {
                format!(
                    ">> DRAW TWO x{}! {} draws {} cards and loses their turn.",
                    count, name, penalty
                )
            };
            if drawn < penalty {
                line += &format!(" (The deck ran out after {}.)", drawn);
            }
            line
        }
    };
    Some(line)
}
