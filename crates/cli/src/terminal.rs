// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType},
};
use std::io;

use holdem_core::{Card, Chips, PlayerCards, PlayerSnapshot, RenderSink, Snapshot, Suit};

/// Renders round snapshots to a terminal.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    clear_screen: bool,
}

impl<W: io::Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out`.
    ///
    /// If `clear_screen` is set the screen is cleared before the first
    /// snapshot.
    pub fn new(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    fn print_board(&mut self, snapshot: &Snapshot) -> Result<()> {
        queue!(
            self.out,
            style::Print("\n"),
            style::PrintStyledContent(format!("Pot {:<10}", snapshot.pot).bold()),
            style::Print("Board "),
        )?;

        if snapshot.board.is_empty() {
            queue!(self.out, style::Print("-"))?;
        }

        for card in &snapshot.board {
            print_card(&mut self.out, card)?;
        }

        queue!(self.out, style::Print("\n"))?;
        Ok(())
    }

    fn print_player(&mut self, p: &PlayerSnapshot) -> Result<()> {
        let status = if p.winnings > Chips::ZERO {
            "WINNER"
        } else if p.is_active {
            ""
        } else {
            "folded"
        };

        let bet = if p.bet > Chips::ZERO {
            p.bet.to_string()
        } else if p.winnings > Chips::ZERO {
            p.winnings.to_string()
        } else {
            "".to_string()
        };

        let category = p.category.map(|c| c.label()).unwrap_or_default();

        let text = format!(
            "{:<10.10}|{:<10.10}|{:<7.7}|{:<10.10}|",
            p.nickname,
            p.chips.to_string(),
            status,
            bet,
        );

        let text = if p.winnings > Chips::ZERO {
            text.yellow()
        } else if p.is_active {
            text.dark_green()
        } else {
            text.dark_grey()
        };

        queue!(self.out, style::PrintStyledContent(text))?;

        match p.cards {
            PlayerCards::None => {}
            PlayerCards::Covered => queue!(self.out, style::Print(" ▒▒ ▒▒"))?,
            PlayerCards::Cards(c1, c2) => {
                print_card(&mut self.out, &c1)?;
                print_card(&mut self.out, &c2)?;
            }
        }

        queue!(self.out, style::Print(format!(" {category}\n")))?;
        Ok(())
    }
}

impl<W: io::Write> RenderSink for TerminalRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
            self.clear_screen = false;
        }

        self.print_board(snapshot)?;

        for player in &snapshot.players {
            self.print_player(player)?;
        }

        if let Some(result) = &snapshot.result {
            queue!(
                self.out,
                style::PrintStyledContent(result.as_str().bold()),
                style::Print("\n")
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

fn print_card(w: &mut impl io::Write, card: &Card) -> Result<()> {
    let text = format!(" {card}");
    let text = match card.suit() {
        Suit::Hearts | Suit::Diamonds => text.red(),
        Suit::Clubs | Suit::Spades => text.stylize(),
    };

    queue!(w, style::PrintStyledContent(text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_core::{HandCategory, PlayerId};

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn player(n: u32, nickname: &str, cards: PlayerCards) -> PlayerSnapshot {
        PlayerSnapshot {
            player_id: PlayerId::new(n),
            nickname: nickname.to_string(),
            chips: Chips::new(1_500),
            bet: Chips::new(4),
            cards,
            is_active: true,
            winnings: Chips::ZERO,
            category: None,
        }
    }

    fn render(snapshot: &Snapshot) -> String {
        let mut out = Vec::new();
        TerminalRenderer::new(&mut out, false).render(snapshot).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn render_round() {
        let snapshot = Snapshot {
            pot: Chips::new(12),
            board: vec![card("Th"), card("Kd"), card("2c")],
            players: vec![
                player(1, "Alice", PlayerCards::Cards(card("Ah"), card("As"))),
                player(2, "Bob", PlayerCards::Covered),
            ],
            result: None,
        };

        let output = render(&snapshot);
        assert!(output.contains("Pot 12"), "{output}");
        assert!(output.contains("10♥"), "{output}");
        assert!(output.contains("K♦"), "{output}");
        assert!(output.contains("2♣"), "{output}");
        assert!(output.contains("Alice"), "{output}");
        assert!(output.contains("1,500"), "{output}");
        assert!(output.contains("A♠"), "{output}");
        assert!(output.contains("▒▒ ▒▒"), "{output}");
    }

    #[test]
    fn render_result() {
        let mut winner = player(1, "Alice", PlayerCards::Cards(card("Ah"), card("As")));
        winner.winnings = Chips::new(12);
        winner.bet = Chips::ZERO;
        winner.category = Some(HandCategory::Pair);

        let mut folded = player(2, "Bob", PlayerCards::None);
        folded.is_active = false;

        let snapshot = Snapshot {
            pot: Chips::ZERO,
            board: vec![],
            players: vec![winner, folded],
            result: Some("The final pot was 12".to_string()),
        };

        let output = render(&snapshot);
        assert!(output.contains("WINNER"), "{output}");
        assert!(output.contains("a pair"), "{output}");
        assert!(output.contains("folded"), "{output}");
        assert!(output.contains("The final pot was 12"), "{output}");
        assert!(!output.contains("▒▒"), "{output}");
    }
}
