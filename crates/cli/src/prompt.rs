// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive player decisions.
use log::warn;
use std::io::{self, BufRead, Write};

use holdem_core::{Chips, Decision, DecisionRequest, DecisionSource};

/// A human player reading decisions from an input stream.
///
/// Invalid input is reported and asked again, when the input is closed the
/// player folds.
#[derive(Debug)]
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a player reading from `input` and writing prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, req: &DecisionRequest<'_>) -> io::Result<Decision> {
        loop {
            writeln!(
                self.output,
                "The minimum bet is {} and the call amount is {}, your bank is {}.",
                req.min_bet, req.call_amount, req.chips
            )?;

            let Some(action) = self.read_line("[b]et, [c]heck/call or [f]old: ")? else {
                warn!("Input closed, folding");
                return Ok(Decision::Fold);
            };

            match action.as_str() {
                "b" | "bet" => {
                    if let Some(decision) = self.bet_amount(req)? {
                        return Ok(decision);
                    }
                }
                "c" | "check" | "call" => return Ok(Decision::CheckOrCall),
                "f" | "fold" => return Ok(Decision::Fold),
                _ => writeln!(self.output, "Please enter a valid action.")?,
            }
        }
    }

    /// Asks for the bet amount, returns `None` to go back to the action.
    fn bet_amount(&mut self, req: &DecisionRequest<'_>) -> io::Result<Option<Decision>> {
        let max_bet = req.max_raise();
        if max_bet < req.min_bet {
            writeln!(
                self.output,
                "You need {} after calling to bet, you have {}.",
                req.min_bet, max_bet
            )?;
            return Ok(None);
        }

        writeln!(
            self.output,
            "How much would you like to bet? Enter an amount or [b]ack."
        )?;

        loop {
            let Some(amount) = self.read_line("Amount: ")? else {
                warn!("Input closed, folding");
                return Ok(Some(Decision::Fold));
            };

            if amount == "b" || amount == "back" {
                return Ok(None);
            }

            match amount.parse::<u32>().map(Chips::new) {
                Ok(amount) if amount < req.min_bet => writeln!(
                    self.output,
                    "That bet is less than the minimum bet of {}.",
                    req.min_bet
                )?,
                Ok(amount) if amount > max_bet => writeln!(
                    self.output,
                    "That bet is larger than the {max_bet} left after calling."
                )?,
                Ok(amount) => return Ok(Some(Decision::Bet(amount))),
                Err(_) => writeln!(self.output, "Please enter a valid amount.")?,
            }
        }
    }

    /// Reads a trimmed lowercase line, `None` at the end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_lowercase()))
    }
}

impl<R: BufRead, W: Write> DecisionSource for HumanPlayer<R, W> {
    fn decide(&mut self, req: &DecisionRequest<'_>) -> Decision {
        match self.prompt(req) {
            Ok(decision) => decision,
            Err(e) => {
                warn!("Input error {e}, folding");
                Decision::Fold
            }
        }
    }
}
