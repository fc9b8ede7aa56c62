// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown resolution.
//!
//! The showdown finds the strongest category among the players hands and,
//! when more than one player holds it, breaks the tie comparing the hands
//! keys. Players whose keys are identical share the win.
use crate::{EvalError, EvaluatedHand};

/// Returns the winners amongst players and their evaluated hands.
///
/// The returned list is never empty, with more than one winner the players
/// are in the same order as in the input.
pub fn resolve<P: Clone>(hands: &[(P, EvaluatedHand)]) -> Result<Vec<P>, EvalError> {
    let best = hands
        .iter()
        .map(|(_, h)| h.strength())
        .max()
        .ok_or(EvalError::NoHands)?;

    let candidates = hands
        .iter()
        .filter(|(_, h)| h.strength() == best)
        .collect::<Vec<_>>();

    let winners = if candidates.len() == 1 {
        vec![&candidates[0].0]
    } else {
        tie_break(&candidates)?
    };

    Ok(winners.into_iter().cloned().collect())
}

/// Breaks a tie between hands of the same category.
///
/// Calling this with hands of different categories is an error.
pub fn break_tie<P: Clone>(candidates: &[(P, EvaluatedHand)]) -> Result<Vec<P>, EvalError> {
    let candidates = candidates.iter().collect::<Vec<_>>();
    let winners = tie_break(&candidates)?;
    Ok(winners.into_iter().cloned().collect())
}

fn tie_break<'a, P>(candidates: &[&'a (P, EvaluatedHand)]) -> Result<Vec<&'a P>, EvalError> {
    let (_, first) = candidates.first().ok_or(EvalError::NoHands)?;

    if let Some((_, other)) = candidates
        .iter()
        .find(|(_, h)| h.category() != first.category())
    {
        return Err(EvalError::MixedCategories {
            expected: first.category(),
            found: other.category(),
        });
    }

    // Keys are high to low so the lexicographic maximum is the best hand.
    let best = candidates
        .iter()
        .map(|(_, h)| h.key())
        .max()
        .unwrap_or_default();

    Ok(candidates
        .iter()
        .copied()
        .filter(|(_, h)| h.key() == best)
        .map(|(p, _)| p)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, HandCategory, evaluate};

    fn eval(s: &str) -> EvaluatedHand {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        evaluate(&cards).unwrap()
    }

    #[test]
    fn pair_beats_high_card() {
        let a = eval("2h 2c 5s 7d Jh");
        let b = eval("2h 5s 7c 9d Jh");
        assert_eq!(resolve(&[("A", a), ("B", b)]).unwrap(), vec!["A"]);
    }

    #[test]
    fn identical_hands_split() {
        let a = eval("2h 2c 5s 7d Jh");
        let b = eval("2h 2c 5s 7d Jh");
        let mut winners = resolve(&[("A", a), ("B", b)]).unwrap();
        winners.sort();
        assert_eq!(winners, vec!["A", "B"]);
    }

    #[test]
    fn single_hand_wins() {
        let a = eval("2h 5s 7c 9d Jh");
        assert_eq!(resolve(&[(1, a)]).unwrap(), vec![1]);
    }

    #[test]
    fn no_hands() {
        let hands: &[(u32, EvaluatedHand)] = &[];
        assert_eq!(resolve(hands), Err(EvalError::NoHands));
        assert_eq!(break_tie(hands), Err(EvalError::NoHands));
    }

    #[test]
    fn mixed_categories_tie_break() {
        let a = eval("2h 2c 5s 7d Jh");
        let b = eval("2h 5s 7c 9d Jh");
        assert_eq!(
            break_tie(&[("A", a), ("B", b)]),
            Err(EvalError::MixedCategories {
                expected: HandCategory::Pair,
                found: HandCategory::HighCard
            })
        );
    }

    #[test]
    fn tie_break_by_category() {
        // (winner, loser) pairs of the same category.
        let table = [
            ("Ah Qd 9c 7s 3h", "Ah Jd 9c 7s 3h"),
            ("Kh Kd 9c 7s 3h", "Qh Qd Ac 7s 3h"),
            ("Kh Kd 3c 3s 2h", "Qh Qd Jc Js Ah"),
            ("Kh Kd 9c 9s 2h", "Kh Kd 8c 8s Ah"),
            ("5h 5d 5c Ks 2h", "4h 4d 4c As Kh"),
            ("9h Td Jc Qs Kh", "8h 9d Tc Js Qh"),
            ("2h 3d 4c 5s 6h", "Ah 2d 3c 4s 5h"),
            ("2h 7h 9h Jh Kh", "3h 7h 9h Jh Qh"),
            ("2h 7h 9h Jh Ah", "2d 6d 9d Jd Ad"),
            ("5h 5d 5c 2s 2h", "4h 4d 4c As Ah"),
            ("5h 5d 5c Ks Kh", "5h 5d 5c Qs Qh"),
            ("9h 9d 9c 9s 2h", "8h 8d 8c 8s Ah"),
            ("9h Th Jh Qh Kh", "8h 9h Th Jh Qh"),
        ];

        for (winner, loser) in table {
            let w = eval(winner);
            let l = eval(loser);
            assert_eq!(w.category(), l.category(), "{winner} vs {loser}");
            assert_eq!(
                resolve(&[("L", l.clone()), ("W", w.clone())]).unwrap(),
                vec!["W"],
                "{winner} vs {loser}"
            );
            assert_eq!(break_tie(&[("W", w), ("L", l)]).unwrap(), vec!["W"]);
        }
    }

    #[test]
    fn pair_key_ignores_kickers() {
        let a = eval("Kh Kd Ac 7s 3h");
        let b = eval("Ks Kc Qc 7d 2h");
        assert_eq!(resolve(&[("A", a), ("B", b)]).unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn royal_flushes_split() {
        let a = eval("Th Jh Qh Kh Ah");
        let b = eval("Ts Js Qs Ks As");
        let c = eval("9h Th Jh Qh Kh");
        assert_eq!(
            resolve(&[("A", a), ("C", c), ("B", b)]).unwrap(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn flush_plays_the_best_five() {
        let board = "Ah Kh Qh Jh 9h";
        let hand = |hole: &str| eval(&format!("{hole} {board}"));

        // A low heart below the board flush doesn't play.
        let hands = [("A", hand("2h 3c")), ("B", hand("4c 5c"))];
        assert_eq!(resolve(&hands).unwrap(), vec!["A", "B"]);

        // A heart above the lowest board heart does.
        let board = "Ah Kh Qh Jh 3h";
        let hand = |hole: &str| eval(&format!("{hole} {board}"));
        let hands = [("A", hand("4c 5c")), ("B", hand("9h 2c"))];
        assert_eq!(resolve(&hands).unwrap(), vec!["B"]);
    }

    #[test]
    fn three_way_showdown() {
        let board = "2c 7d 9h Js Kd";
        let hand = |hole: &str| eval(&format!("{hole} {board}"));

        let hands = [
            (1, hand("Ac 3d")),
            (2, hand("Kh 4c")),
            (3, hand("Ks 4d")),
        ];
        assert_eq!(resolve(&hands).unwrap(), vec![2, 3]);
    }
}
