use itertools::Itertools;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

use crate::puzzle::cube::Face;
use crate::puzzle::state::FaceletState;
use crate::puzzle::turn::{Modifier, Move, MoveError};

/// Splits a scramble on whitespace. Tokens are not validated here; bad
/// tokens are skipped when the scramble is applied.
pub fn parse_scramble(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// An ordered sequence of moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Algorithm(pub Vec<Move>);

impl Algorithm {
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Undoes `self`: reversed, each move inverted.
    pub fn inverse(&self) -> Algorithm {
        Algorithm(self.0.iter().rev().map(Move::inverse).collect())
    }

    pub fn then(&self, other: &Algorithm) -> Algorithm {
        Algorithm(self.0.iter().chain(&other.0).copied().collect())
    }

    pub fn repeat(&self, times: usize) -> Algorithm {
        Algorithm(self.0.repeat(times))
    }

    /// `a b a⁻¹ b⁻¹`
    pub fn commutator(a: &Algorithm, b: &Algorithm) -> Algorithm {
        a.then(b).then(&a.inverse()).then(&b.inverse())
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(moves: Vec<Move>) -> Self {
        Algorithm(moves)
    }
}

impl FromStr for Algorithm {
    type Err = MoveError;

    /// Unlike [`parse_scramble`], fails on the first bad token.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()
            .map(Algorithm)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl<T: Clone> FaceletState<T> {
    pub fn apply_algorithm(&self, algorithm: &Algorithm) -> Self {
        algorithm
            .moves()
            .iter()
            .fold(self.clone(), |state, &mv| state.twist(mv))
    }

    pub fn apply_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Self {
        tokens
            .iter()
            .fold(self.clone(), |state, token| state.apply_token(token.as_ref()))
    }

    pub fn apply_scramble(&self, scramble: &str) -> Self {
        self.apply_tokens(&parse_scramble(scramble))
    }

    /// `states[0]` is `self`, `states[i + 1]` is `states[i]` after
    /// `tokens[i]`.
    pub fn intermediate_states<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Self> {
        let mut states = Vec::with_capacity(tokens.len() + 1);
        states.push(self.clone());
        for token in tokens {
            let next = states[states.len() - 1].apply_token(token.as_ref());
            states.push(next);
        }
        states
    }
}

pub fn apply_scramble<T: Clone>(state: &FaceletState<T>, scramble: &str) -> FaceletState<T> {
    state.apply_scramble(scramble)
}

pub fn apply_algorithm<T: Clone>(state: &FaceletState<T>, algorithm: &Algorithm) -> FaceletState<T> {
    state.apply_algorithm(algorithm)
}

/// A random scramble of `length` moves. No move shares a face with the one
/// before it, and no three moves in a row share an axis, so nothing cancels.
pub fn random_scramble<R: Rng>(rng: &mut R, length: usize) -> Algorithm {
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    while moves.len() < length {
        let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
        let blocked = match moves.as_slice() {
            [.., last] if last.face == face => true,
            [.., a, b] if a.face.0 == face.0 && b.face.0 == face.0 => true,
            _ => false,
        };
        if blocked {
            continue;
        }
        let modifier = Modifier::from_quarter_turns(rng.gen_range(1..=3))
            .expect("1..=3 are all quarter turn counts");
        moves.push(Move::new(face, modifier));
    }
    Algorithm(moves)
}
