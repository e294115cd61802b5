use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::puzzle::algorithm::{parse_scramble, random_scramble};
use crate::puzzle::state::{CubeState, FaceletState};
use crate::puzzle::turn::Move;

/// Every state along a scramble, computed up front so an animation can scrub
/// back and forth without recomputing anything.
#[derive(Debug, Clone)]
pub struct Player<T> {
    tokens: Vec<String>,
    states: Vec<FaceletState<T>>,
    cursor: usize,
}

impl<T: Clone> Player<T> {
    pub fn new(initial: FaceletState<T>, scramble: &str) -> Self {
        let tokens = parse_scramble(scramble);
        let states = initial.intermediate_states(&tokens);
        Self {
            tokens,
            states,
            cursor: 0,
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn states(&self) -> &[FaceletState<T>] {
        &self.states
    }

    /// Number of steps; there is one more state than this.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &FaceletState<T> {
        &self.states[self.cursor]
    }

    pub fn last(&self) -> &FaceletState<T> {
        &self.states[self.tokens.len()]
    }

    /// Moves to state `index`, clamped to the ends.
    pub fn seek(&mut self, index: usize) -> &FaceletState<T> {
        self.cursor = index.min(self.tokens.len());
        self.current()
    }

    /// The move that leads out of the current state, for the renderer to
    /// animate. `None` at the end, or when that token is not a move.
    pub fn pending_move(&self) -> Option<Move> {
        self.tokens.get(self.cursor)?.parse().ok()
    }

    pub fn step_forward(&mut self) -> Option<&FaceletState<T>> {
        if self.cursor == self.tokens.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn step_back(&mut self) -> Option<&FaceletState<T>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }
}

/// An interactive solve: a scramble followed by twists that can be undone
/// and redone.
#[derive(Debug, Clone)]
pub struct Session {
    pub scramble: Vec<String>,
    pub state: CubeState,
    pub twists: Vec<Move>,
    pub undid_twists: Vec<Move>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            scramble: vec![],
            state: CubeState::solved(),
            twists: vec![],
            undid_twists: vec![],
        }
    }

    pub fn from_scramble(scramble: &str) -> Self {
        let scramble = parse_scramble(scramble);
        Session {
            state: CubeState::solved().apply_tokens(&scramble),
            scramble,
            twists: vec![],
            undid_twists: vec![],
        }
    }

    pub fn twist(&mut self, mv: Move) {
        self.state = self.state.twist(mv);
        self.twists.push(mv);
        self.undid_twists = vec![];
    }

    /// Starts over from a fresh random scramble.
    pub fn scramble<R: Rng>(&mut self, rng: &mut R, length: usize) {
        let scramble = random_scramble(rng, length).to_string();
        debug!("new scramble: {scramble}");
        *self = Session::from_scramble(&scramble);
    }

    /// Back to the scrambled state, dropping all twists.
    pub fn reset(&mut self) {
        self.state = CubeState::solved().apply_tokens(&self.scramble);
        self.twists = vec![];
        self.undid_twists = vec![];
    }

    pub fn undo(&mut self) {
        if let Some(mv) = self.twists.pop() {
            self.state = self.state.twist(mv.inverse());
            self.undid_twists.push(mv);
        } else {
            // no undo left
        }
    }

    pub fn redo(&mut self) {
        if let Some(mv) = self.undid_twists.pop() {
            self.state = self.state.twist(mv);
            self.twists.push(mv);
        } else {
            // no redo left
        }
    }

    /// Replaces the last twist with its inverse.
    pub fn do_inverse(&mut self) {
        if let Some(mv) = self.twists.pop() {
            let inverse = mv.inverse();
            self.state = self.state.twist(inverse).twist(inverse);
            self.twists.push(inverse);
            self.undid_twists = vec![];
        }
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn to_log(&self) -> SessionLog {
        SessionLog {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scramble: self.scramble.clone(),
            twists: self.twists.iter().map(Move::to_string).collect(),
        }
    }

    /// Rebuilds a session by replaying a log.
    pub fn from_log(session_log: &SessionLog) -> Self {
        let mut session = Session::from_scramble(&session_log.scramble.join(" "));
        for token in &session_log.twists {
            match token.parse() {
                Ok(mv) => session.twist(mv),
                Err(err) => warn!("skipping logged twist {token:?}: {err}"),
            }
        }
        session
    }

    pub fn save(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        std::fs::write(path, serde_json::to_string(&self.to_log())?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let session_log: SessionLog = serde_json::from_str(&text)?;
        Ok(Session::from_log(&session_log))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    pub version: String,
    pub scramble: Vec<String>,
    pub twists: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::cube::name::*;
    use crate::puzzle::state::PieceState;
    use crate::puzzle::turn::Modifier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn player_scrubs() {
        let mut player = Player::new(PieceState::solved(), "R U2 bogus F'");
        assert_eq!(player.len(), 4);
        assert!(player.current().is_solved());
        assert_eq!(player.pending_move(), Some(Move::new(R, Modifier::Plain)));
        assert!(player.step_back().is_none());

        player.step_forward();
        player.step_forward();
        assert_eq!(player.pending_move(), None);
        player.step_forward();
        assert_eq!(player.current(), &player.states()[3]);
        assert_eq!(player.states()[2], player.states()[3]);

        player.seek(100);
        assert_eq!(player.current(), player.last());
        assert_eq!(player.cursor(), 4);
        assert!(player.step_forward().is_none());
        assert_eq!(player.seek(0), &PieceState::solved());
    }

    #[test]
    fn undo_redo() {
        let mut session = Session::from_scramble("R U");
        let scrambled = session.state.clone();
        session.twist(Move::new(F, Modifier::Plain));
        session.twist(Move::new(L, Modifier::Double));
        session.undo();
        assert_eq!(session.state, scrambled.twist(Move::new(F, Modifier::Plain)));
        session.redo();
        session.undo();
        session.undo();
        assert_eq!(session.state, scrambled);
        session.undo();
        assert_eq!(session.state, scrambled);
        session.redo();
        session.redo();
        session.redo();
        assert_eq!(session.twists.len(), 2);
    }

    #[test]
    fn do_inverse_swaps_last_twist() {
        let mut session = Session::new();
        session.twist(Move::new(R, Modifier::Plain));
        session.do_inverse();
        assert_eq!(session.twists, vec![Move::new(R, Modifier::Prime)]);
        assert_eq!(session.state, CubeState::solved().twist(Move::new(R, Modifier::Prime)));
    }

    #[test]
    fn solving_by_inverse() {
        let mut session = Session::new();
        session.scramble(&mut StdRng::seed_from_u64(3), 15);
        assert!(!session.is_solved());
        let scramble: crate::puzzle::Algorithm =
            session.scramble.join(" ").parse().expect("random scrambles are valid");
        for &mv in scramble.inverse().moves() {
            session.twist(mv);
        }
        assert!(session.is_solved());
        session.reset();
        assert!(session.twists.is_empty());
        assert!(!session.is_solved());
    }

    #[test]
    fn log_replays() {
        let mut session = Session::from_scramble("F2 D'");
        session.twist(Move::new(B, Modifier::Prime));
        let log = session.to_log();
        assert_eq!(log.twists, vec!["B'"]);
        let text = serde_json::to_string(&log).expect("logs serialize");
        let parsed: SessionLog = serde_json::from_str(&text).expect("logs deserialize");
        assert_eq!(Session::from_log(&parsed).state, session.state);
    }
}
