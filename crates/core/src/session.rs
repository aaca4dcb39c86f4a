//! Session - a game bound to its high-score store.
//!
//! The store is read once when the session starts and written only at the
//! game-over boundary (new best) or when the player clears the high score.

use tracing::info;

use crate::game_state::{GameState, PlaceError, TurnEvent};
use crate::high_score::HighScoreStore;
use crate::snapshot::GameSnapshot;

#[derive(Debug)]
pub struct Session<S: HighScoreStore> {
    state: GameState,
    store: S,
}

impl<S: HighScoreStore> Session<S> {
    pub fn new(seed: u32, store: S) -> Self {
        let high_score = store.load_high_score().unwrap_or(0);
        info!(seed, high_score, "session started");
        Self {
            state: GameState::new(seed).with_high_score(high_score),
            store,
        }
    }

    /// Wrap an existing game (e.g. a prepared position); the store's value
    /// replaces the game's cached best.
    pub fn with_state(state: GameState, store: S) -> Self {
        let high_score = store.load_high_score().unwrap_or(0);
        Self {
            state: state.with_high_score(high_score),
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score()
    }

    /// Place a tray piece; persists the best score if this turn ended the game
    /// with a new one.
    pub fn place(&mut self, index: usize, row: i8, col: i8) -> Result<TurnEvent, PlaceError> {
        let event = self.state.place(index, row, col)?;
        if let Some(best) = event.new_high_score {
            info!(high_score = best, "new high score");
            self.store.save_high_score(best);
        }
        Ok(event)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn clear_high_score(&mut self) {
        self.store.clear_high_score();
        self.state.set_high_score(0);
        info!("high score cleared");
    }

    pub fn take_last_event(&mut self) -> Option<TurnEvent> {
        self.state.take_last_event()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::high_score::MemoryHighScoreStore;
    use crate::shapes::Shape;
    use crate::types::{ColorTag, ShapeKind};

    const CHECKERBOARD: [&str; 8] = [
        "#.#.#.#.", ".#.#.#.#", "#.#.#.#.", ".#.#.#.#", "#.#.#.#.", ".#.#.#.#", "#.#.#.#.",
        ".#.#.#.#",
    ];

    #[test]
    fn test_session_loads_high_score() {
        let session = Session::new(1, MemoryHighScoreStore::with_value(1200));
        assert_eq!(session.high_score(), 1200);
        assert_eq!(session.snapshot().high_score, 1200);
    }

    #[test]
    fn test_rejected_placement_does_not_touch_store() {
        let pieces = [Shape::new(ShapeKind::Line2H, ColorTag::Blue)];
        let state = GameState::from_position(1, Board::new(), &pieces);
        let mut session = Session::with_state(state, MemoryHighScoreStore::new());

        assert_eq!(session.place(0, 7, 7), Err(PlaceError::OutOfBounds));
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.store().writes(), 0);
    }

    #[test]
    fn test_session_persists_new_best() {
        let board = Board::from_rows(&CHECKERBOARD, ColorTag::Red);
        let pieces = [
            Shape::new(ShapeKind::Mono, ColorTag::Blue),
            Shape::new(ShapeKind::Square3, ColorTag::Blue),
        ];
        let state = GameState::from_position(1, board, &pieces);
        let mut session = Session::with_state(state, MemoryHighScoreStore::with_value(5));

        let event = session.place(0, 0, 1).unwrap();
        assert!(event.game_over);
        assert_eq!(event.new_high_score, Some(10));
        assert_eq!(session.store().load_high_score(), Some(10));
        assert_eq!(session.store().writes(), 1);
        assert_eq!(session.high_score(), 10);
    }

    #[test]
    fn test_session_does_not_save_lower_score() {
        let board = Board::from_rows(&CHECKERBOARD, ColorTag::Red);
        let pieces = [
            Shape::new(ShapeKind::Mono, ColorTag::Blue),
            Shape::new(ShapeKind::Square3, ColorTag::Blue),
        ];
        let state = GameState::from_position(1, board, &pieces);
        let mut session = Session::with_state(state, MemoryHighScoreStore::with_value(500));

        let event = session.place(0, 0, 1).unwrap();
        assert!(event.game_over);
        assert_eq!(event.new_high_score, None);
        assert_eq!(session.store().writes(), 0);
        assert_eq!(session.high_score(), 500);
    }

    #[test]
    fn test_clear_high_score() {
        let mut session = Session::new(1, MemoryHighScoreStore::with_value(300));
        session.clear_high_score();
        assert_eq!(session.high_score(), 0);
        assert_eq!(session.store().load_high_score(), None);
    }
}
