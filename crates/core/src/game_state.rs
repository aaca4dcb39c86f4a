//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, shapes, generator,
//! scoring and game-over detection. Each call to [`GameState::place`] is one
//! atomic turn: validate, paint, clear lines, score, update streak, consume
//! the piece, replenish the tray and re-check for game over.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::{Board, CellPos};
use crate::game_over::is_game_over;
use crate::preview::PlacementPreview;
use crate::rng::ShapeGenerator;
use crate::scoring::{compute_turn_score, TurnScore};
use crate::shapes::Shape;
use crate::snapshot::GameSnapshot;
use crate::types::{GameStatus, BATCH_SIZE, BOARD_CELLS};

/// Why a placement request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The game is over; only a reset is accepted
    NotPlaying,
    /// The index does not reference a piece in the tray
    NoSuchPiece,
    /// At least one target cell is off the board
    OutOfBounds,
    /// At least one target cell is already occupied
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotPlaying => "not_playing",
            PlaceError::NoSuchPiece => "no_such_piece",
            PlaceError::OutOfBounds | PlaceError::Blocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NotPlaying => "game is over",
            PlaceError::NoSuchPiece => "selected piece is not in the tray",
            PlaceError::OutOfBounds => "piece would extend past the board edge",
            PlaceError::Blocked => "piece would overlap an occupied cell",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Everything that happened during one successful placement.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnEvent {
    pub shape: Shape,
    /// Tray slot the piece was taken from
    pub piece_index: usize,
    pub row: i8,
    pub col: i8,
    pub cleared_count: u32,
    pub cleared_cells: ArrayVec<CellPos, BOARD_CELLS>,
    pub rows: ArrayVec<u8, 8>,
    pub cols: ArrayVec<u8, 8>,
    pub score: TurnScore,
    /// Game score after this turn
    pub total_score: u32,
    /// Whether the tray was refilled with a fresh batch
    pub replenished: bool,
    pub game_over: bool,
    /// Set when this turn ended the game with a new best score
    pub new_high_score: Option<u32>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    pieces: ArrayVec<Shape, BATCH_SIZE>,
    generator: ShapeGenerator,
    score: u32,
    streak: u32,
    high_score: u32,
    status: GameStatus,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Successful placements in this game.
    turn: u32,
    lines_cleared: u32,
    /// Last placement event (consumed by observers).
    last_event: Option<TurnEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            board: Board::new(),
            pieces: ArrayVec::new(),
            generator: ShapeGenerator::new(seed),
            score: 0,
            streak: 0,
            high_score: 0,
            status: GameStatus::Playing,
            episode_id: 0,
            turn: 0,
            lines_cleared: 0,
            last_event: None,
        };
        state.refill_pieces();
        state
    }

    /// Create a game from an arbitrary position.
    ///
    /// At most `BATCH_SIZE` pieces are kept; an empty slice gets a fresh batch.
    /// Status is derived from the position.
    pub fn from_position(seed: u32, board: Board, pieces: &[Shape]) -> Self {
        let mut state = Self::new(seed);
        state.board = board;
        if !pieces.is_empty() {
            state.pieces.clear();
            state
                .pieces
                .extend(pieces.iter().copied().take(BATCH_SIZE));
        }
        state.refresh_status();
        state
    }

    /// Seed the cached best score (read from persistence at startup)
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[Shape] {
        &self.pieces
    }

    pub fn piece(&self, index: usize) -> Option<&Shape> {
        self.pieces.get(index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn last_event(&self) -> Option<&TurnEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last placement event.
    pub fn take_last_event(&mut self) -> Option<TurnEvent> {
        self.last_event.take()
    }

    /// Check whether tray piece `index` fits with its anchor at (row, col)
    pub fn can_place_piece(&self, index: usize, row: i8, col: i8) -> bool {
        self.pieces
            .get(index)
            .is_some_and(|shape| self.board.can_place(shape, row, col))
    }

    /// Hover preview for tray piece `index` at (row, col)
    pub fn preview(&self, index: usize, row: i8, col: i8) -> Option<PlacementPreview> {
        self.pieces
            .get(index)
            .map(|shape| PlacementPreview::compute(&self.board, shape, row, col))
    }

    /// Place tray piece `index` with its anchor at (row, col).
    ///
    /// On success the board, score, streak and tray are updated and the game
    /// may transition to `GameOver`. On error nothing changes.
    pub fn place(&mut self, index: usize, row: i8, col: i8) -> Result<TurnEvent, PlaceError> {
        if self.status != GameStatus::Playing {
            return Err(PlaceError::NotPlaying);
        }
        let shape = *self.pieces.get(index).ok_or(PlaceError::NoSuchPiece)?;

        if !self.board.can_place(&shape, row, col) {
            let off_board = shape
                .targets(row, col)
                .any(|target| target.map_or(true, |(r, c)| self.board.is_out_of_bounds(r, c)));
            return Err(if off_board {
                PlaceError::OutOfBounds
            } else {
                PlaceError::Blocked
            });
        }

        let clear = self
            .board
            .apply_placement(&shape, row, col)
            .clear_completed_lines();
        let score = compute_turn_score(shape.block_count(), clear.cleared_count, self.streak);

        self.board = clear.board;
        self.score = self.score.saturating_add(score.total);
        self.streak = score.new_streak;
        self.lines_cleared = self.lines_cleared.saturating_add(clear.cleared_count);
        self.turn = self.turn.wrapping_add(1);

        // Consume the piece; refill only once the whole batch is used.
        self.pieces.remove(index);
        let replenished = self.pieces.is_empty();
        if replenished {
            self.refill_pieces();
        }

        debug!(
            turn = self.turn,
            shape = shape.kind.as_str(),
            row,
            col,
            cleared = clear.cleared_count,
            points = score.total,
            streak = self.streak,
            "piece placed"
        );

        let mut new_high_score = None;
        self.refresh_status();
        if self.game_over() {
            if self.score > self.high_score {
                self.high_score = self.score;
                new_high_score = Some(self.score);
            }
            info!(
                score = self.score,
                turns = self.turn,
                lines = self.lines_cleared,
                new_best = new_high_score.is_some(),
                "game over"
            );
        }

        let event = TurnEvent {
            shape,
            piece_index: index,
            row,
            col,
            cleared_count: clear.cleared_count,
            cleared_cells: clear.cleared_cells,
            rows: clear.rows,
            cols: clear.cols,
            score,
            total_score: self.score,
            replenished,
            game_over: self.game_over(),
            new_high_score,
        };
        self.last_event = Some(event.clone());
        Ok(event)
    }

    /// Start a new game, continuing the piece sequence and keeping the best score.
    pub fn reset(&mut self) {
        let seed = self.generator.seed();
        let next_episode = self.episode_id.wrapping_add(1);
        let high_score = self.high_score;
        *self = Self::new(seed).with_high_score(high_score);
        self.episode_id = next_episode;
        info!(episode = next_episode, "new game");
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.pieces.clear();
        out.pieces.extend(self.pieces.iter().copied());
        out.score = self.score;
        out.streak = self.streak;
        out.high_score = self.high_score;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.turn = self.turn;
        out.lines_cleared = self.lines_cleared;
        out.seed = self.generator.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the whole tray with a fresh batch
    fn refill_pieces(&mut self) {
        self.pieces.clear();
        self.pieces
            .extend(self.generator.generate_batch(BATCH_SIZE));
    }

    fn refresh_status(&mut self) {
        if is_game_over(&self.board, &self.pieces) {
            self.status = GameStatus::GameOver;
        }
    }

    #[cfg(test)]
    fn set_pieces(&mut self, pieces: &[Shape]) {
        self.pieces.clear();
        self.pieces.extend(pieces.iter().copied());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
