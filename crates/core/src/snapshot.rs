use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{Cell, GameStatus, BATCH_SIZE, BOARD_SIZE};

/// Read-only copy of everything a view needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub pieces: ArrayVec<Shape, BATCH_SIZE>,
    pub score: u32,
    pub streak: u32,
    pub high_score: u32,
    pub status: GameStatus,
    pub episode_id: u32,
    pub turn: u32,
    pub lines_cleared: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        self.pieces.clear();
        self.score = 0;
        self.streak = 0;
        self.high_score = 0;
        self.status = GameStatus::Playing;
        self.episode_id = 0;
        self.turn = 0;
        self.lines_cleared = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Cheap fingerprint for change detection (FNV-1a over board and counters).
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut mix = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        };
        for cell in self.board.iter().flatten() {
            mix(cell.map_or(0, |c| c as u8 + 1));
        }
        for piece in &self.pieces {
            mix(piece.kind as u8);
            mix(piece.color as u8);
        }
        for v in [self.score, self.streak, self.high_score, self.episode_id, self.turn] {
            v.to_le_bytes().into_iter().for_each(&mut mix);
        }
        mix(self.status as u8);
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            pieces: ArrayVec::new(),
            score: 0,
            streak: 0,
            high_score: 0,
            status: GameStatus::Playing,
            episode_id: 0,
            turn: 0,
            lines_cleared: 0,
            seed: 0,
        }
    }
}
