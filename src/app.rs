//! App: the interactive shell around a `Session`.
//!
//! Owns presentation state only (cursor, tray selection, hover preview,
//! flash and toast timers). Every rule decision is delegated to the session.

use crate::core::{CellPos, GameSnapshot, HighScoreStore, PlaceError, PlacementPreview, Session};
use crate::term::HudView;
use crate::types::{GameAction, BOARD_SIZE, CLEAR_FLASH_MS, TOAST_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    text: String,
    remaining_ms: u32,
}

#[derive(Debug)]
pub struct App<S: HighScoreStore> {
    session: Session<S>,
    snapshot: GameSnapshot,
    cursor: (u8, u8),
    selected: Option<usize>,
    show_preview: bool,
    preview: Option<PlacementPreview>,
    flash: Vec<CellPos>,
    flash_ms: u32,
    toast: Option<Toast>,
}

impl<S: HighScoreStore> App<S> {
    pub fn new(session: Session<S>, show_preview: bool) -> Self {
        let mut app = Self {
            session,
            snapshot: GameSnapshot::default(),
            cursor: (0, 0),
            selected: Some(0),
            show_preview,
            preview: None,
            flash: Vec::new(),
            flash_ms: 0,
            toast: None,
        };
        app.refresh();
        app
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Snapshot of the authoritative state as of the last action
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn show_preview(&self) -> bool {
        self.show_preview
    }

    pub fn preview(&self) -> Option<&PlacementPreview> {
        self.preview.as_ref()
    }

    /// Cells still flashing from the last clear
    pub fn flash_cells(&self) -> &[CellPos] {
        if self.flash_ms > 0 {
            &self.flash
        } else {
            &[]
        }
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.text.as_str())
    }

    /// Whether a cosmetic timer is running
    pub fn animating(&self) -> bool {
        self.flash_ms > 0 || self.toast.is_some()
    }

    /// Change-detection key covering both game state and presentation state
    pub fn frame_fingerprint(&self) -> u64 {
        let hud = self.cursor.0 as u64
            | (self.cursor.1 as u64) << 8
            | (self.selected.map_or(0xff, |i| i as u64)) << 16
            | (self.show_preview as u64) << 24;
        self.snapshot.fingerprint() ^ hud.wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    pub fn hud(&self) -> HudView<'_> {
        HudView {
            cursor: self.cursor,
            selected: self.selected,
            show_preview: self.show_preview,
            preview: self.preview.as_ref(),
            flash: self.flash_cells(),
            toast: self.toast(),
        }
    }

    /// Apply one player action. Returns whether anything visible changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::CursorUp => self.move_cursor(-1, 0),
            GameAction::CursorDown => self.move_cursor(1, 0),
            GameAction::CursorLeft => self.move_cursor(0, -1),
            GameAction::CursorRight => self.move_cursor(0, 1),
            GameAction::SelectPiece(index) => self.select(index as usize),
            GameAction::NextPiece => self.cycle(1),
            GameAction::PrevPiece => self.cycle(-1),
            GameAction::Place => self.place_selected(),
            GameAction::Restart => {
                self.session.reset();
                self.selected = Some(0);
                self.flash_ms = 0;
                self.flash.clear();
                self.show_toast("NEW GAME".to_string());
                true
            }
            GameAction::TogglePreview => {
                self.show_preview = !self.show_preview;
                true
            }
            GameAction::ClearHighScore => {
                self.session.clear_high_score();
                self.show_toast("BEST CLEARED".to_string());
                true
            }
        };
        if changed {
            self.refresh();
        }
        changed
    }

    /// Age cosmetic timers. Returns whether one of them expired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut expired = false;
        if self.flash_ms > 0 {
            self.flash_ms = self.flash_ms.saturating_sub(elapsed_ms);
            if self.flash_ms == 0 {
                self.flash.clear();
                expired = true;
            }
        }
        if let Some(toast) = self.toast.as_mut() {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
            if toast.remaining_ms == 0 {
                self.toast = None;
                expired = true;
            }
        }
        expired
    }

    fn move_cursor(&mut self, dr: i8, dc: i8) -> bool {
        let max = BOARD_SIZE as i8 - 1;
        let row = (self.cursor.0 as i8 + dr).clamp(0, max) as u8;
        let col = (self.cursor.1 as i8 + dc).clamp(0, max) as u8;
        let moved = (row, col) != self.cursor;
        self.cursor = (row, col);
        moved
    }

    fn select(&mut self, index: usize) -> bool {
        if index >= self.session.state().pieces().len() || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    fn cycle(&mut self, step: isize) -> bool {
        let len = self.session.state().pieces().len() as isize;
        if len == 0 {
            return false;
        }
        let next = match self.selected {
            Some(i) => (i as isize + step).rem_euclid(len),
            None => 0,
        } as usize;
        self.select(next)
    }

    fn place_selected(&mut self) -> bool {
        let Some(index) = self.selected else {
            self.show_toast("SELECT A PIECE".to_string());
            return true;
        };
        let (row, col) = (self.cursor.0 as i8, self.cursor.1 as i8);

        match self.session.place(index, row, col) {
            Ok(event) => {
                if event.cleared_count > 0 {
                    self.flash.clear();
                    self.flash.extend(event.cleared_cells.iter().copied());
                    self.flash_ms = CLEAR_FLASH_MS;
                    let lines = event.rows.len() + event.cols.len();
                    self.show_toast(format!("{} LINE{} +{}", lines, plural(lines), event.score.total));
                }
                if let Some(best) = event.new_high_score {
                    self.show_toast(format!("NEW BEST {best}"));
                }

                let remaining = self.session.state().pieces().len();
                self.selected = if event.replenished {
                    Some(0)
                } else {
                    Some(index.min(remaining.saturating_sub(1)))
                };
            }
            Err(e) => self.show_toast(error_label(e).to_string()),
        }
        true
    }

    fn show_toast(&mut self, text: String) {
        self.toast = Some(Toast {
            text,
            remaining_ms: TOAST_MS,
        });
    }

    /// Re-derive the snapshot and hover preview from the session.
    fn refresh(&mut self) {
        self.session.snapshot_into(&mut self.snapshot);
        let state = self.session.state();
        self.preview = self.selected.and_then(|index| {
            state.preview(index, self.cursor.0 as i8, self.cursor.1 as i8)
        });
    }
}

fn error_label(e: PlaceError) -> &'static str {
    match e {
        PlaceError::NotPlaying => "GAME OVER",
        PlaceError::NoSuchPiece => "NO SUCH PIECE",
        PlaceError::OutOfBounds => "OFF THE BOARD",
        PlaceError::Blocked => "BLOCKED",
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "S"
    }
}
