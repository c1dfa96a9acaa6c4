//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, shapes, bag and scoring.
//! It handles gravity, lock delay, line clears, leveling and the game lifecycle.
//!
//! Time comes from the embedder: [`GameState::tick`] takes a monotonic millisecond clock
//! and compares elapsed time against thresholds, so irregular tick spacing is fine.

use crate::board::Board;
use crate::pieces;
use crate::rng::PieceQueue;
use crate::scoring::{advance_level, calculate_drop_score, calculate_line_score, gravity_interval_ms};
use crate::shapes::{shape_of, PieceShape, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Column of the bitmap's top-left cell
    pub x: i8,
    /// Row of the bitmap's top-left cell
    pub y: i8,
    /// When set, the piece locks once the clock reaches this value
    pub lock_deadline_ms: Option<u64>,
}

impl Tetromino {
    /// Create a new tetromino at the spawn anchor
    ///
    /// The I piece spawns one row higher so its blocks sit on the top row.
    pub fn new(kind: PieceKind) -> Self {
        let y = match kind {
            PieceKind::I => SPAWN_Y - 1,
            _ => SPAWN_Y,
        };
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y,
            lock_deadline_ms: None,
        }
    }

    /// Shared catalog entry for this piece's kind
    pub fn shape(&self) -> &'static Shape {
        shape_of(self.kind)
    }

    /// Mino offsets for the current rotation
    pub fn cells(&self) -> &'static PieceShape {
        self.shape().cells(self.rotation)
    }

    /// Check if all minos are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        !board.would_collide(self, 0, 0, 0)
    }

    /// Check if the piece is resting on the floor or a block
    pub fn is_grounded(&self, board: &Board) -> bool {
        board.would_collide(self, 0, 1, 0)
    }
}

/// Where the game currently is in its lifecycle
///
/// Line clearing and spawning run synchronously inside a lock, so they are never
/// observed between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not started
    Spawning,
    /// Piece can descend
    Falling,
    /// Piece is resting and its lock deadline is running
    Locking,
    Paused,
    GameOver,
}

/// Emitted every time a piece locks into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub level: u32,
    pub leveled_up: bool,
    pub hard_drop: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    piece_queue: PieceQueue,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    /// Lines counted toward the next level
    quota_lines: u32,
    /// Clock value of the last gravity step; `None` until the first tick
    last_gravity_ms: Option<u64>,
    /// Latest clock value seen by `tick`
    clock_ms: u64,
    paused_at_ms: u64,
    paused: bool,
    game_over: bool,
    started: bool,
    quit_requested: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_queue(PieceQueue::new(seed))
    }

    /// Create a new game seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::with_queue(PieceQueue::from_entropy())
    }

    fn with_queue(piece_queue: PieceQueue) -> Self {
        Self {
            board: Board::new(),
            active: None,
            piece_queue,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            quota_lines: 0,
            last_gravity_ms: None,
            clock_ms: 0,
            paused_at_ms: 0,
            paused: false,
            game_over: false,
            started: false,
            quit_requested: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The kind the next spawn will use
    pub fn next_piece(&self) -> PieceKind {
        self.piece_queue.peek()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            return Phase::GameOver;
        }
        if self.paused {
            return Phase::Paused;
        }
        match self.active {
            Some(piece) if piece.lock_deadline_ms.is_some() => Phase::Locking,
            Some(_) => Phase::Falling,
            None => Phase::Spawning,
        }
    }

    /// Whether piece operations currently have any effect
    fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over && self.active.is_some()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.started.then(|| self.next_piece());
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece from the queue
    /// Sets game over (and returns false) when the spawn pose collides
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.piece_queue.draw();
        let piece = Tetromino::new(kind);

        if !piece.is_valid(&self.board) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        if self.last_gravity_ms.is_some() {
            self.last_gravity_ms = Some(self.clock_ms);
        }

        true
    }

    /// Drop the pending lock if the piece is free to fall again
    fn refresh_lock_deadline(&mut self) {
        if let Some(piece) = self.active.as_mut() {
            if piece.lock_deadline_ms.is_some() && !piece.is_grounded(&self.board) {
                piece.lock_deadline_ms = None;
            }
        }
    }

    /// Start the lock timer if the piece is resting and no timer is running
    fn arm_lock_deadline(&mut self) {
        let now = self.clock_ms;
        if let Some(piece) = self.active.as_mut() {
            if piece.lock_deadline_ms.is_none() {
                piece.lock_deadline_ms = Some(now + LOCK_DELAY_MS as u64);
            }
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.would_collide(&active, dx, dy, 0) {
            return false;
        }

        self.active = Some(Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        self.refresh_lock_deadline();
        true
    }

    /// Shift the piece one column (`direction` is -1 for left, +1 for right)
    pub fn shift(&mut self, direction: i8) -> bool {
        if !self.playable() || !matches!(direction, -1 | 1) {
            return false;
        }
        self.try_move(direction, 0)
    }

    /// Rotate with wall kicks (`direction` is -1 for left, +1 for right)
    pub fn rotate(&mut self, direction: i32) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        if !pieces::try_rotate(&self.board, &mut piece, direction) {
            return false;
        }

        self.active = Some(piece);
        self.refresh_lock_deadline();
        true
    }

    /// Descend one row, awarding soft drop points
    /// A blocked descent starts the lock delay instead
    pub fn soft_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        self.descend()
    }

    /// One gravity step: move down a row or start the lock timer
    fn descend(&mut self) -> bool {
        if self.try_move(0, 1) {
            self.score += calculate_drop_score(1, false);
            true
        } else {
            self.arm_lock_deadline();
            false
        }
    }

    /// Rows the active piece can fall before it rests
    fn drop_distance(&self, piece: &Tetromino) -> i8 {
        let mut distance: i8 = 0;
        while !self.board.would_collide(piece, 0, distance + 1, 0) {
            distance += 1;
        }
        distance
    }

    /// Hard drop the active piece to the bottom and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let distance = self.drop_distance(&active);
        self.active = Some(Tetromino {
            y: active.y + distance,
            ..active
        });
        self.score += calculate_drop_score(distance as u32, true);

        self.lock_piece(true);
        true
    }

    /// Calculate the ghost piece Y position (where the piece would land)
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.drop_distance(&active))
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece
    fn lock_piece(&mut self, hard_drop: bool) {
        let Some(active) = self.active.take() else {
            return;
        };

        // The active pose is only ever replaced by a collision-free one
        let placed = self.board.lock_piece(&active);
        debug_assert!(placed, "active piece overlapped the board at lock");

        // A single lock can leave separate spans (e.g. rows 17 and 19 full, 18 not);
        // they are collapsed one after another and scored as one clear.
        let mut lines_cleared = 0usize;
        loop {
            let cleared = self.board.clear_lines();
            if cleared == 0 {
                break;
            }
            lines_cleared += cleared;
        }

        let line_clear_score = calculate_line_score(lines_cleared, self.level);
        self.score += line_clear_score;
        self.lines += lines_cleared as u32;

        let progress = advance_level(self.level, self.quota_lines, lines_cleared as u32);
        self.level = progress.level;
        self.quota_lines = progress.quota_lines;

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: lines_cleared as u32,
            line_clear_score,
            level: self.level,
            leveled_up: progress.leveled_up,
            hard_drop,
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Main game tick - resolve lock delay, then apply gravity
    ///
    /// Returns true when the piece moved or locked.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.clock_ms = now_ms;
        if !self.started || self.game_over || self.paused {
            return false;
        }

        let Some(active) = self.active else {
            return false;
        };

        let Some(last_gravity) = self.last_gravity_ms else {
            // Deadlines armed before the clock was known restart from here
            self.last_gravity_ms = Some(now_ms);
            if let Some(piece) = self.active.as_mut() {
                if piece.lock_deadline_ms.is_some() {
                    piece.lock_deadline_ms = Some(now_ms + LOCK_DELAY_MS as u64);
                }
            }
            return false;
        };

        if let Some(deadline) = active.lock_deadline_ms {
            if !active.is_grounded(&self.board) {
                self.refresh_lock_deadline();
            } else if now_ms >= deadline {
                self.lock_piece(false);
                return true;
            }
        }

        let interval = gravity_interval_ms(self.level) as u64;
        if now_ms.saturating_sub(last_gravity) >= interval {
            self.last_gravity_ms = Some(now_ms);
            return self.descend();
        }

        false
    }

    /// Pause or resume; paused time is not charged to gravity or lock delay
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        if self.paused {
            let paused_for = self.clock_ms.saturating_sub(self.paused_at_ms);
            if let Some(last) = self.last_gravity_ms.as_mut() {
                *last += paused_for;
            }
            if let Some(deadline) = self
                .active
                .as_mut()
                .and_then(|piece| piece.lock_deadline_ms.as_mut())
            {
                *deadline += paused_for;
            }
            self.paused = false;
        } else {
            self.paused_at_ms = self.clock_ms;
            self.paused = true;
        }
        true
    }

    /// Reset score, level, board and piece and deal a fresh bag
    pub fn restart(&mut self) {
        let mut piece_queue = self.piece_queue.clone();
        piece_queue.reset();

        let next_episode = self.episode_id.wrapping_add(1);
        let clock_ms = self.clock_ms;
        *self = Self::with_queue(piece_queue);
        self.episode_id = next_episode;
        self.clock_ms = clock_ms;
        self.start();
    }

    /// Ask the embedding loop to stop
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.shift(-1),
            GameAction::MoveRight => self.shift(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(1),
            GameAction::RotateCcw => self.rotate(-1),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Quit => {
                self.quit();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
