//! Scoring module - line clear points, drop points, leveling and gravity speed
//!
//! Line clears use the level-scaled 100/300/500/800 table. Clears of more than four rows
//! at once (only reachable when several contiguous spans collapse together) score as four.

use crate::types::{
    GRAVITY_INTERVALS_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL,
    SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of rows cleared at once
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    let capped = lines.min(LINE_SCORES.len() - 1);
    LINE_SCORES[capped].saturating_mul(level)
}

/// Calculate drop score
/// soft_drop / gravity: +1 per row
/// hard_drop: +2 per row
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    let per_row = if is_hard_drop {
        HARD_DROP_POINTS
    } else {
        SOFT_DROP_POINTS
    };
    rows.saturating_mul(per_row)
}

/// Result of crediting cleared lines toward the level quota
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    /// Lines counted toward the next level
    pub quota_lines: u32,
    pub leveled_up: bool,
}

/// Credit `cleared` lines toward the quota and raise the level for every full quota.
///
/// The level stops at [`MAX_LEVEL`]; the quota counter keeps its remainder.
pub fn advance_level(level: u32, quota_lines: u32, cleared: u32) -> LevelProgress {
    let mut level = level;
    let mut quota_lines = quota_lines + cleared;
    let mut leveled_up = false;

    while quota_lines >= LINES_PER_LEVEL {
        quota_lines -= LINES_PER_LEVEL;
        if level < MAX_LEVEL {
            level += 1;
            leveled_up = true;
        }
    }

    LevelProgress {
        level,
        quota_lines,
        leveled_up,
    }
}

/// Get gravity interval for a level (in milliseconds)
/// Levels past the end of the table use its last entry
pub fn gravity_interval_ms(level: u32) -> u32 {
    let index = (level.max(1) as usize - 1).min(GRAVITY_INTERVALS_MS.len() - 1);
    GRAVITY_INTERVALS_MS[index]
}
