//! Validation utilities for index construction and deserialization bounds checking

use crate::common::{Result, SketchError};

/// Bit width of a fingerprint; `max_ham_dist` must stay strictly below it, or
/// the `d+1` block split degenerates (a block of width 0 cannot carry the
/// pigeonhole guarantee).
pub const HASH_WIDTH: u32 = 64;

/// Levels beyond this are pathological: storage cost is `(d+1)^level`, and
/// nothing past a handful of levels is a sane deployment (see spec.md §5).
pub const MAX_LEVEL: u32 = 4;

/// Validate that `max_ham_dist` leaves room for at least one non-empty block.
pub fn validate_max_ham_dist(max_ham_dist: u32) -> Result<()> {
    if max_ham_dist >= HASH_WIDTH {
        return Err(SketchError::InvalidParameter {
            param: "max_ham_dist".to_string(),
            value: max_ham_dist.to_string(),
            constraint: format!("must be less than {HASH_WIDTH}"),
        });
    }
    Ok(())
}

/// Validate that `level` is not pathologically deep.
pub fn validate_level(level: u32) -> Result<()> {
    if level > MAX_LEVEL {
        return Err(SketchError::InvalidParameter {
            param: "level".to_string(),
            value: level.to_string(),
            constraint: format!("must not exceed {MAX_LEVEL}"),
        });
    }
    Ok(())
}
