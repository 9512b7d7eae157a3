//! Engine error taxonomy.

use thiserror::Error;

/// Errors surfaced by the engine. All are local and synchronous; the
/// engine performs no I/O and has no retry concept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Non-positive grid size at construction.
    #[error("grid size must be positive, got {size}")]
    InvalidSize { size: i32 },

    /// Unrecognized rule identifier. Rejected at selection time, never
    /// silently ignored at update time.
    #[error("unknown rule identifier {name:?}")]
    UnknownRule { name: String },

    /// Unrecognized shape identifier on the textual surface.
    #[error("unknown shape identifier {name:?}")]
    UnknownShape { name: String },

    /// Direct write outside the grid. Wraparound applies to reads only;
    /// `set` treats out-of-range coordinates as a contract violation.
    #[error("coordinates ({x}, {y}) out of range for a {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: i32 },
}
