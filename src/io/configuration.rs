//! Runtime constants and configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 10_000;

// The sequential solver clones its board into the progress slot at this
// cadence; snapshots are advisory so the interval only trades freshness
// against clone traffic
/// Iterations between progress snapshots of the sequential solver
pub const SNAPSHOT_INTERVAL: u64 = 4096;

/// Milliseconds between progress-display refreshes
pub const PROGRESS_REFRESH_MS: u64 = 100;

// Output settings
/// Edge length of one board cell in exported images, in pixels
pub const CELL_PIXELS: u32 = 24;

/// Lightness of generated piece colors
pub const PIECE_COLOR_LIGHTNESS: f64 = 0.75;
