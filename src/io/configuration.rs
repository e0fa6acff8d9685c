//! Sampler constants and runtime configuration defaults

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default target diamond order
pub const DEFAULT_ORDER: u32 = 64;

// Safety limit to prevent excessive memory allocation
/// Maximum supported diamond order
pub const MAX_ORDER: u32 = 4096;

/// Default edge length of one lattice cell in exported images, in pixels
pub const DEFAULT_CELL_SIZE_PX: u32 = 8;

/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;

/// Extra hold on the final GIF frame, as a multiple of the frame delay
pub const FINAL_FRAME_HOLD: u32 = 10;

/// Fill colors for North, South, East, and West dominoes, in that order
pub const DIRECTION_COLORS: [[u8; 4]; 4] = [
    [220, 50, 47, 255],
    [38, 139, 210, 255],
    [133, 153, 0, 255],
    [181, 137, 0, 255],
];

/// Outline color separating adjacent dominoes
pub const OUTLINE_COLOR: [u8; 4] = [0, 43, 54, 255];

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
