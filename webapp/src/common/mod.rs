pub mod dom;
pub mod storage;
pub mod style;

// roughly one animation frame at 60 Hz
pub const FRAME_MS: u32 = 16;
