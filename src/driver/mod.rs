// src/driver/mod.rs

// Declare the sub-modules
pub mod sync_driver;

#[cfg(feature = "async")]
pub mod async_driver;

// Re-export the public driver structs
pub use sync_driver::Hdc1080;

#[cfg(feature = "async")]
pub use async_driver::Hdc1080Async;

/// Start-up time after a software reset (datasheet: 15 ms max).
pub const SOFT_RESET_DELAY_MS: u32 = 15;
