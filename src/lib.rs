// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod fmt;

pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{ConfigurationRegister, CommandCode, Hdc1080Error, Hdc1080Transport, Reading};
pub use driver::Hdc1080;

#[cfg(feature = "async")]
pub use driver::Hdc1080Async;
