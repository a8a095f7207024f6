// src/common/byte_order.rs

//! 16-bit byte order helpers.
//!
//! The HDC1080 sends every register MSB first except that the configuration
//! register is kept low-byte-first by this driver. All of that is handled
//! here and in [`super::config`]; nothing else should reorder bytes.

/// Swaps the two bytes of a 16-bit word.
#[inline]
pub const fn swap16(value: u16) -> u16 {
    value.rotate_left(8)
}

/// Reads a big-endian (network order) word from the first two bytes.
#[inline]
pub const fn be16(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Host order -> configuration register wire bytes.
#[inline]
pub const fn config_to_wire(host: u16) -> [u8; 2] {
    swap16(host).to_be_bytes()
}

/// Configuration register wire bytes -> host order.
#[inline]
pub const fn config_from_wire(bytes: [u8; 2]) -> u16 {
    swap16(be16(bytes))
}
