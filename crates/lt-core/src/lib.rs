//! # lt-core
//!
//! Core error definitions, floor arithmetic, and clock settings for
//! localtime.
//!
//! This crate provides the building blocks shared by the calendar types in
//! `lt-time`: the error enum and its macros, floor-division helpers for
//! sign-correct wrap-around, and the process-wide [`Settings`] clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Floor division / floor modulo helpers.
pub mod math;

/// Global library settings (clock override).
pub mod settings;

// ── Calendar bounds ──────────────────────────────────────────────────────────

/// Smallest supported year (inclusive).
pub const MIN_YEAR: i32 = -9999;

/// Largest supported year (inclusive).
pub const MAX_YEAR: i32 = 9999;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use math::{floor_div, floor_div_mod, floor_mod};
pub use settings::{ScopedFrozenClock, Settings};
