//! Adapter utilities for the `swipe-deck` crate.
//!
//! The `swipe-deck` crate is UI-agnostic and focuses on the core state machine.
//! This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - A controller wrapping the deck with drag/release plumbing and a tick loop
//! - Settle tweens for below-threshold drag releases
//! - Window diffing (which cards entered/left between frames)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod diff;
mod key;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_SETTLE_DURATION_MS, DEFAULT_SWIPE_THRESHOLD};
pub use diff::{WindowDiff, diff_windows};
pub use key::DeckKey;
pub use tween::{Easing, Tween};
