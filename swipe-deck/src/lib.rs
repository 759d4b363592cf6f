//! A headless swipe-deck engine for Tinder-style card stacks.
//!
//! For adapter-level utilities (drag plumbing, settle tweens, window diffing), see
//! the `swipe-deck-adapter` crate.
//!
//! This crate focuses on the state machine behind a swipeable card stack: a
//! continuous active index, a bounded back-navigation history, and windowed
//! materialization of large decks (symmetric look-around or chunked preloading).
//!
//! It is UI-agnostic. A rendering/gesture layer is expected to provide:
//! - per-card rendering and gesture capture
//! - card handles that perform directional exit/return animations
//! - a millisecond tick source (for the loop-reset settle delay)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod deck;
mod handle;
mod history;
mod options;
mod shared;
mod state;
mod types;
mod window;


pub use deck::Deck;
pub use handle::{CardHandle, CardHandleRef};
pub use options::{
    ChangeCallback, ChunkCallback, DeckOptions, IndexCallback, SwipeCallback, SwipedAllCallback,
};
pub use shared::SharedIndex;
pub use state::DeckSnapshot;
pub use types::{CardKey, CardSlot, SwipeDirection, Window};
pub use window::WindowPolicy;
