//! Repeat-aware playback queue
//!
//! A reusable ordered-collection building block for anything that tracks
//! "what plays next": media players, task runners, announcement loops.
//!
//! This crate provides:
//! - A generic [`Queue<T>`] whose index 0 is always the current item
//! - Repeat modes (no repeat, repeat one, repeat all, repeat all with
//!   absolute-position bookkeeping)
//! - Repeat-mode-aware advancement (`shift`)
//! - Head-protected index removal (single, batch, and range)
//! - Fisher–Yates shuffle that keeps the current item in place
//!
//! # Architecture
//!
//! The queue is a pure in-memory structure: no I/O, no locking, no event
//! notification. Thread safety and persistence are the consumer's job.
//! Within a single call every mutation is atomic relative to observers.
//!
//! # Example: Basic Queue Use
//!
//! ```rust
//! use playback_queue::{Queue, ShiftOptions};
//!
//! let mut queue = Queue::new();
//! queue.append("intro.mp3");
//! queue.append("verse.mp3");
//! queue.append("outro.mp3");
//!
//! assert_eq!(queue.current(), Some(&"intro.mp3"));
//!
//! // Advance to the next track
//! queue.shift(ShiftOptions::default()).unwrap();
//! assert_eq!(queue.current(), Some(&"verse.mp3"));
//! ```
//!
//! # Example: Repeat All
//!
//! ```rust
//! use playback_queue::{Queue, RepeatMode, ShiftOptions};
//!
//! let mut queue = Queue::new();
//! for track in ["A", "B", "C", "D"] {
//!     queue.append(track);
//! }
//! queue.set_repeat_mode(RepeatMode::RepeatAll);
//!
//! // Passed tracks rotate to the tail instead of being dropped
//! queue.shift(ShiftOptions { times: 2, ..Default::default() }).unwrap();
//! assert_eq!(queue.to_vec(), vec!["C", "D", "A", "B"]);
//! ```
//!
//! # Example: Honoring Repeat One
//!
//! ```rust
//! use playback_queue::{Queue, RepeatMode, ShiftOptions};
//!
//! let mut queue = Queue::new();
//! queue.append("loop-me.mp3");
//! queue.set_repeat_mode(RepeatMode::RepeatOne);
//!
//! // A track-finished advance stays parked on the current track...
//! queue.shift(ShiftOptions { ignore_repetition: false, ..Default::default() }).unwrap();
//! assert_eq!(queue.current(), Some(&"loop-me.mp3"));
//!
//! // ...while a user-initiated skip forces the advance
//! queue.shift(ShiftOptions::default()).unwrap();
//! assert_eq!(queue.current(), None);
//! ```

mod error;
mod queue;
pub mod types;

// Public exports
pub use error::{QueueError, Result};
pub use queue::Queue;
pub use types::{RepeatMode, ShiftOptions};
