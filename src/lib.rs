//! Human-readable text formatting utilities
//!
//! This crate converts numeric quantities, pluralized units, and time
//! durations into natural-language phrases, plus a general
//! word-capitalization helper. It is a display-layer formatting library:
//! every function is pure, synchronous, and stateless.
//!
//! - **[`number`]**: integer to English words ("twenty-one")
//! - **[`quantity`]**: quantity + unit to a pluralized phrase ("about two
//!   hours")
//! - **[`duration`]**: duration to a comma-joined multi-unit phrase
//!   ("1 year, 2 months and 3 days")
//! - **[`text`]**: word capitalization
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use humantext::{capitalize, format_duration, format_quantity, TimeUnit};
//!
//! let phrase = format_duration(Duration::from_secs(57), TimeUnit::Second, false).unwrap();
//! assert_eq!(phrase, "57 seconds");
//!
//! assert_eq!(format_quantity(2.0, "century", false), "2 centuries");
//! assert_eq!(capitalize("hello world", true).unwrap(), "Hello World");
//! ```
//!
//! English only; number words cover 1-99 and pluralization uses a fixed
//! trailing-y heuristic.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod duration;
pub mod error;
pub mod number;
pub mod quantity;
pub mod text;
pub mod unit;

// Re-export commonly used items
pub use duration::format_duration;
pub use error::FormatError;
pub use number::number_to_words;
pub use quantity::format_quantity;
pub use text::capitalize;
pub use unit::{TimeUnit, UnitParseError};
