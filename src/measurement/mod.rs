//! Measurement infrastructure for experiment trials.
//!
//! This module provides:
//! - [`MemoryAccessCounter`], the per-trial access tally algorithms write into
//! - [`Timer`], wall-clock timing that brackets only the measured call
//! - [`TrialResult`], the raw pair handed to the CPU model
//!
//! One counter belongs to one trial. Parallel trials, if ever added, must each
//! own a counter and their own scratch input.

mod counter;
mod timer;
mod trial;

pub use counter::MemoryAccessCounter;
pub use timer::{black_box, Timer};
pub use trial::TrialResult;
