//! Resona Core - Q15 fixed-point DSP primitives
//!
//! The foundational building blocks for resona's fixed-point audio
//! processing: a Q15 scalar type and the delay-based filters a Schroeder
//! reverberator is assembled from. Everything here is allocation-free,
//! integer-only, and deterministic — worst-case execution time depends on
//! the number of filters, never on delay lengths or signal content.
//!
//! # Types
//!
//! - [`Q15`] - signed 16-bit fixed-point sample/coefficient type with
//!   rounded, saturating arithmetic
//! - [`DelayLine`] - const-generic circular buffer with a runtime active
//!   length, the shared bookkeeping for both filter types
//! - [`CombFilter`] - feedback delay line with one-pole damping in the
//!   feedback path
//! - [`AllpassFilter`] - Schroeder allpass section with a fixed diffusion
//!   coefficient ([`ALLPASS_FEEDBACK`])
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded targets. Disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! resona-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Static memory**: delay capacities are const generics; footprint is
//!   fixed at compile time
//! - **Saturate, don't fault**: every numeric boundary clamps to the
//!   nearest representable value; no operation here can fail
//! - **Integer-only audio path**: floats appear only in the rarely-called
//!   conversion helpers, never per sample

#![cfg_attr(not(feature = "std"), no_std)]

pub mod allpass;
pub mod comb;
pub mod delay;
pub mod q15;

// Re-export main types at crate root
pub use allpass::{ALLPASS_FEEDBACK, AllpassFilter};
pub use comb::CombFilter;
pub use delay::DelayLine;
pub use q15::Q15;
