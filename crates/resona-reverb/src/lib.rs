//! Resona Reverb - fixed-point stereo reverberation engine
//!
//! A Freeverb-style reverberator built entirely in Q15 fixed-point
//! arithmetic on the primitives from `resona-core`: eight parallel damped
//! comb filters per channel feeding four series allpass diffusers, with a
//! width-controlled stereo wet mix and a freeze mode that sustains the
//! current tail indefinitely.
//!
//! The engine targets small embedded processors: no allocation at any
//! point (construction included), integer-only per-sample work, and a
//! deterministic per-sample cost that depends only on the fixed filter
//! counts.
//!
//! # Example
//!
//! ```rust
//! use resona_core::Q15;
//! use resona_reverb::Reverb;
//!
//! let mut reverb = Reverb::new(48_000);
//! reverb.set_room_size(Q15::from_f32(0.7));
//! reverb.set_damping(Q15::from_f32(0.5));
//!
//! let input = [512i16; 32];
//! let mut out_left = [0i16; 32];
//! let mut out_right = [0i16; 32];
//! reverb.process_block(&input, None, &mut out_left, &mut out_right);
//! ```
//!
//! # no_std Support
//!
//! `no_std` compatible; disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! resona-reverb = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod reverb;

// Re-export main types at crate root
pub use reverb::{ALLPASS_CAPACITY, COMB_CAPACITY, NUM_ALLPASSES, NUM_COMBS, Reverb};
