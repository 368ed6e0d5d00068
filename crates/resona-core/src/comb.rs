//! Feedback comb filter with damping, in Q15.
//!
//! The comb filter is the echo-generating element of a Schroeder/Freeverb
//! reverberator: a delay line whose output is fed back into its own input,
//! attenuated by a feedback gain and filtered by a one-pole lowpass. The
//! lowpass makes high frequencies die faster than lows, the way air and
//! walls absorb a real room's reflections.

use crate::DelayLine;
use crate::Q15;

/// Feedback comb filter with a one-pole damping filter in its feedback path.
///
/// Coefficients are plain Q15 fields set by the owner; a reverb engine
/// pushes the same mapped feedback/damping values into every comb of a
/// bank. The filter itself never rescales or clamps them.
///
/// # Example
///
/// ```rust
/// use resona_core::{CombFilter, Q15};
///
/// let mut comb: CombFilter<256> = CombFilter::new();
/// comb.set_length(100);
/// comb.set_feedback(Q15::HALF);
/// comb.set_damp(Q15::ZERO);
///
/// let out = comb.process(Q15::from_f32(0.5));
/// assert_eq!(out, Q15::ZERO); // delay line starts empty
/// ```
#[derive(Debug, Clone)]
pub struct CombFilter<const N: usize> {
    delay: DelayLine<N>,
    feedback: Q15,
    damp1: Q15,
    damp2: Q15,
    filter_store: Q15,
}

impl<const N: usize> CombFilter<N> {
    /// Creates a zeroed comb filter with active length `N`, feedback 0.5
    /// and no damping.
    pub fn new() -> Self {
        Self {
            delay: DelayLine::new(),
            feedback: Q15::HALF,
            damp1: Q15::ZERO,
            damp2: Q15::MAX,
            filter_store: Q15::ZERO,
        }
    }

    /// Sets the active delay length, clamped into `[1, N]`.
    pub fn set_length(&mut self, samples: usize) {
        self.delay.set_length(samples);
    }

    /// Returns the active delay length in samples.
    #[inline]
    pub fn length(&self) -> usize {
        self.delay.length()
    }

    /// Sets the feedback gain.
    ///
    /// Values below [`Q15::MAX`] decay; [`Q15::MAX`] itself (≈ 0.99997)
    /// sustains indefinitely at this precision and is what freeze mode uses.
    #[inline]
    pub fn set_feedback(&mut self, feedback: Q15) {
        self.feedback = feedback;
    }

    /// Returns the current feedback gain.
    #[inline]
    pub fn feedback(&self) -> Q15 {
        self.feedback
    }

    /// Sets the damping coefficient and maintains its complement.
    ///
    /// `damp1` is the one-pole coefficient consumed by [`CombFilter::process`];
    /// `damp2 = 1 − damp1` is kept alongside it to mirror the canonical
    /// two-coefficient formulation, though the update step only reads
    /// `damp1`.
    #[inline]
    pub fn set_damp(&mut self, damp: Q15) {
        self.damp1 = damp;
        self.damp2 = Q15::from_raw(Q15::MAX.raw() - damp.raw());
    }

    /// Returns the current damping coefficient.
    #[inline]
    pub fn damp(&self) -> Q15 {
        self.damp1
    }

    /// Processes one sample; returns the delayed output.
    ///
    /// The returned value is the buffer content at the write head, exactly
    /// one active length old. The damping memory then tracks that output
    /// through a one-pole lowpass (`store += (out − store)·(1 − damp1)`,
    /// equivalently `store = out + (store − out)·damp1`), and
    /// `input + store·feedback` is saturated and written back.
    #[inline]
    pub fn process(&mut self, input: Q15) -> Q15 {
        let output = self.delay.read();

        // One-pole lowpass toward the freshly read value. The difference is
        // up to 17 bits, so it is saturated before the Q15 multiply.
        let diff = Q15::saturate(i32::from(self.filter_store.raw()) - i32::from(output.raw()));
        self.filter_store =
            Q15::saturate(i32::from(output.raw()) + i32::from((diff * self.damp1).raw()));

        let fb = self.filter_store * self.feedback;
        self.delay.write_advance(input.saturating_add(fb));

        output
    }

    /// Clears the delay line and the damping memory.
    pub fn clear(&mut self) {
        self.delay.clear();
        self.filter_store = Q15::ZERO;
    }
}

impl<const N: usize> Default for CombFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}
