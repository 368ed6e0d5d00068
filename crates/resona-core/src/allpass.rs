//! Schroeder allpass filter for diffusion, in Q15.
//!
//! An allpass section passes every frequency at (nominally) unity gain but
//! scrambles phase, smearing the periodic taps of a comb bank into a dense,
//! noise-like tail. Chained sections multiply the echo density without
//! coloring the spectrum.

use crate::DelayLine;
use crate::Q15;

/// Fixed diffusion coefficient shared by every allpass section (0.5).
///
/// Not a user parameter: the classic tuning bakes it in, and the engine
/// never changes it.
pub const ALLPASS_FEEDBACK: Q15 = Q15::HALF;

/// Schroeder allpass filter with the fixed [`ALLPASS_FEEDBACK`] coefficient.
///
/// Uses the delayed-feedback form
///
/// ```text
/// acc    = in + buf·g      (stored)
/// out    = buf − acc·g
/// ```
///
/// with both the accumulator and the output saturated to Q15. There is no
/// per-filter coefficient state; the only state is the delay line.
#[derive(Debug, Clone)]
pub struct AllpassFilter<const N: usize> {
    delay: DelayLine<N>,
}

impl<const N: usize> AllpassFilter<N> {
    /// Creates a zeroed allpass filter with active length `N`.
    pub fn new() -> Self {
        Self {
            delay: DelayLine::new(),
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

    /// Processes one sample through the allpass section.
    #[inline]
    pub fn process(&mut self, input: Q15) -> Q15 {
        let bufout = self.delay.read();

        let acc = input.saturating_add(bufout * ALLPASS_FEEDBACK);
        self.delay.write_advance(acc);

        Q15::saturate(i32::from(bufout.raw()) - i32::from((acc * ALLPASS_FEEDBACK).raw()))
    }

    /// Clears the delay line.
    pub fn clear(&mut self) {
        self.delay.clear();
    }
}

impl<const N: usize> Default for AllpassFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}
