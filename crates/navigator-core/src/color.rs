//! RGB color type and the sine-based rainbow ramp.

use std::f32::consts::PI;

/// Animation steps in one full rainbow cycle.
pub const RAINBOW_STEPS: usize = 1000;

/// Phase offsets that spread the three channels across the cycle. Note these
/// are 0.33 and 0.67, not exact thirds.
const GREEN_PHASE_OFFSET: f32 = 0.33;
const BLUE_PHASE_OFFSET: f32 = 0.67;

/// One neopixel color, 0–255 per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels dark.
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

/// Color at position `ratio` (0.0–1.0) along the rainbow cycle.
///
/// Each channel is a sine wave biased into 0.0–1.0 and truncated onto the
/// 0–255 range; the three channels run the same wave at different phases.
/// `ratio` values outside the unit interval simply wrap around the cycle.
pub fn color_from_sine(ratio: f32) -> Rgb {
    let channel = |offset: f32| {
        let level = ((ratio + offset) * 2.0 * PI).sin() * 0.5 + 0.5;
        (level * 255.0) as u8
    };

    Rgb::new(
        channel(0.0),
        channel(GREEN_PHASE_OFFSET),
        channel(BLUE_PHASE_OFFSET),
    )
}

/// Endless iterator over the rainbow animation, one color per step.
///
/// Wraps back to the start of the cycle after `steps` colors, so driving a
/// strip from it produces a continuous animation.
#[derive(Clone, Debug)]
pub struct RainbowCycle {
    step: usize,
    steps: usize,
}

impl RainbowCycle {
    /// A cycle of [`RAINBOW_STEPS`] steps.
    pub const fn new() -> Self {
        Self {
            step: 0,
            steps: RAINBOW_STEPS,
        }
    }

    /// A cycle with a custom step count (clamped to at least one step).
    pub fn with_steps(steps: usize) -> Self {
        Self {
            step: 0,
            steps: steps.max(1),
        }
    }
}

impl Default for RainbowCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RainbowCycle {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        let ratio = self.step as f32 / self.steps as f32;
        self.step = (self.step + 1) % self.steps;
        Some(color_from_sine(ratio))
    }
}
