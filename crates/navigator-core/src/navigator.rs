//! The navigator binding surface.
//!
//! [`Navigator`] is the seam between demo/consumer code and whatever
//! actually talks to the board. Implementations own all device state; the
//! trait only promises the operations below and the initialization gate.

use thiserror::Error;

use crate::color::Rgb;
use crate::types::{AdcChannel, AdcData, AxisData, UserLed};

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("navigator module not initialized")]
    NotInitialized,
    #[error("{sensor} read failed: {details}")]
    ReadFailed {
        sensor: &'static str,
        details: &'static str,
    },
    #[error("neopixel strip of {len} pixels exceeds the supported {max}")]
    StripTooLong { len: usize, max: usize },
}

/// Operations exposed by a navigator backend.
///
/// `init` must succeed before anything else; every other operation fails
/// with [`NavigatorError::NotInitialized`] until then. Calling `init` on an
/// already-initialized backend is a no-op.
pub trait Navigator {
    /// Bring the module up. Idempotent.
    fn init(&mut self) -> Result<(), NavigatorError>;

    /// Drive one of the user LEDs.
    fn set_led(&mut self, led: UserLed, on: bool) -> Result<(), NavigatorError>;

    /// Board temperature in °C.
    fn read_temperature(&mut self) -> Result<f32, NavigatorError>;

    /// Barometric pressure in hPa.
    fn read_pressure(&mut self) -> Result<f32, NavigatorError>;

    /// Leak probe state, `true` when water is detected.
    fn read_leak(&mut self) -> Result<bool, NavigatorError>;

    /// One conversion of all four single-ended ADC channels.
    fn read_adc_all(&mut self) -> Result<AdcData, NavigatorError>;

    /// One conversion of a single (possibly differential) ADC channel.
    fn read_adc(&mut self, channel: AdcChannel) -> Result<i16, NavigatorError>;

    /// Magnetometer sample in µT.
    fn read_mag(&mut self) -> Result<AxisData, NavigatorError>;

    /// Accelerometer sample in m/s².
    fn read_accel(&mut self) -> Result<AxisData, NavigatorError>;

    /// Gyroscope sample in rad/s.
    fn read_gyro(&mut self) -> Result<AxisData, NavigatorError>;

    /// Push a color per pixel to the neopixel strip; the slice length is the
    /// pixel count.
    fn set_neopixel(&mut self, colors: &[Rgb]) -> Result<(), NavigatorError>;
}
