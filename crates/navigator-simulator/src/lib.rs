//! Desktop simulator for the navigator sensor module.
//!
//! [`SimulatedNavigator`] implements the [`Navigator`] binding surface over
//! synthetic sensor data so the demo binaries can run without the board.
//! Output state (LEDs, the neopixel strip) is held for inspection instead of
//! being driven onto hardware.

mod environment;

pub use environment::SyntheticEnvironment;

use std::time::Instant;

use log::{debug, info};

use navigator_core::{AdcChannel, AdcData, AxisData, Navigator, NavigatorError, Rgb, UserLed};

/// Longest neopixel strip the simulator keeps state for.
pub const MAX_STRIP_PIXELS: usize = 64;

/// Software stand-in for the navigator board.
pub struct SimulatedNavigator {
    env: SyntheticEnvironment,
    last_tick: Instant,
    initialized: bool,
    leds: [bool; UserLed::COUNT],
    strip: Vec<Rgb>,
}

impl SimulatedNavigator {
    pub fn new() -> Self {
        Self {
            env: SyntheticEnvironment::new(),
            last_tick: Instant::now(),
            initialized: false,
            leds: [false; UserLed::COUNT],
            strip: Vec::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current state of a user LED.
    pub fn led(&self, led: UserLed) -> bool {
        self.leds[led.index()]
    }

    /// The last strip written through [`Navigator::set_neopixel`].
    pub fn strip(&self) -> &[Rgb] {
        &self.strip
    }

    fn ready(&self) -> Result<(), NavigatorError> {
        if self.initialized {
            Ok(())
        } else {
            Err(NavigatorError::NotInitialized)
        }
    }

    /// Feed wall-clock time into the synthetic environment.
    fn tick(&mut self) {
        let dt = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        self.env.advance(dt.as_secs_f64());
    }
}

impl Default for SimulatedNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for SimulatedNavigator {
    fn init(&mut self) -> Result<(), NavigatorError> {
        if !self.initialized {
            self.initialized = true;
            self.last_tick = Instant::now();
            info!("navigator simulator initialized");
        }
        Ok(())
    }

    fn set_led(&mut self, led: UserLed, on: bool) -> Result<(), NavigatorError> {
        self.ready()?;
        self.leds[led.index()] = on;
        debug!("{led:?} set {}", if on { "on" } else { "off" });
        Ok(())
    }

    fn read_temperature(&mut self) -> Result<f32, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(self.env.temperature_c())
    }

    fn read_pressure(&mut self) -> Result<f32, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(self.env.pressure_hpa())
    }

    fn read_leak(&mut self) -> Result<bool, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(self.env.leak_detected())
    }

    fn read_adc_all(&mut self) -> Result<AdcData, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(AdcData::new(self.env.adc_counts()))
    }

    fn read_adc(&mut self, channel: AdcChannel) -> Result<i16, NavigatorError> {
        let sample = self.read_adc_all()?;
        Ok(sample.value(channel))
    }

    fn read_mag(&mut self) -> Result<AxisData, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(self.env.magnetic_field_ut())
    }

    fn read_accel(&mut self) -> Result<AxisData, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(self.env.acceleration_ms2())
    }

    fn read_gyro(&mut self) -> Result<AxisData, NavigatorError> {
        self.ready()?;
        self.tick();
        Ok(self.env.angular_rate_rads())
    }

    fn set_neopixel(&mut self, colors: &[Rgb]) -> Result<(), NavigatorError> {
        self.ready()?;
        if colors.len() > MAX_STRIP_PIXELS {
            return Err(NavigatorError::StripTooLong {
                len: colors.len(),
                max: MAX_STRIP_PIXELS,
            });
        }
        self.strip.clear();
        self.strip.extend_from_slice(colors);
        debug!("neopixel strip updated, {} pixel(s)", colors.len());
        Ok(())
    }
}

/// `true` when the `CI` environment variable equals `"true"`, the short-
/// circuit the demos use to skip sensor access on build machines.
pub fn running_in_ci() -> bool {
    std::env::var("CI").is_ok_and(|v| v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_require_init() {
        let mut nav = SimulatedNavigator::new();
        assert_eq!(
            nav.read_temperature().unwrap_err(),
            NavigatorError::NotInitialized
        );
        assert_eq!(
            nav.set_led(UserLed::Led1, true).unwrap_err(),
            NavigatorError::NotInitialized
        );
        assert_eq!(
            nav.set_neopixel(&[Rgb::OFF]).unwrap_err(),
            NavigatorError::NotInitialized
        );
    }

    #[test]
    fn init_is_idempotent() {
        let mut nav = SimulatedNavigator::new();
        assert!(!nav.is_initialized());
        nav.init().unwrap();
        assert!(nav.is_initialized());
        nav.set_led(UserLed::Led2, true).unwrap();
        nav.init().unwrap();
        assert!(nav.led(UserLed::Led2));
    }

    #[test]
    fn led_state_round_trips() {
        let mut nav = SimulatedNavigator::new();
        nav.init().unwrap();
        for led in UserLed::ALL {
            assert!(!nav.led(led));
            nav.set_led(led, true).unwrap();
            assert!(nav.led(led));
        }
        nav.set_led(UserLed::Led1, false).unwrap();
        assert!(!nav.led(UserLed::Led1));
        assert!(nav.led(UserLed::Led3));
    }

    #[test]
    fn strip_keeps_the_last_write() {
        let mut nav = SimulatedNavigator::new();
        nav.init().unwrap();

        let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
        nav.set_neopixel(&colors).unwrap();
        assert_eq!(nav.strip(), &colors);

        nav.set_neopixel(&[Rgb::OFF]).unwrap();
        assert_eq!(nav.strip(), &[Rgb::OFF]);
    }

    #[test]
    fn oversized_strip_is_rejected() {
        let mut nav = SimulatedNavigator::new();
        nav.init().unwrap();

        let colors = vec![Rgb::OFF; MAX_STRIP_PIXELS + 1];
        assert_eq!(
            nav.set_neopixel(&colors).unwrap_err(),
            NavigatorError::StripTooLong {
                len: MAX_STRIP_PIXELS + 1,
                max: MAX_STRIP_PIXELS,
            }
        );
        assert!(nav.strip().is_empty());
    }

    #[test]
    fn reads_look_like_the_bench() {
        let mut nav = SimulatedNavigator::new();
        nav.init().unwrap();

        let temp = nav.read_temperature().unwrap();
        assert!((21.0..=27.0).contains(&temp));

        let pressure = nav.read_pressure().unwrap();
        assert!((1008.0..=1019.0).contains(&pressure));

        assert!(!nav.read_leak().unwrap());

        let accel = nav.read_accel().unwrap();
        assert!((accel.magnitude() - 9.806).abs() < 0.3);
    }

    #[test]
    fn single_channel_reads_track_the_full_sample() {
        let mut nav = SimulatedNavigator::new();
        nav.init().unwrap();

        // Back-to-back reads are wall-clock ticks apart, so the waves can
        // move a few counts between samples, never more.
        let all = nav.read_adc_all().unwrap();
        for channel in [
            AdcChannel::Ch0,
            AdcChannel::Ch1,
            AdcChannel::Ch2,
            AdcChannel::Ch3,
        ] {
            let count = nav.read_adc(channel).unwrap();
            let delta = (count - all.value(channel)).abs();
            assert!(delta <= 100, "{channel:?} moved {delta} counts");
        }

        // Differential reads resolve against the same sample.
        let diff = nav.read_adc(AdcChannel::DiffCh0Ch1).unwrap();
        assert!((-1500..=1500).contains(&diff), "differential {diff}");
    }
}
