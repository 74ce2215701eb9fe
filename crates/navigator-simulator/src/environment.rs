//! Synthetic sensor data generation.
//!
//! Every reading is derived from phase-shifted sinusoids over an advancing
//! clock, so repeated reads drift the way a real enclosure sitting on a
//! bench would, without ever needing hardware.

use navigator_core::AxisData;

/// Standard atmosphere at sea level, hPa.
const PRESSURE_BASELINE_HPA: f64 = 1013.25;

/// Local gravity, m/s².
const GRAVITY_MS2: f64 = 9.806;

/// Clock-driven generator behind [`crate::SimulatedNavigator`].
///
/// The clock only moves through [`advance`](Self::advance), which keeps the
/// generated values a pure function of elapsed time and makes the whole
/// environment deterministic under test.
#[derive(Clone, Debug, Default)]
pub struct SyntheticEnvironment {
    elapsed_secs: f64,
}

impl SyntheticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. Negative deltas are ignored.
    pub fn advance(&mut self, dt_secs: f64) {
        self.elapsed_secs += dt_secs.max(0.0);
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Enclosure temperature in °C, drifting slowly around 24 °C.
    pub fn temperature_c(&self) -> f32 {
        let t = self.elapsed_secs;
        (24.0 + 2.0 * (t / 150.0).sin() + 0.4 * (t / 31.0).cos()) as f32
    }

    /// Barometric pressure in hPa, a gentle wobble around one atmosphere.
    pub fn pressure_hpa(&self) -> f32 {
        let t = self.elapsed_secs;
        (PRESSURE_BASELINE_HPA + 4.0 * (t / 240.0).sin() + 0.8 * (t / 53.0).cos()) as f32
    }

    /// Leak probe: the simulated enclosure stays dry.
    pub fn leak_detected(&self) -> bool {
        false
    }

    /// Magnetometer sample in µT: a fixed Earth-like field with a slight
    /// wander, as if the bench had nearby ferrous clutter.
    pub fn magnetic_field_ut(&self) -> AxisData {
        let t = self.elapsed_secs;
        AxisData::new(
            (22.4 + 0.6 * (t / 45.0).sin()) as f32,
            (5.2 + 0.6 * (t / 52.0 + 2.1).sin()) as f32,
            (-42.7 + 0.6 * (t / 61.0 + 4.0).sin()) as f32,
        )
    }

    /// Accelerometer sample in m/s²: gravity on Z plus bench vibration.
    pub fn acceleration_ms2(&self) -> AxisData {
        let t = self.elapsed_secs;
        AxisData::new(
            (0.12 * (t / 9.0).sin()) as f32,
            (0.12 * (t / 11.0).cos()) as f32,
            (GRAVITY_MS2 + 0.05 * (t / 7.0).sin()) as f32,
        )
    }

    /// Gyroscope sample in rad/s, near zero for a module at rest.
    pub fn angular_rate_rads(&self) -> AxisData {
        let t = self.elapsed_secs;
        AxisData::new(
            (0.015 * (t / 5.0).sin()) as f32,
            (0.015 * (t / 6.0).cos()) as f32,
            (0.008 * (t / 8.0).sin()) as f32,
        )
    }

    /// Raw counts for the four single-ended ADC channels, mid-scale waves
    /// with a distinct period and phase per channel.
    pub fn adc_counts(&self) -> [i16; 4] {
        let t = self.elapsed_secs;
        std::array::from_fn(|i| {
            let period = 18.0 + 6.0 * i as f64;
            let phase = 0.9 * i as f64;
            (1200.0 + 700.0 * (t / period + phase).sin()) as i16
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_are_a_function_of_the_clock() {
        let mut a = SyntheticEnvironment::new();
        let mut b = SyntheticEnvironment::new();
        a.advance(17.5);
        b.advance(10.0);
        b.advance(7.5);
        assert_eq!(a.temperature_c(), b.temperature_c());
        assert_eq!(a.adc_counts(), b.adc_counts());
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut env = SyntheticEnvironment::new();
        env.advance(5.0);
        env.advance(-100.0);
        assert!((env.elapsed_secs() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn initial_temperature_sits_at_the_baseline() {
        let env = SyntheticEnvironment::new();
        // sin(0) drops the slow term, cos(0) leaves the 0.4 ripple.
        assert!((env.temperature_c() - 24.4).abs() < 1e-3);
    }

    #[test]
    fn readings_stay_in_physical_ranges() {
        let mut env = SyntheticEnvironment::new();
        for _ in 0..500 {
            env.advance(3.7);

            let temp = env.temperature_c();
            assert!((21.0..=27.0).contains(&temp), "temperature {temp}");

            let pressure = env.pressure_hpa();
            assert!((1008.0..=1019.0).contains(&pressure), "pressure {pressure}");

            for count in env.adc_counts() {
                assert!((400..=2000).contains(&count), "adc count {count}");
            }

            assert!(env.angular_rate_rads().magnitude() < 0.05);
        }
    }

    #[test]
    fn accelerometer_reads_roughly_one_g() {
        let mut env = SyntheticEnvironment::new();
        for _ in 0..100 {
            env.advance(2.3);
            let g = env.acceleration_ms2().magnitude();
            assert!((g - 9.806).abs() < 0.3, "magnitude {g}");
        }
    }

    #[test]
    fn enclosure_is_dry() {
        let mut env = SyntheticEnvironment::new();
        env.advance(1e6);
        assert!(!env.leak_detected());
    }
}
