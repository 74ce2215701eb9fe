//! Sequential walk across everything the navigator module exposes.
//!
//! Initializes the module, switches a user LED on, reads each sensor once
//! and prints it, then switches the LED back off. On CI the sensor walk is
//! skipped entirely.

use log::info;

use navigator_core::{AdcChannel, Navigator, NavigatorError, UserLed};
use navigator_simulator::{SimulatedNavigator, running_in_ci};

fn main() -> Result<(), NavigatorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Navigator demo, system details:");
    info!(
        "Running on {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    if running_in_ci() {
        info!("Running from CI");
        info!("Not possible to test navigator sensors yet.");
        return Ok(());
    }

    info!("Initiating navigator module.");
    let mut nav = SimulatedNavigator::new();
    nav.init()?;

    info!("Setting led on!");
    nav.set_led(UserLed::Led1, true)?;

    info!("Temperature: {}", nav.read_temperature()?);
    info!("Pressure: {}", nav.read_pressure()?);
    info!("Leak sensor: {}", nav.read_leak()?);

    let adc = nav.read_adc_all()?;
    info!(
        "Reading ADC Channels: 1 = {}, 2 = {}, 3 = {}, 4 = {}",
        adc.channel[0], adc.channel[1], adc.channel[2], adc.channel[3]
    );
    info!("Data ADC Channel: 1 = {}", nav.read_adc(AdcChannel::Ch1)?);

    let mag = nav.read_mag()?;
    info!("Magnetic field: X = {}, Y = {}, Z = {}", mag.x, mag.y, mag.z);

    let accel = nav.read_accel()?;
    info!(
        "Acceleration: X = {}, Y = {}, Z = {}",
        accel.x, accel.y, accel.z
    );

    let gyro = nav.read_gyro()?;
    info!("Gyroscope: X = {}, Y = {}, Z = {}", gyro.x, gyro.y, gyro.z);

    info!("Setting led off!");
    nav.set_led(UserLed::Led1, false)?;

    Ok(())
}
