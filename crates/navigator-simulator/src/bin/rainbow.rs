//! Endless rainbow animation on the navigator's neopixel output.
//!
//! One color per frame from the sine ramp, pushed to a single pixel on a
//! fixed interval. Runs until interrupted.

use std::thread;
use std::time::Duration;

use log::info;

use navigator_core::{Navigator, NavigatorError, RainbowCycle};
use navigator_simulator::SimulatedNavigator;

/// Delay between animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<(), NavigatorError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut nav = SimulatedNavigator::new();
    nav.init()?;

    info!("Creating rainbow effect!");
    for color in RainbowCycle::new() {
        nav.set_neopixel(&[color])?;
        thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}
