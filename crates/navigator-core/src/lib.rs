//! Hardware-independent core library for the navigator sensor module.
//!
//! This crate contains everything a navigator backend and its consumers
//! share: the transient data types carried across the binding surface, the
//! [`Navigator`] trait itself, and the sine-based rainbow color ramp used by
//! the LED demos.
//!
//! The real hardware driver lives behind the [`Navigator`] trait and is not
//! part of this workspace; the `navigator-simulator` crate provides a
//! synthetic implementation for desktop use.

pub mod color;
pub mod navigator;
pub mod types;

pub use color::{RAINBOW_STEPS, RainbowCycle, Rgb, color_from_sine};
pub use navigator::{Navigator, NavigatorError};
pub use types::{AdcChannel, AdcData, AxisData, UserLed};
