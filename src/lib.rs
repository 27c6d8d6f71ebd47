#![no_std]
//! # AXP192 Power Management IC Driver
//!
//! This crate provides an embedded driver for the AXP192 Power Management
//! IC (PMIC) as found in M5Stack and similar ESP32 devices. It covers:
//! - DCDC1-3 buck converter voltage control
//! - LDO2/LDO3 linear regulator voltage control
//! - EXTEN external power switch and backup battery charging
//! - GPIO0 mode and LDO output control
//! - One-shot startup sequencing of all rails plus charging, protection
//!   and ADC configuration
//!
//! The driver never caches register contents: every bit toggle re-reads
//! the affected register over the bus, so the chip's own memory stays
//! the single source of truth.
//!
//! A quirk of this chip family is preserved deliberately: requesting a
//! voltage outside a rail's valid range is not an error, it switches the
//! rail off.
//!
//! ## Example
//!
//! ```no_run
//! use axp192::{Axp192, Error, PowerConfig};
//! # use embedded_hal::i2c::I2c;
//! # fn example<I: I2c>(i2c: I) -> Result<(), Error<I::Error>> {
//! let mut pmic = Axp192::new(i2c);
//!
//! // M5StickC-style power-up: ESP32 on DCDC1, peripherals on LDO2/3,
//! // microphone on GPIO0.
//! pmic.begin(PowerConfig {
//!     exten: true,
//!     backup: true,
//!     dcdc1: 3300,
//!     ldo2: 3000,
//!     ldo3: 3000,
//!     gpio0: 2800,
//!     ..PowerConfig::default()
//! })?;
//!
//! // Later adjustments go through the individual rail setters.
//! pmic.set_dcdc3(1500)?;
//! pmic.set_ldo3(0)?; // out of range: switches LDO3 off
//! # Ok(())
//! # }
//! ```
//!
//! ## Async Support
//!
//! When the `async` feature is enabled, the crate provides `AsyncAxp192`
//! with the same API but async/await support:
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), axp192::Error<I::Error>> {
//! use axp192::{AsyncAxp192, PowerConfig};
//!
//! let mut pmic = AsyncAxp192::new(i2c);
//! pmic.begin(PowerConfig::default()).await?;
//! pmic.set_dcdc1(3300).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! With the `defmt` feature enabled, every register read and write emits
//! a `defmt::trace!` line carrying the register address and value.

#[cfg(test)]
extern crate std;

mod driver;
#[cfg(feature = "async")]
mod driver_async;
mod error;
mod registers;
mod types;

// Re-export main types
pub use driver::Axp192;
#[cfg(feature = "async")]
pub use driver_async::AsyncAxp192;
pub use error::Error;
pub use registers::*;
pub use types::*;
