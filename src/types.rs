//! Type definitions for AXP192 configuration

/// Desired startup state for every controllable output of the AXP192.
///
/// Voltages are in millivolts. A value outside a rail's valid range
/// (700-3500mV for DCDC1-3, 1800-3300mV for LDO2/3) switches that rail
/// off, so `0` reads as "disabled". For `gpio0` an out-of-range value is
/// written verbatim to the pin's function register and selects a pin
/// mode instead of a voltage; see [`Gpio0Mode`].
///
/// Built once by the caller and consumed by
/// [`begin`](crate::Axp192::begin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerConfig {
    /// EXTEN external power switch
    pub exten: bool,
    /// Backup battery (RTC) charging
    pub backup: bool,
    /// DCDC1 output in mV
    pub dcdc1: u16,
    /// DCDC2 output in mV
    pub dcdc2: u16,
    /// DCDC3 output in mV
    pub dcdc3: u16,
    /// LDO2 output in mV
    pub ldo2: u16,
    /// LDO3 output in mV
    pub ldo3: u16,
    /// GPIO0 output in mV, or a raw [`Gpio0Mode`] function code
    pub gpio0: u16,
    /// GPIO1 setting (unused on supported hardware variants)
    pub gpio1: u16,
    /// GPIO2 setting (unused on supported hardware variants)
    pub gpio2: u16,
    /// GPIO3 setting (unused on supported hardware variants)
    pub gpio3: u16,
    /// GPIO4 setting (unused on supported hardware variants)
    pub gpio4: u16,
}

impl Default for PowerConfig {
    /// Everything off: all rails disabled, GPIO0 in NMOS open-drain mode.
    fn default() -> Self {
        Self {
            exten: false,
            backup: false,
            dcdc1: 0,
            dcdc2: 0,
            dcdc3: 0,
            ldo2: 0,
            ldo3: 0,
            gpio0: Gpio0Mode::NmosOpenDrain as u16,
            gpio1: 0,
            gpio2: 0,
            gpio3: 0,
            gpio4: 0,
        }
    }
}

/// GPIO0 function codes (register 0x90)
///
/// These are the raw mode-selector values the chip accepts in place of a
/// millivolt target; pass one as `gpio0` in [`PowerConfig`] or to
/// [`set_gpio0`](crate::Axp192::set_gpio0). The low-noise LDO mode is
/// selected automatically when an in-range voltage is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Gpio0Mode {
    NmosOpenDrain = 0,
    UniversalInput = 1,
    LowNoiseLdo = 2,
    AdcInput = 4,
    LowOutput = 5,
    Floating = 6,
}
