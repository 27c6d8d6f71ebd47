//! Register addresses and constants for the AXP192
//!
//! This module defines the register addresses, voltage ranges, and step
//! sizes used by the driver. Based on the AXP192 datasheet.

/// Default 7-bit I2C slave address of the AXP192.
pub const AXP192_SLAVE_ADDRESS: u8 = 0x34;

/// Device type/ID register - Contains chip identification
pub const AXP192_IC_TYPE: u8 = 0x03;

/// Expected chip ID value for AXP192
pub const AXP192_CHIP_ID: u8 = 0x03;

/// Power output control register - Enable bits for DCDC1/2/3, LDO2/3 and EXTEN
pub const AXP192_OUTPUT_CTRL: u8 = 0x12;

/// DCDC2 voltage setting register (700-3500mV, 25mV steps)
pub const AXP192_DCDC2_VOL_SET: u8 = 0x23;

/// DCDC1 voltage setting register (700-3500mV, 25mV steps)
pub const AXP192_DCDC1_VOL_SET: u8 = 0x26;

/// DCDC3 voltage setting register (700-3500mV, 25mV steps)
pub const AXP192_DCDC3_VOL_SET: u8 = 0x27;

/// LDO2/LDO3 voltage setting register - LDO2 in the high nibble, LDO3 in the low
pub const AXP192_LDO23_VOL_SET: u8 = 0x28;

/// VBUS-IPSOUT path management register
pub const AXP192_VBUS_IPSOUT_CTRL: u8 = 0x30;

/// VOFF shutdown voltage setting register
pub const AXP192_VOFF_SET: u8 = 0x31;

/// Shutdown, battery detection and CHGLED control register
pub const AXP192_SHUTDOWN_BATT_CHGLED_CTRL: u8 = 0x32;

/// Charge control register 1 - Target voltage and charge current
pub const AXP192_CHARGE_CTRL1: u8 = 0x33;

/// Backup battery charge control register
pub const AXP192_BACKUP_CHG_CTRL: u8 = 0x35;

/// PEK (power key) parameter setting register
pub const AXP192_PEK_CTRL: u8 = 0x36;

/// High temperature charge protection threshold register
pub const AXP192_VHTF_CHG_SET: u8 = 0x39;

/// ADC enable register 1 - Per-channel enable bits
pub const AXP192_ADC_EN1: u8 = 0x82;

/// ADC sample rate and TS pin control register
pub const AXP192_ADC_RATE_TS_CTRL: u8 = 0x84;

/// GPIO0 function control register
pub const AXP192_GPIO0_CTRL: u8 = 0x90;

/// GPIO0 LDO mode output voltage register (high nibble, 1800-3300mV, 100mV steps)
pub const AXP192_GPIO0_LDO_VOL_SET: u8 = 0x91;

/// Enable bit positions in [`AXP192_OUTPUT_CTRL`]
pub const AXP192_DCDC1_EN_MASK: u8 = 1 << 0;
pub const AXP192_DCDC3_EN_MASK: u8 = 1 << 1;
pub const AXP192_LDO2_EN_MASK: u8 = 1 << 2;
pub const AXP192_LDO3_EN_MASK: u8 = 1 << 3;
pub const AXP192_DCDC2_EN_MASK: u8 = 1 << 4;
pub const AXP192_EXTEN_MASK: u8 = 1 << 6;

/// BACKUP charge enable bit in [`AXP192_BACKUP_CHG_CTRL`]
pub const AXP192_BACKUP_EN_MASK: u8 = 1 << 7;

/// Shutdown request bit in [`AXP192_SHUTDOWN_BATT_CHGLED_CTRL`]
pub const AXP192_SHUTDOWN_MASK: u8 = 1 << 7;

/// GPIO0 function code for low-noise LDO output mode
pub const AXP192_GPIO0_LDO_MODE: u8 = 0b0000_0010;

/// DCDC1/2/3 output range and resolution
pub const AXP192_DCDC_VOL_MIN: u16 = 700;
pub const AXP192_DCDC_VOL_MAX: u16 = 3500;
pub const AXP192_DCDC_VOL_STEPS: u16 = 25;

/// LDO2/LDO3 (and GPIO0 in LDO mode) output range and resolution
pub const AXP192_LDO_VOL_MIN: u16 = 1800;
pub const AXP192_LDO_VOL_MAX: u16 = 3300;
pub const AXP192_LDO_VOL_STEPS: u16 = 100;

/// Fixed configuration written at the end of [`begin`](crate::Axp192::begin),
/// in order. Chip-specific protection, charging and ADC setup; the values
/// are not derived from the caller's configuration.
pub(crate) const AXP192_INIT_TAIL: [(u8, u8); 7] = [
    (AXP192_ADC_RATE_TS_CTRL, 0b1111_0010), // ADC 200Hz
    (AXP192_ADC_EN1, 0b1111_1111),          // ADC all channels
    (AXP192_CHARGE_CTRL1, 0b1100_0000),     // Charge 4.2V, 100mA
    (AXP192_PEK_CTRL, 0b0000_1100),         // PEK 128ms, power off 4s
    (AXP192_VBUS_IPSOUT_CTRL, 0b1000_0000), // VBUS open
    (AXP192_VHTF_CHG_SET, 0b1111_1100),     // Temp protection
    (AXP192_VOFF_SET, 0b0000_0100),         // Power off at 3.0V
];
