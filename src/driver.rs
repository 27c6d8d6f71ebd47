//! Synchronous AXP192 PMIC driver implementation

use crate::{error::Error, registers::*, types::*};
use embedded_hal::i2c::I2c;

/// AXP192 PMIC driver
///
/// Register contents are never cached; every read-modify-write cycle
/// goes back to the chip, which stays the single source of truth. The
/// driver assumes it has the bus to itself for the duration of each
/// call; callers sharing the bus across threads must serialize access
/// around the whole driver.
pub struct Axp192<I> {
    i2c: I,
    addr: u8,
}

impl<I> Axp192<I>
where
    I: I2c,
{
    /// Create a new AXP192 driver instance
    ///
    /// # Arguments
    /// * `i2c` - I2C bus instance
    ///
    /// # Example
    /// ```no_run
    /// # use axp192::Axp192;
    /// # use embedded_hal::i2c::I2c;
    /// # fn example<I: I2c>(i2c: I) {
    /// let pmic = Axp192::new(i2c);
    /// # }
    /// ```
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, AXP192_SLAVE_ADDRESS)
    }

    /// Create a new AXP192 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Verify that the chip answers with the AXP192 ID
    ///
    /// Returns `Error::DeviceNotFound` if the chip ID doesn't match
    pub fn probe(&mut self) -> Result<(), Error<I::Error>> {
        let chip_id = self.read_register(AXP192_IC_TYPE)?;
        if chip_id != AXP192_CHIP_ID {
            return Err(Error::DeviceNotFound);
        }
        Ok(())
    }

    /// Apply a full startup configuration
    ///
    /// Rails are applied in a fixed order: EXTEN and backup charging
    /// first, then DCDC1-3, LDO2/3 and GPIO0-4, followed by a tail of
    /// chip-specific charging, protection and ADC configuration written
    /// verbatim. Later steps assume the enable states committed by
    /// earlier ones, so the order is part of the contract. Every setter
    /// runs unconditionally; each rail's own range check decides
    /// between enable and disable.
    pub fn begin(&mut self, config: PowerConfig) -> Result<(), Error<I::Error>> {
        self.set_exten(config.exten)?;
        self.set_backup(config.backup)?;

        self.set_dcdc1(config.dcdc1)?;
        self.set_dcdc2(config.dcdc2)?;
        self.set_dcdc3(config.dcdc3)?;

        self.set_ldo2(config.ldo2)?;
        self.set_ldo3(config.ldo3)?;

        self.set_gpio0(config.gpio0)?;
        self.set_gpio1(config.gpio1)?;
        self.set_gpio2(config.gpio2)?;
        self.set_gpio3(config.gpio3)?;
        self.set_gpio4(config.gpio4)?;

        for (reg, value) in AXP192_INIT_TAIL {
            self.write_register(reg, value)?;
        }
        Ok(())
    }

    /// Request a full chip shutdown
    ///
    /// All outputs turn off. On battery power this cuts the supply of
    /// the host itself, so nothing after a successful call should
    /// expect to run.
    pub fn power_off(&mut self) -> Result<(), Error<I::Error>> {
        self.set_register_bits(AXP192_SHUTDOWN_BATT_CHGLED_CTRL, AXP192_SHUTDOWN_MASK)
    }

    // ========================================
    // Low-level I2C operations
    // ========================================

    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.addr, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("axp192 read {=u8:x} = {=u8:x}", reg, buf[0]);
        Ok(buf[0])
    }

    /// Write a single register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("axp192 write {=u8:x} = {=u8:x}", reg, value);
        self.i2c.write(self.addr, &[reg, value]).map_err(Error::I2c)
    }

    /// Set the bits of `mask` in a register, leaving the others untouched
    fn set_register_bits(&mut self, reg: u8, mask: u8) -> Result<(), Error<I::Error>> {
        let val = self.read_register(reg)?;
        self.write_register(reg, val | mask)
    }

    /// Clear the bits of `mask` in a register, leaving the others untouched
    fn clear_register_bits(&mut self, reg: u8, mask: u8) -> Result<(), Error<I::Error>> {
        let val = self.read_register(reg)?;
        self.write_register(reg, val & !mask)
    }

    /// Report whether any bit of `mask` is set in a register
    fn get_register_bits(&mut self, reg: u8, mask: u8) -> Result<bool, Error<I::Error>> {
        let val = self.read_register(reg)?;
        Ok((val & mask) != 0)
    }

    // ========================================
    // DCDC1 Control
    // ========================================

    /// Set the DCDC1 output voltage (700-3500mV, 25mV steps)
    ///
    /// A request outside the valid range switches the rail off instead
    /// of failing.
    pub fn set_dcdc1(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_DCDC_VOL_MIN..=AXP192_DCDC_VOL_MAX).contains(&millivolt) {
            return self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC1_EN_MASK);
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC1_EN_MASK)?;

        let val = ((millivolt - AXP192_DCDC_VOL_MIN) / AXP192_DCDC_VOL_STEPS) as u8 & 0x7f;
        self.write_register(AXP192_DCDC1_VOL_SET, val)
    }

    /// Get the DCDC1 output voltage in mV
    pub fn get_dcdc1_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_DCDC1_VOL_SET)? & 0x7f;
        Ok((val as u16) * AXP192_DCDC_VOL_STEPS + AXP192_DCDC_VOL_MIN)
    }

    /// Check if DCDC1 is enabled
    pub fn is_dcdc1_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC1_EN_MASK)
    }

    // ========================================
    // DCDC2 Control
    // ========================================

    /// Set the DCDC2 output voltage (700-3500mV, 25mV steps)
    ///
    /// A request outside the valid range switches the rail off instead
    /// of failing.
    pub fn set_dcdc2(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_DCDC_VOL_MIN..=AXP192_DCDC_VOL_MAX).contains(&millivolt) {
            return self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC2_EN_MASK);
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC2_EN_MASK)?;

        let val = ((millivolt - AXP192_DCDC_VOL_MIN) / AXP192_DCDC_VOL_STEPS) as u8 & 0x7f;
        self.write_register(AXP192_DCDC2_VOL_SET, val)
    }

    /// Get the DCDC2 output voltage in mV
    pub fn get_dcdc2_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_DCDC2_VOL_SET)? & 0x7f;
        Ok((val as u16) * AXP192_DCDC_VOL_STEPS + AXP192_DCDC_VOL_MIN)
    }

    /// Check if DCDC2 is enabled
    pub fn is_dcdc2_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC2_EN_MASK)
    }

    // ========================================
    // DCDC3 Control
    // ========================================

    /// Set the DCDC3 output voltage (700-3500mV, 25mV steps)
    ///
    /// A request outside the valid range switches the rail off instead
    /// of failing.
    pub fn set_dcdc3(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_DCDC_VOL_MIN..=AXP192_DCDC_VOL_MAX).contains(&millivolt) {
            return self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC3_EN_MASK);
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC3_EN_MASK)?;

        let val = ((millivolt - AXP192_DCDC_VOL_MIN) / AXP192_DCDC_VOL_STEPS) as u8 & 0x7f;
        self.write_register(AXP192_DCDC3_VOL_SET, val)
    }

    /// Get the DCDC3 output voltage in mV
    pub fn get_dcdc3_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_DCDC3_VOL_SET)? & 0x7f;
        Ok((val as u16) * AXP192_DCDC_VOL_STEPS + AXP192_DCDC_VOL_MIN)
    }

    /// Check if DCDC3 is enabled
    pub fn is_dcdc3_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC3_EN_MASK)
    }

    // ========================================
    // LDO2/LDO3 Control
    // ========================================

    /// Set the LDO2 output voltage (1800-3300mV, 100mV steps)
    ///
    /// LDO2 and LDO3 share one voltage register; LDO2 owns the high
    /// nibble and LDO3's half is preserved. A request outside the valid
    /// range switches the rail off instead of failing.
    pub fn set_ldo2(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_LDO_VOL_MIN..=AXP192_LDO_VOL_MAX).contains(&millivolt) {
            return self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO2_EN_MASK);
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO2_EN_MASK)?;

        let mut val = self.read_register(AXP192_LDO23_VOL_SET)? & 0x0f;
        val |= (((millivolt - AXP192_LDO_VOL_MIN) / AXP192_LDO_VOL_STEPS) as u8 & 0x0f) << 4;
        self.write_register(AXP192_LDO23_VOL_SET, val)
    }

    /// Get the LDO2 output voltage in mV
    pub fn get_ldo2_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_LDO23_VOL_SET)? >> 4;
        Ok((val as u16) * AXP192_LDO_VOL_STEPS + AXP192_LDO_VOL_MIN)
    }

    /// Check if LDO2 is enabled
    pub fn is_ldo2_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO2_EN_MASK)
    }

    /// Set the LDO3 output voltage (1800-3300mV, 100mV steps)
    ///
    /// LDO3 owns the low nibble of the shared voltage register; LDO2's
    /// half is preserved. A request outside the valid range switches
    /// the rail off instead of failing.
    pub fn set_ldo3(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_LDO_VOL_MIN..=AXP192_LDO_VOL_MAX).contains(&millivolt) {
            return self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO3_EN_MASK);
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO3_EN_MASK)?;

        let mut val = self.read_register(AXP192_LDO23_VOL_SET)? & 0xf0;
        val |= ((millivolt - AXP192_LDO_VOL_MIN) / AXP192_LDO_VOL_STEPS) as u8 & 0x0f;
        self.write_register(AXP192_LDO23_VOL_SET, val)
    }

    /// Get the LDO3 output voltage in mV
    pub fn get_ldo3_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_LDO23_VOL_SET)? & 0x0f;
        Ok((val as u16) * AXP192_LDO_VOL_STEPS + AXP192_LDO_VOL_MIN)
    }

    /// Check if LDO3 is enabled
    pub fn is_ldo3_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO3_EN_MASK)
    }

    // ========================================
    // EXTEN / Backup battery
    // ========================================

    /// Switch the EXTEN external power output on or off
    pub fn set_exten(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        if enable {
            self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_EXTEN_MASK)
        } else {
            self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_EXTEN_MASK)
        }
    }

    /// Check if the EXTEN output is enabled
    pub fn is_exten_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_EXTEN_MASK)
    }

    /// Switch backup battery (RTC) charging on or off
    pub fn set_backup(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        if enable {
            self.set_register_bits(AXP192_BACKUP_CHG_CTRL, AXP192_BACKUP_EN_MASK)
        } else {
            self.clear_register_bits(AXP192_BACKUP_CHG_CTRL, AXP192_BACKUP_EN_MASK)
        }
    }

    /// Check if backup battery charging is enabled
    pub fn is_backup_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_BACKUP_CHG_CTRL, AXP192_BACKUP_EN_MASK)
    }

    // ========================================
    // GPIO Control
    // ========================================

    /// Configure GPIO0
    ///
    /// An in-range voltage (1800-3300mV, 100mV steps) switches the pin
    /// into low-noise LDO mode and programs the quantized output
    /// voltage. Any other value is written verbatim to the function
    /// register as a mode selector, see [`Gpio0Mode`].
    pub fn set_gpio0(&mut self, value: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_LDO_VOL_MIN..=AXP192_LDO_VOL_MAX).contains(&value) {
            return self.write_register(AXP192_GPIO0_CTRL, value as u8);
        }
        self.write_register(AXP192_GPIO0_CTRL, AXP192_GPIO0_LDO_MODE)?;

        let val = (((value - AXP192_LDO_VOL_MIN) / AXP192_LDO_VOL_STEPS) as u8 & 0x0f) << 4;
        self.write_register(AXP192_GPIO0_LDO_VOL_SET, val)
    }

    /// GPIO1 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub fn set_gpio1(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }

    /// GPIO2 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub fn set_gpio2(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }

    /// GPIO3 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub fn set_gpio3(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }

    /// GPIO4 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub fn set_gpio4(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use std::vec;
    use std::vec::Vec;

    /// In-memory register file behind the I2C trait, recording every
    /// register write in order.
    struct MockBus {
        regs: [u8; 256],
        writes: Vec<(u8, u8)>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                regs: [0; 256],
                writes: Vec::new(),
            }
        }

        fn writes_to(&self, reg: u8) -> Vec<u8> {
            self.writes
                .iter()
                .filter(|(r, _)| *r == reg)
                .map(|(_, v)| *v)
                .collect()
        }
    }

    impl ErrorType for MockBus {
        type Error = Infallible;
    }

    impl I2c for MockBus {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let mut pointer = 0usize;
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(data) => {
                        pointer = data[0] as usize;
                        for (offset, value) in data[1..].iter().enumerate() {
                            let reg = pointer + offset;
                            self.regs[reg] = *value;
                            self.writes.push((reg as u8, *value));
                        }
                    }
                    Operation::Read(buf) => {
                        for (offset, slot) in buf.iter_mut().enumerate() {
                            *slot = self.regs[pointer + offset];
                        }
                    }
                }
            }
            Ok(())
        }
    }

    /// Bus that fails every transaction.
    struct FailingBus;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    impl embedded_hal::i2c::Error for BusFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for FailingBus {
        type Error = BusFault;
    }

    impl I2c for FailingBus {
        fn transaction(
            &mut self,
            _address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            Err(BusFault)
        }
    }

    #[test]
    fn dcdc1_request_1000mv_writes_code_12() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);
        pmic.set_dcdc1(1000).unwrap();

        assert_eq!(bus.regs[0x26], 0x0C);
        assert_eq!(bus.regs[0x12] & 0x01, 0x01);
        // Enable bit is committed before the voltage code.
        assert_eq!(bus.writes, vec![(0x12, 0x01), (0x26, 0x0C)]);
    }

    #[test]
    fn dcdc_quantization_is_monotonic_and_floor_maps_to_zero() {
        let mut bus = MockBus::new();

        let mut previous = 0u8;
        for mv in 700..=3500u16 {
            {
                let mut pmic = Axp192::new(&mut bus);
                pmic.set_dcdc2(mv).unwrap();
            }
            let raw = bus.regs[0x23];
            assert!(raw >= previous, "code went backwards at {mv}mV");
            assert_eq!(raw, ((mv - 700) / 25) as u8);
            previous = raw;
        }
        assert_eq!(previous, 112);

        let mut pmic = Axp192::new(&mut bus);
        pmic.set_dcdc2(700).unwrap();
        assert_eq!(bus.regs[0x23], 0);
    }

    #[test]
    fn out_of_range_dcdc_request_disables_the_rail() {
        let mut bus = MockBus::new();
        bus.regs[0x12] = 0xFF;
        bus.regs[0x26] = 0xAA;

        let mut pmic = Axp192::new(&mut bus);
        pmic.set_dcdc1(500).unwrap();

        // Only the enable bit changed; no voltage write happened.
        assert_eq!(bus.writes, vec![(0x12, 0xFE)]);
        assert_eq!(bus.regs[0x26], 0xAA);

        let mut pmic = Axp192::new(&mut bus);
        pmic.set_dcdc1(3501).unwrap();
        assert!(bus.writes_to(0x26).is_empty());
    }

    #[test]
    fn ldo3_request_2500mv_sets_low_nibble_only() {
        let mut bus = MockBus::new();
        bus.regs[0x28] = 0xA0;

        let mut pmic = Axp192::new(&mut bus);
        pmic.set_ldo3(2500).unwrap();

        // (2500 - 1800) / 100 = 7 in bits 0-3, bits 4-7 untouched.
        assert_eq!(bus.regs[0x28], 0xA7);
        assert_eq!(bus.regs[0x12] & 0x08, 0x08);
    }

    #[test]
    fn ldo2_and_ldo3_nibbles_are_isolated() {
        let mut bus = MockBus::new();
        {
            let mut pmic = Axp192::new(&mut bus);
            pmic.set_ldo2(2500).unwrap();
        }
        assert_eq!(bus.regs[0x28] >> 4, 7);

        {
            let mut pmic = Axp192::new(&mut bus);
            pmic.set_ldo3(1800).unwrap();
        }
        assert_eq!(bus.regs[0x28], 0x70);

        let mut pmic = Axp192::new(&mut bus);
        assert_eq!(pmic.get_ldo2_voltage().unwrap(), 2500);
        assert_eq!(pmic.get_ldo3_voltage().unwrap(), 1800);
    }

    #[test]
    fn out_of_range_ldo_request_disables_the_rail() {
        let mut bus = MockBus::new();
        bus.regs[0x12] = 0x0C;
        bus.regs[0x28] = 0x55;

        let mut pmic = Axp192::new(&mut bus);
        pmic.set_ldo2(1700).unwrap();

        assert_eq!(bus.regs[0x12], 0x08);
        assert_eq!(bus.regs[0x28], 0x55);
        assert!(bus.writes_to(0x28).is_empty());
    }

    #[test]
    fn enable_bit_toggles_preserve_other_bits() {
        let mut bus = MockBus::new();
        bus.regs[0x12] = 0b1010_1010;

        {
            let mut pmic = Axp192::new(&mut bus);
            pmic.set_exten(true).unwrap();
        }
        assert_eq!(bus.regs[0x12], 0b1110_1010);

        let mut pmic = Axp192::new(&mut bus);
        pmic.set_exten(false).unwrap();
        assert_eq!(bus.regs[0x12], 0b1010_1010);
    }

    #[test]
    fn backup_charge_bit_lives_in_register_0x35() {
        let mut bus = MockBus::new();
        bus.regs[0x35] = 0x55;

        {
            let mut pmic = Axp192::new(&mut bus);
            pmic.set_backup(true).unwrap();
        }
        assert_eq!(bus.regs[0x35], 0xD5);

        let mut pmic = Axp192::new(&mut bus);
        assert!(pmic.is_backup_enabled().unwrap());
        pmic.set_backup(false).unwrap();
        assert_eq!(bus.regs[0x35], 0x55);
    }

    #[test]
    fn gpio0_out_of_range_value_selects_a_pin_mode() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);
        pmic.set_gpio0(Gpio0Mode::Floating as u16).unwrap();

        assert_eq!(bus.writes, vec![(0x90, 0x06)]);
    }

    #[test]
    fn gpio0_in_range_voltage_selects_ldo_mode() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);
        pmic.set_gpio0(3300).unwrap();

        // LDO mode byte first, then (3300 - 1800) / 100 = 15 in the
        // high nibble of the voltage register.
        assert_eq!(bus.writes, vec![(0x90, 0x02), (0x91, 0xF0)]);
    }

    #[test]
    fn unused_gpio_setters_do_not_touch_the_bus() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);
        pmic.set_gpio1(3300).unwrap();
        pmic.set_gpio2(0).unwrap();
        pmic.set_gpio3(1).unwrap();
        pmic.set_gpio4(2800).unwrap();

        assert!(bus.writes.is_empty());
    }

    #[test]
    fn begin_applies_rails_in_order_then_fixed_tail() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);
        pmic.begin(PowerConfig {
            exten: true,
            backup: true,
            dcdc1: 3300,
            ldo2: 3000,
            ldo3: 3000,
            gpio0: 2800,
            ..PowerConfig::default()
        })
        .unwrap();

        assert_eq!(
            bus.writes,
            vec![
                (0x12, 0x40), // EXTEN on
                (0x35, 0x80), // backup charging on
                (0x12, 0x41), // DCDC1 enable
                (0x26, 0x68), // DCDC1 3300mV
                (0x12, 0x41), // DCDC2 disable (bit already clear)
                (0x12, 0x41), // DCDC3 disable
                (0x12, 0x45), // LDO2 enable
                (0x28, 0xC0), // LDO2 3000mV, high nibble
                (0x12, 0x4D), // LDO3 enable
                (0x28, 0xCC), // LDO3 3000mV, low nibble
                (0x90, 0x02), // GPIO0 into LDO mode
                (0x91, 0xA0), // GPIO0 2800mV
                (0x84, 0xF2),
                (0x82, 0xFF),
                (0x33, 0xC0),
                (0x36, 0x0C),
                (0x30, 0x80),
                (0x39, 0xFC),
                (0x31, 0x04),
            ]
        );
    }

    #[test]
    fn begin_tail_is_independent_of_config() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);
        pmic.begin(PowerConfig::default()).unwrap();

        let tail: Vec<(u8, u8)> = bus.writes[bus.writes.len() - 7..].to_vec();
        assert_eq!(
            tail,
            vec![
                (0x84, 0xF2),
                (0x82, 0xFF),
                (0x33, 0xC0),
                (0x36, 0x0C),
                (0x30, 0x80),
                (0x39, 0xFC),
                (0x31, 0x04),
            ]
        );
    }

    #[test]
    fn voltage_readback_matches_request() {
        let mut bus = MockBus::new();
        let mut pmic = Axp192::new(&mut bus);

        pmic.set_dcdc1(1000).unwrap();
        assert_eq!(pmic.get_dcdc1_voltage().unwrap(), 1000);
        assert!(pmic.is_dcdc1_enabled().unwrap());

        pmic.set_ldo2(2500).unwrap();
        assert_eq!(pmic.get_ldo2_voltage().unwrap(), 2500);
        assert!(pmic.is_ldo2_enabled().unwrap());
        assert!(!pmic.is_ldo3_enabled().unwrap());
    }

    #[test]
    fn probe_checks_the_chip_id() {
        let mut bus = MockBus::new();
        bus.regs[0x03] = AXP192_CHIP_ID;
        {
            let mut pmic = Axp192::new(&mut bus);
            assert!(pmic.probe().is_ok());
        }

        bus.regs[0x03] = 0x41;
        let mut pmic = Axp192::new(&mut bus);
        assert_eq!(pmic.probe(), Err(Error::DeviceNotFound));
    }

    #[test]
    fn power_off_sets_the_shutdown_bit() {
        let mut bus = MockBus::new();
        bus.regs[0x32] = 0x46;

        let mut pmic = Axp192::new(&mut bus);
        pmic.power_off().unwrap();
        assert_eq!(bus.regs[0x32], 0xC6);
    }

    #[test]
    fn bus_fault_is_fatal_and_propagates() {
        let mut pmic = Axp192::new(FailingBus);
        assert!(matches!(pmic.set_dcdc1(1000), Err(Error::I2c(BusFault))));
        assert!(matches!(
            pmic.begin(PowerConfig::default()),
            Err(Error::I2c(BusFault))
        ));
    }
}
