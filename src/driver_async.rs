//! Async AXP192 PMIC driver implementation

use crate::{error::Error, registers::*, types::*};

#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// Async AXP192 PMIC driver
///
/// Available when the `async` feature is enabled. All methods mirror
/// the synchronous [`Axp192`](crate::Axp192) API but return futures
/// that can be awaited; each bus transaction still runs to completion
/// before the next one starts, so the register-preservation guarantees
/// are identical.
///
/// # Example
/// ```no_run
/// # #[cfg(feature = "async")]
/// # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), axp192::Error<I::Error>> {
/// use axp192::{AsyncAxp192, PowerConfig};
///
/// let mut pmic = AsyncAxp192::new(i2c);
/// pmic.begin(PowerConfig::default()).await?;
/// pmic.set_dcdc1(3300).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "async")]
pub struct AsyncAxp192<I> {
    i2c: I,
    addr: u8,
}

#[cfg(feature = "async")]
impl<I> AsyncAxp192<I>
where
    I: AsyncI2c,
{
    /// Create a new async AXP192 driver instance
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, AXP192_SLAVE_ADDRESS)
    }

    /// Create a new async AXP192 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self { i2c, addr }
    }

    /// Verify that the chip answers with the AXP192 ID
    ///
    /// Returns `Error::DeviceNotFound` if the chip ID doesn't match
    pub async fn probe(&mut self) -> Result<(), Error<I::Error>> {
        let chip_id = self.read_register(AXP192_IC_TYPE).await?;
        if chip_id != AXP192_CHIP_ID {
            return Err(Error::DeviceNotFound);
        }
        Ok(())
    }

    /// Apply a full startup configuration
    ///
    /// Same fixed ordering as [`Axp192::begin`](crate::Axp192::begin):
    /// EXTEN and backup charging, DCDC1-3, LDO2/3, GPIO0-4, then the
    /// verbatim tail of charging, protection and ADC configuration.
    pub async fn begin(&mut self, config: PowerConfig) -> Result<(), Error<I::Error>> {
        self.set_exten(config.exten).await?;
        self.set_backup(config.backup).await?;

        self.set_dcdc1(config.dcdc1).await?;
        self.set_dcdc2(config.dcdc2).await?;
        self.set_dcdc3(config.dcdc3).await?;

        self.set_ldo2(config.ldo2).await?;
        self.set_ldo3(config.ldo3).await?;

        self.set_gpio0(config.gpio0).await?;
        self.set_gpio1(config.gpio1).await?;
        self.set_gpio2(config.gpio2).await?;
        self.set_gpio3(config.gpio3).await?;
        self.set_gpio4(config.gpio4).await?;

        for (reg, value) in AXP192_INIT_TAIL {
            self.write_register(reg, value).await?;
        }
        Ok(())
    }

    /// Request a full chip shutdown
    pub async fn power_off(&mut self) -> Result<(), Error<I::Error>> {
        self.set_register_bits(AXP192_SHUTDOWN_BATT_CHGLED_CTRL, AXP192_SHUTDOWN_MASK)
            .await
    }

    // ========================================
    // Low-level I2C operations
    // ========================================

    /// Read a single register
    async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.addr, &[reg], &mut buf)
            .await
            .map_err(Error::I2c)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("axp192 read {=u8:x} = {=u8:x}", reg, buf[0]);
        Ok(buf[0])
    }

    /// Write a single register
    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("axp192 write {=u8:x} = {=u8:x}", reg, value);
        self.i2c
            .write(self.addr, &[reg, value])
            .await
            .map_err(Error::I2c)
    }

    /// Set the bits of `mask` in a register, leaving the others untouched
    async fn set_register_bits(&mut self, reg: u8, mask: u8) -> Result<(), Error<I::Error>> {
        let val = self.read_register(reg).await?;
        self.write_register(reg, val | mask).await
    }

    /// Clear the bits of `mask` in a register, leaving the others untouched
    async fn clear_register_bits(&mut self, reg: u8, mask: u8) -> Result<(), Error<I::Error>> {
        let val = self.read_register(reg).await?;
        self.write_register(reg, val & !mask).await
    }

    /// Report whether any bit of `mask` is set in a register
    async fn get_register_bits(&mut self, reg: u8, mask: u8) -> Result<bool, Error<I::Error>> {
        let val = self.read_register(reg).await?;
        Ok((val & mask) != 0)
    }

    // ========================================
    // DCDC1 Control
    // ========================================

    /// Set the DCDC1 output voltage (700-3500mV, 25mV steps)
    ///
    /// A request outside the valid range switches the rail off instead
    /// of failing.
    pub async fn set_dcdc1(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_DCDC_VOL_MIN..=AXP192_DCDC_VOL_MAX).contains(&millivolt) {
            return self
                .clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC1_EN_MASK)
                .await;
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC1_EN_MASK)
            .await?;

        let val = ((millivolt - AXP192_DCDC_VOL_MIN) / AXP192_DCDC_VOL_STEPS) as u8 & 0x7f;
        self.write_register(AXP192_DCDC1_VOL_SET, val).await
    }

    /// Get the DCDC1 output voltage in mV
    pub async fn get_dcdc1_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_DCDC1_VOL_SET).await? & 0x7f;
        Ok((val as u16) * AXP192_DCDC_VOL_STEPS + AXP192_DCDC_VOL_MIN)
    }

    /// Check if DCDC1 is enabled
    pub async fn is_dcdc1_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC1_EN_MASK)
            .await
    }

    // ========================================
    // DCDC2 Control
    // ========================================

    /// Set the DCDC2 output voltage (700-3500mV, 25mV steps)
    ///
    /// A request outside the valid range switches the rail off instead
    /// of failing.
    pub async fn set_dcdc2(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_DCDC_VOL_MIN..=AXP192_DCDC_VOL_MAX).contains(&millivolt) {
            return self
                .clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC2_EN_MASK)
                .await;
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC2_EN_MASK)
            .await?;

        let val = ((millivolt - AXP192_DCDC_VOL_MIN) / AXP192_DCDC_VOL_STEPS) as u8 & 0x7f;
        self.write_register(AXP192_DCDC2_VOL_SET, val).await
    }

    /// Get the DCDC2 output voltage in mV
    pub async fn get_dcdc2_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_DCDC2_VOL_SET).await? & 0x7f;
        Ok((val as u16) * AXP192_DCDC_VOL_STEPS + AXP192_DCDC_VOL_MIN)
    }

    /// Check if DCDC2 is enabled
    pub async fn is_dcdc2_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC2_EN_MASK)
            .await
    }

    // ========================================
    // DCDC3 Control
    // ========================================

    /// Set the DCDC3 output voltage (700-3500mV, 25mV steps)
    ///
    /// A request outside the valid range switches the rail off instead
    /// of failing.
    pub async fn set_dcdc3(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_DCDC_VOL_MIN..=AXP192_DCDC_VOL_MAX).contains(&millivolt) {
            return self
                .clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC3_EN_MASK)
                .await;
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC3_EN_MASK)
            .await?;

        let val = ((millivolt - AXP192_DCDC_VOL_MIN) / AXP192_DCDC_VOL_STEPS) as u8 & 0x7f;
        self.write_register(AXP192_DCDC3_VOL_SET, val).await
    }

    /// Get the DCDC3 output voltage in mV
    pub async fn get_dcdc3_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_DCDC3_VOL_SET).await? & 0x7f;
        Ok((val as u16) * AXP192_DCDC_VOL_STEPS + AXP192_DCDC_VOL_MIN)
    }

    /// Check if DCDC3 is enabled
    pub async fn is_dcdc3_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_DCDC3_EN_MASK)
            .await
    }

    // ========================================
    // LDO2/LDO3 Control
    // ========================================

    /// Set the LDO2 output voltage (1800-3300mV, 100mV steps)
    ///
    /// LDO2 owns the high nibble of the shared voltage register; LDO3's
    /// half is preserved. A request outside the valid range switches
    /// the rail off instead of failing.
    pub async fn set_ldo2(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_LDO_VOL_MIN..=AXP192_LDO_VOL_MAX).contains(&millivolt) {
            return self
                .clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO2_EN_MASK)
                .await;
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO2_EN_MASK)
            .await?;

        let mut val = self.read_register(AXP192_LDO23_VOL_SET).await? & 0x0f;
        val |= (((millivolt - AXP192_LDO_VOL_MIN) / AXP192_LDO_VOL_STEPS) as u8 & 0x0f) << 4;
        self.write_register(AXP192_LDO23_VOL_SET, val).await
    }

    /// Get the LDO2 output voltage in mV
    pub async fn get_ldo2_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_LDO23_VOL_SET).await? >> 4;
        Ok((val as u16) * AXP192_LDO_VOL_STEPS + AXP192_LDO_VOL_MIN)
    }

    /// Check if LDO2 is enabled
    pub async fn is_ldo2_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO2_EN_MASK)
            .await
    }

    /// Set the LDO3 output voltage (1800-3300mV, 100mV steps)
    ///
    /// LDO3 owns the low nibble of the shared voltage register; LDO2's
    /// half is preserved. A request outside the valid range switches
    /// the rail off instead of failing.
    pub async fn set_ldo3(&mut self, millivolt: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_LDO_VOL_MIN..=AXP192_LDO_VOL_MAX).contains(&millivolt) {
            return self
                .clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO3_EN_MASK)
                .await;
        }
        self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO3_EN_MASK)
            .await?;

        let mut val = self.read_register(AXP192_LDO23_VOL_SET).await? & 0xf0;
        val |= ((millivolt - AXP192_LDO_VOL_MIN) / AXP192_LDO_VOL_STEPS) as u8 & 0x0f;
        self.write_register(AXP192_LDO23_VOL_SET, val).await
    }

    /// Get the LDO3 output voltage in mV
    pub async fn get_ldo3_voltage(&mut self) -> Result<u16, Error<I::Error>> {
        let val = self.read_register(AXP192_LDO23_VOL_SET).await? & 0x0f;
        Ok((val as u16) * AXP192_LDO_VOL_STEPS + AXP192_LDO_VOL_MIN)
    }

    /// Check if LDO3 is enabled
    pub async fn is_ldo3_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_LDO3_EN_MASK)
            .await
    }

    // ========================================
    // EXTEN / Backup battery
    // ========================================

    /// Switch the EXTEN external power output on or off
    pub async fn set_exten(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        if enable {
            self.set_register_bits(AXP192_OUTPUT_CTRL, AXP192_EXTEN_MASK)
                .await
        } else {
            self.clear_register_bits(AXP192_OUTPUT_CTRL, AXP192_EXTEN_MASK)
                .await
        }
    }

    /// Check if the EXTEN output is enabled
    pub async fn is_exten_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_OUTPUT_CTRL, AXP192_EXTEN_MASK)
            .await
    }

    /// Switch backup battery (RTC) charging on or off
    pub async fn set_backup(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        if enable {
            self.set_register_bits(AXP192_BACKUP_CHG_CTRL, AXP192_BACKUP_EN_MASK)
                .await
        } else {
            self.clear_register_bits(AXP192_BACKUP_CHG_CTRL, AXP192_BACKUP_EN_MASK)
                .await
        }
    }

    /// Check if backup battery charging is enabled
    pub async fn is_backup_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        self.get_register_bits(AXP192_BACKUP_CHG_CTRL, AXP192_BACKUP_EN_MASK)
            .await
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
    pub async fn set_gpio0(&mut self, value: u16) -> Result<(), Error<I::Error>> {
        if !(AXP192_LDO_VOL_MIN..=AXP192_LDO_VOL_MAX).contains(&value) {
            return self.write_register(AXP192_GPIO0_CTRL, value as u8).await;
        }
        self.write_register(AXP192_GPIO0_CTRL, AXP192_GPIO0_LDO_MODE)
            .await?;

        let val = (((value - AXP192_LDO_VOL_MIN) / AXP192_LDO_VOL_STEPS) as u8 & 0x0f) << 4;
        self.write_register(AXP192_GPIO0_LDO_VOL_SET, val).await
    }

    /// GPIO1 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub async fn set_gpio1(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }

    /// GPIO2 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub async fn set_gpio2(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }

    /// GPIO3 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub async fn set_gpio3(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }

    /// GPIO4 is unused on the supported hardware variants; this setter
    /// deliberately performs no bus traffic.
    pub async fn set_gpio4(&mut self, _value: u16) -> Result<(), Error<I::Error>> {
        Ok(())
    }
}
