use embedded_hal::spi::SpiDevice;

use crate::error::Error;
use crate::max31855::frame::{FaultStatus, RawFrame, RawReading, Reading, Unit};
use crate::max31855::registers::FRAME_LEN;

/// A MAX31855 on an already configured SPI device.
///
/// The device must be set up by the caller with [`SPI_MODE`], at most
/// [`SPI_FREQUENCY_HZ`] and 8-bit words. Every read is one SPI transaction
/// of four bytes; nothing is cached between calls.
///
/// A session is not reentrant. Sharing one bus between several sensors is
/// done with an `embedded-hal-bus` device per chip select, not by sharing a
/// session.
///
/// [`SPI_MODE`]: crate::max31855::registers::SPI_MODE
/// [`SPI_FREQUENCY_HZ`]: crate::max31855::registers::SPI_FREQUENCY_HZ
#[derive(Debug)]
pub struct Max31855<SPI> {
    spi: SPI,
}

impl<SPI> Max31855<SPI>
where
    SPI: SpiDevice,
{
    /// Wrap a device without talking to it.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Wrap a device and read one frame to check the bus responds.
    ///
    /// Only transport errors fail here; a sensor fault in the probe frame
    /// does not.
    pub fn open(spi: SPI) -> Result<Self, Error<SPI::Error>> {
        let mut sensor = Self::new(spi);
        let frame = sensor.read_frame()?;
        debug!("MAX31855 opened, fault status {:?}", frame.fault_status());
        Ok(sensor)
    }

    /// Clock out the latest conversion result. Fault bits are not inspected.
    pub fn read_frame(&mut self) -> Result<RawFrame, Error<SPI::Error>> {
        let mut buffer = [0u8; FRAME_LEN];
        self.spi.read(&mut buffer).map_err(Error::Transport)?;
        trace!("MAX31855 frame {:?}", buffer);
        Ok(RawFrame::new(buffer))
    }

    pub fn fault_status(&mut self) -> Result<FaultStatus, Error<SPI::Error>> {
        Ok(self.read_frame()?.fault_status())
    }

    /// Read both temperatures as fixed-point counts
    pub fn read_raw(&mut self) -> Result<RawReading, Error<SPI::Error>> {
        Ok(self.read_frame()?.decode_raw()?)
    }

    /// Read thermocouple and cold-junction temperature in degrees Celsius
    pub fn temperature(&mut self) -> Result<Reading, Error<SPI::Error>> {
        Ok(self.read_frame()?.decode()?)
    }

    pub fn temperature_in(&mut self, unit: Unit) -> Result<Reading, Error<SPI::Error>> {
        self.temperature().map(|reading| reading.convert(unit))
    }

    /// Give the SPI device back
    pub fn release(self) -> SPI {
        self.spi
    }
}
