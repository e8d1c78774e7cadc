//! Driver for the MAX31855 cold-junction compensated thermocouple-to-digital
//! converter, built on the `embedded-hal` 1.0 [`SpiDevice`] trait.
//!
//! The converter is read-only: each SPI read returns one 32-bit frame with the
//! thermocouple temperature (14 bits, 0.25 °C), the internal cold-junction
//! temperature (12 bits, 0.0625 °C) and three wiring fault bits. A frame with
//! a fault bit set never yields a reading.
//!
//! ```no_run
//! use embedded_hal::spi::SpiDevice;
//! use max31855::{Error, Fault, Max31855};
//!
//! fn sample<SPI: SpiDevice>(spi: SPI) -> Result<(), Error<SPI::Error>> {
//!     let mut sensor = Max31855::open(spi)?;
//!     match sensor.temperature() {
//!         Ok(reading) => {
//!             let _hot = reading.thermocouple;
//!             let _ambient = reading.internal;
//!         }
//!         Err(Error::Fault(Fault::OpenCircuit)) => { /* probe unplugged */ }
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`SpiDevice`]: embedded_hal::spi::SpiDevice
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to the other modules.
mod fmt;

pub mod error;
pub mod max31855;

pub use error::{Error, Fault, FaultKind};
pub use max31855::{
    decode, FaultStatus, Max31855, RawFrame, RawReading, Reading, Unit, INTERNAL_COUNTS,
    THERMOCOUPLE_COUNTS,
};

/// Log faults for a sensor
pub fn log_faults(sensor_num: u8, faults: &FaultStatus) {
    if faults.oc {
        warn!("Sensor {} - Open circuit fault", sensor_num);
    }
    if faults.scg {
        warn!("Sensor {} - Short to GND fault", sensor_num);
    }
    if faults.scv {
        warn!("Sensor {} - Short to VCC fault", sensor_num);
    }
    if faults.summary && !faults.has_fault() {
        warn!("Sensor {} - Fault bit set without detail bits", sensor_num);
    }
}

/// Log a failed read for a sensor and hand the error back
pub fn log_error<E>(sensor_num: u8, error: Error<E>) -> Error<E> {
    match &error {
        Error::Fault(fault) => warn!("Sensor {} - {}", sensor_num, fault),
        Error::Transport(_) => warn!("Sensor {} - SPI transport error", sensor_num),
    }
    error
}
