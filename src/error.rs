use thiserror::Error;

/// Why a frame did not produce a reading.
///
/// Wiring faults are reported in priority order: open circuit, then short to
/// GND, then short to VCC. A frame with several fault bits set yields only the
/// first of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Thermocouple is not connected (OC, bit 0)
    #[error("thermocouple open circuit")]
    OpenCircuit,
    /// Thermocouple is shorted to GND (SCG, bit 1)
    #[error("thermocouple shorted to GND")]
    ShortToGround,
    /// Thermocouple is shorted to VCC (SCV, bit 2)
    #[error("thermocouple shorted to VCC")]
    ShortToSupply,
    /// The transport handed back a buffer that is not one 4-byte frame
    #[error("malformed frame: got {0} bytes, expected 4")]
    MalformedFrame(usize),
}

/// Errors returned by a [`Max31855`](crate::Max31855) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The SPI device failed, passed through untouched
    #[error("SPI transport error: {0:?}")]
    Transport(E),
    /// The frame was read but reports a fault
    #[error(transparent)]
    Fault(#[from] Fault),
}

/// Flat classification of a failed read, one variant per outcome a caller
/// can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    OpenCircuit,
    ShortToGround,
    ShortToSupply,
    TransportError,
    MalformedFrame,
}

impl Fault {
    pub fn kind(&self) -> FaultKind {
        match self {
            Fault::OpenCircuit => FaultKind::OpenCircuit,
            Fault::ShortToGround => FaultKind::ShortToGround,
            Fault::ShortToSupply => FaultKind::ShortToSupply,
            Fault::MalformedFrame(_) => FaultKind::MalformedFrame,
        }
    }

    /// True for faults caused by the thermocouple wiring rather than the bus
    pub fn is_wiring(&self) -> bool {
        !matches!(self, Fault::MalformedFrame(_))
    }
}

impl<E> Error<E> {
    pub fn kind(&self) -> FaultKind {
        match self {
            Error::Transport(_) => FaultKind::TransportError,
            Error::Fault(fault) => fault.kind(),
        }
    }

    /// The sensor fault, if this is not a transport error
    pub fn fault(&self) -> Option<Fault> {
        match self {
            Error::Fault(fault) => Some(*fault),
            Error::Transport(_) => None,
        }
    }
}
