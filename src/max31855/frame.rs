use crate::error::Fault;
use crate::max31855::registers::*;

/// One 32-bit conversion result as clocked out of the MAX31855, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame([u8; FRAME_LEN]);

/// All fault flags carried by a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus {
    pub summary: bool, // Fault bit (D16)
    pub scv: bool,     // Short to VCC (D2)
    pub scg: bool,     // Short to GND (D1)
    pub oc: bool,      // Open circuit (D0)
}

/// Sign-extended fixed-point counts of both temperature fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawReading {
    /// Thermocouple temperature in 0.25 °C steps
    pub thermocouple: i16,
    /// Cold-junction temperature in 0.0625 °C steps
    pub internal: i16,
}

/// Temperature scale of a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// Thermocouple and cold-junction temperatures from one fault-free frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub thermocouple: f32,
    pub internal: f32,
    pub unit: Unit,
}

impl FaultStatus {
    pub fn from_frame(frame: &RawFrame) -> Self {
        let [_, b1, _, b3] = frame.0;
        Self {
            summary: (u16::from(b1) & FAULT_SUMMARY) != 0,
            scv: (b3 & FAULT_SCV) != 0,
            scg: (b3 & FAULT_SCG) != 0,
            oc: (b3 & FAULT_OC) != 0,
        }
    }

    /// Only the three detail bits count; the summary bit is informational.
    pub fn has_fault(&self) -> bool {
        self.oc || self.scg || self.scv
    }

    /// The fault a decode of this frame reports, if any
    pub fn first(&self) -> Option<Fault> {
        if self.oc {
            Some(Fault::OpenCircuit)
        } else if self.scg {
            Some(Fault::ShortToGround)
        } else if self.scv {
            Some(Fault::ShortToSupply)
        } else {
            None
        }
    }
}

/// Recover a signed value from the low `width` bits of `field`.
fn sign_extend(field: u16, width: u32) -> i16 {
    let field = i32::from(field) & ((1 << width) - 1);
    let value = if field & (1 << (width - 1)) != 0 {
        field - (1 << width)
    } else {
        field
    };
    // |value| <= 2^(width - 1) and width <= 14
    value as i16
}

const fn count_range(width: u32) -> (i16, i16) {
    (-(1 << (width - 1)), (1 << (width - 1)) - 1)
}

pub const THERMOCOUPLE_COUNTS: (i16, i16) = count_range(TC_WIDTH);
pub const INTERNAL_COUNTS: (i16, i16) = count_range(CJ_WIDTH);

impl RawFrame {
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn from_u32(word: u32) -> Self {
        Self(word.to_be_bytes())
    }

    /// Pack counts and fault bits into a frame the way the device would.
    ///
    /// Returns `None` when a count does not fit its field. The summary bit is
    /// set whenever any of the `FAULT_*` bits in `faults` is.
    pub fn from_counts(thermocouple: i16, internal: i16, faults: u8) -> Option<Self> {
        let in_range = |value: i16, (min, max): (i16, i16)| (min..=max).contains(&value);
        if !in_range(thermocouple, THERMOCOUPLE_COUNTS) || !in_range(internal, INTERNAL_COUNTS) {
            return None;
        }

        let faults = faults & FAULT_MASK;
        let mut high = ((thermocouple as u16) & ((1 << TC_WIDTH) - 1)) << TC_SHIFT;
        if faults != 0 {
            high |= FAULT_SUMMARY;
        }
        let low = (((internal as u16) & ((1 << CJ_WIDTH) - 1)) << CJ_SHIFT) | u16::from(faults);

        let [b0, b1] = high.to_be_bytes();
        let [b2, b3] = low.to_be_bytes();
        Some(Self([b0, b1, b2, b3]))
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn fault_status(&self) -> FaultStatus {
        FaultStatus::from_frame(self)
    }

    pub fn decode_raw(&self) -> Result<RawReading, Fault> {
        if let Some(fault) = self.fault_status().first() {
            return Err(fault);
        }

        let [b0, b1, b2, b3] = self.0;
        let thermocouple = sign_extend(u16::from_be_bytes([b0, b1]) >> TC_SHIFT, TC_WIDTH);
        let internal = sign_extend(u16::from_be_bytes([b2, b3]) >> CJ_SHIFT, CJ_WIDTH);

        Ok(RawReading {
            thermocouple,
            internal,
        })
    }

    /// Check the fault bits and convert both temperatures to degrees Celsius.
    pub fn decode(&self) -> Result<Reading, Fault> {
        self.decode_raw().map(RawReading::celsius)
    }
}

impl From<[u8; FRAME_LEN]> for RawFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for RawFrame {
    type Error = Fault;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; FRAME_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Fault::MalformedFrame(bytes.len()))
    }
}

/// Decode a frame straight from a transport buffer.
pub fn decode(bytes: &[u8]) -> Result<Reading, Fault> {
    RawFrame::try_from(bytes)?.decode()
}

impl RawReading {
    pub fn celsius(self) -> Reading {
        Reading {
            thermocouple: f32::from(self.thermocouple) * TC_RESOLUTION,
            internal: f32::from(self.internal) * CJ_RESOLUTION,
            unit: Unit::Celsius,
        }
    }

    pub fn convert(self, unit: Unit) -> Reading {
        self.celsius().convert(unit)
    }
}

impl Unit {
    pub fn convert(self, celsius: f32) -> f32 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius * 1.8 + 32.0,
        }
    }

    pub fn to_celsius(self, value: f32) -> f32 {
        match self {
            Unit::Celsius => value,
            Unit::Fahrenheit => (value - 32.0) / 1.8,
        }
    }
}

impl Reading {
    /// Express both temperatures in `unit`.
    pub fn convert(self, unit: Unit) -> Self {
        if unit == self.unit {
            return self;
        }
        let convert = |value: f32| unit.convert(self.unit.to_celsius(value));
        Self {
            thermocouple: convert(self.thermocouple),
            internal: convert(self.internal),
            unit,
        }
    }
}
