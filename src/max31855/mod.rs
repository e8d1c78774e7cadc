pub mod registers;

mod frame;
mod reader;

pub use frame::{
    decode, FaultStatus, RawFrame, RawReading, Reading, Unit, INTERNAL_COUNTS,
    THERMOCOUPLE_COUNTS,
};
pub use reader::Max31855;
