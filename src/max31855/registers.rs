// MAX31855 frame layout. The device has no addressable registers: every read
// returns the same 32-bit word, clocked out MSB first.
use embedded_hal::spi::{Mode, MODE_0};

// Bus session parameters (CPOL = 0, CPHA = 0, sampled on the rising edge)
pub const SPI_MODE: Mode = MODE_0;
pub const SPI_FREQUENCY_HZ: u32 = 5_000_000; // MAX31855 SCK max
pub const SPI_WORD_BITS: u8 = 8;

pub const FRAME_LEN: usize = 4;

// Thermocouple temperature, bits 31:18 (first u16, bits 15:2)
pub const TC_SHIFT: u32 = 2;
pub const TC_WIDTH: u32 = 14;
pub const TC_RESOLUTION: f32 = 0.25; // °C per LSB

// Fault summary, bit 16 (first u16, bit 0). Bit 17 is reserved.
pub const FAULT_SUMMARY: u16 = 1 << 0;

// Cold-junction temperature, bits 15:4 (second u16, bits 15:4)
pub const CJ_SHIFT: u32 = 4;
pub const CJ_WIDTH: u32 = 12;
pub const CJ_RESOLUTION: f32 = 0.0625; // °C per LSB

// Fault bits, byte 3. Bit 3 is reserved.
pub const FAULT_SCV: u8 = 1 << 2; // Short to VCC
pub const FAULT_SCG: u8 = 1 << 1; // Short to GND
pub const FAULT_OC: u8 = 1 << 0; // Open circuit
pub const FAULT_MASK: u8 = FAULT_SCV | FAULT_SCG | FAULT_OC;
