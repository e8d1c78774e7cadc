//! Two sensors on one SPI bus, each behind its own chip select.
use core::cell::{Cell, RefCell};
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};
use embedded_hal_bus::spi::RefCellDevice;

use max31855::{Fault, FaultKind, Max31855, RawFrame};

/// Bus that answers with the frame of whichever sensor is selected.
struct FakeBus<'a> {
    selected: &'a Cell<Option<usize>>,
    frames: [[u8; 4]; 2],
}

struct ChipSelect<'a> {
    id: usize,
    selected: &'a Cell<Option<usize>>,
}

struct NoDelay;

impl spi::ErrorType for FakeBus<'_> {
    type Error = Infallible;
}

impl SpiBus for FakeBus<'_> {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
        let frame = self
            .selected
            .get()
            .map_or([0xFF; 4], |id| self.frames[id]);
        for (dst, src) in words.iter_mut().zip(frame) {
            *dst = src;
        }
        Ok(())
    }

    fn write(&mut self, _words: &[u8]) -> Result<(), Infallible> {
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], _write: &[u8]) -> Result<(), Infallible> {
        self.read(read)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Infallible> {
        self.read(words)
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl digital::ErrorType for ChipSelect<'_> {
    type Error = Infallible;
}

impl OutputPin for ChipSelect<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.selected.set(Some(self.id));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        if self.selected.get() == Some(self.id) {
            self.selected.set(None);
        }
        Ok(())
    }
}

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[test]
fn sensors_on_a_shared_bus_read_independently() {
    let selected = Cell::new(None);
    let hot = RawFrame::from_counts(1600, 400, 0).unwrap();
    let unplugged = RawFrame::from_counts(0, 352, 0x01).unwrap();
    let bus = RefCell::new(FakeBus {
        selected: &selected,
        frames: [*hot.as_bytes(), *unplugged.as_bytes()],
    });

    let cs1 = ChipSelect { id: 0, selected: &selected };
    let cs2 = ChipSelect { id: 1, selected: &selected };
    let dev1 = RefCellDevice::new(&bus, cs1, NoDelay).unwrap();
    let dev2 = RefCellDevice::new(&bus, cs2, NoDelay).unwrap();

    let mut sensor1 = Max31855::open(dev1).unwrap();
    let mut sensor2 = Max31855::open(dev2).unwrap();

    for _ in 0..3 {
        let reading = sensor1.temperature().unwrap();
        assert_eq!(reading.thermocouple, 400.0);
        assert_eq!(reading.internal, 25.0);

        let err = sensor2.temperature().unwrap_err();
        assert_eq!(err.fault(), Some(Fault::OpenCircuit));
        assert_eq!(err.kind(), FaultKind::OpenCircuit);
    }
    assert_eq!(selected.get(), None);
}
