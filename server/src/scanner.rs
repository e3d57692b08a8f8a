use std::sync::{Arc, Mutex};

use anyhow::Result;
use cardtill_rc522::{BusManagedCs, Rc522};
use rppal::gpio::Gpio;
use rppal::hal::Delay;
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use tracing::info;

use crate::config::Config;

/// Transceiver bus clock; must stay under the chip's rated 10 MHz.
const SPI_CLOCK_HZ: u32 = 1_000_000;

/// The upward interface the ledger consumes: one scan, one optional
/// 8-hex-digit uppercase UID.
pub trait UidSource: Send {
    fn read_uid(&mut self) -> Option<String>;
}

/// A whole acquisition cycle is one blocking bus conversation, so the
/// handle lives behind a mutex: one bus owner at a time.
pub type SharedScanner = Arc<Mutex<Box<dyn UidSource>>>;

pub struct Rc522Scanner {
    reader: Rc522<Spi, BusManagedCs, Delay>,
}

impl Rc522Scanner {
    /// Opens SPI0/CE0 and the reset line, power-cycles the chip and
    /// brings it into its operating mode. Chip-select is handled by the
    /// kernel spidev driver.
    pub fn open(config: &Config) -> Result<Self> {
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)?;
        let mut rst = Gpio::new()?.get(config.reset_pin)?.into_output();

        let mut reader = Rc522::new(spi, BusManagedCs, Delay::new());
        reader.reset(&mut rst);
        reader.init();
        info!(version = reader.version(), "rc522 reader ready");

        Ok(Self { reader })
    }
}

impl UidSource for Rc522Scanner {
    fn read_uid(&mut self) -> Option<String> {
        self.reader.read_uid().map(|uid| uid.to_string())
    }
}
