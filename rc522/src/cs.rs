// src/cs.rs

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, OutputPin};

/// Stand-in chip-select for buses whose kernel driver asserts the select
/// line around every transfer itself (spidev CE0/CE1 and friends). The
/// reader toggles it like any other pin; both edges are no-ops.
pub struct BusManagedCs;

impl ErrorType for BusManagedCs {
    type Error = Infallible;
}

impl OutputPin for BusManagedCs {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
