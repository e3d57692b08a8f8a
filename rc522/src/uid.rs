use core::fmt;
use ufmt::{uDisplay, uWrite};

use crate::errors::Error;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// XOR of a byte run. The anti-collision frame carries this over its
/// first four bytes as the fifth.
pub fn xor_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, b| acc ^ b)
}

/// A 4-byte tag serial number, validated against its checksum byte.
///
/// Renders as exactly eight uppercase hex digits, the form the ledger
/// keys accounts by.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Uid([u8; 4]);

impl Uid {
    /// Checks a 5-byte anti-collision frame (4 serial bytes plus XOR
    /// checksum) and extracts the serial number.
    pub fn from_frame(frame: &[u8]) -> Result<Self, Error> {
        if frame.len() != 5 {
            return Err(Error::MalformedResponse);
        }
        if xor_checksum(&frame[..4]) != frame[4] {
            return Err(Error::ChecksumMismatch);
        }
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&frame[..4]);
        Ok(Uid(bytes))
    }

    pub fn bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.to_u32())
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({:08X})", self.to_u32())
    }
}

impl uDisplay for Uid {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for b in self.0 {
            f.write_char(HEX_DIGITS[(b >> 4) as usize] as char)?;
            f.write_char(HEX_DIGITS[(b & 0x0F) as usize] as char)?;
        }
        Ok(())
    }
}
