use core::fmt::{Debug, Formatter, Result};
use ufmt::{uDebug, uWrite};

/// Failure modes of a tag acquisition cycle. Every variant is terminal
/// for the call that produced it; retrying is the caller's decision.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Timeout,
    HardwareFault,
    NoTag,
    ChecksumMismatch,
    MalformedResponse,
}

impl Error {
    fn name(&self) -> &'static str {
        match self {
            Error::Timeout => "Timeout",
            Error::HardwareFault => "HardwareFault",
            Error::NoTag => "NoTag",
            Error::ChecksumMismatch => "ChecksumMismatch",
            Error::MalformedResponse => "MalformedResponse",
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

// Serial consoles on embedded targets print through ufmt.
impl uDebug for Error {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<W>) -> core::result::Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}
