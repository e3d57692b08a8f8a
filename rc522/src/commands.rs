// src/commands.rs

// Commands executed by the reader IC itself
pub const PCD_IDLE: u8 = 0x00;
pub const PCD_CALC_CRC: u8 = 0x03;
pub const PCD_TRANSMIT: u8 = 0x04;
pub const PCD_RECEIVE: u8 = 0x08;
pub const PCD_TRANSCEIVE: u8 = 0x0C;
pub const PCD_AUTHENT: u8 = 0x0E;
pub const PCD_RESET_PHASE: u8 = 0x0F;

// Command bytes addressed to the tag, sent through the FIFO
pub const PICC_REQIDL: u8 = 0x26;
pub const PICC_REQALL: u8 = 0x52;
pub const PICC_ANTICOLL: u8 = 0x93;
pub const PICC_HALT: u8 = 0x50;
