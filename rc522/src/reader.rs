use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::commands::*;
use crate::errors::Error;
use crate::registers::*;
use crate::uid::Uid;

/// Hardware FIFO depth of the transceiver, in bytes.
pub const FIFO_DEPTH: usize = 16;

/// Iteration bound of the command completion poll. One iteration is one
/// bus read of the interrupt request register, so this is a transaction
/// budget, not a wall-clock bound.
const POLL_BUDGET: u32 = 2000;

const IRQ_TIMER: u8 = 0x01;        // idle timer expired, no tag answered
const IRQ_GLOBAL_EN: u8 = 0x80;
const IRQ_ACK: u8 = 0x80;
const FIFO_FLUSH: u8 = 0x80;
const START_SEND: u8 = 0x80;       // BitFramingReg StartSend
const RX_LAST_BITS: u8 = 0x07;     // ControlReg RxLastBits
const TX_DRIVER_BITS: u8 = 0x03;   // TxControlReg Tx1RFEn | Tx2RFEn
const ERR_FAULT_BITS: u8 = 0x1B;   // BufferOvfl | CollErr | ParityErr | ProtocolErr

/// A frame read back from the transceiver FIFO, together with its exact
/// length in bits (received frames may end mid-byte).
pub struct Response {
    data: [u8; FIFO_DEPTH],
    len: usize,
    bits: u16,
}

impl Response {
    fn empty() -> Self {
        Response {
            data: [0; FIFO_DEPTH],
            len: 0,
            bits: 0,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn bit_len(&self) -> u16 {
        self.bits
    }
}

/// Driver handle owning the SPI bus, the chip-select pin and a delay
/// provider. One handle means one bus owner; wrap it in a lock before
/// sharing it across threads.
pub struct Rc522<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
}

impl<SPI, CS, D> Rc522<SPI, CS, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    /// Creates the handle without touching the hardware. Call [`reset`]
    /// and [`init`] before the first scan.
    ///
    /// [`reset`]: Rc522::reset
    /// [`init`]: Rc522::init
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        Rc522 { spi, cs, delay }
    }

    /// Gives the bus handle, chip-select and delay provider back.
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }

    /// Power-cycles the chip through its reset line. The 100ms pauses
    /// exceed the chip's power-up settle time by a wide margin.
    pub fn reset(&mut self, rst: &mut dyn OutputPin<Error = Infallible>) {
        rst.set_low().ok();
        self.delay.delay_ms(100);
        rst.set_high().ok();
        self.delay.delay_ms(100);
    }

    /// Establishes the default operating mode: soft reset, timer in
    /// auto-reload, forced 100% ASK modulation, CRC preset 0x6363, and
    /// the antenna drivers enabled.
    pub fn init(&mut self) {
        self.write_register(COMMAND_REG, PCD_RESET_PHASE);
        self.write_register(T_MODE_REG, 0x8D);
        self.write_register(T_PRESCALER_REG, 0x3E);
        self.write_register(T_RELOAD_REG_L, 30);
        self.write_register(T_RELOAD_REG_H, 0);
        self.write_register(TX_ASK_REG, 0x40);
        self.write_register(MODE_REG, 0x3D);
        self.antenna_on();
    }

    /// Enables the antenna drivers. Idempotent: no write is issued when
    /// both transmit-enable bits are already set.
    pub fn antenna_on(&mut self) {
        let current = self.read_register(TX_CONTROL_REG);
        if current & TX_DRIVER_BITS != TX_DRIVER_BITS {
            self.set_bit_mask(TX_CONTROL_REG, TX_DRIVER_BITS);
        }
    }

    pub fn antenna_off(&mut self) {
        self.clear_bit_mask(TX_CONTROL_REG, TX_DRIVER_BITS);
    }

    /// Receiver gain, full scale (48 dB).
    pub fn set_antenna_gain_max(&mut self) {
        self.write_register(RF_CFG_REG, 0x70);
    }

    /// Chip version byte, the conventional wiring smoke test.
    pub fn version(&mut self) -> u8 {
        self.read_register(VERSION_REG)
    }

    /// One full acquisition cycle: wake idle tags, then run
    /// anti-collision for the serial number. Any failure, from an empty
    /// field up to a checksum mismatch, collapses into `None`.
    pub fn read_uid(&mut self) -> Option<Uid> {
        self.request(PICC_REQIDL).ok()?;
        self.anticoll().ok()
    }

    /// Wakes tags in the field and returns their 2-byte ATQA answer.
    /// `mode` selects idle tags only ([`PICC_REQIDL`]) or all tags
    /// including halted ones ([`PICC_REQALL`]).
    pub fn request(&mut self, mode: u8) -> Result<[u8; 2], Error> {
        // Short frame: only 7 bits of the last byte go out.
        self.write_register(BIT_FRAMING_REG, 0x07);
        let rsp = self.transceive(PCD_TRANSCEIVE, &[mode])?;
        if rsp.bit_len() != 0x10 {
            return Err(Error::MalformedResponse);
        }
        let data = rsp.data();
        Ok([data[0], data[1]])
    }

    /// Anti-collision: asks the tag for its serial number and validates
    /// the XOR checksum that terminates the 5-byte answer.
    pub fn anticoll(&mut self) -> Result<Uid, Error> {
        self.write_register(BIT_FRAMING_REG, 0x00);
        let rsp = self.transceive(PCD_TRANSCEIVE, &[PICC_ANTICOLL, 0x20])?;
        Uid::from_frame(rsp.data())
    }

    /// Runs `data` through the CRC coprocessor and returns the result,
    /// low byte first.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2], Error> {
        self.write_register(COMMAND_REG, PCD_IDLE);
        self.write_register(DIV_IRQ_REG, 0x04);
        self.set_bit_mask(FIFO_LEVEL_REG, FIFO_FLUSH);
        for &byte in data {
            self.write_register(FIFO_DATA_REG, byte);
        }
        self.write_register(COMMAND_REG, PCD_CALC_CRC);

        let mut budget = POLL_BUDGET;
        while self.read_register(DIV_IRQ_REG) & 0x04 == 0 {
            budget -= 1;
            if budget == 0 {
                return Err(Error::Timeout);
            }
        }
        Ok([
            self.read_register(CRC_RESULT_REG_L),
            self.read_register(CRC_RESULT_REG_H),
        ])
    }

    /// Executes one request/response cycle against the transceiver:
    /// arm interrupts, flush and fill the FIFO, start `command`, poll
    /// for completion, then drain the FIFO.
    ///
    /// Timeout and error-register faults are terminal for the call; the
    /// caller decides whether a full scan cycle is retried.
    pub fn transceive(&mut self, command: u8, frame: &[u8]) -> Result<Response, Error> {
        let (irq_en, wait_irq) = match command {
            PCD_AUTHENT => (0x12, 0x10),
            PCD_TRANSCEIVE => (0x77, 0x30),
            _ => (0x00, 0x00),
        };

        self.write_register(COM_IEN_REG, irq_en | IRQ_GLOBAL_EN);
        self.clear_bit_mask(COM_IRQ_REG, IRQ_ACK);
        self.set_bit_mask(FIFO_LEVEL_REG, FIFO_FLUSH);
        // Cancel whatever command is still pending.
        self.write_register(COMMAND_REG, PCD_IDLE);

        for &byte in frame {
            self.write_register(FIFO_DATA_REG, byte);
        }
        self.write_register(COMMAND_REG, command);
        if command == PCD_TRANSCEIVE {
            self.set_bit_mask(BIT_FRAMING_REG, START_SEND);
        }

        let mut budget = POLL_BUDGET;
        let mut irq;
        loop {
            irq = self.read_register(COM_IRQ_REG);
            budget -= 1;
            if budget == 0 || irq & IRQ_TIMER != 0 || irq & wait_irq != 0 {
                break;
            }
        }

        self.clear_bit_mask(BIT_FRAMING_REG, START_SEND);

        if budget == 0 {
            return Err(Error::Timeout);
        }
        if self.read_register(ERROR_REG) & ERR_FAULT_BITS != 0 {
            return Err(Error::HardwareFault);
        }
        // The idle timer firing within the armed mask means no tag
        // answered, which is not a hardware fault.
        if irq & irq_en & IRQ_TIMER != 0 {
            return Err(Error::NoTag);
        }

        let mut rsp = Response::empty();
        if command == PCD_TRANSCEIVE {
            let count = self.read_register(FIFO_LEVEL_REG) as usize;
            let last_bits = u16::from(self.read_register(CONTROL_REG) & RX_LAST_BITS);
            rsp.bits = if last_bits != 0 {
                (count as u16).saturating_sub(1) * 8 + last_bits
            } else {
                count as u16 * 8
            };
            let count = count.clamp(1, FIFO_DEPTH);
            for slot in rsp.data.iter_mut().take(count) {
                *slot = self.read_register(FIFO_DATA_REG);
            }
            rsp.len = count;
        }
        Ok(rsp)
    }

    fn write_register(&mut self, addr: u8, value: u8) {
        let frame = [(addr << 1) & 0x7E, value];
        let mut reply = [0u8; 2];
        self.cs.set_low().ok();
        self.spi.transfer(&mut reply, &frame).ok();
        self.cs.set_high().ok();
    }

    fn read_register(&mut self, addr: u8) -> u8 {
        let frame = [((addr << 1) & 0x7E) | 0x80, 0];
        let mut reply = [0u8; 2];
        self.cs.set_low().ok();
        self.spi.transfer(&mut reply, &frame).ok();
        self.cs.set_high().ok();
        reply[1]
    }

    fn set_bit_mask(&mut self, addr: u8, mask: u8) {
        let current = self.read_register(addr);
        self.write_register(addr, current | mask);
    }

    fn clear_bit_mask(&mut self, addr: u8, mask: u8) {
        let current = self.read_register(addr);
        self.write_register(addr, current & !mask);
    }
}
