// Command and status registers
pub const COMMAND_REG: u8 = 0x01;          // Starts and stops command execution
pub const COM_IEN_REG: u8 = 0x02;          // Communication interrupt enable bits
pub const COM_IRQ_REG: u8 = 0x04;          // Interrupt request bits
pub const DIV_IRQ_REG: u8 = 0x05;          // CRC and self-test interrupt bits
pub const ERROR_REG: u8 = 0x06;            // Error bits showing the error status of the last command
pub const FIFO_DATA_REG: u8 = 0x09;        // FIFO data input/output
pub const FIFO_LEVEL_REG: u8 = 0x0A;       // Number of bytes in the FIFO buffer
pub const CONTROL_REG: u8 = 0x0C;          // Miscellaneous control bits, incl. RxLastBits
pub const BIT_FRAMING_REG: u8 = 0x0D;      // Adjustments for bit-oriented frames

// Mode and RF configuration
pub const MODE_REG: u8 = 0x11;             // Defines general modes for transmitting and receiving
pub const TX_CONTROL_REG: u8 = 0x14;       // Controls the antenna driver pins TX1 and TX2
pub const TX_ASK_REG: u8 = 0x15;           // Controls the setting of the transmission modulation
pub const RF_CFG_REG: u8 = 0x26;           // Configures the receiver gain

// CRC coprocessor
pub const CRC_RESULT_REG_H: u8 = 0x21;     // CRC calculation result, MSB
pub const CRC_RESULT_REG_L: u8 = 0x22;     // CRC calculation result, LSB

// Timer configuration
pub const T_MODE_REG: u8 = 0x2A;           // Timer settings, prescaler high bits
pub const T_PRESCALER_REG: u8 = 0x2B;      // Timer prescaler low bits
pub const T_RELOAD_REG_H: u8 = 0x2C;       // 16-bit timer reload value (high byte)
pub const T_RELOAD_REG_L: u8 = 0x2D;       // 16-bit timer reload value (low byte)

// Test registers
pub const VERSION_REG: u8 = 0x37;          // Shows the software version
