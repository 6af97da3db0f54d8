//! HD44780 instruction encodings
//!
//! ```text
//!                      RS  DB7 DB6 DB5 DB4 DB3 DB2 DB1 DB0
//! Clear display         0   0   0   0   0   0   0   0   1
//! Return home           0   0   0   0   0   0   0   1   *
//! Entry mode set        0   0   0   0   0   0   1  I/D  S
//! Display on/off        0   0   0   0   0   1   D   C   B
//! Cursor/display shift  0   0   0   0   1  S/C R/L  *   *
//! Function set          0   0   0   1  DL   N   F   *   *
//! Set CGRAM address     0   0   1  ----------ACG---------
//! Set DDRAM address     0   1  ------------ADD-----------
//! Write data            1  -------------DATA-------------
//! ```

/// Clear display and return home
pub const CLEAR_DISPLAY: u8 = 0x01;

/// Return cursor to address 0
pub const RETURN_HOME: u8 = 0x02;

/// Entry mode set
pub const fn entry_mode(increment: bool, shift: bool) -> u8 {
    0x04 | flag(increment, 0x02) | flag(shift, 0x01)
}

/// Display on/off control
pub const fn display_control(display_on: bool, cursor_on: bool, blink: bool) -> u8 {
    0x08 | flag(display_on, 0x04) | flag(cursor_on, 0x02) | flag(blink, 0x01)
}

/// Function set
pub const fn function_set(eight_bit: bool, two_lines: bool, font_5x10: bool) -> u8 {
    0x20 | flag(eight_bit, 0x10) | flag(two_lines, 0x08) | flag(font_5x10, 0x04)
}

/// Set DDRAM address
pub const fn set_ddram_address(address: u8) -> u8 {
    0x80 | (address & 0x7F)
}

const fn flag(on: bool, bit: u8) -> u8 {
    if on {
        bit
    } else {
        0
    }
}
