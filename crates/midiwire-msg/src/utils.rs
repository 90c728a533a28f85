//! 7-bit data byte helpers

/// Split a 14-bit value into two 7-bit data bytes, low bits first.
#[inline]
pub fn split_14bit(value: u16) -> [u8; 2] {
    [(value & 0x7F) as u8, ((value >> 7) & 0x7F) as u8]
}

#[inline]
pub fn join_14bit(lsb: u8, msb: u8) -> u16 {
    u16::from(lsb & 0x7F) | (u16::from(msb & 0x7F) << 7)
}

#[inline]
pub fn is_data_byte(byte: u8) -> bool {
    byte & 0x80 == 0
}
