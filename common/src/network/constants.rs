//! Numeric limits shared by the validators, the codec and the value types.

pub const PORT_NUMBER_MIN_VALUE: i128 = 0;
pub const PORT_NUMBER_MAX_VALUE: i128 = 65535;

pub const IPV4_MAX_SEGMENT_COUNT: usize = 4;
pub const IPV4_MIN_SEGMENT_VALUE: i128 = 0;
pub const IPV4_MAX_SEGMENT_VALUE: i128 = 255;
pub const IPV4_MIN_VALUE: u128 = 0;
pub const IPV4_MAX_VALUE: u128 = 0xFFFF_FFFF;

/// Bits per hextet, also the radix hextets are written in.
pub const IPV6_SEGMENT_BIT_COUNT: u32 = 16;
/// Bits per hex digit.
pub const IPV6_NUMBER_BIT_COUNT: u32 = 4;
pub const IPV6_MAX_SEGMENT_COUNT: usize = 8;
pub const IPV6_MIN_SEGMENT_VALUE: i128 = 0;
pub const IPV6_MAX_SEGMENT_VALUE: i128 = 0xFFFF;
pub const IPV6_MIN_VALUE: u128 = 0;
pub const IPV6_MAX_VALUE: u128 = u128::MAX;

/// 127.0.0.1
pub const IPV4_LOCALHOST: u128 = 0x7F00_0001;
/// ::1
pub const IPV6_LOCALHOST: u128 = 1;
