use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const IPV6_ADDR: Color = Color::BrightMagenta;
pub const NUMBER: Color = Color::BrightBlue;

pub const VALID: Color = Color::Green;
pub const INVALID: Color = Color::Red;
