//! # Validators
//!
//! Predicates over ports and address candidates. None of these functions
//! fail: malformed input, or input of a kind that can never be an address,
//! simply answers `false`.
//!
//! Under strict mode numeric bounds are enforced, otherwise only the form of
//! the input is checked.

use std::fmt;

use crate::network::codec::{self, parse_hextet, parse_int};
use crate::network::constants::{
    IPV4_MAX_SEGMENT_COUNT, IPV4_MAX_SEGMENT_VALUE, IPV4_MAX_VALUE, IPV4_MIN_SEGMENT_VALUE,
    IPV4_MIN_VALUE, IPV6_MAX_SEGMENT_COUNT, IPV6_MAX_SEGMENT_VALUE, IPV6_MIN_SEGMENT_VALUE,
    PORT_NUMBER_MAX_VALUE, PORT_NUMBER_MIN_VALUE,
};

/// Any value handed to a validator or to the port setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// "No value", a valid port and never an address.
    Absent,
    Text(&'a str),
    Int(i128),
    UInt(u128),
    /// A value that is not an integer nor text, named by its type.
    Unsupported(&'static str),
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Candidate::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Candidate::Text(value.as_str())
    }
}

impl From<u128> for Candidate<'_> {
    fn from(value: u128) -> Self {
        Candidate::UInt(value)
    }
}

impl From<f32> for Candidate<'_> {
    fn from(_: f32) -> Self {
        Candidate::Unsupported("f32")
    }
}

impl From<f64> for Candidate<'_> {
    fn from(_: f64) -> Self {
        Candidate::Unsupported("f64")
    }
}

impl From<usize> for Candidate<'_> {
    fn from(value: usize) -> Self {
        Candidate::UInt(value as u128)
    }
}

impl From<isize> for Candidate<'_> {
    fn from(value: isize) -> Self {
        Candidate::Int(value as i128)
    }
}

macro_rules! impl_int_candidate {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Candidate<'_> {
                fn from(value: $int) -> Self {
                    Candidate::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_int_candidate!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl Candidate<'_> {
    /// The candidate as a signed integer, `None` for non-integers and for
    /// integers above `i128::MAX`.
    pub(crate) fn as_int(&self) -> Option<i128> {
        match *self {
            Candidate::Int(value) => Some(value),
            Candidate::UInt(value) => i128::try_from(value).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Absent => write!(f, "none"),
            Candidate::Text(text) => write!(f, "{text}"),
            Candidate::Int(value) => write!(f, "{value}"),
            Candidate::UInt(value) => write!(f, "{value}"),
            Candidate::Unsupported(kind) => write!(f, "{kind}"),
        }
    }
}

fn port_in_range(port: i128) -> bool {
    (PORT_NUMBER_MIN_VALUE..=PORT_NUMBER_MAX_VALUE).contains(&port)
}

/// Checks a port split off address text: it must be an integer, and under
/// strict mode within the port range.
fn validate_embedded_port(port: &str, strict: bool) -> bool {
    match parse_int(port) {
        Some(port_num) => !strict || port_in_range(port_num),
        None => false,
    }
}

/// Validates an address port.
///
/// `Absent` means "no port" and is a valid value. Otherwise the port must be
/// an integer between the minimum and maximum port values, inclusive. Text is
/// not accepted.
pub fn validate_port<'a>(port: impl Into<Candidate<'a>>) -> bool {
    let port = port.into();
    match port {
        Candidate::Absent => true,
        Candidate::Int(_) | Candidate::UInt(_) => port.as_int().is_some_and(port_in_range),
        _ => false,
    }
}

/// Validates an IPv4 address, in text (`a.b.c.d`, `a.b.c.d:port`) or integer form.
pub fn validate_ipv4<'a>(address: impl Into<Candidate<'a>>, strict: bool) -> bool {
    match address.into() {
        Candidate::Text(text) => validate_ipv4_text(text, strict),
        Candidate::Int(num) => u128::try_from(num).is_ok_and(|num| num <= IPV4_MAX_VALUE),
        Candidate::UInt(num) => (IPV4_MIN_VALUE..=IPV4_MAX_VALUE).contains(&num),
        _ => false,
    }
}

fn validate_ipv4_text(text: &str, strict: bool) -> bool {
    if !text.contains('.') {
        return false;
    }

    let mut parts = text.split(':');
    let address = parts.next().unwrap_or_default();
    if let Some(port) = parts.next() {
        if !validate_embedded_port(port, strict) {
            return false;
        }
    }

    let Some(segments) = address
        .split('.')
        .map(parse_int)
        .collect::<Option<Vec<i128>>>()
    else {
        return false;
    };

    if segments.len() != IPV4_MAX_SEGMENT_COUNT {
        return false;
    }

    !strict
        || segments
            .iter()
            .all(|seg| (IPV4_MIN_SEGMENT_VALUE..=IPV4_MAX_SEGMENT_VALUE).contains(seg))
}

/// Validates an IPv6 address, in text (`hextets`, `[hextets]:port`) or integer form.
pub fn validate_ipv6<'a>(address: impl Into<Candidate<'a>>, strict: bool) -> bool {
    match address.into() {
        Candidate::Text(text) => validate_ipv6_text(text, strict),
        Candidate::Int(num) => num >= 0,
        Candidate::UInt(_) => true,
        _ => false,
    }
}

fn validate_ipv6_text(text: &str, strict: bool) -> bool {
    let mut parts = text.split("]:");
    let mut address = parts.next().unwrap_or_default();
    if let Some(port) = parts.next() {
        // Drops the opening bracket
        let mut chars = address.chars();
        chars.next();
        address = chars.as_str();

        if !validate_embedded_port(port, strict) {
            return false;
        }
    }

    let Ok(segments) = codec::expand_hextets(address) else {
        return false;
    };

    let Some(segments) = segments
        .into_iter()
        .map(parse_hextet)
        .collect::<Option<Vec<i128>>>()
    else {
        return false;
    };

    if segments.len() != IPV6_MAX_SEGMENT_COUNT {
        return false;
    }

    !strict
        || segments
            .iter()
            .all(|seg| (IPV6_MIN_SEGMENT_VALUE..=IPV6_MAX_SEGMENT_VALUE).contains(seg))
}

/// Validates an address of either family, IPv4 first.
pub fn validate_ip<'a>(address: impl Into<Candidate<'a>>, strict: bool) -> bool {
    let address = address.into();
    validate_ipv4(address, strict) || validate_ipv6(address, strict)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
