//! # Address Values
//!
//! [`PureAddress`] is the numeric core every address shares: an integer and
//! an optional port. [`IpAddress`] is the family-agnostic container built on
//! top of it, rendering itself through whichever family its integer fits.
//!
//! The port lives in a raw slot that may hold anything; reads clamp it into
//! the valid range. The public setter is stricter and rejects bad values
//! outright.

use std::cell::OnceCell;
use std::fmt;

use tracing::debug;

use crate::error::{AddressError, AddressResult};
use crate::network::codec;
use crate::network::constants::{
    IPV4_LOCALHOST, IPV4_MAX_VALUE, PORT_NUMBER_MAX_VALUE, PORT_NUMBER_MIN_VALUE,
};
use crate::network::dispatch::Address;
use crate::network::ipv4::Ipv4;
use crate::network::ipv6::Ipv6;
use crate::network::validate::{self, Candidate};

/// Capabilities shared by every address value; `Display` is the rendering.
pub trait NetAddress: fmt::Display {
    fn pure(&self) -> &PureAddress;

    fn num(&self) -> u128 {
        self.pure().num()
    }

    fn port(&self) -> Option<u16> {
        self.pure().port()
    }

    /// `0x` followed by the uppercase hex digits of the integer.
    fn as_hex(&self) -> String {
        self.pure().as_hex()
    }

    fn num_to_ipv4(&self) -> String {
        self.pure().num_to_ipv4()
    }

    fn num_to_ipv6(&self, shorten: bool, remove_zeroes: bool) -> String {
        self.pure().num_to_ipv6(shorten, remove_zeroes)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PureAddress {
    num: u128,
    port: Option<i128>,
}

impl PureAddress {
    /// Stores the port as given. Out-of-range values are clamped on read.
    pub fn from_raw(num: u128, port: Option<i128>) -> Self {
        Self { num, port }
    }

    pub fn num(&self) -> u128 {
        self.num
    }

    /// Returns the port, or `None` if no port is specified.
    pub fn port(&self) -> Option<u16> {
        self.port
            .map(|port| port.clamp(PORT_NUMBER_MIN_VALUE, PORT_NUMBER_MAX_VALUE) as u16)
    }

    /// Sets a new port value.
    ///
    /// `Candidate::Absent` clears the port. Anything but an integer is a
    /// [`AddressError::PortNotInteger`], an integer outside of the port range
    /// a [`AddressError::PortOutOfRange`].
    pub fn set_port<'a>(&mut self, value: impl Into<Candidate<'a>>) -> AddressResult<()> {
        let candidate = value.into();
        let port = match candidate {
            Candidate::Absent => {
                self.port = None;
                return Ok(());
            }
            Candidate::Text(text) => return Err(AddressError::PortNotInteger(text.to_string())),
            Candidate::Unsupported(kind) => {
                return Err(AddressError::PortNotInteger(kind.to_string()));
            }
            Candidate::Int(_) | Candidate::UInt(_) => candidate.as_int(),
        };

        match port {
            Some(port) if (PORT_NUMBER_MIN_VALUE..=PORT_NUMBER_MAX_VALUE).contains(&port) => {
                self.port = Some(port);
                Ok(())
            }
            _ => Err(AddressError::PortOutOfRange(candidate.to_string())),
        }
    }

    pub fn as_hex(&self) -> String {
        format!("0x{:X}", self.num)
    }

    pub fn num_to_ipv4(&self) -> String {
        codec::num_to_ipv4(self.num)
    }

    pub fn num_to_ipv6(&self, shorten: bool, remove_zeroes: bool) -> String {
        codec::num_to_ipv6(self.num, shorten, remove_zeroes)
    }
}

impl PartialEq for PureAddress {
    fn eq(&self, other: &Self) -> bool {
        self.num() == other.num() && self.port() == other.port()
    }
}

/// Family-agnostic address seeded with an integer.
///
/// The views in the other families are built on first use and kept for the
/// lifetime of the value, or until the port changes.
#[derive(Debug, Clone)]
pub struct IpAddress {
    pure: PureAddress,
    ipv4: OnceCell<Box<Ipv4>>,
    ipv6: OnceCell<Box<Ipv6>>,
}

impl IpAddress {
    /// An invalid port is dropped, leaving the address without one.
    pub fn new(num: u128, port: Option<i64>) -> Self {
        Self::seeded(num, port.map(i128::from))
    }

    pub(crate) fn seeded(num: u128, port: Option<i128>) -> Self {
        let port = match port {
            Some(port) if !validate::validate_port(port) => {
                debug!("dropping invalid port {port} for address {num}");
                None
            }
            port => port,
        };

        Self {
            pure: PureAddress::from_raw(num, port),
            ipv4: OnceCell::new(),
            ipv6: OnceCell::new(),
        }
    }

    /// Negative numbers aren't valid addresses, they are treated as zero.
    pub fn from_signed(num: i128, port: Option<i64>) -> Self {
        Self::new(num.max(0) as u128, port)
    }

    /// Builds an address from decimal integer text.
    ///
    /// Negative values become zero, values beyond 128 bits have no address
    /// representation.
    pub fn from_decimal(text: &str, port: Option<i64>) -> AddressResult<Self> {
        let trimmed = text.trim();

        let negative = trimmed
            .strip_prefix('-')
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        if negative {
            return Ok(Self::new(0, port));
        }

        trimmed
            .parse::<u128>()
            .map(|num| Self::new(num, port))
            .map_err(|_| AddressError::NoRepresentation(text.to_string()))
    }

    /// Sets a new port value, see [`PureAddress::set_port`].
    pub fn set_port<'a>(&mut self, value: impl Into<Candidate<'a>>) -> AddressResult<()> {
        self.pure.set_port(value)?;
        self.ipv4.take();
        self.ipv6.take();
        Ok(())
    }

    /// The same integer and port as an IPv4 address. Bits above 32 are lost.
    pub fn as_ipv4(&self) -> &Ipv4 {
        self.ipv4
            .get_or_init(|| Box::new(Ipv4::from_num(self.num() as u32, self.port().map(i64::from))))
    }

    /// The same integer and port as an IPv6 address.
    pub fn as_ipv6(&self) -> &Ipv6 {
        self.ipv6
            .get_or_init(|| Box::new(Ipv6::from_num(self.num(), self.port().map(i64::from))))
    }
}

impl Default for IpAddress {
    fn default() -> Self {
        Self::new(IPV4_LOCALHOST, None)
    }
}

impl NetAddress for IpAddress {
    fn pure(&self) -> &PureAddress {
        &self.pure
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Every u128 is in IPv6 range, so there is no third case.
        if self.num() <= IPV4_MAX_VALUE {
            fmt::Display::fmt(self.as_ipv4(), f)
        } else {
            fmt::Display::fmt(self.as_ipv6(), f)
        }
    }
}

/// Two addresses are equal when they render the same, or when both the
/// integer and the port match.
fn addresses_eq<A, B>(lhs: &A, rhs: &B) -> bool
where
    A: NetAddress + ?Sized,
    B: NetAddress + ?Sized,
{
    lhs.to_string() == rhs.to_string() || (lhs.num() == rhs.num() && lhs.port() == rhs.port())
}

macro_rules! impl_address_eq {
    ($lhs:ty: $($rhs:ty),*) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    addresses_eq(self, other)
                }
            }
        )*

        impl PartialEq<str> for $lhs {
            fn eq(&self, other: &str) -> bool {
                self.to_string() == other
            }
        }

        impl PartialEq<&str> for $lhs {
            fn eq(&self, other: &&str) -> bool {
                self.to_string() == *other
            }
        }

        impl PartialEq<String> for $lhs {
            fn eq(&self, other: &String) -> bool {
                self.to_string() == *other
            }
        }

        impl PartialEq<$lhs> for &str {
            fn eq(&self, other: &$lhs) -> bool {
                other == self
            }
        }

        impl PartialEq<$lhs> for String {
            fn eq(&self, other: &$lhs) -> bool {
                other == self
            }
        }
    };
}

impl_address_eq!(IpAddress: IpAddress, Ipv4, Ipv6, Address);
impl_address_eq!(Ipv4: IpAddress, Ipv4, Ipv6, Address);
impl_address_eq!(Ipv6: IpAddress, Ipv4, Ipv6, Address);
impl_address_eq!(Address: IpAddress, Ipv4, Ipv6, Address);

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
