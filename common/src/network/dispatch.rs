//! # Family Dispatch
//!
//! Picks the address family from the shape of the text. Only IPv4 uses `.`,
//! while `:` shows up in both (IPv4 ports, IPv6 hextets), so a dot is the
//! whole heuristic. Malformed text is not screened here; it fails in the
//! codec of the chosen family.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{AddressError, AddressResult};
use crate::network::address::{IpAddress, NetAddress, PureAddress};
use crate::network::ipv4::Ipv4;
use crate::network::ipv6::Ipv6;
use crate::network::validate::Candidate;

/// An address of either family.
#[derive(Debug, Clone)]
pub enum Address {
    V4(Ipv4),
    V6(Ipv6),
}

impl Address {
    /// Builds the family the text looks like, forwarding `port` unchanged.
    pub fn parse(address: &str, port: Option<i64>) -> AddressResult<Self> {
        if address.contains('.') {
            trace!("'{address}' dispatched to IPv4");
            Ipv4::new(Some(address), port).map(Address::V4)
        } else {
            trace!("'{address}' dispatched to IPv6");
            Ipv6::new(Some(address), port).map(Address::V6)
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Address::V6(_))
    }

    /// The address text, without port.
    pub fn address(&self) -> &str {
        match self {
            Address::V4(ip) => ip.address(),
            Address::V6(ip) => ip.address(),
        }
    }

    pub fn set_port<'a>(&mut self, value: impl Into<Candidate<'a>>) -> AddressResult<()> {
        match self {
            Address::V4(ip) => ip.set_port(value),
            Address::V6(ip) => ip.set_port(value),
        }
    }

    pub fn as_ipv4(&self) -> &Ipv4 {
        match self {
            Address::V4(ip) => ip.as_ipv4(),
            Address::V6(ip) => ip.as_ipv4(),
        }
    }

    pub fn as_ipv6(&self) -> &Ipv6 {
        match self {
            Address::V4(ip) => ip.as_ipv6(),
            Address::V6(ip) => ip.as_ipv6(),
        }
    }

    /// The family-agnostic value holding the same integer and port.
    pub fn to_ip_address(&self) -> IpAddress {
        IpAddress::new(self.num(), self.port().map(i64::from))
    }
}

impl NetAddress for Address {
    fn pure(&self) -> &PureAddress {
        match self {
            Address::V4(ip) => ip.pure(),
            Address::V6(ip) => ip.pure(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(ip) => fmt::Display::fmt(ip, f),
            Address::V6(ip) => fmt::Display::fmt(ip, f),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl From<Ipv4> for Address {
    fn from(ip: Ipv4) -> Self {
        Address::V4(ip)
    }
}

impl From<Ipv6> for Address {
    fn from(ip: Ipv6) -> Self {
        Address::V6(ip)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_shape() {
        assert!(matches!(Address::from_str("10.0.0.1"), Ok(Address::V4(_))));
        assert!(matches!(Address::from_str("10.0.0.1:80"), Ok(Address::V4(_))));
        assert!(matches!(Address::from_str("::1"), Ok(Address::V6(_))));
        assert!(matches!(Address::from_str("[::1]:80"), Ok(Address::V6(_))));
    }

    #[test]
    fn test_dispatch_forwards_port() {
        let address = Address::parse("::1", Some(53)).unwrap();
        assert!(address.is_ipv6());
        assert_eq!(address.port(), Some(53));
        assert_eq!(address.to_string(), "[::1]:53");
    }

    #[test]
    fn test_malformed_input_fails_downstream() {
        // A dot routes to IPv4 even when the rest looks like IPv6
        assert!(matches!(
            Address::from_str("::ffff:1.2.3.4"),
            Err(AddressError::InvalidPort(_))
        ));
        assert!(matches!(
            Address::from_str("10.0.x.1"),
            Err(AddressError::InvalidIpv4Segment(_))
        ));
        assert_eq!(
            Address::from_str("1::2::3").unwrap_err(),
            AddressError::MultipleElisions
        );
        assert!(Address::from_str("").is_err());
    }

    #[test]
    fn test_generic_view() {
        let address: Address = "192.168.0.1:8080".parse().unwrap();
        let generic = address.to_ip_address();
        assert_eq!(generic.to_string(), "192.168.0.1:8080");
        assert_eq!(generic, address);
        assert_eq!(address.as_ipv6().num(), address.num());
    }
}
