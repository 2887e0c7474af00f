//! # IPv6 Address
//!
//! An address committed to the IPv6 family. The port form is bracketed,
//! `[addr]:port`, so it cannot be confused with the address's own colons.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{AddressError, AddressResult};
use crate::network::address::{IpAddress, NetAddress, PureAddress};
use crate::network::codec::{self, parse_int};
use crate::network::constants::IPV6_LOCALHOST;
use crate::network::ipv4::Ipv4;
use crate::network::validate::Candidate;

#[derive(Debug, Clone)]
pub struct Ipv6 {
    address: String,
    ip: IpAddress,
}

impl Ipv6 {
    /// Builds an IPv6 address from `hextets` or `[hextets]:port` text.
    ///
    /// Without text the address is `0:0:0:0:0:0:0:1`. A port embedded in the
    /// text takes precedence over `port`, which is only used when the text has
    /// none.
    pub fn new(address: Option<&str>, port: Option<i64>) -> AddressResult<Self> {
        let text = match address {
            Some(text) => text.to_string(),
            None => codec::num_to_ipv6(IPV6_LOCALHOST, true, false),
        };

        let mut parts = text.split("]:");
        let mut address = parts.next().unwrap_or_default();
        let port = match parts.next() {
            Some(embedded) => {
                // Removes the opening square bracket
                let mut chars = address.chars();
                chars.next();
                address = chars.as_str();

                Some(
                    parse_int(embedded)
                        .ok_or_else(|| AddressError::InvalidPort(embedded.to_string()))?,
                )
            }
            None => port.map(i128::from),
        };

        let num = codec::ipv6_to_num(address).inspect_err(|err| {
            debug!("cannot build IPv6 from '{text}': {err}");
        })?;

        Ok(Self {
            address: address.to_string(),
            ip: IpAddress::seeded(num, port),
        })
    }

    /// Builds an IPv6 address from its integer, written without padding or
    /// zero elision.
    pub fn from_num(num: u128, port: Option<i64>) -> Self {
        Self {
            address: codec::num_to_ipv6(num, true, false),
            ip: IpAddress::new(num, port),
        }
    }

    /// The address text, without brackets or port.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sets a new port value, see [`PureAddress::set_port`].
    pub fn set_port<'a>(&mut self, value: impl Into<Candidate<'a>>) -> AddressResult<()> {
        self.ip.set_port(value)
    }

    pub fn as_ipv4(&self) -> &Ipv4 {
        self.ip.as_ipv4()
    }

    pub fn as_ipv6(&self) -> &Ipv6 {
        self.ip.as_ipv6()
    }
}

impl Default for Ipv6 {
    fn default() -> Self {
        Self::from_num(IPV6_LOCALHOST, None)
    }
}

impl NetAddress for Ipv6 {
    fn pure(&self) -> &PureAddress {
        self.ip.pure()
    }
}

impl fmt::Display for Ipv6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port() {
            Some(port) => write!(f, "[{}]:{}", self.address, port),
            None => f.write_str(&self.address),
        }
    }
}

impl FromStr for Ipv6 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Some(s), None)
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
    fn test_new_plain() {
        let ip = Ipv6::new(Some("2001:db8::1"), None).unwrap();
        assert_eq!(ip.address(), "2001:db8::1");
        assert_eq!(ip.num(), 0x2001_0DB8_0000_0000_0000_0000_0000_0001);
        assert_eq!(ip.to_string(), "2001:db8::1");
    }

    #[test]
    fn test_new_defaults_to_loopback() {
        let ip = Ipv6::new(None, None).unwrap();
        assert_eq!(ip.to_string(), "0:0:0:0:0:0:0:1");
        assert_eq!(ip.num(), IPV6_LOCALHOST);
        assert_eq!(ip, "::1".parse::<Ipv6>().unwrap());
        assert_eq!(Ipv6::default().num(), 1);
    }

    #[test]
    fn test_new_with_port() {
        let ip = Ipv6::new(Some("[fe80::1]:443"), None).unwrap();
        assert_eq!(ip.address(), "fe80::1");
        assert_eq!(ip.port(), Some(443));
        assert_eq!(ip.to_string(), "[fe80::1]:443");

        let ip = Ipv6::new(Some("fe80::1"), Some(22)).unwrap();
        assert_eq!(ip.to_string(), "[fe80::1]:22");
    }

    #[test]
    fn test_embedded_port_wins_over_argument() {
        let ip = Ipv6::new(Some("[::1]:8080"), Some(22)).unwrap();
        assert_eq!(ip.port(), Some(8080));
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(
            Ipv6::new(Some("1::2::3"), None).unwrap_err(),
            AddressError::MultipleElisions
        );
        assert_eq!(
            Ipv6::new(Some("[::1]:http"), None).unwrap_err(),
            AddressError::InvalidPort("http".into())
        );
        assert_eq!(
            "1:2:3:4:5:6:7:10000".parse::<Ipv6>().unwrap_err(),
            AddressError::SegmentTooLarge("10000".into())
        );
        assert!("[::1]".parse::<Ipv6>().is_err());
        assert!("1:2:3".parse::<Ipv6>().is_err());
    }

    #[test]
    fn test_views() {
        let ip: Ipv6 = "::ffff:a00:1".parse().unwrap();
        assert_eq!(ip.as_ipv4().to_string(), "10.0.0.1");

        let ip: Ipv6 = "::a00:1".parse().unwrap();
        assert_eq!(ip.as_ipv6().to_string(), "0:0:0:0:0:0:A00:1");
        assert_eq!(ip.num_to_ipv6(false, true), "::0A00:0001");
    }
}
