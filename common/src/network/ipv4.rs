//! # IPv4 Address
//!
//! An address committed to the IPv4 family. It keeps the text it was built
//! from, so `010.0.0.1` renders as written while its integer is canonical.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{AddressError, AddressResult};
use crate::network::address::{IpAddress, NetAddress, PureAddress};
use crate::network::codec::{self, parse_int};
use crate::network::constants::IPV4_LOCALHOST;
use crate::network::ipv6::Ipv6;
use crate::network::validate::Candidate;

#[derive(Debug, Clone)]
pub struct Ipv4 {
    address: String,
    ip: IpAddress,
}

impl Ipv4 {
    /// Builds an IPv4 address from `a.b.c.d` or `a.b.c.d:port` text.
    ///
    /// Without text the address is `127.0.0.1`. A port embedded in the text
    /// takes precedence over `port`, which is only used when the text has none.
    pub fn new(address: Option<&str>, port: Option<i64>) -> AddressResult<Self> {
        let text = match address {
            Some(text) => text.to_string(),
            None => codec::num_to_ipv4(IPV4_LOCALHOST),
        };

        let mut parts = text.split(':');
        let address = parts.next().unwrap_or_default();
        let port = match parts.next() {
            Some(embedded) => Some(
                parse_int(embedded).ok_or_else(|| AddressError::InvalidPort(embedded.to_string()))?,
            ),
            None => port.map(i128::from),
        };

        let num = codec::ipv4_to_num(address).inspect_err(|err| {
            debug!("cannot build IPv4 from '{text}': {err}");
        })?;

        Ok(Self {
            address: address.to_string(),
            ip: IpAddress::seeded(num, port),
        })
    }

    /// Builds an IPv4 address from its integer.
    pub fn from_num(num: u32, port: Option<i64>) -> Self {
        Self {
            address: codec::num_to_ipv4(u128::from(num)),
            ip: IpAddress::new(u128::from(num), port),
        }
    }

    /// The address text, without port.
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

impl Default for Ipv4 {
    fn default() -> Self {
        Self::from_num(IPV4_LOCALHOST as u32, None)
    }
}

impl NetAddress for Ipv4 {
    fn pure(&self) -> &PureAddress {
        self.ip.pure()
    }
}

impl fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port() {
            Some(port) => write!(f, "{}:{}", self.address, port),
            None => f.write_str(&self.address),
        }
    }
}

impl FromStr for Ipv4 {
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
