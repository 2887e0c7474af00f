//! # ipcodec
//!
//! Models, parses, validates and renders IPv4 and IPv6 addresses, with an
//! optional port, on top of a single `u128` representation.
//!
//! * [`network::validate`] never fails, it answers with a `bool`.
//! * [`network::codec`] converts between text and integers and reports
//!   malformed input as [`error::AddressError`].
//! * [`network::address`], [`network::ipv4`] and [`network::ipv6`] hold the
//!   value types, [`network::dispatch`] picks a family from textual shape.

pub mod config;
pub mod error;
pub mod network;

pub use error::{AddressError, ErrorKind};
pub use network::address::{IpAddress, NetAddress, PureAddress};
pub use network::dispatch::Address;
pub use network::ipv4::Ipv4;
pub use network::ipv6::Ipv6;
pub use network::validate::Candidate;
