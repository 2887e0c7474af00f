use anyhow::Context;
use colored::*;
use ipcodec_common::{IpAddress, NetAddress, config::Config};

use crate::terminal::{colors, print};

pub fn convert(number: &str, port: Option<i64>, cfg: &Config) -> anyhow::Result<()> {
    let address = IpAddress::from_decimal(number, port)
        .with_context(|| format!("failed to convert '{number}'"))?;

    print::aligned_line("Address", address.to_string().color(colors::PRIMARY));
    print::aligned_line("Hex", address.as_hex().color(colors::NUMBER));
    print::aligned_line("As IPv4", address.as_ipv4().to_string().color(colors::IPV4_ADDR));
    print::aligned_line("As IPv6", cfg.render_ipv6(address.num()).color(colors::IPV6_ADDR));

    Ok(())
}
