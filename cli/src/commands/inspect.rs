use anyhow::Context;
use colored::*;
use ipcodec_common::{Address, NetAddress, config::Config};

use crate::terminal::{colors, print};

pub fn inspect(address: &str, port: Option<i64>, cfg: &Config) -> anyhow::Result<()> {
    let parsed = Address::parse(address, port)
        .with_context(|| format!("failed to parse address '{address}'"))?;

    let (family, color) = match parsed {
        Address::V4(_) => ("IPv4", colors::IPV4_ADDR),
        Address::V6(_) => ("IPv6", colors::IPV6_ADDR),
    };

    print::aligned_line("Family", family);
    print::aligned_line("Address", parsed.to_string().color(color));
    print::aligned_line("Integer", parsed.num().to_string().color(colors::NUMBER));
    print::aligned_line("Hex", parsed.as_hex().color(colors::NUMBER));
    print::aligned_line(
        "Port",
        parsed
            .port()
            .map(|port| port.to_string())
            .unwrap_or_else(|| "none".to_string()),
    );
    print::aligned_line("As IPv4", parsed.as_ipv4().to_string().color(colors::IPV4_ADDR));
    print::aligned_line("As IPv6", cfg.render_ipv6(parsed.num()).color(colors::IPV6_ADDR));
    print::aligned_line("Validated", print::verdict(cfg.validate_ip(address)));

    Ok(())
}
