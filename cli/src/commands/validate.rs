use ipcodec_common::{Candidate, config::Config, network::validate};

use crate::terminal::print;

/// Reads the input as an integer when it looks like one, as text otherwise.
fn to_candidate(input: &str) -> Candidate<'_> {
    if let Ok(num) = input.parse::<u128>() {
        return Candidate::UInt(num);
    }
    match input.parse::<i128>() {
        Ok(num) => Candidate::Int(num),
        Err(_) => Candidate::Text(input),
    }
}

pub fn validate(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let candidate = to_candidate(input);

    let port_ok = validate::validate_port(candidate);
    let ipv4_ok = cfg.validate_ipv4(candidate);
    let ipv6_ok = cfg.validate_ipv6(candidate);

    print::aligned_line("Port", print::verdict(port_ok));
    print::aligned_line("IPv4", print::verdict(ipv4_ok));
    print::aligned_line("IPv6", print::verdict(ipv6_ok));
    print::aligned_line("Any address", print::verdict(cfg.validate_ip(candidate)));

    if !(port_ok || ipv4_ok || ipv6_ok) {
        anyhow::bail!("'{input}' is neither a port nor an address");
    }

    Ok(())
}
