use crate::network::codec;
use crate::network::validate::{self, Candidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Enforces numeric bounds when validating, not only the form.
    pub strict: bool,
    /// Writes hextets without leading zeroes.
    pub shorten: bool,
    /// Collapses the longest run of zero hextets into `::`.
    ///
    /// Does not affect the text an address was built from.
    pub remove_zeroes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: true,
            shorten: true,
            remove_zeroes: false,
        }
    }
}

impl Config {
    pub fn render_ipv6(&self, num: u128) -> String {
        codec::num_to_ipv6(num, self.shorten, self.remove_zeroes)
    }

    pub fn validate_ipv4<'a>(&self, address: impl Into<Candidate<'a>>) -> bool {
        validate::validate_ipv4(address, self.strict)
    }

    pub fn validate_ipv6<'a>(&self, address: impl Into<Candidate<'a>>) -> bool {
        validate::validate_ipv6(address, self.strict)
    }

    pub fn validate_ip<'a>(&self, address: impl Into<Candidate<'a>>) -> bool {
        validate::validate_ip(address, self.strict)
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
    fn test_default_config() {
        let cfg = Config::default();
        assert!(cfg.strict);
        assert_eq!(cfg.render_ipv6(1), "0:0:0:0:0:0:0:1");
        assert!(!cfg.validate_ipv4("300.0.0.1"));
    }

    #[test]
    fn test_custom_config() {
        let cfg = Config {
            strict: false,
            shorten: false,
            remove_zeroes: true,
        };
        assert_eq!(cfg.render_ipv6(1), "::0001");
        assert!(cfg.validate_ipv4("300.0.0.1"));
        assert!(cfg.validate_ip("1:2:3:4:5:6:7:12345"));
    }
}
