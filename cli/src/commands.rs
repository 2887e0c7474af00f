pub mod convert;
pub mod inspect;
pub mod validate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipcodec")]
#[command(about = "Parse, validate and convert IPv4 and IPv6 addresses.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only check the form of addresses, not their numeric bounds
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Pad every IPv6 hextet to four digits
    #[arg(long, global = true)]
    pub expand: bool,

    /// Collapse the longest run of zero hextets into '::'
    #[arg(long, global = true)]
    pub compress: bool,

    /// Hide section headers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show debug logs from the codec
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an address and show all of its representations
    #[command(alias = "i")]
    Inspect {
        address: String,
        /// Port to attach when the address text carries none
        #[arg(short, long, allow_negative_numbers = true)]
        port: Option<i64>,
    },
    /// Run every validator against an address, port or integer
    #[command(alias = "v")]
    Validate { input: String },
    /// Turn a decimal integer into an address
    #[command(alias = "c")]
    Convert {
        #[arg(allow_negative_numbers = true)]
        number: String,
        #[arg(short, long, allow_negative_numbers = true)]
        port: Option<i64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
