mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert, inspect, validate};
use ipcodec_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        strict: !commands.lenient,
        shorten: !commands.expand,
        remove_zeroes: commands.compress,
    };

    match commands.command {
        Commands::Inspect { address, port } => {
            print::header("inspecting address", commands.quiet);
            inspect::inspect(&address, port, &cfg)
        }
        Commands::Validate { input } => {
            print::header("running validators", commands.quiet);
            validate::validate(&input, &cfg)
        }
        Commands::Convert { number, port } => {
            print::header("converting integer", commands.quiet);
            convert::convert(&number, port, &cfg)
        }
    }
}
