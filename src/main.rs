use clap::{Parser, Subcommand};

use syslog_returner::commands::{forward, version};
use syslog_returner::returner;

#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Path to the host configuration file, a JSON object
    #[arg(short, long)]
    config: Option<String>,
    /// Alternate configuration profile to apply
    #[arg(short, long)]
    profile: Option<String>,
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Subcommand, Debug)]
enum SubCommand {
    /// Forwards a job record to the configured syslog endpoint.
    Forward(forward::Forward),
    /// Prints version and build information.
    Version(version::Version),
}

fn main() {
    env_logger::builder().format_timestamp(None).init();
    let Opts {
        config,
        profile,
        subcmd,
    } = Opts::parse();

    let result = match subcmd {
        SubCommand::Forward(forward) => {
            returner::check_available().and_then(|_| forward.exec(config, profile))
        }
        SubCommand::Version(version) => version.exec(),
    };

    match result {
        Ok(_) => {}
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}
