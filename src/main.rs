//! CLI entry point for tile combining and contact sheet merging

use clap::Parser;
use tilestack::io::cli::{Cli, CommandRunner};
use tilestack::io::logging::init_logging;

fn main() -> tilestack::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let mut runner = CommandRunner::new(cli);
    runner.run()
}
