//! Prints phrase pairs from a file on a timer.

use std::process;

use clap::Parser;

use app::{SessionArgs, init_logging};
use services::PhrasePrinter;

#[derive(Parser)]
#[command(
    name = "phrase-printer",
    version,
    about = "Print phrase pairs one at a time"
)]
struct Cli {
    #[command(flatten)]
    args: SessionArgs,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut out = std::io::stdout();
    let dictionary = cli.args.open_dictionary(&mut out)?;
    PhrasePrinter::new(dictionary).print(&mut out)?;
    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}
