//! Interactive translation quiz over a phrase file.

use std::process;

use clap::Parser;

use app::{SessionArgs, init_logging};
use drill_core::{Clock, Direction};
use services::{ResultReporter, SessionController, StdConsole};
use storage::MissedPhraseLog;

#[derive(Parser)]
#[command(name = "quiz", version, about = "Translation drill over a phrase file")]
struct Cli {
    #[command(flatten)]
    args: SessionArgs,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dictionary = cli.args.open_dictionary(&mut std::io::stdout())?;
    let reporter = ResultReporter::new(MissedPhraseLog::new(&cli.args.errors_dir));
    let mut controller = SessionController::new(dictionary, Clock::default_clock(), reporter);
    controller.play(&mut StdConsole::new(), Direction::Forward)?;
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
