use std::fmt;
use std::path::PathBuf;

use storage::{FileRepository, StorageError, remove_duplicates};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Args {
    file: PathBuf,
}

#[derive(Debug)]
enum ArgsError {
    MissingPath,
    UnknownArg(String),
    ExtraArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingPath => write!(f, "Cannot clear duplicates! No file path specified!"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::ExtraArg(arg) => write!(f, "unexpected extra argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut file = None;

        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                flag if flag.starts_with('-') => return Err(ArgsError::UnknownArg(arg)),
                _ if file.is_some() => return Err(ArgsError::ExtraArg(arg)),
                _ => file = Some(PathBuf::from(arg)),
            }
        }

        file.map(|file| Self { file }).ok_or(ArgsError::MissingPath)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  remove-duplicates <file>");
    eprintln!();
    eprintln!("Rewrites <file> keeping the first occurrence of every phrase pair.");
}

fn report(removed: usize, file: &std::path::Path) -> String {
    let path = file.display();
    match removed {
        0 => format!("Found no duplicates in file at path \"{path}\"!"),
        1 => format!("Removed one duplicate from file at path \"{path}\"!"),
        n => format!("Removed {n} duplicates from file at path \"{path}\"!"),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        if !matches!(e, ArgsError::MissingPath) {
            print_usage();
        }
        e
    })?;

    let repo = FileRepository::new(&args.file);
    let removed = remove_duplicates(&repo).map_err(|e| {
        match &e {
            StorageError::NotFound { .. } | StorageError::InsufficientData { .. } => eprintln!(
                "File \"{}\" wasn't found or contains insufficient data!",
                args.file.display()
            ),
            other => eprintln!("{other}"),
        }
        e
    })?;

    println!("{}", report(removed, &args.file));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if run().is_err() {
        std::process::exit(1);
    }
}
