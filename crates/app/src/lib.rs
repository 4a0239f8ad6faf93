//! Shared command-line plumbing for the drill binaries.

#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

use drill_core::model::DEFAULT_PRINT_INTERVAL_MS;
use drill_core::{Dictionary, SessionConfig};
use storage::{FileRepository, StorageError, load_dictionary};

/// Arguments common to `quiz` and `phrase-printer`.
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Phrase file: primary and target lines alternating
    #[arg(env = "DRILL_FILE")]
    pub file: Option<PathBuf>,

    /// Number of phrases per session (0 = all)
    #[arg(env = "DRILL_SESSION_SIZE")]
    pub session_size: Option<usize>,

    /// Pause after each printed phrase, in milliseconds
    #[arg(env = "DRILL_PRINT_INTERVAL_MS")]
    pub print_interval_ms: Option<u64>,

    /// Directory for errors<N>.txt files
    #[arg(long, env = "DRILL_ERRORS_DIR", default_value = ".")]
    pub errors_dir: PathBuf,
}

impl SessionArgs {
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(
            self.session_size.unwrap_or(0),
            self.print_interval_ms.unwrap_or(DEFAULT_PRINT_INTERVAL_MS),
        )
    }

    /// Load the phrase file named on the command line and announce it on
    /// `out`.
    ///
    /// # Errors
    ///
    /// Fails with a user-facing message if no path was given or the file is
    /// missing or holds no complete pair. Other read failures keep their
    /// cause in the error chain.
    pub fn open_dictionary<W: Write + ?Sized>(&self, out: &mut W) -> anyhow::Result<Dictionary> {
        let path = self
            .file
            .as_deref()
            .ok_or_else(|| anyhow!("Cannot load dictionary due to missing file path!"))?;

        let repo = FileRepository::new(path);
        let dictionary = match load_dictionary(&repo, self.session_config()) {
            Ok(dictionary) => dictionary,
            Err(StorageError::NotFound { .. } | StorageError::InsufficientData { .. }) => {
                return Err(anyhow!(
                    "File \"{}\" wasn't found or contains insufficient data!",
                    path.display()
                ));
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("Cannot read phrase file \"{}\"", path.display())));
            }
        };

        info!(path = %path.display(), "dictionary ready");
        write!(
            out,
            "\nLanguage data from file \"{}\" successfully loaded!\n\n",
            path.display()
        )?;
        Ok(dictionary)
    }
}

/// Install the stderr subscriber, honouring `RUST_LOG` and defaulting to
/// `warn`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
