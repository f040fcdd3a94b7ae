// src/config.rs
use corpus_scrape_domain::config::{ScrapeConfig, ScrapeLimits};
use corpus_scrape_shared_kernel::{PresentationError, Result};

use crate::cli::Args;

/// Run configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scrape: ScrapeConfig,
    pub pretty: bool,
    pub quiet: bool,
}

impl AppConfig {
    /// Validate flags and normalize the directory, extension and ignore lists.
    ///
    /// # Errors
    /// Fails on zero size limits and when no directories or no extensions remain.
    pub fn from_args(args: Args) -> Result<Self> {
        validate_at_least_one("--max-size", args.max_size.0)?;
        validate_at_least_one("--max-total-size", args.max_total_size.0)?;

        let limits = ScrapeLimits::new(args.max_size.0, args.max_total_size.0);
        let scrape =
            ScrapeConfig::from_lists(&args.dirs, &args.extensions, &args.ignore_dirs, limits, args.output)?;
        Ok(Self { scrape, pretty: args.pretty, quiet: args.quiet })
    }
}

fn validate_at_least_one(flag: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}
