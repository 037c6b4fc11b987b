//! CLI argument parsing and outcome rendering

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bower_git::checkout::{CheckoutOptions, CheckoutOrchestrator, TargetResult};
use bower_git::output::{self, OutputConfig};

/// Bower Git - replace bower components with live git clones
#[derive(Parser, Debug)]
#[command(name = "bower-git")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Component directories to replace
    #[arg(value_name = "PATH")]
    targets: Vec<PathBuf>,

    /// Check out a specific branch instead of the repository default
    #[arg(short, long, value_name = "BRANCH")]
    branch: Option<String>,

    /// Reprocess directories that are already git checkouts
    #[arg(short, long)]
    force: bool,

    /// Print the path of the first replaced component
    #[arg(short, long)]
    goto: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the checkout run described by the parsed arguments.
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::from_env_and_flag(&self.color);

        let options = CheckoutOptions {
            branch: self.branch,
            force: self.force,
            expose_first: self.goto,
        };

        let report = CheckoutOrchestrator::new().run(&self.targets, &options)?;

        for outcome in &report.outcomes {
            match &outcome.result {
                TargetResult::Replaced { component } => {
                    println!(
                        "{}",
                        output::success(
                            &out,
                            &format!(
                                "bower component \"{component}\" has been replaced by its git repository ({})",
                                outcome.target.display()
                            ),
                        )
                    );
                }
                TargetResult::Skipped => {
                    eprintln!(
                        "{}",
                        output::warning(
                            &out,
                            &format!(
                                "skipping {}: already a git checkout (use --force to reprocess)",
                                outcome.target.display()
                            ),
                        )
                    );
                }
                TargetResult::Failed { error } => {
                    eprintln!(
                        "{}",
                        output::failure(
                            &out,
                            &format!("{}: {error}", outcome.target.display()),
                        )
                    );
                }
            }
        }

        if let Some(path) = &report.first_replaced {
            println!("{}", path.display());
        }

        if !report.all_succeeded() {
            anyhow::bail!(
                "{} of {} targets failed",
                report.failures().count(),
                report.outcomes.len()
            );
        }

        Ok(())
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
