//! Command-line interface for the combiner.
//!
//! The surface is a single flat command, matching the tool's one job:
//!
//! ```bash
//! # combine stylesheets to stdout
//! combiner --root styles site.css
//!
//! # combine scripts into a bundle file, with boundary markers
//! combiner --root src --type js -s -o bundle.js main.js admin.js
//!
//! # a module system under a different namespace
//! combiner --root src --namespace fx main.js
//! ```
//!
//! Logging goes to stderr through `tracing`; `--verbose` raises the filter
//! to debug, `--quiet` lowers it to errors only, and an explicit `RUST_LOG`
//! overrides both. Stdout carries nothing but the combined output, so the
//! tool stays pipe-friendly.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Charset, RunConfig, SyntaxKind};
use crate::output;
use crate::resolver::Resolver;

/// Combine module source files in dependency order.
#[derive(Parser, Debug)]
#[command(
    name = "combiner",
    about = "Combine module source files in dependency order",
    version,
    long_about = "Resolves the dependency closure of the given entry files (stylesheet \
                  @import declarations or script require calls), rejects circular \
                  dependencies, and writes the files concatenated so that every file \
                  appears after the files it depends on."
)]
pub struct Cli {
    /// Entry-point files, relative to --root
    #[arg(required = true, value_name = "FILES")]
    files: Vec<String>,

    /// Root directory that file identifiers resolve against
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// Dependency syntax; inferred from the first entry's extension when
    /// omitted
    #[arg(short = 't', long = "type", value_enum, value_name = "TYPE")]
    syntax: Option<SyntaxKind>,

    /// Namespace the script syntax derives its require/kernel tokens from
    #[arg(long, default_value = "app", value_name = "NAME")]
    namespace: String,

    /// Output a separator comment between combined files
    #[arg(short, long)]
    separator: bool,

    /// Read input and write output using CHARSET (utf-8 or iso-8859-1);
    /// unknown names fall back to utf-8 with a warning
    #[arg(long, value_name = "CHARSET")]
    charset: Option<String>,

    /// Place the output into FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Display informational messages and warnings
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Run the resolve-order-emit pipeline for the parsed arguments.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let config = self.into_run_config();
        let resolver = Resolver::new(&config)?;
        let files = resolver.resolve(&config.inputs)?;
        output::emit(&config, &files)?;
        Ok(())
    }

    /// Install the stderr tracing subscriber. `RUST_LOG` wins over the
    /// verbosity flags; repeated initialization (as in tests) is ignored.
    fn init_logging(&self) {
        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Lower the parsed arguments into a run configuration.
    fn into_run_config(self) -> RunConfig {
        let syntax = self
            .syntax
            .unwrap_or_else(|| SyntaxKind::infer(&self.files[0]));
        RunConfig {
            root: self.root,
            inputs: self.files,
            syntax,
            namespace: self.namespace,
            separator: self.separator,
            charset: Charset::negotiate(self.charset.as_deref()),
            output: self.output,
        }
    }
}
