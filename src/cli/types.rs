use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::TocOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "rustyll-toc")]
#[command(about = "Build and render tables of contents from markdown, HTML or heading events", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory to look for _config.yml in (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Table of contents settings given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct TocArgs {
    /// Custom configuration file (may be repeated, later files win)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<Vec<PathBuf>>,

    /// Shallowest heading depth to render
    #[arg(long, value_name = "LEVEL")]
    pub start_level: Option<usize>,

    /// Deepest heading depth to render, -1 for no limit
    #[arg(long, value_name = "LEVEL", allow_negative_numbers = true)]
    pub end_level: Option<i64>,

    /// Render an ordered list; `--ordered=false` switches a configured ordered list back to <ul>
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub ordered: Option<bool>,

    /// Markup written before the list
    #[arg(long, value_name = "HTML")]
    pub prefix: Option<String>,

    /// Markup written after the list
    #[arg(long, value_name = "HTML")]
    pub suffix: Option<String>,

    /// Leave out the <nav> wrapper
    #[arg(long, default_value_t = false, conflicts_with_all = ["prefix", "suffix"])]
    pub no_wrapper: bool,
}

impl TocArgs {
    /// The settings from these arguments, to apply over the config files
    pub fn overrides(&self) -> TocOverrides {
        let (prefix, suffix) = if self.no_wrapper {
            (Some(String::new()), Some(String::new()))
        } else {
            (self.prefix.clone(), self.suffix.clone())
        };

        TocOverrides {
            start_level: self.start_level,
            end_level: self.end_level,
            ordered: self.ordered,
            prefix,
            suffix,
        }
    }
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the table of contents of a page
    #[command(alias = "r")]
    Render {
        /// Markdown, HTML, or heading event (JSON/YAML) file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        toc: TocArgs,

        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the table of contents tree as JSON
    Tree {
        /// Markdown, HTML, or heading event (JSON/YAML) file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pretty-print the JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// List every heading anchor id in document order
    Ids {
        /// Markdown, HTML, or heading event (JSON/YAML) file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Render a Liquid template with the page bound to `content`
    Template {
        /// Liquid template file, use `{{ content | toc }}` to place the table of contents
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,

        /// Markdown or HTML page
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        toc: TocArgs,

        /// Write the result to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
