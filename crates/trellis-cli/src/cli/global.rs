//! Flags accepted before or after any `trellis` subcommand.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log level for trellis and its libraries; `RUST_LOG` wins when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more of the scaffold run (-v progress, -vv each overlay, -vvv everything)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors; skips the summary and next steps"
    )]
    pub quiet: bool,

    /// Also honoured through `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Print rule violations and plans without ANSI colors"
    )]
    pub no_color: bool,

    /// Must exist when given, except for `trellis init`, which creates it.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Trellis config file (default: platform config dir; TRELLIS__* env vars override it)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How check results and messages are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored indicators and spinner.
    Human,
    Plain,
    /// Violations from `check --all` as a JSON array.
    Json,
}
