//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands: one invocation prepares one map
//! - Every interactive prompt has a flag that skips it, so the tool can run
//!   unattended (CI, scripts) when stdin is not a terminal

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// mapprep - loading-screen and icon asset preparation for Source 2 map addons
#[derive(Parser, Debug)]
#[command(name = "mapprep")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'mapprep' without arguments to be prompted for the map name.")]
pub struct Cli {
    /// Map name used in every generated file name (prompted if omitted)
    #[arg(short, long)]
    pub map: Option<String>,

    /// Directory holding the screenshots, icon and map description
    #[arg(short, long, default_value = ".")]
    pub source: PathBuf,

    /// Game installation root (skips Steam discovery)
    #[arg(long, value_name = "PATH")]
    pub install_path: Option<PathBuf>,

    /// Addon name under csgo_addons (defaults to the map name)
    #[arg(long)]
    pub addon: Option<String>,

    /// Explicit addon content root (requires --game-root)
    #[arg(long, value_name = "PATH", requires = "game_root")]
    pub content_root: Option<PathBuf>,

    /// Explicit addon game root (requires --content-root)
    #[arg(long, value_name = "PATH", requires = "content_root")]
    pub game_root: Option<PathBuf>,

    /// Path to resourcecompiler.exe
    #[arg(long, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Compile the generated descriptions without asking
    #[arg(long, conflicts_with = "no_compile")]
    pub compile: bool,

    /// Skip compilation without asking
    #[arg(long)]
    pub no_compile: bool,

    /// Output format for CI (NDJSON event stream)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Compile decision from flags; `None` means ask (or fall back to config)
    pub fn compile_choice(&self) -> Option<bool> {
        match (self.compile, self.no_compile) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
