use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the IntraVox demo generator.
#[derive(Debug, Parser)]
#[command(
    name = "intravox-demo",
    version,
    about = "Generate the IntraVox demo page tree"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "INTRAVOX_DEMO_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Write every demo page and its asset folder (the default).
    Generate(GenerateArgs),
    /// Check widget placement against the layout rules.
    Check(CheckArgs),
    /// Rewrite legacy theme-class backgrounds to editor CSS variables.
    #[command(name = "normalize-backgrounds")]
    NormalizeBackgrounds(NormalizeBackgroundsArgs),
    /// Copy one language tree into another with fresh page identifiers.
    #[command(name = "copy-language")]
    CopyLanguage(CopyLanguageArgs),
    /// Translate Dutch page text in a language tree to English.
    #[command(name = "translate-content")]
    TranslateContent(TranslateContentArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct OutputOverrides {
    /// Override the directory holding the per-language trees.
    #[arg(long = "output-dir", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Override the language tree to work on.
    #[arg(long = "language", value_name = "LANG")]
    pub language: Option<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub output: OutputOverrides,

    /// Override how many days `created` is backdated for new pages.
    #[arg(long = "backdate-days", value_name = "DAYS")]
    pub backdate_days: Option<u64>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub output: OutputOverrides,

    /// Check the page files on disk instead of the built-in table.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub tree: bool,
}

#[derive(Debug, Args, Default, Clone)]
pub struct NormalizeBackgroundsArgs {
    #[command(flatten)]
    pub output: OutputOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct TranslateContentArgs {
    #[command(flatten)]
    pub output: OutputOverrides,
}

#[derive(Debug, Args, Clone)]
pub struct CopyLanguageArgs {
    /// Override the directory holding the per-language trees.
    #[arg(long = "output-dir", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,

    /// Language tree to copy from.
    #[arg(long = "from", value_name = "LANG")]
    pub from: String,

    /// Language tree to replace.
    #[arg(long = "to", value_name = "LANG")]
    pub to: String,
}
