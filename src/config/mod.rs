//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

mod cli;

pub use cli::{
    CheckArgs, CliArgs, Command, CopyLanguageArgs, GenerateArgs, LoggingOverrides,
    NormalizeBackgroundsArgs, OutputOverrides, TranslateContentArgs,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "intravox-demo";
const ENV_PREFIX: &str = "INTRAVOX_DEMO";
const DEFAULT_OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demo-data");
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_BACKDATE_DAYS: u64 = 30;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub output: OutputSettings,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub language: String,
}

impl OutputSettings {
    /// Root of the configured language tree.
    pub fn language_root(&self) -> PathBuf {
        self.directory.join(&self.language)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// How far `created` is set back for pages that have never been written.
    pub backdate: Duration,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;

    raw.apply_logging_overrides(&cli.logging);
    match cli.command.as_ref() {
        Some(Command::Generate(args)) => raw.apply_generate_overrides(args),
        Some(Command::Check(args)) => raw.apply_output_overrides(&args.output),
        Some(Command::NormalizeBackgrounds(args)) => raw.apply_output_overrides(&args.output),
        Some(Command::TranslateContent(args)) => raw.apply_output_overrides(&args.output),
        Some(Command::CopyLanguage(args)) => {
            if let Some(directory) = args.directory.as_ref() {
                raw.output.directory = Some(directory.clone());
            }
        }
        None => raw.apply_generate_overrides(&GenerateArgs::default()),
    }

    Settings::from_raw(raw)
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

/// Language tags name directories, so they must be a single plain path segment.
pub fn validate_language(key: &'static str, language: &str) -> Result<(), LoadError> {
    let trimmed = language.trim();
    if trimmed.is_empty() {
        return Err(LoadError::invalid(key, "must not be empty"));
    }
    if trimmed != language {
        return Err(LoadError::invalid(key, "must not contain surrounding whitespace"));
    }
    if language.contains(['/', '\\']) || language == "." || language == ".." {
        return Err(LoadError::invalid(
            key,
            format!("`{language}` is not a single directory name"),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    output: RawOutputSettings,
    generation: RawGenerationSettings,
}

impl RawSettings {
    fn apply_logging_overrides(&mut self, overrides: &LoggingOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }

    fn apply_generate_overrides(&mut self, args: &GenerateArgs) {
        self.apply_output_overrides(&args.output);
        if let Some(days) = args.backdate_days {
            self.generation.backdate_days = Some(days);
        }
    }

    fn apply_output_overrides(&mut self, overrides: &OutputOverrides) {
        if let Some(directory) = overrides.directory.as_ref() {
            self.output.directory = Some(directory.clone());
        }
        if let Some(language) = overrides.language.as_ref() {
            self.output.language = Some(language.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            logging,
            output,
            generation,
        } = raw;

        let logging = build_logging_settings(logging)?;
        let output = build_output_settings(output)?;
        let generation = build_generation_settings(generation)?;

        Ok(Self {
            logging,
            output,
            generation,
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_output_settings(output: RawOutputSettings) -> Result<OutputSettings, LoadError> {
    let directory = output
        .directory
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    if directory.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "output.directory",
            "path must not be empty",
        ));
    }

    let language = output
        .language
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    validate_language("output.language", &language)?;

    Ok(OutputSettings {
        directory,
        language,
    })
}

fn build_generation_settings(
    generation: RawGenerationSettings,
) -> Result<GenerationSettings, LoadError> {
    let days = generation
        .backdate_days
        .unwrap_or(DEFAULT_BACKDATE_DAYS);
    let seconds = days.checked_mul(SECONDS_PER_DAY).ok_or_else(|| {
        LoadError::invalid("generation.backdate_days", "value exceeds supported range")
    })?;
    // `time` rejects offsets beyond i64 seconds; keep the value representable.
    i64::try_from(seconds).map_err(|_| {
        LoadError::invalid("generation.backdate_days", "value exceeds supported range")
    })?;

    Ok(GenerationSettings {
        backdate: Duration::from_secs(seconds),
    })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawOutputSettings {
    directory: Option<PathBuf>,
    language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawGenerationSettings {
    backdate_days: Option<u64>,
}
