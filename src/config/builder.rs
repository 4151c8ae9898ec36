use super::{parsing::compile_pattern, Config};
use crate::cli::Cli;
use crate::errors::{ConfigError, Result};
use crate::filter::{MarkerStyle, Markers};
use regex::Regex;
use std::path::PathBuf;

/// Builds a [`Config`] step by step.
///
/// # Examples
/// ```
/// use stubbify::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input("src")
///     .destination("dist")
///     .begin_pattern(r"^# BEGIN DEBUG$")
///     .end_pattern(r"^# END DEBUG$")
///     .build()
///     .unwrap();
///
/// assert!(config.markers.is_begin("# BEGIN DEBUG"));
/// assert!(config.markers.is_end("# END DEBUG"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    inputs: Vec<String>,
    destination: Option<String>,
    style: Option<MarkerStyle>,
    begin_pattern: Option<String>,
    end_pattern: Option<String>,
    ignore_case: Option<bool>,
    no_recursive: Option<bool>,
    dry_run: Option<bool>,
    summary: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            inputs: cli.inputs,
            destination: Some(cli.dest),
            style: Some(cli.style),
            begin_pattern: cli.begin,
            end_pattern: cli.end,
            ignore_case: Some(cli.ignore_case),
            no_recursive: Some(cli.no_recursive),
            dry_run: Some(cli.dry_run),
            summary: Some(cli.summary),
        }
    }

    /// Adds a file or directory to stub.
    pub fn input(mut self, path: impl Into<String>) -> Self {
        self.inputs.push(path.into());
        self
    }

    /// Replaces the list of inputs.
    pub fn inputs(mut self, paths: Vec<String>) -> Self {
        self.inputs = paths;
        self
    }

    /// Sets the destination root.
    pub fn destination(mut self, path: impl Into<String>) -> Self {
        self.destination = Some(path.into());
        self
    }

    /// Picks a built-in marker preset. Explicit patterns take precedence.
    pub fn style(mut self, style: MarkerStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Overrides the begin marker with a regular expression.
    pub fn begin_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.begin_pattern = Some(pattern.into());
        self
    }

    /// Overrides the end marker with a regular expression.
    pub fn end_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.end_pattern = Some(pattern.into());
        self
    }

    /// Compiles custom patterns case-insensitively.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = Some(ignore_case);
        self
    }

    pub fn no_recursive(mut self, no_recursive: bool) -> Self {
        self.no_recursive = Some(no_recursive);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub fn summary(mut self, summary: bool) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Validates the options and compiles the marker patterns.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] without inputs or a destination, and
    /// [`ConfigError::InvalidPattern`] if a custom pattern fails to compile.
    pub fn build(self) -> Result<Config> {
        if self.inputs.is_empty() {
            return Err(ConfigError::Missing("<INPUT>".to_string()).into());
        }
        let destination = match self.destination {
            Some(dest) if !dest.trim().is_empty() => PathBuf::from(dest),
            Some(_) => {
                return Err(ConfigError::InvalidValue {
                    option: "--dest".to_string(),
                    reason: "must not be empty".to_string(),
                }
                .into())
            }
            None => return Err(ConfigError::Missing("--dest".to_string()).into()),
        };

        let style = self.style.unwrap_or_default();
        let ignore_case = self.ignore_case.unwrap_or(false);
        let begin = resolve_pattern(self.begin_pattern, "--begin", ignore_case, style.begin())?;
        let end = resolve_pattern(self.end_pattern, "--end", ignore_case, style.end())?;
        let markers = Markers::new(begin, end);
        log::debug!("Using markers: {:?}", markers);

        Ok(Config {
            inputs: self.inputs.into_iter().map(PathBuf::from).collect(),
            destination,
            markers,
            recursive: !self.no_recursive.unwrap_or(false),
            dry_run: self.dry_run.unwrap_or(false),
            summary: self.summary.unwrap_or(false),
        })
    }
}

fn resolve_pattern(
    custom: Option<String>,
    option: &str,
    ignore_case: bool,
    preset: Regex,
) -> Result<Regex> {
    match custom {
        Some(pattern) => Ok(compile_pattern(&pattern, option, ignore_case)?),
        None => Ok(preset),
    }
}
