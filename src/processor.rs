//! Processing API
//!
//! Runs source text through one of the pipelines and renders the result. What to
//! extract (the stage) and how to print it (the format) are picked with a single
//! `<stage>-<format>` string such as `token-json` or `ast-treeviz`.

use crate::config::MarkstyleConfig;
use crate::error::ParseError;
use crate::formats::{serialize_stylesheet, to_css, to_treeviz_str};
use crate::lexing::{tokenize_markup_with_spans, tokenize_with_spans};
use crate::parsing::{parse_stylesheet_with, ParseOptions};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// What data to extract from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    /// Stylesheet tokens
    Token,
    /// Markup tokens
    Markup,
    /// Parsed stylesheet
    Ast,
}

/// How to print it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Css,
    Tag,
    Treeviz,
}

/// A complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProcessingStage {
    fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Markup => "markup",
            ProcessingStage::Ast => "ast",
        }
    }
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Css => "css",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-css"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "markup" => ProcessingStage::Markup,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "css" => OutputFormat::Css,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "'{}' is not supported for the {} stage",
                spec.format.name(),
                spec.stage.name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat::*;
        use ProcessingStage::*;

        [
            (Token, Simple),
            (Token, Json),
            (Markup, Simple),
            (Markup, Json),
            (Ast, Css),
            (Ast, Tag),
            (Ast, Treeviz),
            (Ast, Json),
            (Ast, Yaml),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage.name(), self.format.name())
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::to_string)
        .collect()
}

#[derive(Serialize)]
struct SpannedToken<'a, T> {
    token: &'a T,
    start: usize,
    end: usize,
}

/// Process source text according to the given specification
pub fn process(
    source: &str,
    spec: ProcessingSpec,
    config: &MarkstyleConfig,
) -> Result<String, ProcessingError> {
    tracing::debug!(target: "markstyle::processor", %spec, bytes = source.len(), "processing");

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize_with_spans(source);
            match spec.format {
                OutputFormat::Simple => Ok(tokens
                    .iter()
                    .map(|(token, _)| format!("{}\n", token))
                    .collect()),
                _ => to_json(
                    &tokens
                        .iter()
                        .map(|(token, span)| SpannedToken {
                            token,
                            start: span.start,
                            end: span.end,
                        })
                        .collect::<Vec<_>>(),
                ),
            }
        }
        ProcessingStage::Markup => {
            // A file's final line break is not part of the markup
            let tokens = tokenize_markup_with_spans(source.trim_end_matches(['\n', '\r']))?;
            match spec.format {
                OutputFormat::Simple => Ok(tokens
                    .iter()
                    .map(|(token, _)| format!("{:?}\n", token))
                    .collect()),
                _ => to_json(
                    &tokens
                        .iter()
                        .map(|(token, span)| SpannedToken {
                            token,
                            start: span.start,
                            end: span.end,
                        })
                        .collect::<Vec<_>>(),
                ),
            }
        }
        ProcessingStage::Ast => {
            let options = ParseOptions::from(&config.parsing);
            let sheet = parse_stylesheet_with(source, options)?;
            match spec.format {
                OutputFormat::Css => Ok(to_css(&sheet, &config.output.indent)),
                OutputFormat::Tag => Ok(serialize_stylesheet(&sheet, &config.output.indent)),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&sheet)),
                OutputFormat::Yaml => serde_yaml::to_string(&sheet)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                _ => to_json(&sheet),
            }
        }
    }
}

/// Read a file and process its content
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: ProcessingSpec,
    config: &MarkstyleConfig,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process(&content, spec, config)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value).map_err(|e| ProcessingError::Serialization(e.to_string()))
}
