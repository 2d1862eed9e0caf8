//! Engine adapter that drives an external XSLT processor
//!
//! The processor is invoked as `<program> <args..> [<param_flag> name value]... <template> <source>`,
//! which is the calling convention of `xsltproc`. An optional checker command
//! (`xmllint --noout` by default) is run on each document at parse time; when it
//! rejects a document its diagnostics become the parse error marker.

use std::io::Write;
use std::process::{Command, Output};

use serde::Deserialize;
use tempfile::NamedTempFile;
use tracing::debug;

use super::engine::{EngineError, ParseOutcome, TransformEngine};
use super::params::ResolvedParameters;

/// Command used to check documents for well-formedness
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckerConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Configuration for the external processor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Processor executable
    pub program: String,
    /// Extra arguments placed before the parameters
    pub args: Vec<String>,
    /// Flag preceding each `name value` parameter pair
    pub param_flag: String,
    /// Optional well-formedness checker
    pub checker: Option<CheckerConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "xsltproc".to_string(),
            args: Vec::new(),
            param_flag: "--stringparam".to_string(),
            checker: Some(CheckerConfig {
                program: "xmllint".to_string(),
                args: vec!["--noout".to_string()],
            }),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the processor executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the extra processor arguments
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the well-formedness checker
    pub fn with_checker(mut self, program: impl Into<String>, args: Vec<String>) -> Self {
        self.checker = Some(CheckerConfig {
            program: program.into(),
            args,
        });
        self
    }

    /// Skip the well-formedness check
    pub fn without_checker(mut self) -> Self {
        self.checker = None;
        self
    }
}

/// Document handed between processor invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupDocument {
    text: String,
}

impl MarkupDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// [`TransformEngine`] backed by external processes
#[derive(Debug, Clone, Default)]
pub struct CommandEngine {
    config: EngineConfig,
}

impl CommandEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn temp_file_with(text: &str) -> Result<NamedTempFile, EngineError> {
    let mut file = NamedTempFile::new()
        .map_err(|e| EngineError::new(format!("failed to create temporary file: {}", e)))?;
    file.write_all(text.as_bytes())
        .map_err(|e| EngineError::new(format!("failed to write temporary file: {}", e)))?;
    Ok(file)
}

fn run(command: &mut Command, program: &str) -> Result<Output, EngineError> {
    debug!(?command, "spawning external command");
    command
        .output()
        .map_err(|e| EngineError::new(format!("failed to run '{}': {}", program, e)))
}

/// Best diagnostic text a failed process left behind
fn diagnostics(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }
    match output.status.code() {
        Some(code) => format!("process exited with status {}", code),
        None => "process terminated by signal".to_string(),
    }
}

/// Drop a leading XML declaration; the pipeline adds its own
fn strip_declaration(text: &str) -> &str {
    let trimmed = text.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return trimmed[end + 2..].trim_start();
        }
    }
    text
}

impl TransformEngine for CommandEngine {
    type Document = MarkupDocument;

    fn parse(&self, text: &str) -> Result<ParseOutcome<MarkupDocument>, EngineError> {
        if text.trim().is_empty() {
            return Ok(ParseOutcome::Marker("document is empty".to_string()));
        }
        let Some(checker) = &self.config.checker else {
            return Ok(ParseOutcome::Parsed(MarkupDocument::new(text)));
        };

        let file = temp_file_with(text)?;
        let output = run(
            Command::new(&checker.program)
                .args(&checker.args)
                .arg(file.path()),
            &checker.program,
        )?;
        if output.status.success() {
            Ok(ParseOutcome::Parsed(MarkupDocument::new(text)))
        } else {
            Ok(ParseOutcome::Marker(diagnostics(&output)))
        }
    }

    fn apply_transform(
        &self,
        template: &MarkupDocument,
        source: &MarkupDocument,
        parameters: &ResolvedParameters,
    ) -> Result<MarkupDocument, EngineError> {
        let template_file = temp_file_with(template.text())?;
        let source_file = temp_file_with(source.text())?;

        let mut command = Command::new(&self.config.program);
        command.args(&self.config.args);
        for (name, value) in parameters.iter() {
            command.arg(&self.config.param_flag).arg(name).arg(value);
        }
        command
            .arg(template_file.path())
            .arg(source_file.path());

        let output = run(&mut command, &self.config.program)?;
        if !output.status.success() {
            return Err(EngineError::new(diagnostics(&output)));
        }
        Ok(MarkupDocument::new(String::from_utf8_lossy(&output.stdout)))
    }

    fn serialize(&self, document: &MarkupDocument) -> Result<String, EngineError> {
        Ok(strip_declaration(document.text()).trim_end().to_string())
    }
}

/// Whether `program` resolves to an executable on the `PATH` or as a direct path
pub fn program_available(program: &str) -> bool {
    which::which(program).is_ok()
}
