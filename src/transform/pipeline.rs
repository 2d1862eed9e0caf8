//! Resilient parse → bind → transform → serialize → format pipeline
//!
//! [`TransformPipeline::transform`] never fails and never panics. Every engine failure,
//! whether returned as an error, reported through a parse marker, or raised as a panic,
//! is classified into a [`TransformError`] and handed back with an empty output.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::engine::{EngineError, ParseOutcome, TransformEngine};
use super::params::ParameterList;
use super::pretty;
use crate::error::{ParseTarget, TransformError};

/// Declaration line prefixed to every serialized result
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Outcome of one pipeline run
///
/// `output` is empty whenever `error` is set. Substituting the last good output is
/// the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformResult {
    pub output: String,
    pub error: Option<TransformError>,
}

impl TransformResult {
    pub fn success(output: String) -> Self {
        Self {
            output,
            error: None,
        }
    }

    pub fn failure(error: TransformError) -> Self {
        Self {
            output: String::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// How an engine step went wrong
enum StepFailure {
    Raised(EngineError),
    Panicked(String),
}

impl StepFailure {
    fn into_message(self) -> String {
        match self {
            StepFailure::Raised(err) => err.message().to_string(),
            StepFailure::Panicked(message) => message,
        }
    }
}

/// Run one engine call, turning a panic into a failure value
fn guarded<T>(step: impl FnOnce() -> Result<T, EngineError>) -> Result<T, StepFailure> {
    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(StepFailure::Raised(err)),
        Err(payload) => Err(StepFailure::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_string()
    }
}

/// Orchestrates calls into a [`TransformEngine`]
#[derive(Debug, Clone)]
pub struct TransformPipeline<E> {
    engine: E,
}

impl<E: TransformEngine> TransformPipeline<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Transform `source` with `template`, binding `parameters`
    ///
    /// The result depends only on the three inputs.
    pub fn transform(
        &self,
        template: &str,
        source: &str,
        parameters: &ParameterList,
    ) -> TransformResult {
        debug!(
            template_len = template.len(),
            source_len = source.len(),
            parameters = parameters.len(),
            "running transform"
        );

        match self.run(template, source, parameters) {
            Ok(output) => TransformResult::success(output),
            Err(error) => {
                warn!(
                    kind = ?error.kind,
                    line = ?error.line,
                    column = ?error.column,
                    "transform failed: {}",
                    error.message
                );
                TransformResult::failure(error)
            }
        }
    }

    fn run(
        &self,
        template: &str,
        source: &str,
        parameters: &ParameterList,
    ) -> Result<String, TransformError> {
        let template_doc = self.parse(template, ParseTarget::Stylesheet)?;
        let source_doc = self.parse(source, ParseTarget::Input)?;

        let resolved = parameters.resolve();
        debug!(bound = resolved.len(), "parameters resolved");

        let result_doc =
            guarded(|| self.engine.apply_transform(&template_doc, &source_doc, &resolved))
                .map_err(|failure| TransformError::execution(failure.into_message()))?;

        let serialized = guarded(|| self.engine.serialize(&result_doc))
            .map_err(|failure| TransformError::unknown(failure.into_message()))?;

        Ok(pretty::format(&format!("{}{}", XML_DECLARATION, serialized)))
    }

    fn parse(&self, text: &str, target: ParseTarget) -> Result<E::Document, TransformError> {
        match guarded(|| self.engine.parse(text)) {
            Ok(ParseOutcome::Parsed(document)) => Ok(document),
            Ok(ParseOutcome::Marker(message)) => Err(TransformError::parse(target, message)),
            Err(StepFailure::Raised(err)) => Err(TransformError::parse(target, err.message())),
            Err(StepFailure::Panicked(message)) => Err(TransformError::unknown(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::ErrorKind;
    use crate::transform::params::{Parameter, ResolvedParameters};

    /// Engine whose behavior is chosen per test
    #[derive(Default)]
    struct ScriptedEngine {
        marker_on: Option<&'static str>,
        raise_on_parse: Option<&'static str>,
        panic_on_parse: Option<&'static str>,
        apply_error: Option<&'static str>,
        apply_panic: Option<&'static str>,
        serialize_error: Option<&'static str>,
        seen_parameters: RefCell<Option<ResolvedParameters>>,
    }

    impl TransformEngine for ScriptedEngine {
        type Document = String;

        fn parse(&self, text: &str) -> Result<ParseOutcome<String>, EngineError> {
            if self.panic_on_parse == Some(text) {
                panic!("parser blew up");
            }
            if self.raise_on_parse == Some(text) {
                return Err(EngineError::new("raised at line 1, column 5"));
            }
            if self.marker_on == Some(text) {
                return Ok(ParseOutcome::Marker("not well-formed".to_string()));
            }
            Ok(ParseOutcome::Parsed(text.to_string()))
        }

        fn apply_transform(
            &self,
            _template: &String,
            source: &String,
            parameters: &ResolvedParameters,
        ) -> Result<String, EngineError> {
            *self.seen_parameters.borrow_mut() = Some(parameters.clone());
            if let Some(message) = self.apply_panic {
                panic!("{}", message);
            }
            if let Some(message) = self.apply_error {
                return Err(EngineError::new(message));
            }
            Ok(format!("<out>{}</out>", source))
        }

        fn serialize(&self, document: &String) -> Result<String, EngineError> {
            match self.serialize_error {
                Some(message) => Err(EngineError::new(message)),
                None => Ok(document.clone()),
            }
        }
    }

    fn run(engine: &ScriptedEngine) -> TransformResult {
        TransformPipeline::new(engine).transform("<xsl/>", "<doc/>", &ParameterList::new())
    }

    #[test]
    fn test_success_prefixes_declaration_and_formats() {
        let result = run(&ScriptedEngine::default());
        assert!(result.is_ok());
        assert_eq!(
            result.output,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<out>\n  <doc/>\n</out>"
        );
    }

    #[test]
    fn test_marker_becomes_stylesheet_parse_error() {
        let engine = ScriptedEngine {
            marker_on: Some("<xsl/>"),
            ..Default::default()
        };
        let result = run(&engine);
        let error = result.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Parse(ParseTarget::Stylesheet));
        assert_eq!(error.message, "XSLT Parse Error: not well-formed");
        assert_eq!(result.output, "");
    }

    #[test]
    fn test_raised_parse_becomes_input_parse_error() {
        let engine = ScriptedEngine {
            raise_on_parse: Some("<doc/>"),
            ..Default::default()
        };
        let error = run(&engine).error.unwrap();
        assert_eq!(error.kind, ErrorKind::Parse(ParseTarget::Input));
        assert_eq!(error.line, Some(1));
        assert_eq!(error.column, Some(5));
    }

    #[test]
    fn test_parse_panic_is_unknown() {
        let engine = ScriptedEngine {
            panic_on_parse: Some("<xsl/>"),
            ..Default::default()
        };
        let error = run(&engine).error.unwrap();
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.message, "parser blew up");
    }

    #[test]
    fn test_apply_failures_are_execution_errors() {
        let engine = ScriptedEngine {
            apply_error: Some("no template matched"),
            ..Default::default()
        };
        let error = run(&engine).error.unwrap();
        assert_eq!(error.kind, ErrorKind::Execution);
        assert_eq!(error.message, "no template matched");

        let engine = ScriptedEngine {
            apply_panic: Some("stack overflow at line 7, column 1"),
            ..Default::default()
        };
        let error = run(&engine).error.unwrap();
        assert_eq!(error.kind, ErrorKind::Execution);
        assert_eq!(error.line, Some(7));
    }

    #[test]
    fn test_serialize_failure_is_unknown_and_verbatim() {
        let engine = ScriptedEngine {
            serialize_error: Some("cannot serialize fragment"),
            ..Default::default()
        };
        let error = run(&engine).error.unwrap();
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.message, "cannot serialize fragment");
    }

    #[test]
    fn test_parameters_filtered_before_engine() {
        let engine = ScriptedEngine::default();
        let params: ParameterList = vec![
            Parameter::new("x", "1"),
            Parameter::new("x", "2"),
            Parameter::new("", "z"),
            Parameter::new("y", ""),
        ]
        .into();
        TransformPipeline::new(&engine).transform("<xsl/>", "<doc/>", &params);

        let seen = engine.seen_parameters.borrow().clone().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen.get("x"), Some("2"));
        assert_eq!(seen.get("y"), None);
    }
}
