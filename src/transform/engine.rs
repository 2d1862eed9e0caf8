//! The host-provided transformation capability
//!
//! The pipeline treats the engine as opaque and unreliable: every call may fail, and
//! parsing may report problems either by returning an error or by handing back an
//! error marker in place of a document.

use thiserror::Error;

use super::params::ResolvedParameters;

/// Error raised by an engine call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a parse that did not raise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<D> {
    /// The text parsed into a document
    Parsed(D),
    /// The parser produced an error marker instead of a document
    Marker(String),
}

/// Parse, transform and serialize capability supplied by the host
pub trait TransformEngine {
    /// Parsed document representation
    type Document;

    fn parse(&self, text: &str) -> Result<ParseOutcome<Self::Document>, EngineError>;

    fn apply_transform(
        &self,
        template: &Self::Document,
        source: &Self::Document,
        parameters: &ResolvedParameters,
    ) -> Result<Self::Document, EngineError>;

    fn serialize(&self, document: &Self::Document) -> Result<String, EngineError>;
}

impl<E: TransformEngine + ?Sized> TransformEngine for &E {
    type Document = E::Document;

    fn parse(&self, text: &str) -> Result<ParseOutcome<Self::Document>, EngineError> {
        (**self).parse(text)
    }

    fn apply_transform(
        &self,
        template: &Self::Document,
        source: &Self::Document,
        parameters: &ResolvedParameters,
    ) -> Result<Self::Document, EngineError> {
        (**self).apply_transform(template, source, parameters)
    }

    fn serialize(&self, document: &Self::Document) -> Result<String, EngineError> {
        (**self).serialize(document)
    }
}
