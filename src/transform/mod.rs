//! Transformation pipeline around an opaque engine
//!
//! This module parses the template and source through a host engine, binds
//! parameters, runs the transform, and pretty-prints the serialized result. Failures
//! are recovered and classified instead of propagated.

pub mod command;
pub mod engine;
pub mod locate;
pub mod params;
pub mod pipeline;
pub mod pretty;

pub use command::{CommandEngine, EngineConfig, MarkupDocument};
pub use engine::{EngineError, ParseOutcome, TransformEngine};
pub use locate::{locate, ErrorLocation};
pub use params::{Parameter, ParameterError, ParameterList, ResolvedParameters};
pub use pipeline::{TransformPipeline, TransformResult, XML_DECLARATION};
