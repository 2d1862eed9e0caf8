//! XSLT Playground - live template/source editing around a host transformation engine
//!
//! This library provides the resilient transform pipeline, the output pretty-printer,
//! and the multi-panel layout engine behind a side-by-side XSLT editor. The
//! transformation engine itself is supplied by the host through [`TransformEngine`].
//!
//! # Example
//!
//! ```rust
//! use xslt_playground::{format_markup, LayoutEvent, LayoutState};
//!
//! assert_eq!(format_markup("<root><child/></root>"), "<root>\n  <child/>\n</root>");
//!
//! let layout = LayoutState::default()
//!     .apply(LayoutEvent::BeginDrag { handle: 0, pointer_x: 0.0 })
//!     .apply(LayoutEvent::UpdateDrag { pointer_x: 500.0, container_width: 1000.0 });
//! assert_eq!(layout.panels().width(0), Some(95.0));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod shell;
pub mod transform;

pub use config::{ConfigError, PlaygroundConfig};
pub use error::{ErrorKind, ParseTarget, TransformError};
pub use layout::{DragSession, LayoutConfig, LayoutConfigError, LayoutEvent, LayoutState, PanelSet};
pub use shell::{
    DownloadArtifact, DownloadConfig, EditorPane, ErrorBanner, PlaygroundEvent, PlaygroundState,
};
pub use transform::pretty::format as format_markup;
pub use transform::{
    locate, CommandEngine, EngineConfig, EngineError, ErrorLocation, Parameter, ParameterList,
    ParseOutcome, ResolvedParameters, TransformEngine, TransformPipeline, TransformResult,
};

/// Transform with a one-off pipeline around `engine`
///
/// Shorthand for `TransformPipeline::new(engine).transform(...)`.
pub fn transform<E: TransformEngine>(
    engine: E,
    template: &str,
    source: &str,
    parameters: &ParameterList,
) -> TransformResult {
    TransformPipeline::new(engine).transform(template, source, parameters)
}
