//! Editing session state and its transitions

use tracing::debug;

use super::artifact::{DownloadArtifact, DownloadConfig};
use super::banner::ErrorBanner;
use crate::error::TransformError;
use crate::transform::{ParameterList, TransformEngine, TransformPipeline};

/// What an editor pane holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorPane {
    pub text: String,
    pub read_only: bool,
}

impl EditorPane {
    pub fn editable(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            read_only: false,
        }
    }

    pub fn read_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            read_only: true,
        }
    }
}

/// Change notifications from the editors and the parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaygroundEvent {
    TemplateChanged(String),
    SourceChanged(String),
    ParametersChanged(ParameterList),
}

/// Everything the view shows, as one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundState {
    pub template: EditorPane,
    pub source: EditorPane,
    pub output: EditorPane,
    pub parameters: ParameterList,
    pub last_good_output: String,
    pub error: Option<TransformError>,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            template: EditorPane::default(),
            source: EditorPane::default(),
            output: EditorPane::read_only(""),
            parameters: ParameterList::new(),
            last_good_output: String::new(),
            error: None,
        }
    }
}

impl PlaygroundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the change and re-run the transform
    ///
    /// Nothing runs until both the template and the source are non-empty. A failed
    /// run keeps the last good output on display and records the error.
    pub fn apply<E: TransformEngine>(
        mut self,
        event: PlaygroundEvent,
        pipeline: &TransformPipeline<E>,
    ) -> Self {
        match event {
            PlaygroundEvent::TemplateChanged(text) => self.template.text = text,
            PlaygroundEvent::SourceChanged(text) => self.source.text = text,
            PlaygroundEvent::ParametersChanged(parameters) => self.parameters = parameters,
        }

        if self.template.text.is_empty() || self.source.text.is_empty() {
            debug!("transform skipped, template or source is empty");
            return self;
        }

        let result = pipeline.transform(&self.template.text, &self.source.text, &self.parameters);
        match result.error {
            Some(error) => {
                self.output.text = self.last_good_output.clone();
                self.error = Some(error);
            }
            None => {
                self.last_good_output = result.output.clone();
                self.output.text = result.output;
                self.error = None;
            }
        }
        self
    }

    /// Text currently on display in the output pane
    pub fn output(&self) -> &str {
        &self.output.text
    }

    pub fn banner(&self) -> Option<ErrorBanner<'_>> {
        self.error.as_ref().map(ErrorBanner::new)
    }

    /// The displayed output as a download, if there is any
    pub fn artifact(&self, config: &DownloadConfig) -> Option<DownloadArtifact> {
        if self.output.text.is_empty() {
            None
        } else {
            Some(DownloadArtifact::new(self.output.text.clone(), config))
        }
    }
}
