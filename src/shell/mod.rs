//! State owned by the editing view
//!
//! The view keeps its inputs, the displayed output, the last good output and the
//! current error in one [`PlaygroundState`] value and moves it forward with
//! [`PlaygroundState::apply`].

pub mod artifact;
pub mod banner;
pub mod state;

pub use artifact::{DownloadArtifact, DownloadConfig};
pub use banner::ErrorBanner;
pub use state::{EditorPane, PlaygroundEvent, PlaygroundState};
