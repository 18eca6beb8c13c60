//! Rendering collaborators that supply screenshots and CSS signals

pub mod file;
pub mod traits;

pub use file::FileRenderingAgent;
pub use traits::{CssSignals, RenderCapture, RenderingAgent};
