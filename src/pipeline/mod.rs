//! The conversion pipeline: resolve tools, acquire a workspace, then download,
//! build a palette and encode, aborting at the first failure.

mod error;
mod executor;

pub use error::{ConvertError, ErrorKind, Step, ToolFailure, EXIT_INTERRUPTED};
pub use executor::{Converter, Job, Stage, StepCallback};
