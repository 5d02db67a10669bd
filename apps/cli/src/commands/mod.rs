//! CLI commands module.

pub mod example;
pub mod format;
pub mod validate;

pub use example::{run_example, ExampleArgs};
pub use format::{run_format, FormatArgs};
pub use validate::{run_validate, ValidateArgs};
