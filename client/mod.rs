pub mod cli_args;
pub mod dataset;
pub mod formatter;

pub use cli_args::{CliArgs, Command};
pub use dataset::{Dataset, DatasetStats};
pub use formatter::OutputFormatter;
