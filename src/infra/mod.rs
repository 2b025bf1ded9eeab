//! Dataset configuration for the CLI.
//!
//! [`DatasetConfig`] maps dataset names to CSV paths so runs can be selected
//! by name instead of by path.

mod datasets;

pub use datasets::DatasetConfig;
