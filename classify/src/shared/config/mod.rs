//! Configuration loading abstractions usable without clap.

mod options;

pub use options::ConfigLoadOptions;
