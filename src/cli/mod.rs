pub mod commands;

pub use commands::analyze::AnalyzeOptions;
