pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{AnySource, FileSource, HttpSource};
pub use config::{cli::LocalStorage, OutputFormat, Settings};
pub use crate::core::{
    controller::{Controller, SearchOutcome},
    matcher::{search, Query},
    store::DataStore,
};
pub use render::{HtmlPage, ResultsView, TerminalSurface};
pub use utils::error::{Result, TravelError};
