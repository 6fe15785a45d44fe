pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::run_cli;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LogPresenter, SampleProvider, WriterPresenter};
pub use app::run_demo;
pub use config::{toml_config::TomlConfig, Demo, Settings};
pub use core::coordinator::Coordinator;
pub use domain::model::Record;
pub use domain::ports::{DataPresenter, DataProvider};
pub use utils::error::{ProviderError, Result, ShowcaseError};
