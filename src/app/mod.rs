#[cfg(feature = "cli")]
pub mod cli;
pub mod showcase;

#[cfg(feature = "cli")]
pub use cli::run_cli;
pub use showcase::run_demo;
