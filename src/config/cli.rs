use crate::config::toml_config::TomlConfig;
use crate::config::{Demo, Settings};
use crate::core::Record;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "solid-showcase")]
#[command(about = "Runs small design principle showcases")]
pub struct CliConfig {
    /// Showcase to run
    #[arg(long, value_enum)]
    pub demo: Option<Demo>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the sample record's name
    #[arg(long)]
    pub name: Option<String>,

    /// Override the sample record's contact
    #[arg(long)]
    pub contact: Option<String>,

    /// Simulated provider latency in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Merge the config file (if any) with command line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_settings(),
            None => Settings::default(),
        };

        if let Some(demo) = self.demo {
            settings.demo = demo;
        }
        if self.name.is_some() || self.contact.is_some() {
            settings.sample = Record::new(
                self.name.clone().unwrap_or(settings.sample.name),
                self.contact.clone().unwrap_or(settings.sample.contact),
            );
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.delay_ms = delay_ms;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let config = CliConfig::parse_from(["solid-showcase"]);
        assert_eq!(config.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_flags_override_sample_and_delay() {
        let config = CliConfig::parse_from([
            "solid-showcase",
            "--demo",
            "users",
            "--name",
            "Ann",
            "--delay-ms",
            "10",
        ]);

        let settings = config.settings().unwrap();

        assert_eq!(settings.demo, Demo::Users);
        assert_eq!(settings.sample.name, "Ann");
        assert_eq!(settings.sample.contact, Record::sample().contact);
        assert_eq!(settings.delay_ms, 10);
    }

    #[test]
    fn test_every_demo_value_parses() {
        for (value, demo) in [
            ("users", Demo::Users),
            ("shapes", Demo::Shapes),
            ("animals", Demo::Animals),
            ("workers", Demo::Workers),
            ("all", Demo::All),
        ] {
            let config = CliConfig::parse_from(["solid-showcase", "--demo", value]);
            assert_eq!(config.demo, Some(demo));
            assert_eq!(config.settings().unwrap().demo, demo);
        }
    }

    #[test]
    fn test_unknown_demo_fails_to_parse() {
        assert!(CliConfig::try_parse_from(["solid-showcase", "--demo", "robots"]).is_err());
    }
}
