use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tagseek_engine::{SearchSettings, DEFAULT_BASE_URL};

use super::logging::LogSettings;

/// Search GIFs by tag and keep a short history of recent tags.
#[derive(Debug, Parser)]
#[command(name = "tagseek", version, about)]
pub struct Cli {
    /// API key sent with every search request.
    #[arg(long, env = "TAGSEEK_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Root of the search service; `/search` is appended.
    #[arg(long, env = "TAGSEEK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory holding the persisted history.
    #[arg(long, env = "TAGSEEK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[arg(long, default_value = "tagseek.log")]
    pub log_file: PathBuf,

    /// One of off, error, warn, info, debug, trace.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also log to stderr.
    #[arg(long)]
    pub log_stderr: bool,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search: SearchSettings,
    pub data_dir: PathBuf,
    pub log: LogSettings,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.api_key.trim().is_empty() {
            bail!("an API key is required (--api-key or TAGSEEK_API_KEY)");
        }
        if cli.timeout_secs == 0 {
            bail!("--timeout-secs must be at least 1");
        }
        let Some(level) = tagseek_logging::parse_level(&cli.log_level) else {
            bail!("unknown log level {:?}", cli.log_level);
        };

        let search = SearchSettings {
            base_url: cli.base_url,
            api_key: cli.api_key,
            limit: tagseek_core::RESULT_LIMIT,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            ..SearchSettings::default()
        };

        Ok(Self {
            search,
            data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
            log: LogSettings {
                level,
                file: Some(cli.log_file),
                stderr: cli.log_stderr,
            },
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("tagseek"))
        .unwrap_or_else(|| PathBuf::from(".tagseek"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["tagseek"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn cli_values_flow_into_settings() {
        let cli = parse(&[
            "--api-key",
            "k",
            "--base-url",
            "http://localhost:9000",
            "--data-dir",
            "/tmp/seek",
            "--log-level",
            "debug",
            "--timeout-secs",
            "5",
        ]);
        let config = AppConfig::from_cli(cli).unwrap();

        assert_eq!(config.search.api_key, "k");
        assert_eq!(config.search.base_url, "http://localhost:9000");
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.search.request_timeout, Duration::from_secs(5));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/seek"));
        assert_eq!(config.log.level, LevelFilter::Debug);
        assert!(!config.log.stderr);
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let cli = parse(&["--api-key", "  "]);
        assert!(AppConfig::from_cli(cli).is_err());
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let cli = parse(&["--api-key", "k", "--log-level", "loud"]);
        let err = AppConfig::from_cli(cli).unwrap_err();
        assert!(err.to_string().contains("loud"));
    }
}
