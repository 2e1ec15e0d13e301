//! CLI argument definitions for the Torque application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Torque — ask questions about your auto-service business, get charts back.
#[derive(Parser, Debug)]
#[command(name = "torque", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Query service endpoint URL.
    #[arg(short = 'e', long = "endpoint")]
    pub endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Question to ask. Starts an interactive session when omitted.
    pub query: Vec<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > TORQUE_CONFIG env var > platform default
    /// (~/.torque/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("TORQUE_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the query service endpoint URL.
    ///
    /// Priority: --endpoint flag > TORQUE_ENDPOINT env var > config file value.
    pub fn resolve_endpoint(&self, config_endpoint: &str) -> String {
        if let Some(ref e) = self.endpoint {
            return e.clone();
        }
        if let Ok(e) = std::env::var("TORQUE_ENDPOINT") {
            return e;
        }
        config_endpoint.to_string()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// The one-shot query joined from positional arguments, if any.
    pub fn one_shot_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".torque").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".torque").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("torque").chain(argv.iter().copied()))
    }

    #[test]
    fn test_no_args_means_interactive() {
        let parsed = args(&[]);
        assert!(parsed.one_shot_query().is_none());
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_positional_query_is_joined() {
        let parsed = args(&["show", "total", "revenue", "for", "last", "month"]);
        assert_eq!(
            parsed.one_shot_query().as_deref(),
            Some("show total revenue for last month")
        );
    }

    #[test]
    fn test_endpoint_flag_wins_over_config() {
        let parsed = args(&["--endpoint", "http://flag:7071/api/query"]);
        let resolved = parsed.resolve_endpoint("http://config:7071/api/query");
        assert_eq!(resolved, "http://flag:7071/api/query");
    }

    #[test]
    fn test_endpoint_falls_back_to_config() {
        let parsed = args(&[]);
        // Env vars are process-global, so only exercise the fallback when the
        // override is not set in this environment.
        if std::env::var("TORQUE_ENDPOINT").is_err() {
            let resolved = parsed.resolve_endpoint("http://config:7071/api/query");
            assert_eq!(resolved, "http://config:7071/api/query");
        }
    }

    #[test]
    fn test_log_level_flag_wins_over_config() {
        let parsed = args(&["--log-level", "trace"]);
        assert_eq!(parsed.resolve_log_level("info"), "trace");
    }

    #[test]
    fn test_log_level_falls_back_to_config() {
        let parsed = args(&[]);
        assert_eq!(parsed.resolve_log_level("warn"), "warn");
    }

    #[test]
    fn test_config_flag_wins() {
        let parsed = args(&["--config", "/tmp/custom.toml"]);
        assert_eq!(parsed.resolve_config_path(), PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_flags_combine_with_positional_query() {
        let parsed = args(&["-e", "http://flag/api/query", "show", "revenue"]);
        assert_eq!(parsed.one_shot_query().as_deref(), Some("show revenue"));
        assert_eq!(parsed.endpoint.as_deref(), Some("http://flag/api/query"));
    }
}
