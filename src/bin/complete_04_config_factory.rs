// Complete Configuration Factory
// Private-constructor pattern: validated, immutable config objects built only
// through controlled factory functions

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;

const SIMULATED_FILE: &str = "mode=production;cache=true";

// ============================================================================
// Milestone 1: Private Constructor, Factory-Only Construction
// ============================================================================

/// Immutable configuration. The constructor is private and the type is
/// deliberately neither `Clone` nor `Copy`: every instance in the program
/// came out of one of the factory functions below.
#[derive(Debug)]
pub struct Config {
    mode: String,
    cache_enabled: bool,
    raw: String,
}

impl Config {
    fn new(mode: String, cache_enabled: bool, raw: String) -> Self {
        Self {
            mode,
            cache_enabled,
            raw,
        }
    }

    /// Factory simulating a read from the configuration file.
    pub fn load_defaults() -> Self {
        println!("Loading configuration from file...");
        Self::new(
            "production".to_string(),
            true,
            SIMULATED_FILE.to_string(),
        )
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn show(&self) {
        println!("Parameters: {}", self.raw);
    }
}

// ============================================================================
// Milestone 2: Validated key=value Parsing
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("empty configuration input")]
    Empty,
    #[error("malformed pair '{0}': expected key=value")]
    MalformedPair(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("duplicate key '{0}'")]
    DuplicateKey(&'static str),
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("invalid boolean '{value}' for key '{key}'")]
    InvalidBool { key: &'static str, value: String },
    #[error("invalid TOML: {0}")]
    Toml(String),
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::InvalidBool {
            key,
            value: other.to_string(),
        }),
    }
}

impl Config {
    /// Parses `key=value` pairs separated by `;`. Every reachable `Config`
    /// is fully validated at construction time.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Empty);
        }

        let mut mode: Option<String> = None;
        let mut cache: Option<bool> = None;

        for pair in trimmed.split(';').filter(|pair| !pair.trim().is_empty()) {
            let pair = pair.trim();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedPair(pair.to_string()))?;
            match key.trim() {
                "mode" => {
                    if mode.replace(value.trim().to_string()).is_some() {
                        return Err(ConfigError::DuplicateKey("mode"));
                    }
                }
                "cache" => {
                    let parsed = parse_bool("cache", value.trim())?;
                    if cache.replace(parsed).is_some() {
                        return Err(ConfigError::DuplicateKey("cache"));
                    }
                }
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }

        let mode = mode.ok_or(ConfigError::MissingKey("mode"))?;
        let cache = cache.ok_or(ConfigError::MissingKey("cache"))?;
        Ok(Self::new(mode, cache, trimmed.to_string()))
    }

    /// Factory over the simulated file payload.
    pub fn load_simulated() -> Result<Self, ConfigError> {
        println!("Loading configuration from file...");
        Self::parse(SIMULATED_FILE)
    }
}

// ============================================================================
// Milestone 3: Structured TOML Loading
// ============================================================================

/// Deserialization target; stays private so callers only ever see a
/// validated `Config`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    mode: String,
    cache: bool,
}

impl Config {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(input).map_err(|err| ConfigError::Toml(err.to_string()))?;
        if raw.mode.trim().is_empty() {
            return Err(ConfigError::MissingKey("mode"));
        }
        Ok(Self::new(raw.mode, raw.cache, input.trim().to_string()))
    }

    pub fn load_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::from_toml_str(&content)
    }
}

// ============================================================================
// Milestone 4: Process-Wide Singleton
// ============================================================================

lazy_static! {
    static ref SETTINGS: Config = Config::load_defaults();
}

/// Lazily initialized on first access; later calls return the same instance.
pub fn settings() -> &'static Config {
    &SETTINGS
}

fn main() {
    println!("=== Milestone 1: Factory-only construction ===");
    // Config::new is private and Config is not Clone: the factories below are
    // the only way to obtain an instance.
    let config = Config::load_defaults();
    config.show();
    println!("mode = {}", config.mode());
    println!("cache enabled = {}", config.cache_enabled());

    println!("\n=== Milestone 2: Validated parsing ===");
    match Config::load_simulated() {
        Ok(parsed) => parsed.show(),
        Err(err) => eprintln!("Load failed: {err}"),
    }
    for bad in ["", "mode=dev;cache=maybe", "mode=dev;mode=prod;cache=true"] {
        if let Err(err) = Config::parse(bad) {
            println!("Rejected {bad:?}: {err}");
        }
    }

    println!("\n=== Milestone 3: Structured TOML loading ===");
    let toml_input = "mode = \"staging\"\ncache = false\n";
    match Config::from_toml_str(toml_input) {
        Ok(parsed) => println!(
            "TOML config: mode = {}, cache = {}",
            parsed.mode(),
            parsed.cache_enabled()
        ),
        Err(err) => eprintln!("TOML load failed: {err}"),
    }

    println!("\n=== Milestone 4: Process-wide singleton ===");
    let first = settings();
    let second = settings();
    println!("Singleton mode: {}", first.mode());
    println!(
        "Same instance on every access: {}",
        std::ptr::eq(first, second)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Milestone 1 Tests
    #[test]
    fn test_load_defaults() {
        let config = Config::load_defaults();
        assert_eq!(config.mode(), "production");
        assert!(config.cache_enabled());
        assert_eq!(config.raw(), "mode=production;cache=true");
    }

    // Milestone 2 Tests
    #[test]
    fn test_parse_simulated_payload() {
        let config = Config::parse(SIMULATED_FILE).unwrap();
        assert_eq!(config.mode(), "production");
        assert!(config.cache_enabled());
    }

    #[test]
    fn test_load_simulated_matches_defaults() {
        let loaded = Config::load_simulated().unwrap();
        let defaults = Config::load_defaults();
        assert_eq!(loaded.mode(), defaults.mode());
        assert_eq!(loaded.cache_enabled(), defaults.cache_enabled());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Config::parse("").unwrap_err(), ConfigError::Empty);
        assert_eq!(Config::parse("   ").unwrap_err(), ConfigError::Empty);
    }

    #[test]
    fn test_parse_malformed_pair() {
        assert_eq!(
            Config::parse("mode=dev;cache").unwrap_err(),
            ConfigError::MalformedPair("cache".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(
            Config::parse("mode=dev;cache=true;verbose=yes").unwrap_err(),
            ConfigError::UnknownKey("verbose".to_string())
        );
    }

    #[test]
    fn test_parse_duplicate_key() {
        assert_eq!(
            Config::parse("mode=dev;mode=prod;cache=true").unwrap_err(),
            ConfigError::DuplicateKey("mode")
        );
    }

    #[test]
    fn test_parse_missing_key() {
        assert_eq!(
            Config::parse("mode=dev").unwrap_err(),
            ConfigError::MissingKey("cache")
        );
        assert_eq!(
            Config::parse("cache=true").unwrap_err(),
            ConfigError::MissingKey("mode")
        );
    }

    #[test]
    fn test_parse_invalid_bool() {
        assert_eq!(
            Config::parse("mode=dev;cache=maybe").unwrap_err(),
            ConfigError::InvalidBool {
                key: "cache",
                value: "maybe".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_tolerates_trailing_separator() {
        let config = Config::parse("mode=dev;cache=false;").unwrap();
        assert_eq!(config.mode(), "dev");
        assert!(!config.cache_enabled());
    }

    // Milestone 3 Tests
    #[test]
    fn test_from_toml_str() {
        let config = Config::from_toml_str("mode = \"staging\"\ncache = false\n").unwrap();
        assert_eq!(config.mode(), "staging");
        assert!(!config.cache_enabled());
    }

    #[test]
    fn test_from_toml_rejects_missing_field() {
        assert!(matches!(
            Config::from_toml_str("mode = \"staging\"\n"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_blank_mode() {
        assert_eq!(
            Config::from_toml_str("mode = \"  \"\ncache = true\n").unwrap_err(),
            ConfigError::MissingKey("mode")
        );
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "mode = \"test\"\ncache = true\n").unwrap();
        let config = Config::load_toml_file(file.path()).unwrap();
        assert_eq!(config.mode(), "test");
        assert!(config.cache_enabled());
    }

    #[test]
    fn test_load_toml_file_missing() {
        let result = Config::load_toml_file(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    // Milestone 4 Tests
    #[test]
    fn test_singleton_identity() {
        assert!(std::ptr::eq(settings(), settings()));
    }

    #[test]
    fn test_singleton_contents() {
        assert_eq!(settings().mode(), "production");
        assert!(settings().cache_enabled());
    }
}
