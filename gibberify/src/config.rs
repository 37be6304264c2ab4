use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gibberify.toml";

/// Front-end configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All engine options from `gibberify_core::Config` (flattened via serde)
/// - The default language pair used when none is given on the command line
/// - The directory holding `<in>-<out>.bincode` / `.json` dictionaries
///
/// # Example
///
/// ```rust
/// use gibberify::GibberifyConfig;
///
/// let config = GibberifyConfig::from_toml_str("lang_out = \"elv\"\nseed = 3\n").unwrap();
/// assert_eq!(config.lang_in, "en");
/// assert_eq!(config.base().seed, Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GibberifyConfig {
    /// Base engine configuration (seed, capitalization, space collapsing)
    #[serde(flatten)]
    pub base: gibberify_core::Config,

    /// Language to translate from
    pub lang_in: String,

    /// Language to translate into
    pub lang_out: String,

    /// Directory containing serialized dictionaries
    pub dicts_dir: PathBuf,
}

impl Default for GibberifyConfig {
    fn default() -> Self {
        Self {
            base: gibberify_core::Config::default(),
            lang_in: "en".to_string(),
            lang_out: "orc".to_string(),
            dicts_dir: PathBuf::from("data").join("dicts"),
        }
    }
}

impl GibberifyConfig {
    /// Convert this config into the base config for use with `Engine::new()`
    pub fn into_base(self) -> gibberify_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &gibberify_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut gibberify_core::Config {
        &mut self.base
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Load `path` if given, else `gibberify.toml` in the working directory if
    /// present, else defaults.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_toml(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load_toml(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}
