//! User configuration: the category palette and display preferences.

use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::ConfigError,
    ledger::{CategoryPalette, PaletteEntry},
};

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "EXPENSE_TRACKER_CONFIG";
const APP_DIR: &str = "expense_tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered category/color table; order drives tables and charts.
    #[serde(default = "Config::default_categories")]
    pub categories: Vec<PaletteEntry>,
    /// Category preselected when a session starts.
    #[serde(default = "Config::default_category_value")]
    pub default_category: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: Self::default_categories(),
            default_category: Self::default_category_value(),
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            plain_output: false,
        }
    }
}

impl Config {
    pub fn default_categories() -> Vec<PaletteEntry> {
        CategoryPalette::default().entries().to_vec()
    }

    pub fn default_category_value() -> String {
        "Food".into()
    }

    pub fn default_currency_symbol() -> String {
        "€".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Builds the palette, rejecting empty or duplicate category tables.
    pub fn palette(&self) -> Result<CategoryPalette, ConfigError> {
        Ok(CategoryPalette::new(self.categories.clone())?)
    }

    /// Checks that the palette is usable and contains the default category.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let palette = self.palette()?;
        if palette.resolve(&self.default_category).is_none() {
            return Err(ConfigError::Invalid(format!(
                "default category `{}` is not one of the configured categories",
                self.default_category
            )));
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `$EXPENSE_TRACKER_CONFIG`, else the platform config directory.
    pub fn from_env() -> Self {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV).filter(|value| !value.is_empty()) {
            return Self::new(PathBuf::from(path));
        }
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config =
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Writes through a temporary file and renames it into place.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
