use serde::Deserialize;

use mapscout::api::DEFAULT_ENDPOINT;
use mapscout::model::DEFAULT_RESULT_COUNT;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scraping service URL the search is POSTed to
    pub endpoint: String,
    /// Pre-filled result count; values below 1 are clamped
    pub default_result_count: i64,
    /// Program used to open a listing's website
    pub open_command: Option<String>,
    /// Directory exports are written to
    pub export_dir: String,
    /// Palette overrides as color names or "#RRGGBB"
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub text: Option<String>,
    pub text_secondary: Option<String>,
    pub error: Option<String>,
    pub divider: Option<String>,
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_result_count: DEFAULT_RESULT_COUNT as i64,
            open_command: None,
            export_dir: "output".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // An empty file deserializes to null; treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn result_count(&self) -> u32 {
        u32::try_from(self.default_result_count.max(1)).unwrap_or(u32::MAX)
    }
}
