//! Display settings loaded from an optional `chess_cli.toml`

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Draw pieces with the unicode chess glyphs instead of letters.
    pub unicode_pieces: bool,
    /// Use ANSI colors for Black's pieces and move highlights.
    pub color: bool,
    /// Wipe the terminal before every render.
    pub clear_screen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            unicode_pieces: true,
            color: true,
            clear_screen: true,
        }
    }
}

impl DisplayConfig {
    /// Reads the settings file, falling back to defaults when it is missing
    /// or malformed.
    pub fn load(path: &str) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return DisplayConfig::default(),
        };
        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed {}: {}", path, e);
                DisplayConfig::default()
            }
        }
    }
}
