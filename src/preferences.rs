use crate::puzzle::state::Color;
use enum_map::enum_map;
use enum_map::EnumMap;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

pub const PREFS_PATH: &str = "./preferences.json";

fn glyphs_default() -> EnumMap<Color, char> {
    enum_map! {
        Color::White => 'W',
        Color::Yellow => 'Y',
        Color::Green => 'G',
        Color::Blue => 'B',
        Color::Red => 'R',
        Color::Orange => 'O',
    }
}

fn scramble_length_default() -> usize {
    20
}

/// How each color is drawn in the text net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPreferences {
    #[serde(default = "glyphs_default")]
    pub glyphs: EnumMap<Color, char>,
}

impl Default for ColorPreferences {
    fn default() -> Self {
        Self {
            glyphs: glyphs_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub colors: ColorPreferences,
    #[serde(default = "scramble_length_default")]
    pub scramble_length: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            colors: ColorPreferences::default(),
            scramble_length: scramble_length_default(),
        }
    }
}

impl Preferences {
    pub fn save(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reads preferences from `path`, or the defaults if there is no file.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Ok(Default::default());
        }
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
