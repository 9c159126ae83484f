//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;
use crate::movement::ControllerSettings;

pub const CONTROLLER_FILE: &str = "controller.ron";
pub const LEVEL_FILE: &str = "level.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Everything the level needs from disk.
#[derive(Debug, Clone)]
pub struct LoadedContent {
    pub settings: ControllerSettings,
    pub level: LevelDef,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct; `file` only labels errors.
pub fn parse_ron<T>(contents: &str, file: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&contents, &file_name)
}

/// Parse controller settings and reject tunings a controller would refuse.
pub fn parse_settings(contents: &str, file: &str) -> Result<ControllerSettings, ContentLoadError> {
    let settings: ControllerSettings = parse_ron(contents, file)?;
    settings.validate().map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Invalid settings: {}", e),
    })?;
    Ok(settings)
}

/// Load controller.ron and level.ron from `base_path`.
/// Returns errors for any files that fail to load.
pub fn load_all_content(base_path: &Path) -> Result<LoadedContent, Vec<ContentLoadError>> {
    let settings_path = base_path.join(CONTROLLER_FILE);
    let settings = fs::read_to_string(&settings_path)
        .map_err(|e| ContentLoadError {
            file: settings_path.display().to_string(),
            message: format!("IO error: {}", e),
        })
        .and_then(|contents| parse_settings(&contents, &settings_path.display().to_string()));

    let level = load_single_file::<LevelDef>(&base_path.join(LEVEL_FILE));

    match (settings, level) {
        (Ok(settings), Ok(level)) => Ok(LoadedContent { settings, level }),
        (settings, level) => Err(settings.err().into_iter().chain(level.err()).collect()),
    }
}
