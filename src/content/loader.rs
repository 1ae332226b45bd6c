//! Loader for the RON controller tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::ControllerDefaults;

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

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse controller defaults from RON text. `file` is only used for error context.
pub fn parse_controller_defaults(
    contents: &str,
    file: &str,
) -> Result<ControllerDefaults, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Read and parse the controller tuning file at `path`.
pub fn load_controller_defaults(path: &Path) -> Result<ControllerDefaults, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_controller_defaults(&contents, &file_name)
}
