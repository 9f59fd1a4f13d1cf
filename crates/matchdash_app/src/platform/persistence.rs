use std::fs;
use std::path::Path;

use dash_logging::{dash_error, dash_info, dash_warn};
use matchdash_core::ThemePreference;
use matchdash_engine::AtomicFileWriter;
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".matchdash_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    theme: ThemePreference,
}

/// Reads the stored display preference. A missing or unreadable file is a
/// first run, not an error.
pub(crate) fn load_theme_preference(state_dir: &Path) -> Option<ThemePreference> {
    let path = state_dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            dash_warn!("Failed to read preferences from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str::<PersistedPrefs>(&content) {
        Ok(prefs) => {
            dash_info!("Loaded preferences from {:?}", path);
            Some(prefs.theme)
        }
        Err(err) => {
            dash_warn!("Failed to parse preferences from {:?}: {}", path, err);
            None
        }
    }
}

pub(crate) fn save_theme_preference(state_dir: &Path, preference: ThemePreference) {
    let prefs = PersistedPrefs { theme: preference };
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            dash_error!("Failed to serialize preferences: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir.to_path_buf());
    if let Err(err) = writer.write(PREFS_FILENAME, &content) {
        dash_error!("Failed to write preferences to {:?}: {}", state_dir, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_a_first_run() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_theme_preference(temp.path()), None);
    }

    #[test]
    fn saved_preference_round_trips() {
        let temp = TempDir::new().unwrap();
        save_theme_preference(temp.path(), ThemePreference::Dark);
        assert_eq!(
            load_theme_preference(temp.path()),
            Some(ThemePreference::Dark)
        );

        save_theme_preference(temp.path(), ThemePreference::System);
        assert_eq!(
            load_theme_preference(temp.path()),
            Some(ThemePreference::System)
        );
    }

    #[test]
    fn corrupt_file_loads_as_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PREFS_FILENAME), "not ron at all {").unwrap();
        assert_eq!(load_theme_preference(temp.path()), None);
    }
}
