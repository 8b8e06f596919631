//! User configuration (`config.toml`).
//!
//! Read problems become warnings and fall back to defaults. A column list
//! that does not form a valid layout is the one hard error.

use directories::ProjectDirs;
use linegrid_core::editor::MAX_INSERT_ROWS;
use linegrid_core::{ColumnKind, ColumnSpec, Layout, LineColumn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    columns: Option<Vec<ColumnEntry>>,
    export_dir: Option<PathBuf>,
    insert_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColumnEntry {
    key: String,
    label: Option<String>,
    kind: Option<ColumnKind>,
}

/// Resolved settings for one run.
#[derive(Clone, Debug)]
pub struct Settings {
    pub layout: Layout,
    /// Where selection CSV files are written.
    pub export_dir: PathBuf,
    /// Pre-filled row count of the insert prompt.
    pub insert_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            layout: Layout::bom(),
            export_dir: PathBuf::from("."),
            insert_count: 1,
        }
    }
}

/// Load settings from `config_file`, or from the user config dir when none
/// is given. Returns the settings plus any warnings to show the user.
pub fn load_settings(config_file: Option<&Path>) -> Result<(Settings, Vec<String>), ConfigError> {
    let mut warnings: Vec<String> = Vec::new();
    let config_path = config_file.map(Path::to_path_buf).or_else(user_config_path);

    let Some(path) = config_path else {
        return Ok((Settings::default(), warnings));
    };
    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return Ok((Settings::default(), warnings));
    }

    let file = match read_config(&path) {
        Ok(file) => file,
        Err(warning) => {
            warnings.push(warning);
            return Ok((Settings::default(), warnings));
        }
    };
    log::info!("loaded config from {}", path.display());

    let settings = build_settings(file, &path, &mut warnings)?;
    Ok((settings, warnings))
}

fn read_config(path: &Path) -> Result<ConfigFile, String> {
    let meta = std::fs::metadata(path)
        .map_err(|err| format!("Failed to read metadata for {}: {}", path.display(), err))?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(format!(
            "Refusing to read {}: file too large ({} bytes, max {})",
            path.display(),
            meta.len(),
            MAX_CONFIG_FILE_BYTES
        ));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("Failed to read {}: {}", path.display(), err))?;
    toml::from_str::<ConfigFile>(&content)
        .map_err(|err| format!("Failed to parse {}: {}", path.display(), err))
}

fn build_settings(
    file: ConfigFile,
    path: &Path,
    warnings: &mut Vec<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    if let Some(columns) = file.columns {
        let specs = columns
            .into_iter()
            .map(|entry| {
                let default = LineColumn::from_key(&entry.key);
                ColumnSpec {
                    label: entry
                        .label
                        .or_else(|| default.map(|c| c.default_label().to_string()))
                        .unwrap_or_else(|| entry.key.clone()),
                    kind: entry
                        .kind
                        .or_else(|| default.map(LineColumn::kind))
                        .unwrap_or(ColumnKind::Categorical),
                    key: entry.key,
                }
            })
            .collect();
        settings.layout = Layout::from_specs(specs).map_err(|source| ConfigError::Layout {
            path: path.to_path_buf(),
            source,
        })?;
    }

    if let Some(dir) = file.export_dir {
        if dir.is_dir() {
            settings.export_dir = dir;
        } else {
            warnings.push(format!(
                "export_dir {} is not a directory; using the current directory",
                dir.display()
            ));
        }
    }

    if let Some(count) = file.insert_count {
        let clamped = count.clamp(1, MAX_INSERT_ROWS);
        if clamped != count {
            warnings.push(format!(
                "insert_count {} is out of range; using {}",
                count, clamped
            ));
        }
        settings.insert_count = clamped;
    }

    Ok(settings)
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "linegrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
