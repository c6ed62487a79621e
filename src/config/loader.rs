//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ObjviewError, ObjviewResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "objview.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ObjviewResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let (table, warnings) = parse_with_warnings(path, &content)?;
    let config = into_config(path, table)?;
    Ok((config, warnings))
}

fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> ObjviewResult<(toml::Table, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let _: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| invalid_config(path, e))?;

    let table: toml::Table = toml::from_str(content).map_err(|e| invalid_config(path, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &path_str),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((table, warnings))
}

fn into_config(path: &Path, table: toml::Table) -> ObjviewResult<Config> {
    toml::Value::Table(table)
        .try_into::<Config>()
        .map_err(|e| invalid_config(path, e))
}

fn invalid_config(path: &Path, error: impl std::fmt::Display) -> ObjviewError {
    ObjviewError::InvalidConfig {
        file: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// User config location (`<config_dir>/objview/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("objview").join("config.toml"))
}

/// Load user config, then project config on top of it, then env overrides.
///
/// Tables are merged key by key, so a project file only needs the keys it
/// changes.
pub fn load_layered(project_root: &Path) -> ObjviewResult<(Config, Vec<ConfigWarning>)> {
    let files = user_config_path()
        .into_iter()
        .chain(std::iter::once(project_root.join(PROJECT_CONFIG_FILE)));
    load_files(files)
}

pub(crate) fn load_files(
    files: impl IntoIterator<Item = PathBuf>,
) -> ObjviewResult<(Config, Vec<ConfigWarning>)> {
    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();
    let mut last = None;

    for file in files {
        if !file.is_file() {
            continue;
        }
        tracing::debug!(file = %file.display(), "loading config layer");
        let content = fs::read_to_string(&file)?;
        let (table, file_warnings) = parse_with_warnings(&file, &content)?;
        merge_tables(&mut merged, table);
        warnings.extend(file_warnings);
        last = Some(file);
    }

    let source = last.unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    let config = with_env_overrides(into_config(&source, merged)?);
    config.validate()?;
    Ok((config, warnings))
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Apply environment variable overrides (OBJVIEW_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // OBJVIEW_EXPAND_LEVEL
    if let Some(level) = var("OBJVIEW_EXPAND_LEVEL") {
        match level.trim().parse::<usize>() {
            Ok(level) => config.inspect.expand_level = level,
            Err(_) => tracing::warn!(value = %level, "ignoring invalid OBJVIEW_EXPAND_LEVEL"),
        }
    }

    // OBJVIEW_EXPAND_PATHS (comma-separated)
    if let Some(paths) = var("OBJVIEW_EXPAND_PATHS") {
        let parsed: Vec<String> = paths
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.inspect.expand_paths = parsed;
        }
    }

    if let Some(flag) = var("OBJVIEW_SHOW_NONENUMERABLE").and_then(|v| parse_flag(&v)) {
        config.inspect.show_nonenumerable = flag;
    }

    if let Some(flag) = var("OBJVIEW_SORT_KEYS").and_then(|v| parse_flag(&v)) {
        config.inspect.sort_object_keys = flag;
    }

    // OBJVIEW_COLOR
    if let Some(color) = var("OBJVIEW_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!(value = other, "ignoring invalid boolean in environment");
            None
        }
    }
}

/// Line of a dotted key path, matched within its own `[table]`.
fn find_line_number(content: &str, path: &str) -> Option<usize> {
    let mut table = String::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('[') {
            let name = header.trim_start_matches('[');
            let name = name.split(']').next().unwrap_or("");
            table = name.trim().to_string();
            if table == path {
                return Some(i + 1);
            }
            continue;
        }
        let Some((key, _)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let matches = if table.is_empty() {
            key == path
        } else {
            path == format!("{table}.{key}")
        };
        if matches {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "inspect",
        "expand_level",
        "expand_paths",
        "show_nonenumerable",
        "sort_object_keys",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
