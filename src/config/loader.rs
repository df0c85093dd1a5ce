//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::services::ProfileTable;
use crate::error::{DeployError, DeployResult};

use super::types::{parse_profile_key, Config};

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "WJS_DEPLOY_CONFIG";
/// System-wide configuration file
pub const SYSTEM_CONFIG_PATH: &str = "/etc/wjs-deploy/config.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut warnings: Vec<ConfigWarning> = unknown_paths
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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let known_profiles: Vec<String> = ProfileTable::builtin()
        .keys()
        .map(|(env, target)| format!("{}-{}", env, target))
        .collect();
    for key in config.profiles.keys() {
        let known = parse_profile_key(key)
            .map(|(env, target)| known_profiles.contains(&format!("{}-{}", env, target)))
            .unwrap_or(false);
        if !known {
            warnings.push(ConfigWarning {
                key: format!("profiles.{}", key),
                file: path.to_path_buf(),
                line: find_line_number(&content, key),
                suggestion: closest(key, known_profiles.iter().map(String::as_str))
                    .map(|s| format!("profiles.{}", s)),
            });
        }
    }

    Ok((config, warnings))
}

/// Find the configuration file to use.
///
/// Order: explicit path, `WJS_DEPLOY_CONFIG`, `/etc/wjs-deploy/config.toml`,
/// `~/.config/wjs-deploy/config.toml`. Only the explicit and environment
/// paths are returned without checking that they exist.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let system = PathBuf::from(SYSTEM_CONFIG_PATH);
    if system.exists() {
        return Some(system);
    }

    dirs::config_dir()
        .map(|dir| dir.join("wjs-deploy").join("config.toml"))
        .filter(|path| path.exists())
}

/// Load the configuration hierarchy: file (if any), then env overrides
pub fn load_layered(explicit: Option<&Path>) -> DeployResult<LoadedConfig> {
    let path = resolve_config_path(explicit);
    let (config, warnings) = match &path {
        Some(p) => {
            debug!(path = %p.display(), "loading configuration");
            load_with_warnings(p)?
        }
        None => {
            debug!("no configuration file, using built-in profiles");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        path,
        warnings,
    })
}

/// Apply environment variable overrides (WJS_DEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // WJS_DEPLOY_PACKAGE_NAME
    if let Some(name) = lookup("WJS_DEPLOY_PACKAGE_NAME").filter(|v| !v.is_empty()) {
        config.package.name = Some(name);
    }

    // WJS_DEPLOY_PACKAGE_INDEX
    if let Some(index) = lookup("WJS_DEPLOY_PACKAGE_INDEX").filter(|v| !v.is_empty()) {
        config.package.index = Some(index);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "package",
        "name",
        "index",
        "settings_module",
        "profiles",
        "root",
        "venv_bin",
        "reload_marker",
        "branch",
        "prerelease",
    ];

    closest(unknown, CANDIDATES.iter().copied()).map(str::to_string)
}

fn closest<'a>(unknown: &str, candidates: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
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
