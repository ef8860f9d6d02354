//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::NamingPolicy;
use crate::error::{AllocError, AllocResult};

use super::types::Config;

pub const PROJECT_CONFIG_FILE: &str = "arealloc.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AllocResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| AllocError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AllocError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate().map_err(|message| AllocError::Config {
        file: path.to_path_buf(),
        message,
    })?;

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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the working directory config, user config, or defaults.
///
/// Broken implicit config files are reported and skipped.
pub fn load_or_default(cwd: Option<&Path>) -> Config {
    let candidates = cwd
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if !candidate.is_file() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                debug!(file = %candidate.display(), "loaded config");
                for warning in warnings {
                    warn!("{}", warning);
                }
                return with_env_overrides(config);
            }
            Err(err) => warn!(file = %candidate.display(), error = %err, "ignoring config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// `$XDG_CONFIG_HOME/arealloc/config.toml` or the platform equivalent
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("arealloc").join("config.toml"))
}

/// Apply environment variable overrides (AREALLOC_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // AREALLOC_EQUAL_AREA_CRS
    if let Ok(code) = std::env::var("AREALLOC_EQUAL_AREA_CRS") {
        if !code.trim().is_empty() {
            config.allocation.equal_area_crs = code.trim().to_string();
        }
    }

    // AREALLOC_NAMING
    if let Ok(naming) = std::env::var("AREALLOC_NAMING") {
        match naming.parse::<NamingPolicy>() {
            Ok(policy) => config.allocation.naming = policy,
            Err(err) => warn!("AREALLOC_NAMING ignored: {}", err),
        }
    }

    // AREALLOC_ASSUME_CRS (empty clears it)
    if let Ok(code) = std::env::var("AREALLOC_ASSUME_CRS") {
        let code = code.trim();
        config.allocation.assume_crs = (!code.is_empty()).then(|| code.to_string());
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "allocation",
        "equal_area_crs",
        "naming",
        "order",
        "priority",
        "assume_crs",
        "discovery",
        "extensions",
        "output",
        "sort",
        "path",
        "crs",
        "code",
        "metres_per_unit",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
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
