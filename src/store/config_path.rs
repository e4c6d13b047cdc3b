use std::path::PathBuf;

/// Returns the config directory path for farewatch.
/// Checks `$XDG_CONFIG_HOME` first (cross-platform), then falls back to
/// platform-native config via `dirs::config_dir()`, then `~/.config`.
pub fn get_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("farewatch")
}

/// Ensures the config directory exists, creating it if necessary.
/// Returns the config directory path.
pub fn ensure_config_dir() -> PathBuf {
    let dir = get_config_dir();
    std::fs::create_dir_all(&dir).ok();
    dir
}
