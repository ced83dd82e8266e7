//! Platform configuration home detection.

use std::path::PathBuf;

/// Returns the platform configuration home.
///
/// - Linux and others: `$XDG_CONFIG_HOME`, else `$HOME/.config`
/// - Windows: `%APPDATA%`
pub fn config_home() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        non_empty(std::env::var("APPDATA").ok()).map(PathBuf::from)
    }

    #[cfg(not(target_os = "windows"))]
    {
        resolve(
            std::env::var("XDG_CONFIG_HOME").ok(),
            std::env::var("HOME").ok(),
        )
    }
}

#[cfg(not(target_os = "windows"))]
fn resolve(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    non_empty(xdg_config_home)
        .map(PathBuf::from)
        .or_else(|| non_empty(home).map(|h| PathBuf::from(h).join(".config")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;

    #[test]
    fn xdg_wins_over_home() {
        let dir = resolve(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/xdg")));
    }

    #[test]
    fn falls_back_to_home_dot_config() {
        let dir = resolve(None, Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config")));
    }

    #[test]
    fn empty_values_are_ignored() {
        let dir = resolve(Some(String::new()), Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config")));
        assert_eq!(resolve(Some(String::new()), Some(String::new())), None);
        assert_eq!(resolve(None, None), None);
    }
}
