use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".rest-store.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.rest-store.toml` in the current working directory
/// 2. `~/.rest-store.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the path and content of the first file found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    candidate_paths()
        .into_iter()
        .find_map(|path| match std::fs::read_to_string(&path) {
            Ok(content) => Some((path, content)),
            Err(_) => None,
        })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }

    if let Ok(path) = crate::paths::app_config_path() {
        paths.push(path);
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_is_searched_first() {
        let paths = candidate_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from(CONFIG_FILE)));
    }
}
