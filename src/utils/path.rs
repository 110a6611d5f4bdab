use std::path::{Path, PathBuf};

/// Expand a leading `~` or `~/` to the current user's home directory.
///
/// Paths that do not start with `~` are returned unchanged. `~user` forms
/// are not supported and are returned unchanged as well.
///
/// # Examples
///
/// ```
/// use sam_agents::utils::path::expand_tilde;
///
/// let path = expand_tilde("relative/templates").unwrap();
/// assert_eq!(path.to_str(), Some("relative/templates"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_str()?;

    let Some(after_tilde) = path_str.strip_prefix('~') else {
        return Some(path.to_path_buf());
    };

    if after_tilde.is_empty() || after_tilde.starts_with('/') {
        let home = home_dir()?;
        return Some(home.join(after_tilde.trim_start_matches('/')));
    }

    Some(path.to_path_buf())
}

/// Get the home directory
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    #[serial_test::serial]
    fn test_expand_tilde_current_user() {
        let home = env::var("HOME").unwrap();
        let expanded = expand_tilde("~/sam/templates").unwrap();
        assert_eq!(expanded, PathBuf::from(format!("{}/sam/templates", home)));

        let expanded = expand_tilde("~").unwrap();
        assert_eq!(expanded, PathBuf::from(home));
    }

    #[test]
    fn test_expand_tilde_untouched() {
        let expanded = expand_tilde("/absolute/path").unwrap();
        assert_eq!(expanded, PathBuf::from("/absolute/path"));

        let expanded = expand_tilde("/path/~user/file").unwrap();
        assert_eq!(expanded, PathBuf::from("/path/~user/file"));

        let expanded = expand_tilde("~root/templates").unwrap();
        assert_eq!(expanded, PathBuf::from("~root/templates"));
    }

    #[test]
    #[serial_test::serial]
    fn test_expand_tilde_no_home_env() {
        let original_home = env::var("HOME").ok();
        env::remove_var("HOME");

        assert!(expand_tilde("~/file").is_none());

        if let Some(home) = original_home {
            env::set_var("HOME", home);
        }
    }
}
