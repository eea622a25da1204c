//! Path utilities: expand `~`, resolve the database path.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Relative names are placed inside `base`; absolute and `~` paths are kept.
pub fn resolve_in(base: &Path, name: &str) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_names_go_under_base() {
        let base = Path::new("/srv/hall");
        assert_eq!(resolve_in(base, "x.sqlite"), PathBuf::from("/srv/hall/x.sqlite"));
        assert_eq!(resolve_in(base, "/tmp/y.sqlite"), PathBuf::from("/tmp/y.sqlite"));
    }
}
