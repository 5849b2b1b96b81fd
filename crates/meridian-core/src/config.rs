//! Engine configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path prefix the engine is mounted under. Stripped from incoming paths
    /// before resolution, so routes are configured relative to it.
    pub root: String,
}

impl Config {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Strip the mount prefix from a path, leaving at least `/`
    pub fn strip_root<'a>(&self, path: &'a str) -> &'a str {
        if self.root.is_empty() || self.root == "/" {
            return path;
        }
        match path.strip_prefix(self.root.as_str()) {
            Some("") => "/",
            Some(stripped) => stripped,
            None => path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_root() {
        let config = Config::new("/app");
        assert_eq!(config.strip_root("/app/posts/1"), "/posts/1");
        assert_eq!(config.strip_root("/app"), "/");
        // Paths outside the mount pass through unchanged
        assert_eq!(config.strip_root("/other"), "/other");
    }

    #[test]
    fn test_default_root_is_transparent() {
        let config = Config::default();
        assert_eq!(config.strip_root("/posts/1"), "/posts/1");
    }
}
