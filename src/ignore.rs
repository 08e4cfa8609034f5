use glob::Pattern;
use lazy_static::lazy_static;
use std::collections::HashSet;
use tracing::warn;

lazy_static! {
    static ref PICKER_IGNORED: HashSet<&'static str> = [
        "node_modules",
        ".git",
        ".next",
        ".cache",
        "dist",
        "build",
        "vendor",
        "__pycache__",
        ".venv",
        "venv",
    ]
    .into_iter()
    .collect();
    static ref REPO_SCAN_IGNORED: HashSet<&'static str> =
        ["node_modules", ".git", "vendor", "dist", "build", ".next"]
            .into_iter()
            .collect();
}

/// Which directory names a scanner refuses to enter.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    names: &'static HashSet<&'static str>,
    skip_hidden: bool,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Rules for the directory picker: dependency and build folders plus
    /// anything starting with a dot.
    pub fn directory_picker() -> Self {
        IgnoreRules {
            names: &PICKER_IGNORED,
            skip_hidden: true,
            patterns: Vec::new(),
        }
    }

    /// Rules for the repository scan. Hidden folders other than the listed
    /// ones are still visited.
    pub fn repository_scan() -> Self {
        IgnoreRules {
            names: &REPO_SCAN_IGNORED,
            skip_hidden: false,
            patterns: Vec::new(),
        }
    }

    /// Adds user glob patterns matched against directory names.
    pub fn with_patterns(mut self, patterns: &[String]) -> Self {
        for raw in patterns {
            match Pattern::new(raw) {
                Ok(p) => self.patterns.push(p),
                Err(e) => warn!(pattern = %raw, error = %e, "ignoring invalid ignore pattern"),
            }
        }
        self
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        (self.skip_hidden && name.starts_with('.'))
            || self.names.contains(name)
            || self.patterns.iter().any(|p| p.matches(name))
    }
}
