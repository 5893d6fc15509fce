//! The fixed case catalog.
//!
//! Five representative invocations of the dcg hook: the no-keyword fast
//! path, safe and destructive keyword paths, an inline-script trigger, and
//! the bypass environment variable. The catalog is constructed once per run
//! and read-only thereafter.

use std::collections::BTreeMap;

/// One named command + environment combination exercised by the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Unique identifier within a run.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Exact command string passed to the target binary.
    pub command: String,
    /// Environment overrides applied on top of the inherited environment.
    pub env: BTreeMap<String, String>,
}

impl Case {
    fn new(id: &str, description: &str, command: &str) -> Self {
        Self {
            id: id.to_owned(),
            description: description.to_owned(),
            command: command.to_owned(),
            env: BTreeMap::new(),
        }
    }

    fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_owned(), value.to_owned());
        self
    }
}

/// The fixed, ordered case catalog.
pub fn builtin_cases() -> Vec<Case> {
    vec![
        Case::new("quick_reject", "No pack keywords (fast allow)", "ls -la"),
        Case::new("safe_keyword", "Keyword present, safe path", "git status"),
        Case::new(
            "destructive_keyword",
            "Keyword present, destructive match",
            "git reset --hard",
        ),
        Case::new(
            "heredoc_inline",
            "Inline script trigger",
            r#"python -c "import os; os.system('rm -rf /')""#,
        ),
        Case::new("bypass", "Bypass hook via DCG_BYPASS", "git reset --hard")
            .with_env("DCG_BYPASS", "1"),
    ]
}
