//! Engine policy configuration.
//!
//! Handles loading and parsing `.chimera.toml` policy files. Policy controls
//! which mutators are registered and the boundary-value sets of the rules
//! that have them. The exclusion sets are policy rather than constants on
//! purpose: which boundary values make for uninteresting mutants is a
//! judgment call, and deployments disagree (see DESIGN.md).

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Policy loaded from `.chimera.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationPolicy {
    /// Mutator names to exclude from the catalog (e.g. `"negate-equality"`).
    #[serde(default)]
    pub disabled_mutators: Vec<String>,

    /// Integer literal values the decrement rule never touches.
    /// Default `[1]`: decrementing 1 collapses to the additive identity and
    /// would duplicate what the complementary boundary treatment produces.
    #[serde(default = "default_skip_decrement_values")]
    pub skip_decrement_values: Vec<i64>,

    /// Integer literal values the increment rule never touches.
    /// Default `[-1]`, mirroring the decrement boundary.
    #[serde(default = "default_skip_increment_values")]
    pub skip_increment_values: Vec<i64>,

    /// Function names whose results are non-negative counts. A `0` literal
    /// compared against a call to one of these is never decremented, because
    /// the comparison against `-1` can never change truth value.
    #[serde(default = "default_cardinality_functions")]
    pub cardinality_functions: Vec<String>,
}

fn default_skip_decrement_values() -> Vec<i64> {
    vec![1]
}

fn default_skip_increment_values() -> Vec<i64> {
    vec![-1]
}

fn default_cardinality_functions() -> Vec<String> {
    ["len", "count", "size", "strlen", "sizeof"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for MutationPolicy {
    fn default() -> Self {
        Self {
            disabled_mutators: Vec::new(),
            skip_decrement_values: default_skip_decrement_values(),
            skip_increment_values: default_skip_increment_values(),
            cardinality_functions: default_cardinality_functions(),
        }
    }
}

impl MutationPolicy {
    /// Check if `.chimera.toml` exists in the given directory.
    pub fn exists(dir: &Path) -> bool {
        dir.join(".chimera.toml").exists()
    }

    /// Load policy from `.chimera.toml`.
    ///
    /// Returns `Some(policy)` if the file exists and is valid.
    /// Returns `None` if the file doesn't exist or fails to parse.
    /// Returns `Some(default)` if the file is empty or contains only
    /// whitespace.
    pub fn load(dir: &Path) -> Option<Self> {
        let path = dir.join(".chimera.toml");
        if !path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(&path).ok()?;
        if content.trim().is_empty() {
            return Some(Self::default());
        }
        toml::from_str(&content).ok()
    }

    /// Load policy from `.chimera.toml`, surfacing what went wrong.
    ///
    /// Unlike [`MutationPolicy::load`], a missing or unparseable file is an
    /// error here, with the offending path in the message. Use this when the
    /// caller asked for a policy file explicitly and silence would hide a
    /// typo.
    pub fn try_load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(".chimera.toml");
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read policy file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse policy file {}", path.display()))
    }

    /// Whether the named mutator is disabled by this policy.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_mutators.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_returns_false_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!MutationPolicy::exists(temp_dir.path()));
    }

    #[test]
    fn test_load_returns_none_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(MutationPolicy::load(temp_dir.path()).is_none());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".chimera.toml"), "").unwrap();

        let policy = MutationPolicy::load(temp_dir.path()).unwrap();
        assert!(policy.disabled_mutators.is_empty());
        assert_eq!(policy.skip_decrement_values, vec![1]);
        assert_eq!(policy.skip_increment_values, vec![-1]);
        assert!(policy.cardinality_functions.contains(&"len".to_string()));
    }

    #[test]
    fn test_load_invalid_toml_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".chimera.toml"), "invalid {{{{ toml").unwrap();

        assert!(MutationPolicy::load(temp_dir.path()).is_none());
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
disabled_mutators = ["boolean-literal"]
skip_decrement_values = [0, 1]
cardinality_functions = ["len", "cardinality"]
"#;
        std::fs::write(temp_dir.path().join(".chimera.toml"), content).unwrap();

        let policy = MutationPolicy::load(temp_dir.path()).unwrap();
        assert!(policy.is_disabled("boolean-literal"));
        assert!(!policy.is_disabled("decrement-integer"));
        assert_eq!(policy.skip_decrement_values, vec![0, 1]);
        assert_eq!(
            policy.cardinality_functions,
            vec!["len".to_string(), "cardinality".to_string()]
        );
        // Untouched sections keep their defaults
        assert_eq!(policy.skip_increment_values, vec![-1]);
    }

    #[test]
    fn test_try_load_missing_file_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = MutationPolicy::try_load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains(".chimera.toml"));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_try_load_invalid_toml_names_the_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".chimera.toml"), "invalid {{{{ toml").unwrap();

        let err = MutationPolicy::try_load(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_try_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(".chimera.toml"),
            "skip_decrement_values = [2]\n",
        )
        .unwrap();

        let policy = MutationPolicy::try_load(temp_dir.path()).unwrap();
        assert_eq!(policy.skip_decrement_values, vec![2]);
    }

    #[test]
    fn test_try_load_empty_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".chimera.toml"), "  \n").unwrap();

        let policy = MutationPolicy::try_load(temp_dir.path()).unwrap();
        assert_eq!(policy.skip_decrement_values, vec![1]);
    }

    #[test]
    fn test_default_policy_disables_nothing() {
        let policy = MutationPolicy::default();
        assert!(!policy.is_disabled("decrement-integer"));
        assert!(!policy.is_disabled("remove-negation"));
    }
}
