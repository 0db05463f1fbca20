//! TOML fixture suites for golden tests.
//!
//! A suite file carries a `format` tag and a list of `[[cases]]` tables whose
//! shape is chosen by the test that loads it.
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct Suite<T> {
    pub format: String,
    pub cases: Vec<T>,
}

/// Read and validate a suite; panics with the offending path on any problem.
pub fn load_suite<T: DeserializeOwned>(path: &Path, format: &str) -> Vec<T> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture suite {path:?}: {err}"));
    let suite: Suite<T> = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse fixture suite {path:?}: {err}"));
    assert_eq!(suite.format, format, "unsupported format in {path:?}");
    assert!(!suite.cases.is_empty(), "fixture suite {path:?} has no cases");
    suite.cases
}

/// Case-name filter read from `TANGERINE_FIXTURE_FILTER` (substring match).
pub struct CaseFilter {
    needle: Option<String>,
}

impl CaseFilter {
    pub fn from_env() -> Self {
        let needle = std::env::var("TANGERINE_FIXTURE_FILTER")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Self { needle }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.needle.as_deref().is_none_or(|n| name.contains(n))
    }
}
