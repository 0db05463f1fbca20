use css::RuleTable;
use html_test_support::{CaseFilter, diff_lines, load_suite};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const RULES_FORMAT_V1: &str = "tangerine-rules-v1";

#[derive(Debug, Deserialize)]
struct RulesCase {
    name: String,
    input: String,
    expected: Vec<String>,
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("rules.toml")
}

#[test]
fn rule_table_golden_cases() {
    let cases: Vec<RulesCase> = load_suite(&fixture_path(), RULES_FORMAT_V1);
    let filter = CaseFilter::from_env();
    let mut ran = 0usize;
    let mut failures = Vec::new();
    for case in cases {
        if !filter.matches(&case.name) {
            continue;
        }
        ran += 1;
        let actual = RuleTable::parse(&case.input).outline();
        if actual != case.expected {
            failures.push(format!(
                "fixture '{}':\n{}",
                case.name,
                diff_lines(&case.expected, &actual)
            ));
        }
    }
    assert!(ran > 0, "no fixtures matched filter");
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
