use html::debug::outline;
use html::parse_document;
use html_test_support::{CaseFilter, diff_lines, load_suite};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DOM_FORMAT_V1: &str = "tangerine-dom-v1";

#[derive(Debug, Deserialize)]
struct DomCase {
    name: String,
    input: String,
    expected: Vec<String>,
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("dom_builder.toml")
}

#[test]
fn dom_builder_golden_cases() {
    let cases: Vec<DomCase> = load_suite(&fixture_path(), DOM_FORMAT_V1);
    let filter = CaseFilter::from_env();
    let mut ran = 0usize;
    let mut failures = Vec::new();
    for case in cases {
        if !filter.matches(&case.name) {
            continue;
        }
        ran += 1;
        let actual = parse_document(&case.input)
            .map(|root| outline(&root))
            .unwrap_or_default();
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
