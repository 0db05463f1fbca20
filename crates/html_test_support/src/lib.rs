pub mod fixtures;

pub use fixtures::{CaseFilter, Suite, load_suite};

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    use std::fmt::Write;
    let missing = "<missing>";
    let mismatch = (0..max).find(|&i| expected.get(i) != actual.get(i));
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn diff_points_at_first_mismatch() {
        let report = diff_lines(&lines(&["a", "b", "c"]), &lines(&["a", "x", "c"]));
        assert!(report.contains("first mismatch at line 2"), "{report}");
        assert!(report.contains("expected: b"), "{report}");
        assert!(report.contains("actual: x"), "{report}");
    }

    #[test]
    fn diff_reports_length_difference() {
        let report = diff_lines(&lines(&["a"]), &lines(&["a", "b"]));
        assert!(report.contains("expected: <missing>"), "{report}");
        assert!(report.contains("expected 1 lines, actual 2 lines"), "{report}");
    }
}
