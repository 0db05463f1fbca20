//! The built-in stylesheet every document's rule table starts from.
use crate::rules::RuleTable;

const DEFAULT_STYLESHEET: &str = include_str!("../resources/defaults.css");

/// Text of the bundled default stylesheet.
pub fn load_default_stylesheet() -> &'static str {
    DEFAULT_STYLESHEET
}

/// Parse the bundled stylesheet. Callers build this once and share it by
/// reference with every document they load.
pub fn default_rules() -> RuleTable {
    let rules = RuleTable::parse(load_default_stylesheet());
    log::debug!(target: "css.rules", "default stylesheet: {} selectors", rules.len());
    rules
}
