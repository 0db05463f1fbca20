pub mod cascade;
pub mod defaults;
pub mod rules;
pub mod syntax;

pub use defaults::{default_rules, load_default_stylesheet};
pub use rules::{Declarations, RuleTable};
