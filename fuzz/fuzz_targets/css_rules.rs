#![no_main]

use css::RuleTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let sheet = String::from_utf8_lossy(data);
    let table = RuleTable::parse(&sheet);
    let mut layered = css::default_rules();
    layered.merge(&table);
    assert!(layered.len() >= table.len());
});
