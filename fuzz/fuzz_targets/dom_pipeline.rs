#![no_main]

use html::debug::outline;
use html::{TreeBuilderConfig, parse_document_with};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let markup = String::from_utf8_lossy(data);
    let config = TreeBuilderConfig { max_depth: 256 };
    if let Some(root) = parse_document_with(&markup, config) {
        let _ = outline(&root);
        let _ = html::dom_utils::stylesheet_candidates(&root);
    }
});
