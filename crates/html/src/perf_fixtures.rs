pub const BLOCK_TEMPLATE: &str =
    "<div class=\"box wide\"><span>hello <!-- note --></span><img src=x><p>one<p>two</div>\n";

pub fn make_document(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks + 64);
    html.push_str("<!DOCTYPE html><html><body>");
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html.push_str("</body></html>");
    html
}
