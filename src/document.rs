//! A loaded page: its parsed tree and the rule table built from its styles.
use crate::error::DocumentError;
use crate::origin::{origin_of, resolve_href};
use css::RuleTable;
use html::Element;
use html::dom_utils::stylesheet_candidates;
use net::Fetch;
use std::borrow::Cow;
use url::Url;

#[derive(Debug)]
pub struct Document {
    url: Url,
    dom: Option<Element>,
    rules: RuleTable,
}

impl Document {
    /// Fetch `url` and build its tree and rule table.
    ///
    /// Only the document fetch can fail; stylesheets that cannot be fetched
    /// contribute no rules.
    pub fn load<F>(url: &str, fetcher: &F, defaults: &RuleTable) -> Result<Self, DocumentError>
    where
        F: Fetch + ?Sized,
    {
        let parsed = Url::parse(url)?;
        let markup = fetcher.fetch(parsed.as_str())?;
        Ok(Self::build(parsed, &markup, fetcher, defaults))
    }

    /// Build from markup already in hand. `url` is the base for linked stylesheets.
    pub fn from_markup<F>(
        url: &str,
        markup: &str,
        fetcher: &F,
        defaults: &RuleTable,
    ) -> Result<Self, DocumentError>
    where
        F: Fetch + ?Sized,
    {
        let parsed = Url::parse(url)?;
        Ok(Self::build(parsed, markup, fetcher, defaults))
    }

    fn build<F>(url: Url, markup: &str, fetcher: &F, defaults: &RuleTable) -> Self
    where
        F: Fetch + ?Sized,
    {
        let dom = if markup.trim().is_empty() {
            log::info!(target: "document.cssom", "{url}: empty document, nothing to show");
            None
        } else {
            html::parse_document(markup)
        };
        let origin = origin_of(&url);
        let rules = build_rules(dom.as_ref(), &origin, fetcher, defaults);
        Self { url, dom, rules }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn origin(&self) -> String {
        origin_of(&self.url)
    }

    pub fn dom(&self) -> Option<&Element> {
        self.dom.as_ref()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn into_parts(self) -> (Option<Element>, RuleTable) {
        (self.dom, self.rules)
    }
}

/// Start from `defaults` and merge every stylesheet of the tree over it, in
/// document order.
pub fn build_rules<F>(dom: Option<&Element>, origin: &str, fetcher: &F, defaults: &RuleTable) -> RuleTable
where
    F: Fetch + ?Sized,
{
    let mut rules = defaults.clone();
    let Some(root) = dom else {
        return rules;
    };
    let candidates = stylesheet_candidates(root);
    log::debug!(target: "document.cssom", "{} stylesheet candidates", candidates.len());
    for candidate in candidates {
        if let Some(css) = stylesheet_text(candidate, origin, fetcher) {
            rules.merge(&RuleTable::parse(&css));
        }
    }
    log::debug!(target: "document.cssom", "{} selectors after merge", rules.len());
    rules
}

fn is_stylesheet_link(link: &Element) -> bool {
    link.attr("rel")
        .is_some_and(|rel| rel.eq_ignore_ascii_case("stylesheet"))
}

fn stylesheet_text<'a, F>(candidate: &'a Element, origin: &str, fetcher: &F) -> Option<Cow<'a, str>>
where
    F: Fetch + ?Sized,
{
    if candidate.is("style") {
        return candidate.first_text().map(Cow::Borrowed);
    }
    if !is_stylesheet_link(candidate) {
        return None;
    }
    let href = candidate.attr("href")?;
    let target = resolve_href(href, origin);
    match fetcher.fetch(&target) {
        Ok(css) => Some(Cow::Owned(css)),
        Err(err) => {
            log::warn!(target: "document.cssom", "skipping stylesheet {target}: {err}");
            None
        }
    }
}
