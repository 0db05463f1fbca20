use crate::rules::RuleTable;

impl RuleTable {
    /// Layer `other` on top of this table.
    ///
    /// Selectors are merged, not replaced: for a selector present in both, each
    /// property from `other` overwrites the same property here and every other
    /// property already here is kept.
    pub fn merge(&mut self, other: &RuleTable) {
        for (selector, declarations) in other.iter() {
            let target = self.entry(selector);
            for (property, value) in declarations {
                target.insert(property.clone(), value.clone());
            }
        }
    }

    /// A copy of `self` with `other` layered on top.
    pub fn merged_with(&self, other: &RuleTable) -> RuleTable {
        let mut out = self.clone();
        out.merge(other);
        out
    }
}
