//! Rule Matcher - Ordered keyword rules resolving free text to a category.
//!
//! A [`RuleTable`] is a priority list of `(predicate, category)` pairs plus a
//! default. Resolution lowercases the input, walks the rules in order and
//! returns the category of the first predicate that matches; when nothing
//! matches the default is returned. Resolution is total and deterministic.

/// A test applied to lowercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The keyword occurs as a substring.
    Contains(&'static str),
    /// Every keyword occurs as a substring (in any order).
    AllOf(&'static [&'static str]),
}

impl Predicate {
    /// Evaluates the predicate against already-lowercased text.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Predicate::Contains(keyword) => lowered.contains(keyword),
            Predicate::AllOf(keywords) => keywords.iter().all(|k| lowered.contains(k)),
        }
    }
}

/// One entry of a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<C> {
    pub predicate: Predicate,
    pub category: C,
}

impl<C> Rule<C> {
    /// Rule matching a single keyword.
    pub const fn contains(keyword: &'static str, category: C) -> Self {
        Self {
            predicate: Predicate::Contains(keyword),
            category,
        }
    }

    /// Rule matching when all keywords are present.
    pub const fn all_of(keywords: &'static [&'static str], category: C) -> Self {
        Self {
            predicate: Predicate::AllOf(keywords),
            category,
        }
    }
}

/// Ordered rule list with a fallback category.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable<C: 'static> {
    rules: &'static [Rule<C>],
    default: C,
}

impl<C: Copy + 'static> RuleTable<C> {
    /// Creates a table; earlier rules take priority.
    pub const fn new(rules: &'static [Rule<C>], default: C) -> Self {
        Self { rules, default }
    }

    /// Returns the category of the first matching rule, if any.
    pub fn find(&self, text: &str) -> Option<C> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(&lowered))
            .map(|rule| rule.category)
    }

    /// Returns the first matching category or the table default.
    pub fn resolve(&self, text: &str) -> C {
        self.find(text).unwrap_or(self.default)
    }

    /// The fallback category.
    pub fn default_category(&self) -> C {
        self.default
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &'static [Rule<C>] {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Hot,
        Cold,
        Combo,
        Other,
    }

    const RULES: &[Rule<Kind>] = &[
        Rule::all_of(&["hot", "cold"], Kind::Combo),
        Rule::contains("hot", Kind::Hot),
        Rule::contains("cold", Kind::Cold),
    ];

    const TABLE: RuleTable<Kind> = RuleTable::new(RULES, Kind::Other);

    #[test]
    fn first_matching_rule_wins() {
        assert_eq!(TABLE.resolve("hot and cold"), Kind::Combo);
        assert_eq!(TABLE.resolve("hot tea"), Kind::Hot);
        assert_eq!(TABLE.resolve("cold brew"), Kind::Cold);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(TABLE.resolve("HOT Sauce"), Kind::Hot);
    }

    #[test]
    fn unmatched_text_falls_back_to_default() {
        assert_eq!(TABLE.resolve("lukewarm"), Kind::Other);
        assert_eq!(TABLE.resolve(""), Kind::Other);
        assert_eq!(TABLE.find("lukewarm"), None);
    }

    #[test]
    fn substring_matches_inside_words() {
        assert_eq!(TABLE.resolve("shotgun"), Kind::Hot);
    }

    #[test]
    fn all_of_is_order_independent() {
        assert!(Predicate::AllOf(&["b", "a"]).matches("a then b"));
        assert!(!Predicate::AllOf(&["a", "z"]).matches("a then b"));
    }
}
