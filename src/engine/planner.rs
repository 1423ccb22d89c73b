//! Category / fallback blending for a single invocation

use crate::engine::matcher::VanityMatcher;
use crate::keypad::DigitString;
use crate::types::VanityMatch;

/// Matches produced for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPlan {
    pub category_matches: Vec<VanityMatch>,
    pub fallback_matches: Vec<VanityMatch>,
    pub used_fallback: bool,
}

impl MatchPlan {
    /// Category matches first, then fallback matches, both in scan order
    pub fn candidates(&self) -> Vec<VanityMatch> {
        self.category_matches
            .iter()
            .chain(self.fallback_matches.iter())
            .cloned()
            .collect()
    }

    pub fn total(&self) -> usize {
        self.category_matches.len() + self.fallback_matches.len()
    }
}

/// Decides when the category list is too thin and the dictionary must help.
#[derive(Debug, Clone, Copy)]
pub struct MatchPlanner {
    matcher: VanityMatcher,
}

impl MatchPlanner {
    pub fn new(matcher: VanityMatcher) -> Self {
        Self { matcher }
    }

    /// Run the category pass, then the fallback pass if it came up short.
    ///
    /// Each pass is capped on its own, so up to twice the cap can flow out.
    /// Fallback words already matched by the category pass are skipped.
    pub fn plan<C, F>(
        &self,
        digits: &DigitString,
        category: &str,
        category_words: &[C],
        fallback_words: &[F],
    ) -> MatchPlan
    where
        C: AsRef<str>,
        F: AsRef<str>,
    {
        let category_matches = self
            .matcher
            .find_matches(digits, category_words, Some(category));

        if category_matches.len() >= self.matcher.result_cap() {
            return MatchPlan {
                category_matches,
                fallback_matches: Vec::new(),
                used_fallback: false,
            };
        }

        // For a fixed number a word renders to exactly one vanity string.
        let found_words: Vec<&str> = category_matches
            .iter()
            .filter_map(|m| m.vanity.rsplit(' ').next())
            .collect();
        let fallback_pool: Vec<&str> = fallback_words
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| !found_words.iter().any(|found| found.eq_ignore_ascii_case(word)))
            .collect();
        let fallback_matches = self.matcher.find_matches(digits, &fallback_pool, None);

        tracing::debug!(
            category = %category,
            category_matches = category_matches.len(),
            fallback_matches = fallback_matches.len(),
            "Fallback dictionary consulted"
        );

        MatchPlan {
            category_matches,
            fallback_matches,
            used_fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBER: &str = "8009453228";

    fn planner(cap: usize) -> MatchPlanner {
        MatchPlanner::new(VanityMatcher::with_cap(cap))
    }

    #[test]
    fn test_full_category_pass_skips_fallback() {
        let digits = DigitString::from_phone(NUMBER);
        let category = ["FACT", "CAT", "BAT", "ACT", "ABU"];
        let plan = planner(5).plan(&digits, "animal", &category, &["BAU"]);
        assert!(!plan.used_fallback);
        assert_eq!(plan.category_matches.len(), 5);
        assert!(plan.fallback_matches.is_empty());
        assert!(plan.category_matches.iter().all(|m| m.from_category.as_deref() == Some("animal")));
    }

    #[test]
    fn test_short_category_pass_uses_fallback() {
        let digits = DigitString::from_phone(NUMBER);
        let plan = planner(5).plan(&digits, "pet", &["PET", "CAT"], &["FACT", "BAT"]);
        assert!(plan.used_fallback);
        assert_eq!(plan.category_matches.len(), 1);
        assert_eq!(plan.fallback_matches.len(), 2);
        assert!(plan.fallback_matches.iter().all(|m| m.from_category.is_none()));

        let vanities: Vec<_> = plan.candidates().into_iter().map(|m| m.vanity).collect();
        assert_eq!(
            vanities,
            vec!["8 0 0 9 4 5 3 CAT", "8 0 0 9 4 5 FACT", "8 0 0 9 4 5 3 BAT"]
        );
    }

    #[test]
    fn test_empty_category_uses_fallback() {
        let digits = DigitString::from_phone(NUMBER);
        let none: [&str; 0] = [];
        let plan = planner(5).plan(&digits, "general", &none, &["CAT"]);
        assert!(plan.used_fallback);
        assert_eq!(plan.total(), 1);
    }

    #[test]
    fn test_fallback_skips_category_hits() {
        let digits = DigitString::from_phone(NUMBER);
        let plan = planner(2).plan(&digits, "pet", &["CAT"], &["CAT", "BAT"]);
        assert_eq!(plan.category_matches.len(), 1);
        let fallback: Vec<_> = plan.fallback_matches.iter().map(|m| m.vanity.as_str()).collect();
        assert_eq!(fallback, vec!["8 0 0 9 4 5 3 BAT"]);
    }

    #[test]
    fn test_each_pass_capped_independently() {
        let digits = DigitString::from_phone(NUMBER);
        let plan = planner(2).plan(&digits, "pet", &["CAT"], &["FACT", "BAT", "ACT", "ABU"]);
        assert_eq!(plan.fallback_matches.len(), 2);
        assert_eq!(plan.total(), 3);
    }
}
