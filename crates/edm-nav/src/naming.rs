//! Display name derivation for sidebar entries.

/// Generic trailing term canonicalised to a bare "Overview".
const OVERVIEW: &str = "Overview";

/// Rules for turning page titles and section keys into display names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamingRules {
    /// Separator in front of the branding suffix ("Setup | Pynecone").
    ///
    /// Everything from the first occurrence onward is dropped.
    pub title_separator: String,
    /// Acronyms written fully capitalised ("API" turns "Api Reference"
    /// into "API Reference").
    pub acronyms: Vec<String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            title_separator: " | ".to_owned(),
            acronyms: vec!["API".to_owned()],
        }
    }
}

impl NamingRules {
    /// Derive a leaf name from a registered page title.
    ///
    /// # Examples
    ///
    /// ```
    /// use edm_nav::NamingRules;
    ///
    /// let rules = NamingRules::default();
    /// assert_eq!(rules.leaf_name("Api Reference | Brand"), "API Reference");
    /// assert_eq!(rules.leaf_name("Intro Overview | Brand"), "Overview");
    /// ```
    #[must_use]
    pub fn leaf_name(&self, title: &str) -> String {
        let name = if self.title_separator.is_empty() {
            title
        } else {
            title
                .split_once(self.title_separator.as_str())
                .map_or(title, |(name, _)| name)
        };

        let mut name = if name.ends_with(OVERVIEW) {
            OVERVIEW.to_owned()
        } else {
            name.to_owned()
        };

        for acronym in &self.acronyms {
            let spelled = capitalize(acronym);
            if spelled != *acronym {
                name = name.replace(&spelled, acronym);
            }
        }

        name
    }

    /// Derive a section name from one segment of a grouping key.
    ///
    /// Underscores and hyphens become spaces and every word is capitalised:
    /// `getting_started` becomes "Getting Started".
    #[must_use]
    pub fn section_name(&self, key: &str) -> String {
        key.split(['_', '-', ' '])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_name_strips_branding_suffix() {
        let rules = NamingRules::default();

        assert_eq!(rules.leaf_name("Setup | Brand"), "Setup");
    }

    #[test]
    fn test_leaf_name_keeps_title_without_suffix() {
        let rules = NamingRules::default();

        assert_eq!(rules.leaf_name("Setup"), "Setup");
    }

    #[test]
    fn test_leaf_name_cuts_at_first_separator() {
        let rules = NamingRules::default();

        assert_eq!(rules.leaf_name("Setup | Part 2 | Brand"), "Setup");
    }

    #[test]
    fn test_leaf_name_canonicalizes_overview() {
        let rules = NamingRules::default();

        assert_eq!(rules.leaf_name("Components Overview | Brand"), "Overview");
        assert_eq!(rules.leaf_name("Overview"), "Overview");
    }

    #[test]
    fn test_leaf_name_overview_must_be_trailing() {
        let rules = NamingRules::default();

        assert_eq!(rules.leaf_name("Overview of State"), "Overview of State");
    }

    #[test]
    fn test_leaf_name_capitalizes_acronyms() {
        let rules = NamingRules::default();

        assert_eq!(rules.leaf_name("Api Reference | Brand"), "API Reference");
        assert_eq!(rules.leaf_name("Rest Api"), "Rest API");
    }

    #[test]
    fn test_leaf_name_custom_rules() {
        let rules = NamingRules {
            title_separator: " - ".to_owned(),
            acronyms: vec!["API".to_owned(), "CLI".to_owned()],
        };

        assert_eq!(rules.leaf_name("Cli Usage - Docs"), "CLI Usage");
    }

    #[test]
    fn test_leaf_name_empty_separator_keeps_title() {
        let rules = NamingRules {
            title_separator: String::new(),
            acronyms: Vec::new(),
        };

        assert_eq!(rules.leaf_name("Setup | Brand"), "Setup | Brand");
    }

    #[test]
    fn test_section_name_title_cases_words() {
        let rules = NamingRules::default();

        assert_eq!(rules.section_name("getting_started"), "Getting Started");
        assert_eq!(rules.section_name("api-reference"), "Api Reference");
        assert_eq!(rules.section_name("GUIDE"), "Guide");
    }

    #[test]
    fn test_section_name_collapses_repeated_separators() {
        let rules = NamingRules::default();

        assert_eq!(rules.section_name("_state__basics_"), "State Basics");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }
}
