#![allow(dead_code)]

//! Phrase Matcher — tests a skill's canonical name and aliases against one
//! normalized text.

use crate::analysis::normalize::{normalize, NormalizedText};
use crate::taxonomy::SkillEntry;

/// Outcome of matching one skill against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub skill_id: String,
    pub found: bool,
    /// Catalog-form phrases that matched, first-seen order, deduplicated.
    pub found_as: Vec<String>,
}

/// Pure deterministic phrase containment (no stemming, no edit distance).
/// Candidate phrases are the canonical name followed by the aliases, each
/// normalized exactly like the text. Independent across skills; touches no
/// shared state.
pub fn match_skill(entry: &SkillEntry, text: &NormalizedText) -> MatchResult {
    let mut found_as: Vec<String> = Vec::new();
    for phrase in entry.phrases() {
        let needle = normalize(phrase);
        if needle.is_empty() || !text.contains_phrase(needle.as_str()) {
            continue;
        }
        if !found_as.iter().any(|p| p == phrase) {
            found_as.push(phrase.to_string());
        }
    }
    MatchResult {
        skill_id: entry.id.clone(),
        found: !found_as.is_empty(),
        found_as,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{Role, SkillLevel};

    fn skill(id: &str, canonical: &str, aliases: &[&str]) -> SkillEntry {
        SkillEntry {
            id: id.to_string(),
            canonical_name: canonical.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            category: "Languages".to_string(),
            roles: vec![Role::Backend],
            level: SkillLevel::Core,
        }
    }

    #[test]
    fn test_canonical_name_matches() {
        let entry = skill("py", "Python", &[]);
        let text = normalize("I have 3 years of Python and SQL experience");
        let result = match_skill(&entry, &text);
        assert!(result.found);
        assert_eq!(result.skill_id, "py");
        assert_eq!(result.found_as, vec!["Python"]);
    }

    #[test]
    fn test_alias_matches_when_canonical_absent() {
        let entry = skill("js", "JavaScript", &["js", "node.js"]);
        let text = normalize("built services in node.js");
        let result = match_skill(&entry, &text);
        assert!(result.found);
        // "js" hits too: '.' in "node.js" is a token boundary.
        assert_eq!(result.found_as, vec!["js", "node.js"]);
    }

    #[test]
    fn test_found_as_keeps_catalog_order() {
        let entry = skill("go", "Go", &["golang"]);
        let text = normalize("golang first, then go");
        let result = match_skill(&entry, &text);
        assert_eq!(result.found_as, vec!["Go", "golang"]);
    }

    #[test]
    fn test_found_as_deduplicates_repeated_phrases() {
        let entry = skill("py", "Python", &["Python"]);
        let text = normalize("python python python");
        let result = match_skill(&entry, &text);
        assert_eq!(result.found_as, vec!["Python"]);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let entry = skill("py", "Python", &[]);
        let text = normalize("I write pythonic code");
        let result = match_skill(&entry, &text);
        assert!(!result.found);
        assert!(result.found_as.is_empty());
    }

    #[test]
    fn test_multi_word_alias_matches_contiguously() {
        let entry = skill("iac", "Terraform", &["infrastructure as code"]);
        let hit = normalize("practiced infrastructure as code daily");
        assert_eq!(match_skill(&entry, &hit).found_as, vec!["infrastructure as code"]);

        let miss = normalize("infrastructure written as maintainable code");
        assert!(!match_skill(&entry, &miss).found);
    }

    #[test]
    fn test_symbol_heavy_phrases() {
        let entry = skill("cs", "C#", &[".net"]);
        let text = normalize("5 years of C# and .NET services");
        let result = match_skill(&entry, &text);
        assert_eq!(result.found_as, vec!["C#", ".net"]);
    }
}
