//! Scorer — confidence from resume evidence, importance from catalog level
//! and job-text presence.

use crate::analysis::matcher::MatchResult;
use crate::taxonomy::{SkillEntry, SkillLevel};

/// Per-skill scores, both in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSkill {
    pub skill_id: String,
    pub confidence: f64,
    pub importance: f64,
}

/// Base importance weight before any job-text override.
pub fn base_weight(level: SkillLevel) -> f64 {
    match level {
        SkillLevel::Core => 1.0,
        SkillLevel::Supplementary => 0.5,
    }
}

/// Pure scoring. Confidence is binary on resume evidence. Importance is the
/// level's base weight, overridden to 1.0 when the job text asks for the
/// skill outright.
pub fn score_skill(
    entry: &SkillEntry,
    resume_match: &MatchResult,
    job_match: &MatchResult,
) -> ScoredSkill {
    let confidence = if resume_match.found { 1.0 } else { 0.0 };
    let importance = if job_match.found {
        1.0
    } else {
        base_weight(entry.level)
    };
    ScoredSkill {
        skill_id: entry.id.clone(),
        confidence,
        importance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Role;

    fn entry(level: SkillLevel) -> SkillEntry {
        SkillEntry {
            id: "py".to_string(),
            canonical_name: "Python".to_string(),
            aliases: vec![],
            category: "Languages".to_string(),
            roles: vec![Role::Backend],
            level,
        }
    }

    fn hit(found: bool) -> MatchResult {
        MatchResult {
            skill_id: "py".to_string(),
            found,
            found_as: if found { vec!["Python".to_string()] } else { vec![] },
        }
    }

    #[test]
    fn test_confidence_is_binary() {
        let e = entry(SkillLevel::Core);
        assert_eq!(score_skill(&e, &hit(true), &hit(false)).confidence, 1.0);
        assert_eq!(score_skill(&e, &hit(false), &hit(false)).confidence, 0.0);
    }

    #[test]
    fn test_core_base_weight_is_full() {
        let e = entry(SkillLevel::Core);
        assert_eq!(score_skill(&e, &hit(false), &hit(false)).importance, 1.0);
    }

    #[test]
    fn test_supplementary_base_weight_is_half() {
        let e = entry(SkillLevel::Supplementary);
        assert_eq!(score_skill(&e, &hit(false), &hit(false)).importance, 0.5);
    }

    #[test]
    fn test_job_presence_overrides_supplementary_weight() {
        // The job description asking for a skill outranks its catalog level,
        // regardless of resume content.
        let e = entry(SkillLevel::Supplementary);
        assert_eq!(score_skill(&e, &hit(false), &hit(true)).importance, 1.0);
        assert_eq!(score_skill(&e, &hit(true), &hit(true)).importance, 1.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let e = entry(SkillLevel::Supplementary);
        let a = score_skill(&e, &hit(true), &hit(false));
        let b = score_skill(&e, &hit(true), &hit(false));
        assert_eq!(a, b);
    }
}
