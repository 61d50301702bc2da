//! Skill gap analysis engine.
//!
//! Pipeline: normalize each input text once → match every role-relevant
//! skill against both texts → score → partition into matched/missing →
//! rank and decorate the missing side. Stateless per call: identical inputs
//! always produce identical output.

pub mod handlers;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod paths;
pub mod scoring;

use tracing::debug;

use crate::analysis::matcher::match_skill;
use crate::analysis::models::{AnalysisResult, AnalysisSummary, Priority, SkillOutcome};
use crate::analysis::normalize::normalize;
use crate::analysis::paths::suggested_path;
use crate::analysis::scoring::score_skill;
use crate::taxonomy::{Catalog, Role};

/// Priority tier of a missing skill. Lower bounds are inclusive: exactly
/// 0.8 is High, exactly 0.4 is Medium.
pub fn priority_for(importance: f64) -> Priority {
    if importance >= 0.8 {
        Priority::High
    } else if importance >= 0.4 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Runs the full gap analysis for one request against the shared catalog.
///
/// Only skills tagged with `target_role` are considered; a role no catalog
/// entry carries yields the empty result. A skill is matched iff the resume
/// shows evidence for it; everything else lands in `missing` with a priority
/// tier and a suggested learning path.
pub fn analyze(
    catalog: &Catalog,
    resume_text: &str,
    job_text: &str,
    target_role: Role,
) -> AnalysisResult {
    let resume = normalize(resume_text);
    let job = normalize(job_text);

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    // Per-skill work is data-independent; the iteration order only fixes the
    // deterministic output order.
    for entry in catalog.skills_for_role(target_role) {
        let resume_match = match_skill(entry, &resume);
        let job_match = match_skill(entry, &job);
        let scored = score_skill(entry, &resume_match, &job_match);
        debug!(
            skill = %scored.skill_id,
            resume_found = resume_match.found,
            job_found = job_match.found,
            importance = scored.importance,
            "skill scored"
        );

        if scored.confidence > 0.0 {
            matched.push(SkillOutcome::matched(
                entry,
                resume_match.found_as,
                scored.confidence,
            ));
        } else {
            missing.push(SkillOutcome::missing(
                entry,
                scored.importance,
                priority_for(scored.importance),
                suggested_path(entry),
            ));
        }
    }

    // Most urgent gaps first; the sort is stable, so ties keep catalog order.
    missing.sort_by(|a, b| {
        b.importance
            .unwrap_or(0.0)
            .total_cmp(&a.importance.unwrap_or(0.0))
    });

    let summary = AnalysisSummary {
        target_role,
        matched_count: matched.len(),
        missing_count: missing.len(),
    };

    AnalysisResult {
        matched,
        missing,
        summary,
    }
}
