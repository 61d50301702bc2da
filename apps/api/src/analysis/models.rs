//! Wire models for analysis responses.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{Role, SkillEntry};

/// Urgency tier of a missing skill, derived from its importance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Externally visible per-skill record. Matched skills carry `found_as` and
/// `confidence`; missing skills carry `importance`, `priority` and
/// `suggested_path`. Absent fields are omitted from the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillOutcome {
    pub skill_id: String,
    pub skill: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_as: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_path: Option<Vec<String>>,
}

impl SkillOutcome {
    pub fn matched(entry: &SkillEntry, found_as: Vec<String>, confidence: f64) -> Self {
        SkillOutcome {
            skill_id: entry.id.clone(),
            skill: entry.canonical_name.clone(),
            category: entry.category.clone(),
            found_as: Some(found_as),
            confidence: Some(confidence),
            importance: None,
            priority: None,
            suggested_path: None,
        }
    }

    pub fn missing(
        entry: &SkillEntry,
        importance: f64,
        priority: Priority,
        suggested_path: Vec<String>,
    ) -> Self {
        SkillOutcome {
            skill_id: entry.id.clone(),
            skill: entry.canonical_name.clone(),
            category: entry.category.clone(),
            found_as: None,
            confidence: None,
            importance: Some(importance),
            priority: Some(priority),
            suggested_path: Some(suggested_path),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub target_role: Role,
    pub matched_count: usize,
    pub missing_count: usize,
}

/// Full report for one analysis request. No entity outlives the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub matched: Vec<SkillOutcome>,
    pub missing: Vec<SkillOutcome>,
    pub summary: AnalysisSummary,
}
