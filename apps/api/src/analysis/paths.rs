//! Path Suggester — static learning-path templates keyed by catalog category.

use crate::taxonomy::SkillEntry;

const PATH_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "Cloud (AWS)",
        &[
            "Cloud basics",
            "IAM permissions",
            "Networking basics (VPC)",
            "Deploy a small API",
            "Monitoring + cost basics",
        ],
    ),
    (
        "Cloud (Azure)",
        &[
            "Cloud basics",
            "Identity (Entra ID)",
            "Networking basics (VNet)",
            "Deploy a Function/App",
            "Monitoring + cost basics",
        ],
    ),
    (
        "DevOps Fundamentals",
        &[
            "Git workflow",
            "Containers",
            "CI pipeline",
            "CD pipeline",
            "Observability basics",
        ],
    ),
    (
        "Auth & Security",
        &[
            "Threat basics",
            "OAuth/JWT",
            "Secure storage",
            "OWASP checks",
            "Audit logging",
        ],
    ),
    (
        "Databases",
        &[
            "Schema design",
            "Indexes",
            "Transactions",
            "Query tuning",
            "Backup/restore basics",
        ],
    ),
    (
        "APIs & Integration",
        &[
            "REST design",
            "Validation",
            "Auth",
            "Docs (OpenAPI)",
            "Performance + caching",
        ],
    ),
    (
        "Frontend Concepts",
        &[
            "Core fundamentals",
            "Component patterns",
            "State management",
            "Testing",
            "Performance + a11y",
        ],
    ),
    (
        "Architecture & Patterns",
        &[
            "Baseline design",
            "Reliability patterns",
            "Scaling",
            "Tradeoffs",
            "Hands-on refactor",
        ],
    ),
];

const FALLBACK_PATH: &[&str] = &[
    "Learn fundamentals",
    "Build a small project using it",
    "Add a portfolio example",
];

/// Ordered learning steps for a skill. Categories without a roadmap get the
/// generic fallback, so the overall analysis never fails here.
pub fn suggested_path(entry: &SkillEntry) -> Vec<String> {
    let steps = PATH_TEMPLATES
        .iter()
        .find(|(category, _)| *category == entry.category)
        .map(|(_, steps)| *steps)
        .unwrap_or(FALLBACK_PATH);
    steps.iter().map(|s| s.to_string()).collect()
}
