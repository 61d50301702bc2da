//! Taxonomy Store — the fixed skill catalog, loaded once at startup.
//!
//! The catalog is read-only for the lifetime of the process; `AppState`
//! shares it as an `Arc<Catalog>` across requests. Any malformed source,
//! unknown vocabulary, or duplicate skill id is a load-time error, so the
//! service never serves with a partial catalog.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target-role vocabulary. Closed set: request deserialization rejects
/// anything else, as does taxonomy loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Backend,
    Fullstack,
    CloudDevops,
}

/// Catalog-assigned base weight of a skill, before any job-text override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Core,
    Supplementary,
}

/// One immutable catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub canonical_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
    pub roles: Vec<Role>,
    pub level: SkillLevel,
}

impl SkillEntry {
    /// Candidate phrases in catalog order: canonical name first, then aliases.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
    }
}

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("taxonomy is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate skill id '{0}' in taxonomy")]
    DuplicateSkillId(String),
}

/// On-disk shape: `{"skills": [...]}`.
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    skills: Vec<SkillEntry>,
}

/// The loaded skill catalog. Construction validates id uniqueness; no
/// mutation API is exposed.
#[derive(Debug)]
pub struct Catalog {
    skills: Vec<SkillEntry>,
}

impl Catalog {
    pub fn from_entries(skills: Vec<SkillEntry>) -> Result<Self, TaxonomyError> {
        let mut seen = HashSet::new();
        for entry in &skills {
            if !seen.insert(entry.id.clone()) {
                return Err(TaxonomyError::DuplicateSkillId(entry.id.clone()));
            }
        }
        Ok(Catalog { skills })
    }

    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = serde_json::from_str(json)?;
        Self::from_entries(file.skills)
    }

    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn all_skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    /// Skills tagged with `role`, in catalog order. An unknown-to-the-catalog
    /// role simply yields nothing.
    pub fn skills_for_role(&self, role: Role) -> impl Iterator<Item = &SkillEntry> {
        self.skills.iter().filter(move |s| s.roles.contains(&role))
    }
}
