//! Content Catalog - static, load-time-fixed page content
//!
//! The catalog is built once (from the built-in content or a JSON file),
//! validated, and then shared read-only (`Rc<ContentCatalog>`) by every
//! controller. Nothing mutates it after mount, which is what lets the
//! project detail controller treat ids as stable references.
//!
//! # Example
//!
//! ```ignore
//! use folio::catalog::ContentCatalog;
//!
//! let catalog = ContentCatalog::builtin();
//! assert!(catalog.has_section("projects"));
//! let first = catalog.project(1).unwrap();
//! println!("{}", first.title);
//! ```

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

// =============================================================================
// TYPES
// =============================================================================

/// A named, scrollable region of the page with one nav entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectDetails {
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub architecture: Option<String>,
}

/// A portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Unique tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Opaque asset reference, never loaded by folio.
    #[serde(default)]
    pub image: String,
    pub source_url: String,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub details: Option<ProjectDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
    /// Optional proficiency (0..=100) keyed by skill name; drawn as a bar.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub levels: BTreeMap<String, u8>,
}

/// Highest proficiency a skill can declare.
pub const MAX_SKILL_LEVEL: u8 = 100;

impl SkillCategory {
    /// Skills with a declared level, in listing order.
    pub fn leveled(&self) -> impl Iterator<Item = (&str, u8)> {
        self.skills
            .iter()
            .filter_map(|skill| self.levels.get(skill).map(|level| (skill.as_str(), *level)))
    }

    /// Skills without a level, in listing order.
    pub fn unleveled(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .filter(|skill| !self.levels.contains_key(*skill))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub description: String,
}

/// Outbound contact links. All values are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    /// Strings cycled by the typing animator.
    pub roles: Vec<String>,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    pub profile: Profile,
    /// Page sections in scroll order.
    pub sections: Vec<Section>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub contact: ContactInfo,
}

// =============================================================================
// LOADING
// =============================================================================

impl ContentCatalog {
    /// The content shipped with the binary.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: ContentCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the invariants the controllers rely on.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(FolioError::InvalidCatalog(
                "at least one section is required".into(),
            ));
        }

        let mut ids = HashSet::new();
        for section in &self.sections {
            if section.id.trim().is_empty() {
                return Err(FolioError::InvalidCatalog("section id cannot be empty".into()));
            }
            if !ids.insert(section.id.as_str()) {
                return Err(FolioError::InvalidCatalog(format!(
                    "duplicate section id `{}`",
                    section.id
                )));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(FolioError::InvalidCatalog(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            let mut tags = HashSet::new();
            for tag in &project.tags {
                if !tags.insert(tag.as_str()) {
                    return Err(FolioError::InvalidCatalog(format!(
                        "project {} repeats tag `{}`",
                        project.id, tag
                    )));
                }
            }
        }

        for category in &self.skills {
            for (skill, level) in &category.levels {
                if !category.skills.contains(skill) {
                    return Err(FolioError::InvalidCatalog(format!(
                        "skill category `{}` has a level for unlisted skill `{}`",
                        category.title, skill
                    )));
                }
                if *level > MAX_SKILL_LEVEL {
                    return Err(FolioError::InvalidCatalog(format!(
                        "skill `{}` level {} exceeds {}",
                        skill, level, MAX_SKILL_LEVEL
                    )));
                }
            }
        }

        if self.profile.roles.is_empty() {
            return Err(FolioError::InvalidCatalog(
                "profile needs at least one role".into(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

impl ContentCatalog {
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// First declared section; the initial active section.
    pub fn first_section_id(&self) -> &str {
        self.sections.first().map(|s| s.id.as_str()).unwrap_or_default()
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn minimal_json() -> &'static str {
        r#"{
            "profile": {"name": "Ada", "headline": "Engineer", "roles": ["Engineer"]},
            "sections": [{"id": "home", "label": "Home"}, {"id": "contact", "label": "Contact"}],
            "projects": [{"id": 7, "title": "Engine", "description": "d", "tags": ["Rust"], "source_url": "https://example.com"}],
            "contact": {"email": "ada@example.com"}
        }"#
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = ContentCatalog::builtin();
        catalog.validate().unwrap();

        let ids: Vec<&str> = catalog.section_ids().collect();
        assert_eq!(ids, vec!["home", "about", "skills", "projects", "contact"]);
        assert_eq!(catalog.first_section_id(), "home");
        assert_eq!(catalog.projects.len(), 3);
        assert!(!catalog.profile.roles.is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = ContentCatalog::builtin();
        assert!(catalog.has_section("skills"));
        assert!(!catalog.has_section("nonexistent"));
        assert_eq!(catalog.section("skills").unwrap().label, "Skills");
        assert_eq!(catalog.section_index("projects"), Some(3));
        assert!(catalog.project(2).is_some());
        assert!(catalog.project(99).is_none());
    }

    #[test]
    fn test_from_json_minimal() {
        let catalog = ContentCatalog::from_json_str(minimal_json()).unwrap();
        assert_eq!(catalog.sections.len(), 2);
        assert_eq!(catalog.project(7).unwrap().details, None);
        assert!(catalog.skills.is_empty());
        assert_eq!(catalog.contact.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn test_rejects_duplicate_section() {
        let json = minimal_json().replace(r#""id": "contact""#, r#""id": "home""#);
        let err = ContentCatalog::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate section id `home`"));
    }

    #[test]
    fn test_skill_levels() {
        let json = minimal_json().replace(
            r#""contact": {"#,
            r#""skills": [{"title": "Core", "skills": ["Rust", "SQL", "Go"], "levels": {"Go": 40, "Rust": 90}}],
            "contact": {"#,
        );
        let catalog = ContentCatalog::from_json_str(&json).unwrap();
        let core = &catalog.skills[0];
        assert_eq!(core.leveled().collect::<Vec<_>>(), vec![("Rust", 90), ("Go", 40)]);
        assert_eq!(core.unleveled().collect::<Vec<_>>(), vec!["SQL"]);

        let unlisted = json.replace(r#""Go": 40"#, r#""Zig": 40"#);
        let err = ContentCatalog::from_json_str(&unlisted).unwrap_err();
        assert!(err.to_string().contains("unlisted skill `Zig`"));

        let too_high = json.replace(r#""Go": 40"#, r#""Go": 140"#);
        let err = ContentCatalog::from_json_str(&too_high).unwrap_err();
        assert!(err.to_string().contains("exceeds 100"));
    }

    #[test]
    fn test_rejects_duplicate_tag() {
        let json = minimal_json().replace(r#"["Rust"]"#, r#"["Rust", "Rust"]"#);
        let err = ContentCatalog::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("repeats tag"));
    }

    #[test]
    fn test_rejects_empty_sections_and_roles() {
        let mut catalog = ContentCatalog::builtin();
        catalog.sections.clear();
        assert!(catalog.validate().is_err());

        let mut catalog = ContentCatalog::builtin();
        catalog.profile.roles.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_from_path_round_trip() {
        let builtin = ContentCatalog::builtin();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&builtin).unwrap().as_bytes())
            .unwrap();

        let loaded = ContentCatalog::from_path(file.path()).unwrap();
        assert_eq!(loaded, builtin);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ContentCatalog::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
