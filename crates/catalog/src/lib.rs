pub mod assets;
pub mod contact;
pub mod content;

use serde::{Deserialize, Serialize};

pub use content::{
    Certificate, ContactInfo, Education, Internship, Project, Skill, SkillCategory,
};

/// Section names that own a list of selectable items.
pub const ITEM_SECTIONS: [&str; 4] = ["education", "skills", "projects", "certificates"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownSection(String),
    UnknownItem { section: String, id: String },
    Serialize(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownSection(s) => write!(f, "unknown section: {s}"),
            CatalogError::UnknownItem { section, id } => {
                write!(f, "no item {id:?} in section {section}")
            }
            CatalogError::Serialize(msg) => write!(f, "catalog serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// All portfolio content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub internship: Internship,
    pub certificates: Vec<Certificate>,
    pub contact: ContactInfo,
}

impl Portfolio {
    pub fn builtin() -> Self {
        Self {
            education: content::education(),
            skills: content::skills(),
            projects: content::projects(),
            internship: content::internship(),
            certificates: content::certificates(),
            contact: content::contact(),
        }
    }

    /// Ids of the selectable items in `section`, in display order.
    pub fn item_ids(&self, section: &str) -> Result<Vec<&str>, CatalogError> {
        let ids = match section {
            "education" => self.education.iter().map(|e| e.id.as_str()).collect(),
            "skills" => self.skills.iter().map(|s| s.id.as_str()).collect(),
            "projects" => self.projects.iter().map(|p| p.id.as_str()).collect(),
            "certificates" => self.certificates.iter().map(|c| c.id.as_str()).collect(),
            other => return Err(CatalogError::UnknownSection(other.to_string())),
        };
        Ok(ids)
    }

    /// Checks that `id` names an item of `section`. Selection state itself
    /// accepts any id; callers use this before building a detail view.
    pub fn require_item(&self, section: &str, id: &str) -> Result<(), CatalogError> {
        if self.item_ids(section)?.contains(&id) {
            return Ok(());
        }
        Err(CatalogError::UnknownItem {
            section: section.to_string(),
            id: id.to_string(),
        })
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn certificate(&self, id: &str) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    pub fn section_json(&self, section: &str) -> Result<serde_json::Value, CatalogError> {
        let value = match section {
            "education" => serde_json::to_value(&self.education),
            "skills" => serde_json::to_value(&self.skills),
            "projects" => serde_json::to_value(&self.projects),
            "internship" => serde_json::to_value(&self.internship),
            "certificates" => serde_json::to_value(&self.certificates),
            "contact" => serde_json::to_value(&self.contact),
            other => return Err(CatalogError::UnknownSection(other.to_string())),
        };
        value.map_err(|e| CatalogError::Serialize(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        serde_json::to_string_pretty(self).map_err(|e| CatalogError::Serialize(e.to_string()))
    }

    /// blake3 of the canonical (compact) JSON encoding, hex encoded.
    pub fn content_hash(&self) -> Result<String, CatalogError> {
        let bytes = serde_json::to_vec(self).map_err(|e| CatalogError::Serialize(e.to_string()))?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
