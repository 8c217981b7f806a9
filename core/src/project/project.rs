//! Project and project configuration.
use crate::types::{DataMap, DocumentId};
use serde::{Deserialize, Serialize};

// ***************
// *** Project ***
// ***************

/// Root document of a project hierarchy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: DocumentId,
    pub name: String,
    pub config: ProjectConfig,
    pub data: DataMap,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Project {
        Project {
            id: DocumentId::new(),
            name: name.into(),
            config: ProjectConfig::default(),
            data: DataMap::new(),
        }
    }
}

// **********************
// *** Project Config ***
// **********************

/// Studio configuration of a project.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ProjectConfig {
    pub template: Templates,
    pub tasks: Vec<String>,
    pub apps: Vec<String>,
    pub families: Vec<FamilyConfig>,
    pub groups: Vec<String>,
}

/// Path templates of a project.
///
/// Placeholders are resolved against the active session and the publish
/// hierarchy, see [`PathTemplate`](crate::template::PathTemplate).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Templates {
    pub work: String,
    pub publish: String,
}

impl Default for Templates {
    fn default() -> Templates {
        Templates {
            work: String::from("{root}/{project}/{silo}/{asset}/work/{task}/{app}"),
            publish: String::from(
                "{root}/{project}/{silo}/{asset}/publish/\
                 {subset}/v{version:0>3}/{subset}.{representation}",
            ),
        }
    }
}

/// A family recognized by a project.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FamilyConfig {
    pub name: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub hide_filter: bool,
}

impl FamilyConfig {
    pub fn new(name: impl Into<String>) -> FamilyConfig {
        FamilyConfig {
            name: name.into(),
            label: None,
            icon: None,
            hide_filter: false,
        }
    }
}

#[cfg(test)]
#[path = "./project_test.rs"]
mod project_test;
