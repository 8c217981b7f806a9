//! Active working session.
//!
//! A session pins the project, asset and task an artist is working in.
//! It is seeded from `SLATE_*` environment variables at host install time
//! and updated when the artist switches task.
use crate::db::{DocumentStore, SearchFilter};
use crate::error::{Error, Result, Session as SessionError};
use crate::project::{Asset, Document, DocumentKind};
use crate::template::{PathTemplate, TemplateData};
use std::env;

/// Environment variables a session is seeded from.
pub const ENV_PROJECT: &str = "SLATE_PROJECT";
pub const ENV_ASSET: &str = "SLATE_ASSET";
pub const ENV_TASK: &str = "SLATE_TASK";
pub const ENV_APP: &str = "SLATE_APP";
pub const ENV_SILO: &str = "SLATE_SILO";
pub const ENV_ROOT: &str = "SLATE_ROOT";
pub const ENV_WORKDIR: &str = "SLATE_WORKDIR";
pub const ENV_USER: &str = "SLATE_USER";

// ***************
// *** Session ***
// ***************

/// Key-value state of the active working context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub project: String,

    /// Filesystem root all project paths are anchored under.
    pub root: Option<String>,

    pub asset: Option<String>,
    pub task: Option<String>,
    pub app: Option<String>,
    pub silo: Option<String>,
    pub hierarchy: Option<String>,
    pub workdir: Option<String>,
    pub user: Option<String>,
}

impl Session {
    pub fn new(project: impl Into<String>) -> Session {
        Session {
            project: project.into(),
            ..Session::default()
        }
    }

    /// Seeds a session from the environment.
    ///
    /// # Errors
    /// + If `SLATE_PROJECT` is not set.
    pub fn from_env() -> Result<Session> {
        let Ok(project) = env::var(ENV_PROJECT) else {
            return Err(Error::Session(SessionError::MissingKey(
                ENV_PROJECT.to_string(),
            )));
        };

        Ok(Session {
            project,
            root: env::var(ENV_ROOT).ok(),
            asset: env::var(ENV_ASSET).ok(),
            task: env::var(ENV_TASK).ok(),
            app: env::var(ENV_APP).ok(),
            silo: env::var(ENV_SILO).ok(),
            hierarchy: None,
            workdir: env::var(ENV_WORKDIR).ok(),
            user: env::var(ENV_USER).ok(),
        })
    }

    /// Computes the changes required for a task, asset or app switch.
    ///
    /// Does *not* update the session; apply the returned changes with
    /// [`Session::apply`]. The work directory is recomputed from the
    /// project's work template against the changed session.
    pub fn compute_changes(
        &self,
        store: &dyn DocumentStore,
        root: &str,
        task: Option<&str>,
        asset: Option<&str>,
        app: Option<&str>,
    ) -> Result<SessionChanges> {
        let mut changes = SessionChanges::default();

        // if no changes, return directly
        if task.is_none() && asset.is_none() && app.is_none() {
            return Ok(changes);
        }

        let mut asset_document = None;
        if let Some(asset_name) = asset {
            let mut filter = SearchFilter::new();
            filter.kind = Some(DocumentKind::Asset);
            filter.name = Some(asset_name.to_string());

            let Some(Document::Asset(found)) = store.find_one(&filter, None) else {
                return Err(Error::Session(SessionError::UnknownAsset(
                    asset_name.to_string(),
                )));
            };
            asset_document = Some(found);
        }

        changes.task = changed(task, self.task.as_deref());
        changes.asset = changed(asset, self.asset.as_deref());
        changes.app = changed(app, self.app.as_deref());
        if changes.is_empty() {
            return Ok(changes);
        }

        // silo and hierarchy follow the asset
        if let (Some(_), Some(asset_document)) = (&changes.asset, &asset_document) {
            changes.silo = Some(asset_document.silo.clone());
            changes.hierarchy = Some(hierarchy_of(asset_document));
        }

        let mut filter = SearchFilter::new();
        filter.kind = Some(DocumentKind::Project);
        filter.name = Some(self.project.clone());
        let Some(Document::Project(project)) = store.find_one(&filter, None) else {
            return Err(Error::Session(SessionError::MissingKey(
                ENV_PROJECT.to_string(),
            )));
        };

        let mut switched = self.clone();
        switched.apply(&changes);
        let template = PathTemplate::parse(project.config.template.work)?;
        changes.workdir = Some(template.format(&switched.template_data(root))?);

        Ok(changes)
    }

    /// Merges changes into the session.
    pub fn apply(&mut self, changes: &SessionChanges) {
        if let Some(asset) = &changes.asset {
            self.asset = Some(asset.clone());
        }
        if let Some(task) = &changes.task {
            self.task = Some(task.clone());
        }
        if let Some(app) = &changes.app {
            self.app = Some(app.clone());
        }
        if let Some(silo) = &changes.silo {
            self.silo = silo.clone();
        }
        if let Some(hierarchy) = &changes.hierarchy {
            self.hierarchy = Some(hierarchy.clone());
        }
        if let Some(workdir) = &changes.workdir {
            self.workdir = Some(workdir.clone());
        }
    }

    /// Template values of the session.
    /// Unset optional keys resolve to the empty string.
    pub fn template_data(&self, root: &str) -> TemplateData {
        let mut data = TemplateData::new();
        data.insert(String::from("root"), root.to_string());
        data.insert(String::from("project"), self.project.clone());
        data.insert(String::from("asset"), or_empty(&self.asset));
        data.insert(String::from("task"), or_empty(&self.task));
        data.insert(String::from("app"), or_empty(&self.app));
        data.insert(String::from("silo"), or_empty(&self.silo));
        data.insert(String::from("hierarchy"), or_empty(&self.hierarchy));
        data.insert(String::from("user"), self.user());
        data
    }

    /// Session user, falling back to the process owner.
    pub fn user(&self) -> String {
        if let Some(user) = &self.user {
            return user.clone();
        }

        env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| String::from("unknown"))
    }
}

// ***********************
// *** Session Changes ***
// ***********************

/// Delta produced by [`Session::compute_changes`].
/// `None` fields are unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionChanges {
    pub asset: Option<String>,
    pub task: Option<String>,
    pub app: Option<String>,
    pub silo: Option<Option<String>>,
    pub hierarchy: Option<String>,
    pub workdir: Option<String>,
}

impl SessionChanges {
    pub fn is_empty(&self) -> bool {
        self.asset.is_none() && self.task.is_none() && self.app.is_none()
    }
}

fn changed(new: Option<&str>, current: Option<&str>) -> Option<String> {
    match new {
        Some(value) if Some(value) != current => Some(value.to_string()),
        _ => None,
    }
}

fn hierarchy_of(asset: &Asset) -> String {
    asset
        .parents()
        .join(std::path::MAIN_SEPARATOR.to_string().as_str())
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
#[path = "./session_test.rs"]
mod session_test;
