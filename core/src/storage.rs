// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;

use crate::{PackingList, TripParams, TripTemplate};

const TEMPLATES_FILE: &str = "templates.json";
const SESSION_FILE: &str = "session.json";

/// Saved templates, stored as a single JSON array.
///
/// Every write replaces the whole collection. There is no locking, so the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Store templates in the given state directory.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(TEMPLATES_FILE),
        }
    }

    /// The file backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all templates.
    ///
    /// A missing, unreadable or corrupt file yields an empty collection.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load_templates(&self) -> Vec<TripTemplate> {
        match read_json::<Vec<TripTemplate>>(&self.path).await {
            Ok(Some(templates)) => {
                tracing::debug!(count = templates.len(), "loaded templates");
                templates
            }
            Ok(None) => {
                tracing::debug!("no templates found");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(err = %err, "failed to load templates, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored collection with the given templates.
    #[tracing::instrument(skip(self, templates), fields(path = %self.path.display(), count = templates.len()))]
    pub async fn save_templates(&self, templates: &[TripTemplate]) -> Result<(), Box<dyn Error>> {
        write_json(&self.path, templates)
            .await
            .map_err(|e| format!("Failed to save templates: {e}"))?;
        tracing::debug!("templates saved");
        Ok(())
    }

    /// Remove the template with the given id and save the rest.
    ///
    /// Returns whether a template was removed. Deleting an unknown id rewrites
    /// the collection unchanged.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn delete_template(&self, id: &str) -> Result<bool, Box<dyn Error>> {
        let mut templates = self.load_templates().await;
        let before = templates.len();
        templates.retain(|a| a.id != id);
        let removed = templates.len() < before;
        if !removed {
            tracing::debug!(id, "template not found");
        }

        self.save_templates(&templates).await?;
        Ok(removed)
    }
}

/// The working list and the parameters it was generated from.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Parameters of the last generation or loaded template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<TripParams>,

    /// The current packing list.
    #[serde(default)]
    pub items: PackingList,
}

/// Persists the [`Session`] between runs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store the session in the given state directory.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(SESSION_FILE),
        }
    }

    /// Load the session, or an empty one if there is none or it cannot be read.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Session {
        match read_json::<Session>(&self.path).await {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(err) => {
                tracing::warn!(err = %err, "failed to load session, starting empty");
                Session::default()
            }
        }
    }

    /// Write the session to disk.
    #[tracing::instrument(skip(self, session), fields(path = %self.path.display()))]
    pub async fn save(&self, session: &Session) -> Result<(), Box<dyn Error>> {
        write_json(&self.path, session)
            .await
            .map_err(|e| format!("Failed to save session: {e}").into())
    }
}

/// Read and decode a JSON file, `None` if it does not exist.
async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, Box<dyn Error>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content).await?;
    Ok(())
}
