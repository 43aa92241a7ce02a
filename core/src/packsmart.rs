// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use tokio::fs;

use crate::storage::{Session, SessionStore, TemplateStore};
use crate::{Category, Config, PackingItem, PackingList, TripParams, TripTemplate, generate};

/// PackSmart application core.
#[derive(Debug, Clone)]
pub struct PackSmart {
    config: Config,
    session: Session,
    sessions: SessionStore,
    templates: TemplateStore,
}

impl PackSmart {
    /// Creates a new instance with the given configuration.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let state_dir = config
            .state_dir
            .clone()
            .ok_or("No state directory configured")?;

        tracing::debug!(path = %state_dir.display(), "ensuring state directory exists");
        fs::create_dir_all(&state_dir)
            .await
            .map_err(|e| format!("Failed to create state directory: {e}"))?;

        let sessions = SessionStore::new(&state_dir);
        let templates = TemplateStore::new(&state_dir);
        let session = sessions.load().await;
        Ok(Self {
            config,
            session,
            sessions,
            templates,
        })
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The working list and the parameters it came from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Generate a new working list, replacing the current one.
    pub async fn generate(&mut self, params: TripParams) -> Result<&PackingList, Box<dyn Error>> {
        let items = generate(&params);
        if items.is_empty() {
            tracing::info!("no matching items for these trip parameters");
        }

        self.session = Session {
            params: Some(params),
            items,
        };
        self.flush().await?;
        Ok(&self.session.items)
    }

    /// Flip the checked state of an item, returning the new state.
    pub async fn toggle_item(&mut self, reference: &str) -> Result<bool, Box<dyn Error>> {
        self.edit_items(|list| list.toggle_checked(reference)).await
    }

    /// Flip the checked state of several items, returning the new states.
    ///
    /// Nothing changes unless every reference resolves.
    pub async fn toggle_items(&mut self, references: &[String]) -> Result<Vec<bool>, Box<dyn Error>> {
        self.edit_items(|list| {
            references
                .iter()
                .map(|reference| list.toggle_checked(reference))
                .collect()
        })
        .await
    }

    /// Set the checked state of several items at once.
    ///
    /// Nothing changes unless every reference resolves.
    pub async fn check_items(
        &mut self,
        references: &[String],
        checked: bool,
    ) -> Result<(), Box<dyn Error>> {
        self.edit_items(|list| {
            for reference in references {
                tracing::debug!(reference, checked, "updating item");
                list.set_checked(reference, checked)?;
            }
            Ok(())
        })
        .await
    }

    /// Add a user-defined item to the working list.
    pub async fn add_custom_item(
        &mut self,
        name: &str,
        category: Category,
    ) -> Result<PackingItem, Box<dyn Error>> {
        self.edit_items(|list| list.add_custom_item(name, category).cloned())
            .await
    }

    /// Remove a user-defined item from the working list.
    pub async fn delete_custom_item(&mut self, reference: &str) -> Result<PackingItem, Box<dyn Error>> {
        self.edit_items(|list| list.delete_custom_item(reference))
            .await
    }

    /// Remove several user-defined items, returning them in reference order.
    ///
    /// References are resolved against the list before anything is removed.
    /// Nothing changes unless every reference names a custom item.
    pub async fn delete_custom_items(
        &mut self,
        references: &[String],
    ) -> Result<Vec<PackingItem>, Box<dyn Error>> {
        self.edit_items(|list| {
            let ids = references
                .iter()
                .map(|reference| {
                    list.find(reference)
                        .map(|a| a.id.clone())
                        .ok_or_else(|| format!("Item not found: {reference}"))
                })
                .collect::<Result<Vec<_>, _>>()?;

            ids.iter().map(|id| list.delete_custom_item(id)).collect()
        })
        .await
    }

    /// Save the working list as a new template.
    #[tracing::instrument(skip(self))]
    pub async fn save_template(&self, name: &str) -> Result<TripTemplate, Box<dyn Error>> {
        let name = name.trim();
        if name.is_empty() {
            return Err("Please enter a template name".into());
        }

        let params = match &self.session.params {
            Some(params) if !self.session.items.is_empty() => params.clone(),
            _ => return Err("Generate a packing list first".into()),
        };

        let template = TripTemplate::new(name, params, self.session.items.clone());
        let mut templates = self.templates.load_templates().await;
        templates.push(template.clone());
        self.templates.save_templates(&templates).await?;
        Ok(template)
    }

    /// All saved templates, oldest first.
    pub async fn list_templates(&self) -> Vec<TripTemplate> {
        self.templates.load_templates().await
    }

    /// Replace the working list with a saved template, found by id or name.
    #[tracing::instrument(skip(self))]
    pub async fn load_template(&mut self, id_or_name: &str) -> Result<TripTemplate, Box<dyn Error>> {
        let template = self
            .templates
            .load_templates()
            .await
            .into_iter()
            .find(|a| a.matches(id_or_name))
            .ok_or_else(|| format!("Template not found: {id_or_name}"))?;

        self.session = Session {
            params: Some(template.params.clone()),
            items: template.items.clone(),
        };
        self.flush().await?;
        Ok(template)
    }

    /// Delete a saved template by id, returning whether it existed.
    pub async fn delete_template(&self, id: &str) -> Result<bool, Box<dyn Error>> {
        self.templates.delete_template(id).await
    }

    /// Close the instance, saving the working list.
    pub async fn close(self) -> Result<(), Box<dyn Error>> {
        self.flush().await
    }

    /// Apply an edit to a copy of the working list, keeping it only on success.
    async fn edit_items<T>(
        &mut self,
        edit: impl FnOnce(&mut PackingList) -> Result<T, Box<dyn Error>>,
    ) -> Result<T, Box<dyn Error>> {
        let mut items = self.session.items.clone();
        let value = edit(&mut items)?;
        self.session.items = items;
        self.flush().await?;
        Ok(value)
    }

    async fn flush(&self) -> Result<(), Box<dyn Error>> {
        self.sessions.save(&self.session).await
    }
}
