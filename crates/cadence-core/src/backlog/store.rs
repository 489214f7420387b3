//! In-memory backlog collection.

use log::debug;
use serde::{Deserialize, Serialize};

use super::panels::BacklogPanels;
use crate::{
    classify::classify,
    error::{CadenceError, Result},
    models::{BacklogItem, Panel, UpdateItemRequest, WorkPackageType},
};

/// Ordered collection of backlog items addressed by id.
///
/// Items are never removed here; deletion belongs to the surrounding UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct BacklogStore {
    items: Vec<BacklogItem>,
}

impl BacklogStore {
    pub fn new(items: Vec<BacklogItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[BacklogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&BacklogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut BacklogItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CadenceError::item_not_found(id))
    }

    /// Append a new item.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::DuplicateId` if an item with the same id exists,
    /// or `CadenceError::InvalidInput` for a blank id or title.
    pub fn add(&mut self, item: BacklogItem) -> Result<&BacklogItem> {
        if item.id.trim().is_empty() {
            return Err(CadenceError::invalid_input("id").with_reason("id cannot be empty"));
        }
        if item.title.trim().is_empty() {
            return Err(CadenceError::invalid_input("title").with_reason("title cannot be empty"));
        }
        if self.get(&item.id).is_some() {
            return Err(CadenceError::DuplicateId {
                kind: "backlog item",
                id: item.id,
            });
        }
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Replace the item with the same id, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no such item exists.
    pub fn replace(&mut self, item: BacklogItem) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Apply direct field edits to an item.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::ItemNotFound` for an unknown id and
    /// `CadenceError::InvalidInput` when the new title is blank.
    pub fn update(&mut self, id: &str, request: UpdateItemRequest) -> Result<&BacklogItem> {
        if let Some(title) = &request.title {
            if title.trim().is_empty() {
                return Err(
                    CadenceError::invalid_input("title").with_reason("title cannot be empty")
                );
            }
        }
        let item = self.get_mut(id)?;
        if let Some(title) = request.title {
            item.title = title;
        }
        if let Some(description) = request.description {
            item.description = description;
        }
        if let Some(priority) = request.priority {
            item.priority = priority;
        }
        if let Some(impact) = request.impact {
            item.impact = impact;
        }
        if let Some(effort) = request.effort {
            item.effort = effort;
        }
        if let Some(status) = request.status {
            item.status = status;
        }
        Ok(&*item)
    }

    /// Set or clear an item's work package type.
    ///
    /// An item turned into an epic loses its own epic link.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::ItemNotFound` for an unknown id.
    pub fn set_work_package_type(
        &mut self,
        id: &str,
        kind: Option<WorkPackageType>,
    ) -> Result<&BacklogItem> {
        let item = self.get_mut(id)?;
        item.work_package_type = kind;
        if kind == Some(WorkPackageType::Epic) {
            item.epic_id = None;
        }
        Ok(&*item)
    }

    /// Link an item to a parent epic, or unlink it with `None`.
    ///
    /// The link is weak: it is stored as given and only resolved on read,
    /// see [`parent_epic`](Self::parent_epic).
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::ItemNotFound` for an unknown item id and
    /// `CadenceError::InvalidInput` when linking an item to itself.
    pub fn set_epic(&mut self, id: &str, epic_id: Option<String>) -> Result<&BacklogItem> {
        if epic_id.as_deref() == Some(id) {
            return Err(CadenceError::invalid_input("epicId")
                .with_reason("an item cannot be its own epic"));
        }
        let item = self.get_mut(id)?;
        item.epic_id = epic_id;
        Ok(&*item)
    }

    /// Resolve an item's parent epic.
    ///
    /// Dangling links and links to items that are not epics resolve to
    /// `None`.
    pub fn parent_epic(&self, id: &str) -> Option<&BacklogItem> {
        let epic_id = self.get(id)?.epic_id.as_deref()?;
        self.get(epic_id).filter(|parent| parent.is_epic())
    }

    pub fn epics(&self) -> impl Iterator<Item = &BacklogItem> {
        self.items.iter().filter(|item| item.is_epic())
    }

    /// Classify an item for the container it was dropped on and store the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::ItemNotFound` for an unknown id.
    pub fn apply_drop(&mut self, id: &str, container_id: &str) -> Result<&BacklogItem> {
        let item = self.get_mut(id)?;
        let updated = classify(item, container_id);
        debug!(
            "Dropped {} on {}: tags {:?} -> {:?}",
            id, container_id, item.tags, updated.tags
        );
        *item = updated;
        Ok(&*item)
    }

    /// Current panel split of the collection.
    pub fn panels(&self) -> BacklogPanels<'_> {
        BacklogPanels::of(&self.items)
    }

    /// Items in one panel, in collection order.
    pub fn panel(&self, panel: Panel) -> Vec<&BacklogItem> {
        self.items
            .iter()
            .filter(|item| super::panels::in_panel(item, panel))
            .collect()
    }
}

impl From<Vec<BacklogItem>> for BacklogStore {
    fn from(items: Vec<BacklogItem>) -> Self {
        Self::new(items)
    }
}
