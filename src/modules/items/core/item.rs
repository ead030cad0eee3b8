use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields to overwrite on an existing item.
///
/// An empty string is treated the same as an absent field, so a patch can
/// never clear `name` or `description`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: String, name: String, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: ItemPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            self.description = description;
        }
        self.touch(now);
    }

    // updated_at never moves before created_at, even if the clock steps back.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}
