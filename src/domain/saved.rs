// src/domain/saved.rs

use crate::api::{ApiError, SavedStore};
use crate::domain::listing::{Listing, ListingId, ListingType};
use chrono::NaiveDateTime;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Denormalized listing fields posted to the store when saving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedSnapshot {
    pub listing_id: ListingId,
    pub name: String,
    pub price: i64,
    pub area: String,
    pub city: String,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
}

impl SavedSnapshot {
    /// Fails when the display price carries no amount to store.
    pub fn from_listing(listing: &Listing, city: &str) -> Result<Self, ToggleError> {
        let price = listing
            .rent()
            .ok_or_else(|| ToggleError::Unpriced(listing.id.clone()))?;

        Ok(Self {
            listing_id: listing.id.clone(),
            name: listing.name.clone(),
            price,
            area: listing.area.clone(),
            city: city.to_string(),
            image: listing.image.clone(),
            kind: listing.kind,
        })
    }
}

/// What the store echoes back after a create. Only the identity fields matter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavedRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub listing_id: Option<ListingId>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

/// A bookmarked listing as held in the local mirror.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavedEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub listing_id: ListingId,
    pub name: String,
    pub price: i64,
    pub area: String,
    pub city: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

impl SavedEntry {
    /// Entry built from our snapshot, keyed by the id the store confirmed.
    pub fn confirmed(snapshot: SavedSnapshot, record: SavedRecord) -> Self {
        Self {
            id: record.id,
            listing_id: record.listing_id.unwrap_or(snapshot.listing_id),
            name: snapshot.name,
            price: snapshot.price,
            area: snapshot.area,
            city: snapshot.city,
            image: snapshot.image,
            kind: snapshot.kind,
            timestamp: record.timestamp,
        }
    }
}

/// Local copy of the remote saved-properties list.
/// Holds at most one entry per listing id.
#[derive(Debug, Default)]
pub struct SavedMirror {
    entries: Vec<SavedEntry>,
}

impl SavedMirror {
    /// Replace the mirror with the store's list; the first entry per id wins.
    pub fn replace_all(&mut self, entries: Vec<SavedEntry>) {
        self.entries.clear();
        for entry in entries {
            if !self.is_saved(&entry.listing_id) {
                self.entries.push(entry);
            }
        }
    }

    pub fn is_saved(&self, id: &ListingId) -> bool {
        self.entries.iter().any(|e| e.listing_id == *id)
    }

    #[cfg(test)]
    pub fn get(&self, id: &ListingId) -> Option<&SavedEntry> {
        self.entries.iter().find(|e| e.listing_id == *id)
    }

    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: SavedEntry) {
        match self
            .entries
            .iter_mut()
            .find(|e| e.listing_id == entry.listing_id)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    fn remove(&mut self, id: &ListingId) -> Option<SavedEntry> {
        let idx = self.entries.iter().position(|e| e.listing_id == *id)?;
        Some(self.entries.remove(idx))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Saved,
    Unsaved,
}

impl SaveState {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveState::Saved)
    }
}

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("no listing details available to save {0}")]
    MissingSnapshot(ListingId),

    #[error("listing {0} has no price to save")]
    Unpriced(ListingId),

    #[error("Failed to save {id}: {source}")]
    SaveFailed { id: ListingId, source: ApiError },

    /// The entry was already dropped from the mirror and is not restored.
    #[error("Failed to unsave {id}: {source}")]
    RemoveFailed { id: ListingId, source: ApiError },
}

impl ToggleError {
    /// State the mirror is left in for this listing.
    pub fn state(&self) -> SaveState {
        SaveState::Unsaved
    }
}

/// Flip the saved state of `id` against the remote store.
///
/// Adds only land in the mirror after the store confirms them. Removes are
/// applied locally before the delete is sent and are not rolled back.
/// The mirror lock is never held across the network call.
pub fn toggle<S>(
    mirror: &Mutex<SavedMirror>,
    store: &S,
    id: &ListingId,
    snapshot: Option<SavedSnapshot>,
) -> Result<SaveState, ToggleError>
where
    S: SavedStore + ?Sized,
{
    let removed = lock(mirror).remove(id);

    if removed.is_some() {
        return match store.delete_saved(id) {
            Ok(()) => {
                info!("unsaved listing {id}");
                Ok(SaveState::Unsaved)
            }
            Err(source) => {
                warn!("unsave of {id} failed, mirror already updated: {source}");
                Err(ToggleError::RemoveFailed {
                    id: id.clone(),
                    source,
                })
            }
        };
    }

    let snapshot = snapshot.ok_or_else(|| ToggleError::MissingSnapshot(id.clone()))?;

    match store.create_saved(&snapshot) {
        Ok(record) => {
            let entry = SavedEntry::confirmed(snapshot, record);
            info!("saved listing {}", entry.listing_id);
            lock(mirror).insert(entry);
            Ok(SaveState::Saved)
        }
        Err(source) => {
            warn!("save of {id} failed: {source}");
            Err(ToggleError::SaveFailed {
                id: id.clone(),
                source,
            })
        }
    }
}

/// Load the mirror from the store. On failure the mirror stays as it was.
pub fn refresh<S>(mirror: &Mutex<SavedMirror>, store: &S) -> Result<usize, ApiError>
where
    S: SavedStore + ?Sized,
{
    let entries = store.list_saved()?;
    let mut guard = lock(mirror);
    guard.replace_all(entries);
    Ok(guard.len())
}

fn lock(mirror: &Mutex<SavedMirror>) -> MutexGuard<'_, SavedMirror> {
    mirror.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Icon and colour class for a save button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveIcon {
    pub icon: &'static str,
    pub style_class: &'static str,
}

impl SaveIcon {
    pub fn for_state(saved: bool) -> Self {
        if saved {
            SaveIcon {
                icon: "❤️",
                style_class: "text-red-500",
            }
        } else {
            SaveIcon {
                icon: "🤍",
                style_class: "text-gray-400",
            }
        }
    }
}
