// src/state.rs
use crate::api::{Area, Backend};
use crate::domain::saved;
use crate::domain::{
    filter, FilterState, Listing, ListingId, SavedMirror, SavedSnapshot, ToggleError,
};
use log::{info, warn};
use std::sync::{Mutex, MutexGuard};

/// Listings and filter state for the city currently on screen.
#[derive(Debug, Default)]
pub struct CitySession {
    pub city: Option<String>,
    pub listings: Vec<Listing>,
    pub areas: Vec<Area>,
    pub filter: FilterState,
}

impl CitySession {
    /// Swap in a freshly fetched city; filters start over.
    pub fn load(&mut self, city: &str, listings: Vec<Listing>, areas: Vec<Area>) {
        self.city = Some(city.to_string());
        self.listings = listings;
        self.areas = areas;
        self.filter.reset();
    }

    pub fn visible(&self) -> Vec<&Listing> {
        filter(&self.listings, &self.filter)
    }

    pub fn find(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == *id)
    }

    /// True when `city` is the city these listings belong to.
    pub fn is_showing(&self, city: &str) -> bool {
        self.city
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(city.trim()))
    }

    pub fn snapshot_for(&self, id: &ListingId) -> Option<Result<SavedSnapshot, ToggleError>> {
        let city = self.city.as_deref()?;
        self.find(id).map(|l| SavedSnapshot::from_listing(l, city))
    }
}

/// Everything a request handler needs: the backend plus the two pieces of
/// client state (saved mirror, city session).
pub struct AppState {
    pub api: Box<dyn Backend>,
    pub saved: Mutex<SavedMirror>,
    pub session: Mutex<CitySession>,
}

impl AppState {
    pub fn new(api: Box<dyn Backend>) -> Self {
        Self {
            api,
            saved: Mutex::new(SavedMirror::default()),
            session: Mutex::new(CitySession::default()),
        }
    }

    /// Seed the saved mirror from the backend. Failure leaves it empty.
    pub fn load_saved(&self) {
        match saved::refresh(&self.saved, self.api.as_ref()) {
            Ok(n) => info!("loaded {n} saved properties"),
            Err(e) => warn!("could not load saved properties: {e}"),
        }
    }

    pub fn session(&self) -> MutexGuard<'_, CitySession> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn mirror(&self) -> MutexGuard<'_, SavedMirror> {
        self.saved
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    pub fn is_saved(&self, id: &ListingId) -> bool {
        self.mirror().is_saved(id)
    }
}
