// src/domain/filter.rs

use crate::domain::listing::{Listing, ListingType};
use std::str::FromStr;

/// Which property types are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Pg,
    Flat,
}

impl TypeFilter {
    pub const TABS: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Pg, TypeFilter::Flat];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Pg => "PG",
            TypeFilter::Flat => "Flat",
        }
    }

    pub fn matches(&self, kind: ListingType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Pg => kind == ListingType::Pg,
            TypeFilter::Flat => kind == ListingType::Flat,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "pg" => Ok(TypeFilter::Pg),
            "flat" => Ok(TypeFilter::Flat),
            other => Err(format!("unknown listing filter: {other}")),
        }
    }
}

/// The type/area/search constraints applied to the current city's listings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub kind: TypeFilter,
    pub area: Option<String>,
    pub search: String,
}

impl FilterState {
    pub fn set_type(&mut self, kind: TypeFilter) {
        self.kind = kind;
    }

    /// Selecting the active area again clears it; so does an empty name.
    pub fn toggle_area(&mut self, area: &str) {
        if area.is_empty() || self.area.as_deref() == Some(area) {
            self.area = None;
        } else {
            self.area = Some(area.to_string());
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    fn keeps(&self, listing: &Listing, term: &str) -> bool {
        if !self.kind.matches(listing.kind) {
            return false;
        }

        if let Some(area) = &self.area {
            if listing.area != *area {
                return false;
            }
        }

        term.is_empty()
            || listing.name.to_lowercase().contains(term)
            || listing.specs.to_lowercase().contains(term)
            || listing
                .amenities
                .iter()
                .any(|am| am.to_lowercase().contains(term))
    }
}

/// Visible subset of `listings` under `state`, in the original order.
///
/// Type, then area, then search; all three must hold.
pub fn filter<'a>(listings: &'a [Listing], state: &FilterState) -> Vec<&'a Listing> {
    let term = state.search.to_lowercase();
    listings
        .iter()
        .filter(|l| state.keeps(l, &term))
        .collect()
}

/// Each tab paired with whether it is the active one.
pub fn tab_states(state: &FilterState) -> [(TypeFilter, bool); 3] {
    TypeFilter::TABS.map(|tab| (tab, tab == state.kind))
}

pub fn headline(state: &FilterState, count: usize) -> String {
    match &state.area {
        Some(area) => format!("Properties in {area}"),
        None => format!("Showing {count} properties across city"),
    }
}
