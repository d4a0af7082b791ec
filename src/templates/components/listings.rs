use crate::api::Area;
use crate::domain::{
    headline, price_badge, tab_states, FilterState, Listing, ListingId, ListingType, PriceBadge,
    SaveIcon,
};
use crate::templates::components::{empty_state, slug};
use maud::{html, Markup};
use std::collections::HashSet;

const ACTIVE_TAB: &str = "bg-white shadow text-gray-800";
const IDLE_TAB: &str = "text-gray-500";

pub struct ListingsVm<'a> {
    pub city: &'a str,
    pub areas: &'a [Area],
    pub filter: &'a FilterState,
    pub visible: Vec<&'a Listing>,
    pub saved_ids: &'a HashSet<ListingId>,
}

/// Area cards, type tabs, headline and grid; always swapped as one unit so
/// the tabs and count never disagree with the grid.
pub fn listings_results(vm: &ListingsVm) -> Markup {
    let city_suffix = city_query(vm.city);

    html! {
        div id="listings-results" {
            div id="areas-list" class="flex gap-4 overflow-x-auto pb-4 mb-6" {
                @for area in vm.areas {
                    (area_card(area, &city_suffix, vm.filter.area.as_deref() == Some(area.name.as_str())))
                }
            }

            div class="flex items-center justify-between mb-4" {
                div class="flex bg-gray-100 rounded-lg p-1 gap-1" {
                    @for (tab, active) in tab_states(vm.filter) {
                        button
                            id=(format!("tab-{}", tab.as_str().to_lowercase()))
                            class=(format!("px-4 py-1.5 rounded-md text-sm font-bold {}", if active { ACTIVE_TAB } else { IDLE_TAB }))
                            aria-pressed=(if active { "true" } else { "false" })
                            hx-get=(format!("/listings?type={}{city_suffix}", tab.as_str()))
                            hx-target="#listings-results"
                            hx-swap="outerHTML"
                        { (tab.as_str()) }
                    }
                }
                p id="listings-subtitle" class="text-sm text-gray-500" {
                    (headline(vm.filter, vm.visible.len()))
                }
            }

            div id="listings-list" class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                @if vm.visible.is_empty() {
                    (empty_state("No properties found matching your criteria."))
                } @else {
                    @for listing in &vm.visible {
                        (listing_card(listing, vm.city, vm.saved_ids.contains(&listing.id)))
                    }
                }
            }
        }
    }
}

fn area_card(area: &Area, city_suffix: &str, active: bool) -> Markup {
    let border = if active {
        "border-indigo-600 bg-indigo-100"
    } else {
        "border-transparent bg-indigo-50"
    };

    html! {
        button
            id=(format!("area-{}", slug(&area.name)))
            class=(format!("area-card min-w-[200px] text-left p-4 rounded-xl border-2 hover:border-indigo-500 transition {border}"))
            aria-pressed=(if active { "true" } else { "false" })
            hx-get=(format!("/listings?area={}{city_suffix}", urlencoding::encode(&area.name)))
            hx-target="#listings-results"
            hx-swap="outerHTML"
        {
            div class="font-bold text-indigo-900 text-lg" { (area.name) }
            div class="text-sm text-indigo-600 font-semibold mt-1" { (area.rent) " avg" }
            div class="text-xs text-indigo-400 mt-2 uppercase tracking-wide" { (area.vibe) }
        }
    }
}

pub fn listing_card(listing: &Listing, city: &str, saved: bool) -> Markup {
    let badge = listing
        .rent()
        .map(|rent| price_badge(rent, city, listing.kind));

    html! {
        div class="listing-card bg-white rounded-xl overflow-hidden border border-gray-100 shadow-sm hover:shadow-md transition" {
            div class="h-48 overflow-hidden relative" {
                img src=(listing.image) alt=(listing.name) class="w-full h-full object-cover";
                (save_button(&listing.id, city, saved))
                div class="absolute top-2 left-2 bg-white/95 px-2 py-1 rounded-md text-xs font-bold shadow-sm flex items-center gap-1" {
                    span class=(type_class(listing.kind)) { (listing.kind.as_str()) }
                    span class="text-gray-300" { "|" }
                    span { (listing.area) }
                }
            }
            div class="p-4" {
                div class="flex justify-between items-start mb-2" {
                    h3 class="font-bold truncate" { (listing.name) }
                    span class="font-bold text-gray-700 whitespace-nowrap" { (listing.price) }
                }
                @if let Some(badge) = badge {
                    div class="mb-2" { (price_badge_tag(&badge)) }
                }
                p class="text-xs text-gray-500 mb-3 font-medium uppercase tracking-wide" { (listing.specs) }
                div class="flex flex-wrap gap-2 mb-4" {
                    @for amenity in listing.amenities.iter().take(3) {
                        span class="text-xs bg-gray-100 text-gray-600 px-2 py-1 rounded" { (amenity) }
                    }
                    @if listing.amenities.len() > 3 {
                        span class="text-xs text-gray-400" { "+" (listing.amenities.len() - 3) }
                    }
                }
                details class="border border-orange-600 rounded-lg" {
                    summary class="cursor-pointer text-center text-orange-600 py-2 font-bold text-sm" { "View Details" }
                    div class="p-3" {
                        p class="text-sm mb-2" { (listing.specs) }
                        div class="flex flex-wrap gap-2" {
                            @for amenity in &listing.amenities {
                                span class="px-3 py-1.5 rounded-lg bg-gray-100 text-gray-700 text-sm font-bold" { "✓ " (amenity) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Heart button bound to one listing id on `city`'s page. The toggle
/// response replaces it.
pub fn save_button(id: &ListingId, city: &str, saved: bool) -> Markup {
    let icon = SaveIcon::for_state(saved);
    let mut target = format!("/saved/{}/toggle", urlencoding::encode(id.as_str()));
    if !city.is_empty() {
        target.push_str(&format!("?city={}", urlencoding::encode(city)));
    }

    html! {
        button
            id=(format!("save-{id}"))
            class=(format!("save-btn absolute top-2 right-2 text-2xl bg-white/90 w-10 h-10 rounded-full shadow-lg hover:scale-110 transition {}", icon.style_class))
            aria-pressed=(if saved { "true" } else { "false" })
            title=(if saved { "Remove from saved" } else { "Save property" })
            hx-post=(target)
            hx-swap="outerHTML"
        { (icon.icon) }
    }
}

/// `&city=..` suffix tying a fragment request to the page's city.
fn city_query(city: &str) -> String {
    if city.is_empty() {
        String::new()
    } else {
        format!("&city={}", urlencoding::encode(city))
    }
}

pub fn price_badge_tag(badge: &PriceBadge) -> Markup {
    html! {
        span class=(format!("price-badge text-xs px-2 py-1 rounded-full font-bold {}", badge.style_class())) {
            (badge.label())
        }
    }
}

pub fn type_class(kind: ListingType) -> &'static str {
    match kind {
        ListingType::Pg => "text-orange-600",
        ListingType::Flat => "text-blue-600",
    }
}
