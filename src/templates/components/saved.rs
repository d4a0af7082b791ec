use crate::domain::SavedEntry;
use crate::templates::components::listings::save_button;
use crate::templates::components::{empty_state, inr};
use maud::{html, Markup};

/// Saved grid; reloads itself after any toggle so unsaved cards drop out.
pub fn saved_grid(entries: &[SavedEntry]) -> Markup {
    html! {
        div
            id="saved-grid"
            class="grid grid-cols-1 md:grid-cols-3 gap-6"
            hx-get="/saved/grid"
            hx-trigger="saved-changed from:body"
            hx-swap="outerHTML"
        {
            @if entries.is_empty() {
                (empty_state("You haven't saved any properties yet."))
            } @else {
                @for entry in entries {
                    (saved_card(entry))
                }
            }
        }
    }
}

fn saved_card(entry: &SavedEntry) -> Markup {
    let type_class = match entry.kind.as_str() {
        "PG" => "bg-purple-100 text-purple-700",
        _ => "bg-blue-100 text-blue-700",
    };

    html! {
        div class="saved-card bg-white rounded-2xl overflow-hidden shadow-lg border border-gray-100" {
            div class="h-48 relative overflow-hidden" {
                img src=(entry.image) alt=(entry.name) class="w-full h-full object-cover";
                (save_button(&entry.listing_id, &entry.city, true))
                div class=(format!("absolute top-3 left-3 text-xs font-bold px-3 py-1 rounded-full {type_class}")) {
                    (entry.kind.as_str())
                }
            }
            div class="p-5" {
                div class="flex justify-between items-start mb-2" {
                    h3 class="text-lg font-bold" { (entry.name) }
                    span class="text-xl font-extrabold text-indigo-600" { "₹" (inr(entry.price)) }
                }
                p class="text-sm text-gray-600 mb-3" { (entry.area) ", " (entry.city) }
                a href=(format!("/city/{}", urlencoding::encode(&entry.city)))
                  class="block w-full text-center bg-indigo-50 text-indigo-600 py-2 rounded-lg font-bold text-sm" {
                    "View in " (entry.city)
                }
            }
        }
    }
}
