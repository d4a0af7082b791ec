use crate::api::CityInfo;
use crate::templates::components::reviews::review_form;
use crate::templates::components::{card, inr};
use crate::templates::desktop_layout;
use maud::{html, Markup};

const FALLBACK_HERO: &str = "https://images.unsplash.com/photo-1596422846543-75c6fc197f07";

/// Full city view. `results` is the pre-rendered listings fragment.
pub fn city_page(info: &CityInfo, results: Markup, saved_count: usize) -> Markup {
    let hero = info.images.first().map(String::as_str).unwrap_or(FALLBACK_HERO);
    let rent = &info.rent_estimate;
    let qol = &info.quality_of_life;
    let city_path = urlencoding::encode(&info.city_name);

    desktop_layout(
        &info.city_name,
        saved_count,
        html! {
            section class="relative h-72 overflow-hidden" {
                img id="city-hero-img" src=(hero) alt=(info.city_name) class="w-full h-full object-cover";
                div class="absolute inset-0 bg-black/40 flex flex-col justify-end p-8 text-white" {
                    h1 id="city-name" class="text-4xl font-extrabold" { (info.city_name) }
                    a href=(format!("/map/{city_path}")) id="view-map-btn" class="mt-2 underline" { "View on map" }
                }
            }

            main class="max-w-5xl mx-auto px-6 py-8" {
                p id="city-description" class="text-gray-700 mb-8" { (info.description) }

                div class="grid md:grid-cols-2 gap-6 mb-6" {
                    (card("Estimated Rent", html! {
                        div id="est-rent" class="text-3xl font-extrabold text-indigo-600" {
                            (rent.currency) (inr(rent.average_rent))
                        }
                        div id="est-range" class="text-sm text-gray-500" {
                            "Range: " (inr(rent.range_low)) " - " (inr(rent.range_high))
                        }
                    }))

                    (card("Quality of Life", html! {
                        div id="qol-stats" class="grid grid-cols-4 gap-2" {
                            (stat(&format!("{:.1}", qol.score), "Life Score"))
                            (stat(&qol.safety, "Safety"))
                            (stat(&qol.transport, "Transport"))
                            (stat(&qol.nightlife, "Vibe"))
                        }
                    }))
                }

                section class="mb-10" {
                    h2 class="text-2xl font-bold mb-4" { "Places to live" }
                    input
                        id="listing-search"
                        type="search"
                        name="q"
                        placeholder="Search by name, specs or amenity"
                        class="w-full border rounded-xl p-3 mb-4"
                        hx-get=(format!("/listings?city={city_path}"))
                        hx-trigger="input changed delay:300ms, search"
                        hx-target="#listings-results"
                        hx-swap="outerHTML";
                    (results)
                }

                (card("Rent Reviews", html! {
                    div
                        id="reviews-list"
                        hx-get=(format!("/city/{city_path}/reviews"))
                        hx-trigger="load"
                        hx-swap="outerHTML"
                    {
                        p class="text-gray-400 text-center" { "Loading reviews..." }
                    }
                    (review_form(&info.city_name))
                }))
            }
        },
    )
}

fn stat(value: &str, label: &str) -> Markup {
    html! {
        div class="text-center p-4 bg-gray-50 rounded-xl" {
            div class="text-xl font-bold text-gray-800" { (value) }
            div class="text-xs text-gray-500 uppercase font-bold mt-1 tracking-wider" { (label) }
        }
    }
}

/// Shown when the backend has nothing (or nothing reachable) for a city.
pub fn city_unavailable_page(city: &str, saved_count: usize) -> Markup {
    desktop_layout(
        "City Details",
        saved_count,
        html! {
            main class="max-w-5xl mx-auto px-6 py-16" {
                h1 id="city-name" class="text-3xl font-bold mb-4" { "City Details" }
                p id="city-description" class="placeholder text-gray-600" {
                    "We could not fetch data for " (city) ". Please try another popular city."
                }
                a href="/" class="text-indigo-600 underline" { "← Back to search" }
            }
        },
    )
}
