// templates/pages/home.rs

use crate::domain::guides::GUIDE_CITIES;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(saved_count: usize) -> Markup {
    desktop_layout(
        "Home",
        saved_count,
        html! {
            main class="max-w-5xl mx-auto px-6 py-16 text-center" {
                h1 class="text-5xl font-extrabold mb-4" { "Find your next home in a new city" }
                p class="text-lg text-gray-600 mb-8" {
                    "Rents, neighbourhoods, PGs and flats, reviewed by people who live there."
                }

                form id="search-form" action="/search" method="get" class="flex gap-2 max-w-xl mx-auto" {
                    label for="city-input" class="sr-only" { "City" }
                    input
                        id="city-input"
                        type="text"
                        name="city"
                        placeholder="Search a city, e.g. Bengaluru"
                        required
                        class="flex-grow border rounded-xl p-3";
                    button type="submit" class="bg-indigo-600 text-white px-6 rounded-xl font-bold" { "Explore" }
                }

                div class="flex justify-center gap-3 mt-6" {
                    @for city in GUIDE_CITIES {
                        a href=(format!("/city/{city}")) class="px-4 py-2 rounded-full bg-indigo-50 text-indigo-700 font-semibold" {
                            (city)
                        }
                    }
                }
            }
        },
    )
}
