use crate::domain::guides::{places_for, GUIDE_CITIES};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn guide_page(city: &str, saved_count: usize) -> Markup {
    let places = places_for(city);

    desktop_layout(
        "Neighbourhood Guide",
        saved_count,
        html! {
            main class="max-w-5xl mx-auto px-6 py-10" {
                h1 class="text-3xl font-extrabold mb-6" { "Neighbourhood Guide" }

                nav class="flex gap-3 mb-8" {
                    @for c in GUIDE_CITIES {
                        @let active = c.eq_ignore_ascii_case(city);
                        a href=(format!("/guide/{c}"))
                          class=(if active { "px-4 py-2 rounded-full bg-indigo-600 text-white font-bold" } else { "px-4 py-2 rounded-full bg-indigo-50 text-indigo-700" }) {
                            (c)
                        }
                    }
                }

                div id="guide-content" class="grid grid-cols-1 md:grid-cols-4 gap-6" {
                    @if places.is_empty() {
                        p class="col-span-full text-gray-400" { "No guide for " (city) " yet." }
                    }
                    @for place in places {
                        div class="bg-white rounded-2xl overflow-hidden shadow-lg border border-gray-100" {
                            div class="h-48 overflow-hidden relative" {
                                img src=(place.image) alt=(place.title) class="w-full h-full object-cover";
                                div class="absolute top-2 right-2 bg-white/90 text-xs font-bold px-2 py-1 rounded" { (place.kind) }
                            }
                            div class="p-5" {
                                h3 class="text-xl font-bold mb-2" { (place.title) }
                                p class="text-gray-600 text-sm" { (place.blurb) }
                            }
                        }
                    }
                }
            }
        },
    )
}
