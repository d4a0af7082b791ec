use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn map_page(city: &str, saved_count: usize) -> Markup {
    let src = format!(
        "https://maps.google.com/maps?q={}&t=&z=13&ie=UTF8&iwloc=&output=embed",
        urlencoding::encode(city)
    );

    desktop_layout(
        &format!("{city} map"),
        saved_count,
        html! {
            main class="max-w-5xl mx-auto px-6 py-6" {
                a href=(format!("/city/{}", urlencoding::encode(city))) class="text-indigo-600 underline" { "← Back to " (city) }
                div id="map-container" class="mt-4 h-[70vh] rounded-2xl overflow-hidden" {
                    iframe width="100%" height="100%" frameborder="0" style="border:0" src=(src) allowfullscreen {}
                }
            }
        },
    )
}
