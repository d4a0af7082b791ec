use crate::domain::SavedEntry;
use crate::templates::components::saved::saved_grid;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn saved_page(entries: &[SavedEntry]) -> Markup {
    desktop_layout(
        "Saved",
        entries.len(),
        html! {
            main class="max-w-5xl mx-auto px-6 py-10" {
                h1 class="text-3xl font-extrabold mb-6" { "Saved properties" }
                (saved_grid(entries))
            }
        },
    )
}
