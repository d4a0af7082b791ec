use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, saved_count: usize, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · City Explorer" }
                script src="https://cdn.tailwindcss.com" {};
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body class="bg-gray-50 text-gray-900" {
              header class="flex items-center justify-between px-6 py-3 shadow bg-white" {
                  a href="/" class="text-xl font-extrabold text-indigo-600" { "City Explorer" }
                  nav {
                      ul class="flex gap-6 font-medium" {
                          li { a href="/" { "Home" } }
                          li { a href="/guide" { "Guide" } }
                          li { a href="/faq" { "Q&A" } }
                          li {
                              a href="/saved" {
                                  "Saved "
                                  (saved_count_badge(saved_count))
                              }
                          }
                      }
                  }
                  a href="/list-property"
                    class="bg-gradient-to-r from-indigo-600 to-purple-600 text-white px-4 py-2 rounded-lg font-bold" {
                      "List your property"
                  }
              }
              div id="alerts" class="max-w-5xl mx-auto" {}
              (content)
            }
        }
    }
}

/// Nav counter; refreshes itself whenever a toggle fires `saved-changed`.
pub fn saved_count_badge(count: usize) -> Markup {
    html! {
        span
            id="saved-count"
            class="text-xs bg-red-100 text-red-600 px-2 py-0.5 rounded-full"
            hx-get="/saved/count"
            hx-trigger="saved-changed from:body"
            hx-swap="outerHTML"
        { (count) }
    }
}
