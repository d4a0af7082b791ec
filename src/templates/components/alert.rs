use maud::{html, Markup};

/// Alert swapped into the layout's `#alerts` slot out-of-band.
pub fn alert_oob(message: &str) -> Markup {
    html! {
        div id="alerts" hx-swap-oob="true" class="max-w-5xl mx-auto" {
            div role="alert"
                class="m-4 p-3 rounded-lg bg-red-50 border border-red-200 text-red-700 font-medium" {
                (message)
            }
        }
    }
}

pub fn notice_oob(message: &str) -> Markup {
    html! {
        div id="alerts" hx-swap-oob="true" class="max-w-5xl mx-auto" {
            div role="status"
                class="m-4 p-3 rounded-lg bg-green-50 border border-green-200 text-green-700 font-medium" {
                (message)
            }
        }
    }
}

/// Stand-in for a section whose data could not be loaded.
pub fn placeholder(message: &str) -> Markup {
    html! {
        p class="placeholder text-red-400 text-center py-6" { (message) }
    }
}

pub fn empty_state(message: &str) -> Markup {
    html! {
        div class="empty-state col-span-full text-center py-10 text-gray-400" { (message) }
    }
}
