use crate::api::SubmissionReceipt;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn list_property_page(saved_count: usize) -> Markup {
    desktop_layout(
        "List your property",
        saved_count,
        html! {
            main class="max-w-xl mx-auto px-6 py-10" {
                h1 class="text-3xl font-extrabold mb-6" { "List your property" }
                form
                    id="list-property-form"
                    class="grid gap-3"
                    hx-post="/list-property"
                    hx-target="#submission-result"
                    hx-swap="innerHTML"
                {
                    input type="text" name="owner_name" placeholder="Your name" required class="border rounded-lg p-2";
                    input type="text" name="contact" placeholder="Phone or email" required class="border rounded-lg p-2";
                    select name="type" class="border rounded-lg p-2" {
                        option value="Flat" { "Flat" }
                        option value="PG" { "PG" }
                        option value="House" { "House" }
                    }
                    input type="text" name="city" placeholder="City" required class="border rounded-lg p-2";
                    input type="text" name="area" placeholder="Area" required class="border rounded-lg p-2";
                    textarea name="description" placeholder="Describe the place (optional)" class="border rounded-lg p-2" {}
                    button type="submit" class="bg-indigo-600 text-white py-2 rounded-lg font-bold" { "Submit for approval" }
                }
                div id="submission-result" class="mt-4" {}
            }
        },
    )
}

pub fn submission_result(receipt: &SubmissionReceipt) -> Markup {
    html! {
        div role="status" class="p-3 rounded-lg bg-green-50 border border-green-200 text-green-700" {
            @if receipt.message.is_empty() {
                "Listing submitted for approval."
            } @else {
                (receipt.message)
            }
            @if let Some(id) = receipt.id {
                " Reference #" (id)
            }
        }
    }
}
