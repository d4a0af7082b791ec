use crate::api::Review;
use crate::templates::components::{inr, placeholder};
use maud::{html, Markup};

/// Reviews list for a city, or the failure placeholder when `reviews` is `None`.
pub fn reviews_list(reviews: Option<&[Review]>) -> Markup {
    html! {
        div id="reviews-list" class="flex flex-col gap-3" {
            @match reviews {
                None => { (placeholder("Failed to load reviews.")) }
                Some([]) => { div class="text-center text-gray-400 py-4" { "No reviews yet. Be the first!" } }
                Some(reviews) => {
                    @for review in reviews {
                        (review_row(review))
                    }
                }
            }
        }
    }
}

fn review_row(review: &Review) -> Markup {
    html! {
        div class="review bg-gray-50 p-4 rounded-xl border border-gray-100 flex justify-between items-start" {
            div class="flex-grow" {
                div class="flex items-center gap-2 mb-1" {
                    span class="font-bold" { "₹" (inr(review.rent_amount)) }
                    span class="text-xs bg-gray-200 px-2 py-0.5 rounded text-gray-600" { (review.property_type) }
                }
                p class="text-sm text-gray-600 italic" { "\"" (review.comment) "\"" }
            }
            div class="ml-4 flex flex-col items-center" {
                button
                    class="text-gray-400 hover:text-red-500 transition text-lg"
                    hx-post=(format!("/reviews/{}/like", review.id))
                    hx-target=(format!("#likes-{}", review.id))
                    hx-swap="innerHTML"
                { "♥" }
                span class="text-xs font-bold text-gray-500" id=(format!("likes-{}", review.id)) { (review.likes) }
            }
        }
    }
}

pub fn review_form(city: &str) -> Markup {
    html! {
        form
            id="review-form"
            class="grid gap-3 mt-6"
            hx-post="/reviews"
            hx-target="#reviews-list"
            hx-swap="outerHTML"
        {
            input type="hidden" name="city" value=(city);
            input type="number" name="rent_amount" min="0" placeholder="Monthly rent (₹)" required class="border rounded-lg p-2";
            select name="property_type" class="border rounded-lg p-2" {
                option value="PG" { "PG" }
                option value="Flat" { "Flat" }
            }
            textarea name="comment" placeholder="How was your experience?" required class="border rounded-lg p-2" {}
            button type="submit" class="bg-indigo-600 text-white py-2 rounded-lg font-bold" { "Submit review" }
        }
    }
}
