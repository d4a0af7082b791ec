use crate::api::Question;
use crate::templates::components::questions::{question_feed, question_form};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn faq_page(questions: Option<&[Question]>, saved_count: usize) -> Markup {
    desktop_layout(
        "Community Q&A",
        saved_count,
        html! {
            main class="max-w-3xl mx-auto px-6 py-10" {
                h1 class="text-3xl font-extrabold mb-2" { "Community Q&A" }
                p class="text-gray-600 mb-6" { "Ask locals about neighbourhoods, deposits and commutes." }
                (question_form())
                (question_feed(questions))
            }
        },
    )
}
