use crate::api::{Answer, Question};
use crate::templates::components::placeholder;
use maud::{html, Markup};

pub fn question_feed(questions: Option<&[Question]>) -> Markup {
    html! {
        div id="qa-feed" class="flex flex-col gap-4" {
            @match questions {
                None => { (placeholder("Failed to load questions.")) }
                Some([]) => { div class="text-center text-gray-400 py-6" { "No questions yet. Ask the first one!" } }
                Some(questions) => {
                    @for q in questions {
                        (question_card(q))
                    }
                }
            }
        }
    }
}

fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

fn question_card(q: &Question) -> Markup {
    html! {
        div class="question bg-white rounded-2xl p-6 shadow-sm border border-gray-100" {
            div class="flex items-center gap-3 mb-2" {
                div class="w-8 h-8 rounded-full bg-indigo-100 text-indigo-600 flex items-center justify-center font-bold text-xs" {
                    (initials(&q.user_name))
                }
                span class="text-sm font-bold" { (q.user_name) }
                @if let Some(ts) = q.timestamp {
                    span class="text-xs text-gray-400" { (ts.format("%d %b %Y").to_string()) }
                }
            }
            h4 class="text-lg font-bold text-gray-800 mb-2" { (q.text) }
            div class="flex gap-4 text-sm text-gray-500" {
                button
                    class="hover:text-indigo-600 font-bold"
                    hx-get=(format!("/questions/{}/answers", q.id))
                    hx-target=(format!("#answers-{}", q.id))
                    hx-swap="outerHTML"
                { "💬 Reply" }
                span { "⬆️ " (q.upvotes) " Upvotes" }
            }
            div id=(format!("answers-{}", q.id)) {}
        }
    }
}

pub fn answers_block(question_id: i64, answers: Option<&[Answer]>) -> Markup {
    html! {
        div id=(format!("answers-{question_id}")) class="mt-3" {
            @match answers {
                None => { (placeholder("Failed to load answers.")) }
                Some(answers) => {
                    @for a in answers {
                        div class="answer bg-gray-50 p-3 rounded-lg mb-2 ml-4 border-l-2 border-indigo-500" {
                            div class="flex items-center gap-2 mb-1" {
                                span class="text-xs font-bold" { (a.user_name) }
                                @if a.is_verified {
                                    span class="text-xs text-green-600" { "✓ Verified" }
                                }
                            }
                            p class="text-sm text-gray-600" { (a.text) }
                        }
                    }
                }
            }
            form
                class="flex gap-2 ml-4"
                hx-post=(format!("/questions/{question_id}/answers"))
                hx-target=(format!("#answers-{question_id}"))
                hx-swap="outerHTML"
            {
                input type="text" name="text" placeholder="Write a reply..." required class="flex-grow border rounded-lg p-2 text-sm";
                button type="submit" class="bg-indigo-600 text-white px-3 rounded-lg text-sm font-bold" { "Send" }
            }
        }
    }
}

pub fn question_form() -> Markup {
    html! {
        form
            id="question-form"
            class="flex gap-2 mb-6"
            hx-post="/questions"
            hx-target="#qa-feed"
            hx-swap="outerHTML"
        {
            input id="new-question-input" type="text" name="text" placeholder="Ask the community..." required class="flex-grow border rounded-lg p-3";
            button type="submit" class="bg-indigo-600 text-white px-5 rounded-lg font-bold" { "Post" }
        }
    }
}
