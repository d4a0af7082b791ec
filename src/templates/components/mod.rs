use maud::{html, Markup};

pub mod alert;
pub mod error;
pub mod listings;
pub mod questions;
pub mod reviews;
pub mod saved;

pub use alert::{alert_oob, empty_state, notice_oob, placeholder};
pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card bg-white rounded-2xl shadow-sm border border-gray-100 p-6 mb-6" {
            h2 class="text-xl font-bold mb-4" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Lowercase HTML-id fragment: runs of anything but ASCII alphanumerics
/// become one `-`.
pub fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Rupee amount with Indian digit grouping, e.g. 125000 -> "1,25,000".
pub fn inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}
