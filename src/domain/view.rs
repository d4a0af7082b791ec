// src/domain/view.rs

use crate::domain::guides::DEFAULT_GUIDE_CITY;

/// Top-level page a path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    City(String),
    Map(String),
    Faq,
    Saved,
    Guide(String),
    ListProperty,
    NotFound,
}

impl View {
    pub fn from_path(path: &str) -> View {
        let segments: Vec<String> = match path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect::<Option<Vec<_>>>()
        {
            Some(segments) => segments,
            None => return View::NotFound,
        };

        let parts: Vec<&str> = segments.iter().map(String::as_str).collect();

        match parts.as_slice() {
            [] => View::Home,
            ["city", name] if !name.trim().is_empty() => View::City(name.trim().to_string()),
            ["map", name] if !name.trim().is_empty() => View::Map(name.trim().to_string()),
            ["faq"] => View::Faq,
            ["saved"] => View::Saved,
            ["guide"] => View::Guide(DEFAULT_GUIDE_CITY.to_string()),
            ["guide", city] => View::Guide(city.trim().to_string()),
            ["list-property"] => View::ListProperty,
            _ => View::NotFound,
        }
    }
}

/// Percent-decode one path segment; `None` if it is not valid UTF-8.
pub fn decode_segment(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}
