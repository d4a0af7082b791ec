// src/domain/pricing.rs

use crate::domain::listing::ListingType;

/// Average monthly rent per city, as (PG, Flat).
const AVERAGE_RENTS: &[(&str, i64, i64)] = &[
    ("Bengaluru", 12000, 25000),
    ("Hyderabad", 9000, 18000),
    ("Chennai", 8000, 16000),
];

const FALLBACK_AVERAGE: i64 = 15000;

/// Percent either side of the average that still counts as fair.
const FAIR_BAND_PCT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceBadge {
    /// Carries how far below average, in whole percent.
    BelowMarket(u32),
    FairPrice,
    AboveMarket(u32),
}

impl PriceBadge {
    pub fn label(&self) -> String {
        match self {
            PriceBadge::BelowMarket(pct) => format!("📉 {pct}% Below Market"),
            PriceBadge::FairPrice => "✅ Fair Price".to_string(),
            PriceBadge::AboveMarket(pct) => format!("📈 {pct}% Above Market"),
        }
    }

    pub fn style_class(&self) -> &'static str {
        match self {
            PriceBadge::BelowMarket(_) => "bg-green-100 text-green-700",
            PriceBadge::FairPrice => "bg-blue-100 text-blue-700",
            PriceBadge::AboveMarket(_) => "bg-red-100 text-red-700",
        }
    }
}

pub fn average_rent(city: &str, kind: ListingType) -> i64 {
    AVERAGE_RENTS
        .iter()
        .find(|(name, _, _)| name.eq_ignore_ascii_case(city.trim()))
        .map(|&(_, pg, flat)| match kind {
            ListingType::Pg => pg,
            ListingType::Flat => flat,
        })
        .unwrap_or(FALLBACK_AVERAGE)
}

pub fn price_badge(rent: i64, city: &str, kind: ListingType) -> PriceBadge {
    let avg = average_rent(city, kind) as f64;
    let diff = (rent as f64 - avg) / avg * 100.0;

    if diff < -FAIR_BAND_PCT {
        PriceBadge::BelowMarket(diff.abs().round() as u32)
    } else if diff > FAIR_BAND_PCT {
        PriceBadge::AboveMarket(diff.round() as u32)
    } else {
        PriceBadge::FairPrice
    }
}
