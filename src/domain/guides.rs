// src/domain/guides.rs

pub struct Place {
    pub title: &'static str,
    pub kind: &'static str,
    pub image: &'static str,
    pub blurb: &'static str,
}

pub const GUIDE_CITIES: &[&str] = &["Bengaluru", "Hyderabad", "Chennai"];

pub const DEFAULT_GUIDE_CITY: &str = "Bengaluru";

const BENGALURU: &[Place] = &[
    Place { title: "Lalbagh Botanical Garden", kind: "Park", image: "https://images.unsplash.com/photo-1596422846543-75c6fc197f07?w=500", blurb: "240 acres of green." },
    Place { title: "Cubbon Park", kind: "Park", image: "https://images.unsplash.com/photo-1626245229239-b9d9c288f6b8?w=500", blurb: "The lung of the city." },
    Place { title: "ISKCON Temple", kind: "Temple", image: "https://images.unsplash.com/photo-1542361345-89e58247f2d5?w=500", blurb: "Spiritual architecture." },
    Place { title: "Commercial Street", kind: "Shopping", image: "https://images.unsplash.com/photo-1449824913929-4bd6d5a88adc?w=500", blurb: "Shop till you drop." },
];

const HYDERABAD: &[Place] = &[
    Place { title: "Charminar", kind: "History", image: "https://images.unsplash.com/photo-1572455027382-706593b4fe7e?w=500", blurb: "Iconic monument." },
    Place { title: "Birla Mandir", kind: "Temple", image: "https://images.unsplash.com/photo-1605537964076-3cb0ea2e356d?w=500", blurb: "White marble marvel." },
    Place { title: "Hussain Sagar Lake", kind: "Park", image: "https://images.unsplash.com/photo-1549467688-6c84c7e6c518?w=500", blurb: "Heart of the city." },
    Place { title: "Ramoji Film City", kind: "Fun", image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=500", blurb: "Largest film city." },
];

const CHENNAI: &[Place] = &[
    Place { title: "Marina Beach", kind: "Park", image: "https://images.unsplash.com/photo-1582510003544-bea4db981a33?w=500", blurb: "Longest urban beach." },
    Place { title: "Kapaleeshwarar Temple", kind: "Temple", image: "https://images.unsplash.com/photo-1625292415516-56f874983226?w=500", blurb: "Dravidian architecture." },
    Place { title: "Guindy National Park", kind: "Park", image: "https://images.unsplash.com/photo-1517549641777-62624a047d7a?w=500", blurb: "Nature inside city." },
    Place { title: "T. Nagar", kind: "Shopping", image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=500", blurb: "Shopping hub." },
];

/// Curated places for a city; empty for cities without a guide.
pub fn places_for(city: &str) -> &'static [Place] {
    match city.trim().to_ascii_lowercase().as_str() {
        "bengaluru" => BENGALURU,
        "hyderabad" => HYDERABAD,
        "chennai" => CHENNAI,
        _ => &[],
    }
}
