use crate::domain::filter::{filter, headline, tab_states, FilterState, TypeFilter};
use crate::domain::{Listing, ListingId, ListingType};
use crate::tests::utils::listing;
use proptest::prelude::*;

fn sample() -> Vec<Listing> {
    vec![
        listing(1, ListingType::Pg, "Sunrise PG", "Indiranagar", "₹9,000/mo", "2BHK", &["wifi", "food"]),
        listing(2, ListingType::Flat, "Cozy Flat", "Koramangala", "₹21,000/mo", "1BHK", &["parking"]),
    ]
}

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

#[test]
fn type_filter_keeps_only_matching_kind() {
    let listings = sample();
    let state = FilterState {
        kind: TypeFilter::Pg,
        ..FilterState::default()
    };

    assert_eq!(ids(&filter(&listings, &state)), vec!["1"]);
}

#[test]
fn search_matches_amenities() {
    let listings = sample();
    let mut state = FilterState::default();
    state.set_search("wifi");

    assert_eq!(ids(&filter(&listings, &state)), vec!["1"]);
}

#[test]
fn search_is_case_insensitive_across_name_and_specs() {
    let listings = sample();
    let mut state = FilterState::default();

    state.set_search("COZY");
    assert_eq!(ids(&filter(&listings, &state)), vec!["2"]);

    state.set_search("bhk");
    assert_eq!(ids(&filter(&listings, &state)), vec!["1", "2"]);
}

#[test]
fn area_filter_is_exact_and_toggles_off() {
    let listings = sample();
    let mut state = FilterState::default();

    state.toggle_area("Koramangala");
    assert_eq!(ids(&filter(&listings, &state)), vec!["2"]);

    state.toggle_area("koramangala");
    assert!(filter(&listings, &state).is_empty());

    state.toggle_area("koramangala");
    assert_eq!(state.area, None);
    assert_eq!(filter(&listings, &state).len(), 2);
}

#[test]
fn filters_combine_with_and() {
    let listings = sample();
    let mut state = FilterState::default();
    state.set_type(TypeFilter::Flat);
    state.set_search("wifi");

    assert!(filter(&listings, &state).is_empty());
}

#[test]
fn empty_listing_set_yields_empty_result() {
    assert!(filter(&[], &FilterState::default()).is_empty());
}

#[test]
fn reset_clears_every_dimension() {
    let mut state = FilterState::default();
    state.set_type(TypeFilter::Pg);
    state.toggle_area("Indiranagar");
    state.set_search("wifi");

    state.reset();
    assert_eq!(state, FilterState::default());
}

#[test]
fn headline_depends_on_area() {
    let mut state = FilterState::default();
    assert_eq!(headline(&state, 3), "Showing 3 properties across city");

    state.toggle_area("HSR Layout");
    assert_eq!(headline(&state, 1), "Properties in HSR Layout");
}

#[test]
fn exactly_one_tab_is_active() {
    let mut state = FilterState::default();
    state.set_type(TypeFilter::Flat);

    let tabs = tab_states(&state);
    let active: Vec<_> = tabs.iter().filter(|(_, on)| *on).map(|(t, _)| *t).collect();
    assert_eq!(active, vec![TypeFilter::Flat]);
}

#[test]
fn type_filter_parses_case_insensitively() {
    assert_eq!("pg".parse::<TypeFilter>(), Ok(TypeFilter::Pg));
    assert_eq!("All".parse::<TypeFilter>(), Ok(TypeFilter::All));
    assert!("House".parse::<TypeFilter>().is_err());
}

fn arb_listing() -> impl Strategy<Value = Listing> {
    (
        0i64..50,
        prop_oneof![Just(ListingType::Pg), Just(ListingType::Flat)],
        "[A-Za-z ]{0,12}",
        prop::sample::select(vec!["Indiranagar", "Koramangala", "HSR Layout"]),
        "[A-Za-z0-9 ]{0,10}",
        prop::collection::vec("[a-z]{1,6}", 0..4),
    )
        .prop_map(|(id, kind, name, area, specs, amenities)| Listing {
            id: ListingId::from(id),
            name,
            price: "₹10,000/mo".to_string(),
            kind,
            area: area.to_string(),
            specs,
            amenities,
            image: String::new(),
        })
}

fn arb_state() -> impl Strategy<Value = FilterState> {
    (
        prop_oneof![Just(TypeFilter::All), Just(TypeFilter::Pg), Just(TypeFilter::Flat)],
        prop::option::of(prop::sample::select(vec!["Indiranagar", "Koramangala", "HSR Layout"])),
        "[a-zA-Z]{0,2}",
    )
        .prop_map(|(kind, area, search)| FilterState {
            kind,
            area: area.map(str::to_string),
            search,
        })
}

proptest! {
    #[test]
    fn result_is_ordered_subsequence(listings in prop::collection::vec(arb_listing(), 0..20), state in arb_state()) {
        let out = filter(&listings, &state);

        let positions: Vec<usize> = out
            .iter()
            .map(|l| listings.iter().position(|x| std::ptr::eq(x, *l)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtering_is_idempotent(listings in prop::collection::vec(arb_listing(), 0..20), state in arb_state()) {
        let once: Vec<Listing> = filter(&listings, &state).into_iter().cloned().collect();
        let twice: Vec<Listing> = filter(&once, &state).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }
}
