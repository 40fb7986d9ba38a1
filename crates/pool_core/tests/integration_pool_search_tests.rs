mod support;

use chrono::Duration;
use pool_core::config::SearchConfig;
use pool_core::repository::InMemoryOfferRepository;
use pool_core::search::{Location, PoolSearch, SearchRequest, SearchResults};
use pool_core::test_helpers::{
    offer, offer_departing_in, test_dropoff, test_now, test_pickup, TEST_DROPOFF, TEST_PICKUP,
};
use pool_core::{MatchError, OfferStatus, SearchError};

use support::repositories::{RecordingRepository, UnavailableRepository};

fn coordinate_request() -> SearchRequest {
    SearchRequest::new(Location::at(test_pickup()), Location::at(test_dropoff()))
}

fn address_request() -> SearchRequest {
    SearchRequest::new(
        Location::address("World trade point, New Jersey"),
        Location::address("Harvard law school, New Jersey"),
    )
}

fn ids(results: &SearchResults) -> Vec<String> {
    results
        .offer_ids()
        .into_iter()
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn coordinates_route_through_proximity_ranking() {
    let repository = InMemoryOfferRepository::new(vec![
        offer("airport-run", (-1.29, 36.82), (-1.32, 36.93)),
        offer("exact", TEST_PICKUP, TEST_DROPOFF),
        offer("mombasa", (-4.04, 39.67), (-4.03, 39.60)),
    ]);
    let search = PoolSearch::new(repository, SearchConfig::default());

    let results = search
        .search(&coordinate_request(), test_now())
        .expect("search");

    let SearchResults::Ranked(ranked) = &results else {
        panic!("expected ranked results, got {results:?}");
    };
    assert_eq!(ids(&results), vec!["exact", "airport-run"]);
    assert_eq!(ranked[0].score, 0.0);
}

#[test]
fn addresses_only_fall_back_to_departure_order() {
    let repository = InMemoryOfferRepository::new(vec![
        offer_departing_in("later", 180),
        offer_departing_in("soon", 30),
        offer_departing_in("soon-too", 30),
        offer("nowhere-near", (51.5, -0.12), (51.47, -0.45)),
    ]);
    let search = PoolSearch::new(repository, SearchConfig::default());

    let results = search.search(&address_request(), test_now()).expect("search");

    assert!(matches!(results, SearchResults::Chronological(_)));
    assert_eq!(
        ids(&results),
        vec!["soon", "soon-too", "nowhere-near", "later"]
    );
}

#[test]
fn one_missing_coordinate_uses_fallback() {
    let repository = InMemoryOfferRepository::new(vec![offer_departing_in("a", 10)]);
    let search = PoolSearch::new(repository, SearchConfig::default());
    let request = SearchRequest::new(
        Location::at(test_pickup()),
        Location::address("Harvard law school"),
    );

    let results = search.search(&request, test_now()).expect("search");
    assert!(matches!(results, SearchResults::Chronological(_)));
}

#[test]
fn request_radii_override_config() {
    let repository = InMemoryOfferRepository::new(vec![offer(
        "three-km-off",
        (TEST_PICKUP.0 + 0.027, TEST_PICKUP.1),
        TEST_DROPOFF,
    )]);
    let search = PoolSearch::new(repository, SearchConfig::default());

    let wide = search
        .search(&coordinate_request(), test_now())
        .expect("search");
    assert_eq!(wide.len(), 1);

    let narrow = search
        .search(&coordinate_request().with_radii_km(1.0, 1.0), test_now())
        .expect("search");
    assert!(narrow.is_empty());
}

#[test]
fn config_radius_applies_when_request_has_none() {
    let repository = InMemoryOfferRepository::new(vec![offer(
        "three-km-off",
        (TEST_PICKUP.0 + 0.027, TEST_PICKUP.1),
        TEST_DROPOFF,
    )]);
    let config = SearchConfig::default().with_pickup_radius_km(2.0);
    let search = PoolSearch::new(repository, config);

    let results = search
        .search(&coordinate_request(), test_now())
        .expect("search");
    assert!(results.is_empty());
}

#[test]
fn invalid_radius_surfaces_as_match_error() {
    let search = PoolSearch::new(InMemoryOfferRepository::default(), SearchConfig::default());
    let err = search
        .search(&coordinate_request().with_radii_km(0.0, 5.0), test_now())
        .expect_err("zero radius");
    assert!(matches!(
        err,
        SearchError::Match(MatchError::InvalidArgument(_))
    ));
}

#[test]
fn zero_seats_is_rejected() {
    let search = PoolSearch::new(InMemoryOfferRepository::default(), SearchConfig::default());
    let err = search
        .search(&address_request().with_seats(0), test_now())
        .expect_err("zero seats");
    assert!(matches!(err, SearchError::InvalidRequest(_)));
}

#[test]
fn repository_failure_propagates() {
    let search = PoolSearch::new(UnavailableRepository, SearchConfig::default());
    let err = search
        .search(&coordinate_request(), test_now())
        .expect_err("backend down");
    assert!(matches!(err, SearchError::Repository(_)));
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn filter_uses_later_of_now_and_requested_departure() {
    let search = PoolSearch::new(RecordingRepository::new(Vec::new()), SearchConfig::default());
    let later = test_now() + Duration::hours(2);
    let earlier = test_now() - Duration::hours(2);

    search
        .search(
            &address_request().with_departing_after(later).with_seats(3),
            test_now(),
        )
        .expect("search");
    search
        .search(&address_request().with_departing_after(earlier), test_now())
        .expect("search");

    let filters = search.repository().filters();
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0].departing_after, later);
    assert_eq!(filters[0].min_seats, 3);
    assert_eq!(filters[1].departing_after, test_now());
    assert_eq!(filters[1].min_seats, 1);
}

#[test]
fn unbookable_offers_never_reach_ranking() {
    let mut full = offer("full", TEST_PICKUP, TEST_DROPOFF);
    full.seats_available = 0;
    let mut departed = offer("departed", TEST_PICKUP, TEST_DROPOFF);
    departed.departure = test_now() - Duration::minutes(5);
    let cancelled =
        offer("cancelled", TEST_PICKUP, TEST_DROPOFF).with_status(OfferStatus::Cancelled);
    let open = offer("open", TEST_PICKUP, TEST_DROPOFF);

    let repository = InMemoryOfferRepository::new(vec![full, departed, cancelled, open]);
    let search = PoolSearch::new(repository, SearchConfig::default());

    let results = search
        .search(&coordinate_request(), test_now())
        .expect("search");
    assert_eq!(ids(&results), vec!["open"]);
}

#[test]
fn malformed_offer_is_skipped_during_search() {
    let repository = InMemoryOfferRepository::new(vec![
        offer("bad-lat", (200.0, 36.8), TEST_DROPOFF),
        offer("good", TEST_PICKUP, TEST_DROPOFF),
    ]);
    let search = PoolSearch::new(repository, SearchConfig::default());

    let results = search
        .search(&coordinate_request(), test_now())
        .expect("search");
    assert_eq!(ids(&results), vec!["good"]);
}

#[test]
fn results_serialize_with_mode_tag() {
    let repository = InMemoryOfferRepository::new(vec![offer("exact", TEST_PICKUP, TEST_DROPOFF)]);
    let search = PoolSearch::new(repository, SearchConfig::default());
    let results = search
        .search(&coordinate_request(), test_now())
        .expect("search");

    let json = serde_json::to_value(&results).expect("json");
    assert_eq!(json["mode"], "ranked");
    assert_eq!(json["offers"][0]["offer"]["id"], "exact");
    assert_eq!(json["offers"][0]["score"], 0.0);
}
