use super::NavController;
use crate::content::{Method, NavEntry, NavGroup, Operation};
use crate::document::Layout;
use crate::registry::Registry;
use std::time::{Duration, Instant};

const SETTLE: Duration = Duration::from_millis(1000);
const DEFER: Duration = Duration::from_millis(100);

fn entry(id: &str, label: &str) -> NavEntry {
    NavEntry {
        id: id.to_string(),
        label: label.to_string(),
        summary: String::new(),
        body: vec!["Some body text for the section.".to_string()],
    }
}

fn op(id: &str, title: &str, group: &str) -> Operation {
    Operation {
        id: id.to_string(),
        title: title.to_string(),
        method: Method::Get,
        path: "/v1/things".to_string(),
        description: "Lists things.".to_string(),
        group_id: group.to_string(),
        request: None,
        response: None,
    }
}

fn fixture() -> Registry {
    let groups = vec![
        NavGroup {
            id: "guide".to_string(),
            title: "Guide".to_string(),
            entries: vec![entry("intro", "Introduction"), entry("setup", "Setup")],
        },
        NavGroup {
            id: "api".to_string(),
            title: "API".to_string(),
            entries: vec![entry("api-overview", "API")],
        },
    ];
    let ops = vec![op("api-list", "List Things", "api")];
    let layout = Layout::build(&groups, &ops, 60);
    Registry::build(&groups, &ops, &layout).unwrap()
}

fn controller(registry: &Registry) -> NavController {
    NavController::new(registry.first_id(), SETTLE, DEFER)
}

#[test]
fn test_navigate_is_idempotent() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    nav.navigate_to(&registry, "setup", t0).unwrap();
    let after_once = nav.active_id().to_string();
    nav.navigate_to(&registry, "setup", t0 + Duration::from_millis(50))
        .unwrap();

    assert_eq!(nav.active_id(), after_once);
}

#[test]
fn test_fragment_round_trips_for_every_section() {
    let registry = fixture();
    let t0 = Instant::now();

    for section in registry.sections() {
        let mut nav = controller(&registry);
        nav.navigate_to(&registry, &section.id, t0).unwrap();
        let fragment = nav.fragment();

        let mut fresh = controller(&registry);
        fresh.handle_incoming_fragment(&fragment, t0);
        let due = fresh.take_due_fragment(t0 + DEFER).expect("fragment due");
        fresh.navigate_to(&registry, &due, t0 + DEFER).unwrap();

        assert_eq!(fresh.active_id(), section.id, "round trip of {fragment}");
    }
}

#[test]
fn test_observations_ignored_during_settle_window() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    nav.navigate_to(&registry, "api-overview", t0).unwrap();
    nav.record_observation("intro", t0 + Duration::from_millis(500));
    assert_eq!(nav.active_id(), "api-overview");

    nav.record_observation("intro", t0 + SETTLE);
    assert_eq!(nav.active_id(), "intro");
}

#[test]
fn test_repeated_navigation_restarts_the_window() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    nav.navigate_to(&registry, "setup", t0).unwrap();
    nav.navigate_to(&registry, "api-overview", t0 + Duration::from_millis(800))
        .unwrap();

    // The first window would have expired here, but the second is live.
    nav.record_observation("intro", t0 + Duration::from_millis(1200));
    assert_eq!(nav.active_id(), "api-overview");

    nav.record_observation("intro", t0 + Duration::from_millis(1800));
    assert_eq!(nav.active_id(), "intro");
}

#[test]
fn test_unknown_id_is_a_safe_no_op() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    let before = nav.active_id().to_string();
    assert!(nav.navigate_to(&registry, "does-not-exist", t0).is_none());
    assert_eq!(nav.active_id(), before);
    assert!(!nav.is_suppressed(t0 + Duration::from_millis(1)));
}

#[test]
fn test_fragment_accepted_with_or_without_hash() {
    let registry = fixture();
    let t0 = Instant::now();

    for raw in ["#setup", "setup"] {
        let mut nav = controller(&registry);
        nav.handle_incoming_fragment(raw, t0);
        assert_eq!(nav.take_due_fragment(t0 + DEFER).as_deref(), Some("setup"));
    }
}

#[test]
fn test_fragment_deferred_until_due() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    nav.handle_incoming_fragment("#setup", t0);
    assert!(nav.take_due_fragment(t0 + Duration::from_millis(50)).is_none());
    assert!(nav.take_due_fragment(t0 + DEFER).is_some());
    assert!(nav.take_due_fragment(t0 + DEFER).is_none(), "taken once");
}

#[test]
fn test_empty_fragment_is_ignored() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    nav.handle_incoming_fragment("#", t0);
    assert!(nav.take_due_fragment(t0 + DEFER).is_none());
}

#[test]
fn test_operation_ids_navigable_and_round_trip() {
    let registry = fixture();
    let mut nav = controller(&registry);
    let t0 = Instant::now();

    nav.navigate_to(&registry, "api-list", t0).unwrap();
    assert_eq!(nav.active_id(), "api-list");
    assert_eq!(nav.fragment(), "#api-list");
}
