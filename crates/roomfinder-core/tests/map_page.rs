mod common;

use common::campus;
use roomfinder_core::config::{CLOSE_UP_ZOOM, NOT_FOUND_NOTICE};
use roomfinder_core::prelude::*;
use roomfinder_core::viewport::LifecycleState;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// A page with a ready headless map, plus a probe sharing the map's state.
fn ready_page() -> (MapPage<HeadlessMap>, HeadlessMap) {
    let mut page = MapPage::new(campus(), MapPageConfig::default());
    let map = HeadlessMap::new(DEFAULT_CENTER, DEFAULT_ZOOM);
    let probe = map.clone();
    assert!(page.on_map_ready(map).is_ok());
    (page, probe)
}

fn markers(probe: &HeadlessMap) -> Vec<MarkerSpec> {
    probe.state().layers.concat()
}

#[test]
fn map_ready_adds_tiles_and_an_empty_result_layer() {
    let (page, probe) = ready_page();
    assert!(page.viewport().is_ready());
    let state = probe.state();
    assert_eq!(state.tile_layers.len(), 1);
    assert_eq!(state.layers.len(), 1);
    assert_eq!(state.marker_count(), 0);
    assert_eq!(state.center, Some(DEFAULT_CENTER));
}

#[test]
fn second_map_is_handed_back() {
    let (mut page, probe) = ready_page();
    let other = HeadlessMap::new(DEFAULT_CENTER, DEFAULT_ZOOM);
    let other_probe = other.clone();
    assert!(page.on_map_ready(other).is_err());
    assert!(other_probe.state().tile_layers.is_empty());
    assert_eq!(probe.state().tile_layers.len(), 1);
}

#[test]
fn two_searches_leave_one_marker_on_the_second_room() {
    let (mut page, probe) = ready_page();

    let first = page.handle_search("pa5");
    assert!(matches!(first, SearchOutcome::Located { placed: true, .. }));
    let second = page.handle_search("PB-05");
    let room = second.room().expect("located").clone();

    let shown = markers(&probe);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].label, "PB-05");
    assert_eq!(shown[0].position, LatLng::new(room.latitude, room.longitude));

    let state = probe.state();
    assert_eq!(state.center, Some(room.position()));
    assert_eq!(state.zoom, Some(CLOSE_UP_ZOOM));
    assert!(state.animated);
}

#[test]
fn marker_tooltip_uses_configured_options() {
    let (mut page, probe) = ready_page();
    page.handle_search("AUD-01");
    let shown = markers(&probe);
    assert_eq!(shown[0].tooltip, page.config().tooltip);
    assert_eq!(page.viewport().marker(), shown.first());
}

#[test]
fn not_found_keeps_the_previous_marker() {
    let (mut page, probe) = ready_page();
    page.handle_search("pa7");
    let before = markers(&probe);

    let outcome = page.handle_search("XYZ-123");
    assert_eq!(
        outcome,
        SearchOutcome::NotFound {
            term: "XYZ-123".into(),
            notice: NOT_FOUND_NOTICE.into(),
        }
    );
    assert_eq!(markers(&probe), before);
}

#[test]
fn clicking_a_suggestion_places_like_typing_it() {
    let (mut by_click, click_probe) = ready_page();
    by_click.input("lab");
    let clicked = by_click.click_suggestion(0).expect("outcome");

    let (mut by_enter, enter_probe) = ready_page();
    by_enter.input("LAB-10");
    let typed = by_enter.key(NavKey::Enter).expect("outcome");

    assert_eq!(clicked, typed);
    assert_eq!(markers(&click_probe), markers(&enter_probe));
}

#[test]
fn arrow_then_enter_searches_the_highlight() {
    let (mut page, probe) = ready_page();
    page.input("pa1");
    page.key(NavKey::ArrowDown);
    page.key(NavKey::ArrowDown);
    let outcome = page.key(NavKey::Enter).expect("outcome");
    assert_eq!(outcome.room().map(|r| r.code()), Some("PA-11"));
    assert_eq!(page.search_bar().value(), "PA-11");
    assert_eq!(markers(&probe)[0].label, "PA-11");
}

#[test]
fn search_before_map_ready_draws_nothing() {
    let mut page: MapPage<HeadlessMap> = MapPage::new(campus(), MapPageConfig::default());
    let outcome = page.handle_search("pa5");
    assert!(matches!(outcome, SearchOutcome::Located { placed: false, .. }));
    assert!(page.viewport().marker().is_none());
}

#[test]
fn menu_round_trip_restores_offset_and_invalidates_twice() {
    let (mut page, probe) = ready_page();
    let start = page.route_panel_offset();
    assert_eq!(start, 64 + 16);

    let (t1, _) = page.toggle_menu(ms(0));
    assert_eq!(t1, LayoutTransition::Menu { open: true });
    assert_eq!(page.route_panel_offset(), 260 + 16);
    let (t2, _) = page.toggle_menu(ms(10));
    assert_eq!(t2, LayoutTransition::Menu { open: false });
    assert_eq!(page.route_panel_offset(), start);

    assert_eq!(page.run_due(ms(100)), 0);
    assert_eq!(probe.state().size_invalidations, 0);
    assert_eq!(page.next_invalidation(), Some(ms(250)));

    assert_eq!(page.run_due(ms(260)), 2);
    assert_eq!(probe.state().size_invalidations, 2);
    assert_eq!(page.pending_invalidations(), 0);
}

#[test]
fn route_panel_hides_search_bar_and_collapses_menu() {
    let (mut page, _probe) = ready_page();
    page.toggle_menu(ms(0));
    assert!(page.layout().state().menu_open);
    assert!(page.search_bar_visible());

    let (t, _) = page.toggle_route_panel(ms(0));
    assert_eq!(t, LayoutTransition::RoutePanel { open: true });
    assert!(!page.search_bar_visible());
    assert!(!page.layout().state().menu_open);

    page.toggle_route_panel(ms(0));
    assert!(page.search_bar_visible());
}

#[test]
fn hidden_search_bar_closes_and_ignores_events() {
    let (mut page, probe) = ready_page();
    page.input("pa");
    assert!(page.search_bar().is_open());

    page.toggle_route_panel(ms(0));
    assert!(!page.search_bar().is_open());
    assert!(page.search_bar().visible_suggestions().is_empty());
    assert_eq!(page.search_bar().value(), "pa");

    page.input("pa5");
    page.focus();
    page.hover(0);
    assert_eq!(page.search_bar().value(), "pa");
    assert!(!page.search_bar().is_open());
    assert_eq!(page.search_bar().selected_index(), None);
    assert!(page.key(NavKey::ArrowDown).is_none());
    assert!(page.key(NavKey::Enter).is_none());
    assert!(page.submit().is_none());
    assert!(page.click_suggestion(0).is_none());
    assert_eq!(probe.state().marker_count(), 0);

    // Closing the panel brings the bar back to life.
    page.toggle_route_panel(ms(0));
    page.input("pa5");
    let outcome = page.key(NavKey::Enter).expect("outcome");
    assert_eq!(outcome.room().map(|r| r.code()), Some("PA-05"));
}

#[test]
fn transition_end_flushes_and_cancel_drops() {
    let (mut page, probe) = ready_page();
    let (_, keep) = page.toggle_menu(ms(0));
    let (_, dropped) = page.toggle_menu(ms(0));
    assert_ne!(keep, dropped);

    assert!(page.cancel_invalidation(dropped));
    assert!(!page.cancel_invalidation(dropped));
    assert_eq!(page.transition_end(), 1);
    assert_eq!(probe.state().size_invalidations, 1);
    assert_eq!(page.run_due(ms(1_000)), 0);
}

#[test]
fn teardown_destroys_the_map() {
    let (mut page, probe) = ready_page();
    page.handle_search("pa5");
    page.toggle_menu(ms(0));

    page.teardown();
    assert_eq!(page.viewport().state(), LifecycleState::Destroyed);
    assert_eq!(page.pending_invalidations(), 0);
    {
        let state = probe.state();
        assert!(state.destroyed);
        assert_eq!(state.marker_count(), 0);
        assert_eq!(state.size_invalidations, 0);
    }

    // Everything after teardown is inert.
    let outcome = page.handle_search("pa6");
    assert!(matches!(outcome, SearchOutcome::Located { placed: false, .. }));
    page.teardown();
    assert!(page.on_map_ready(HeadlessMap::default()).is_err());
}

#[test]
fn dropping_the_page_destroys_the_map() {
    let (page, probe) = ready_page();
    drop(page);
    assert!(probe.state().destroyed);
}

#[test]
fn route_panel_fields_have_placeholders_and_no_estimate() {
    let (mut page, _probe) = ready_page();
    assert_eq!(RouteField::Origin.placeholder(), "Meu local");
    assert_eq!(RouteField::Destination.placeholder(), "Local destino");

    let panel = page.route_panel_mut();
    panel.field_mut(RouteField::Destination).input("PA-05");
    assert!(panel.field(RouteField::Destination).suggestions().is_empty());
    let commit = panel.submit(RouteField::Destination).expect("commit");
    assert_eq!(commit.value, "PA-05");
    assert!(page.route_panel().estimate_route_time().is_none());
}
