mod common;

use common::campus;
use roomfinder_core::prelude::*;
use roomfinder_core::selector::SelectorState;

/// A box over the campus index showing at most three rows.
fn search_box() -> SuggestionSelector {
    let resolver = SearchResolver::new(campus()).with_limit(3);
    SuggestionSelector::new(SuggestionSource::From(resolver))
}

#[test]
fn arrow_down_walks_and_wraps() {
    let mut sel = search_box();
    sel.input("pa");
    assert_eq!(sel.suggestions().len(), 3);
    assert_eq!(sel.selected_index(), None);

    let mut seen = Vec::new();
    for _ in 0..4 {
        assert!(sel.key(NavKey::ArrowDown).is_none());
        seen.push(sel.selected_index());
    }
    assert_eq!(seen, [Some(0), Some(1), Some(2), Some(0)]);
}

#[test]
fn arrow_up_from_nothing_selects_the_last_row() {
    let mut sel = search_box();
    sel.input("pa");
    sel.key(NavKey::ArrowUp);
    assert_eq!(sel.selected_index(), Some(2));
    sel.key(NavKey::ArrowUp);
    assert_eq!(sel.selected_index(), Some(1));
    sel.key(NavKey::ArrowDown);
    sel.key(NavKey::ArrowDown);
    assert_eq!(sel.selected_index(), Some(0));
}

#[test]
fn arrows_do_nothing_without_rows() {
    let mut sel = search_box();
    sel.input("zzz");
    assert!(sel.suggestions().is_empty());
    sel.key(NavKey::ArrowDown);
    sel.key(NavKey::ArrowUp);
    assert_eq!(sel.selected_index(), None);
    assert_eq!(sel.state(), SelectorState::Idle);
}

#[test]
fn typing_resets_the_highlight() {
    let mut sel = search_box();
    sel.input("pa");
    sel.key(NavKey::ArrowDown);
    sel.key(NavKey::ArrowDown);
    assert_eq!(sel.selected_index(), Some(1));

    sel.input("pa1");
    assert_eq!(sel.selected_index(), None);
    assert!(sel.selected().is_none());
}

#[test]
fn enter_commits_the_highlighted_row() {
    let mut sel = search_box();
    sel.input("pa");
    sel.key(NavKey::ArrowDown);
    sel.key(NavKey::ArrowDown);

    let commit = sel.key(NavKey::Enter).expect("commit");
    assert_eq!(
        commit,
        Commit {
            value: "PA-02".into(),
            kind: CommitKind::Suggestion,
        }
    );
    assert_eq!(sel.value(), "PA-02");
    assert!(!sel.is_open());
    assert_eq!(sel.selected_index(), None);
}

#[test]
fn enter_without_highlight_commits_trimmed_text() {
    let mut sel = search_box();
    sel.input("  pa5 ");
    let commit = sel.key(NavKey::Enter).expect("commit");
    assert_eq!(commit.value, "pa5");
    assert_eq!(commit.kind, CommitKind::Typed);
    // The box keeps what the user typed.
    assert_eq!(sel.value(), "  pa5 ");
    assert!(!sel.is_open());
}

#[test]
fn blank_input_commits_nothing() {
    let mut sel = search_box();
    sel.input("   ");
    assert!(sel.key(NavKey::Enter).is_none());
    assert!(sel.submit().is_none());
}

#[test]
fn hover_and_leave_share_the_keyboard_highlight() {
    let mut sel = search_box();
    sel.input("pa");
    sel.hover(2);
    assert_eq!(sel.selected().map(|s| s.value.as_str()), Some("PA-03"));

    // Keyboard continues from where the mouse left it.
    sel.key(NavKey::ArrowDown);
    assert_eq!(sel.selected_index(), Some(0));

    sel.leave();
    assert_eq!(sel.selected_index(), None);

    // Out of range hover is ignored.
    sel.hover(7);
    assert_eq!(sel.selected_index(), None);
}

#[test]
fn clicking_a_row_commits_it() {
    let mut sel = search_box();
    sel.input("lab");
    let commit = sel.click(0).expect("commit");
    assert_eq!(commit.value, "LAB-10");
    assert_eq!(commit.kind, CommitKind::Suggestion);
    assert!(sel.click(5).is_none());
}

#[test]
fn click_outside_closes_but_keeps_text() {
    let mut sel = search_box();
    sel.input("pa");
    assert_eq!(sel.state(), SelectorState::Browsing);
    assert_eq!(sel.visible_suggestions().len(), 3);

    sel.click_outside();
    assert_eq!(sel.state(), SelectorState::Idle);
    assert!(sel.visible_suggestions().is_empty());
    assert_eq!(sel.value(), "pa");

    sel.focus();
    assert_eq!(sel.state(), SelectorState::Browsing);
}

#[test]
fn arrows_move_the_highlight_without_reopening() {
    let mut sel = search_box();
    sel.input("pa");
    sel.click_outside();

    sel.key(NavKey::ArrowDown);
    assert!(!sel.is_open());
    assert_eq!(sel.selected_index(), Some(0));
    sel.key(NavKey::ArrowUp);
    assert!(!sel.is_open());
    assert_eq!(sel.selected_index(), Some(2));
    assert!(sel.visible_suggestions().is_empty());

    // Enter still commits the (hidden) highlight.
    let commit = sel.key(NavKey::Enter).expect("commit");
    assert_eq!(commit.value, "PA-03");
}
