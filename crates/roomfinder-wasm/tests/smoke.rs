use wasm_bindgen_test::*;

use roomfinder_wasm::{get_room_count, route_panel_offset, suggest_rooms};

#[wasm_bindgen_test]
fn embedded_table_has_rooms() {
    #[cfg(target_arch = "wasm32")]
    roomfinder_wasm::start();

    let count = get_room_count().expect("room table");
    assert!(count > 0, "expected at least one room, got {count}");
}

#[wasm_bindgen_test]
fn finds_shorthand_code() {
    let room = roomfinder_wasm::find_room("pa5").expect("lookup");
    assert!(!room.is_null());

    let missing = roomfinder_wasm::find_room("XYZ-123").expect("lookup");
    assert!(missing.is_null());
}

#[wasm_bindgen_test]
fn suggestions_are_an_array() {
    let rows = suggest_rooms("pa", Some(3)).expect("suggest");
    assert!(js_sys::Array::is_array(&rows));
    assert_eq!(js_sys::Array::from(&rows).length(), 3);
}

#[wasm_bindgen_test]
fn offset_follows_menu_state() {
    assert_eq!(route_panel_offset(true), 276);
    assert_eq!(route_panel_offset(false), 80);
}
