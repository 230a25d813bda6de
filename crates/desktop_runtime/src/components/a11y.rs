//! Keyboard focus helpers for menus, icons, and window frames.

use wasm_bindgen::JsCast;

const MENU_ITEM_SELECTOR: &str = r#"[role="menuitem"]:not([disabled])"#;

fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an element by id and reports whether it was found.
pub(super) fn focus_element_by_id(id: &str) -> bool {
    match html_element_by_id(id) {
        Some(element) => element.focus().is_ok(),
        None => false,
    }
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = html_element_by_id(menu_id) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(MENU_ITEM_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Focuses the first enabled item of a menu.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    menu_items(menu_id)
        .first()
        .is_some_and(|item| item.focus().is_ok())
}

/// Index reached by moving `delta` steps from `current` in a ring of `len` items.
fn wrapped_index(current: usize, delta: i32, len: usize) -> usize {
    let len = len as i32;
    (current as i32 + delta).rem_euclid(len) as usize
}

/// Arrow and Home/End navigation inside a menu. Returns whether the key was consumed.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let items = menu_items(menu_id);
    if items.is_empty() {
        return false;
    }
    let active_id = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id)
        .unwrap_or(0);

    let target = match ev.key().as_str() {
        "ArrowDown" => wrapped_index(current, 1, items.len()),
        "ArrowUp" => wrapped_index(current, -1, items.len()),
        "Home" => 0,
        "End" => items.len() - 1,
        _ => return false,
    };
    let _ = items[target].focus();
    ev.prevent_default();
    ev.stop_propagation();
    true
}

/// Enter and Space activate focused icons and buttons.
pub(super) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
