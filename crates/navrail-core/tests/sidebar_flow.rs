//! Walks the sidebar's interaction surface end to end

use navrail_core::{all_entries, ColorScheme, SidebarState, BRAND_TITLE, FOOTER_NAV, PRIMARY_NAV};

#[test]
fn test_select_while_closed_then_open_then_swap_theme() {
    let mut state = SidebarState::new(ColorScheme::Dark);
    assert_eq!(state.active_title, "Home");
    assert!(!state.open);

    // Selecting an entry highlights it without opening the panel
    state.activate("Costs");
    assert!(state.is_active("Costs"));
    assert!(!state.open);

    // Opening reveals the logo label and every entry label
    state.toggle_open();
    assert!(state.open);
    assert_eq!(BRAND_TITLE, "TensorFlow");
    assert_eq!(PRIMARY_NAV.len(), 6);
    assert_eq!(FOOTER_NAV.len(), 2);

    // Swapping the theme re-derives every color and touches nothing else
    let dark_palette = state.palette();
    state.toggle_scheme();
    let light_palette = state.palette();
    for ((role, dark_value), (_, light_value)) in
        dark_palette.roles().iter().zip(light_palette.roles().iter())
    {
        assert_ne!(dark_value, light_value, "role {role} did not change");
    }
    assert!(state.is_active("Costs"));
    assert!(state.open);
}

#[test]
fn test_every_entry_can_take_the_highlight() {
    let mut state = SidebarState::default();
    for entry in all_entries() {
        state.activate(entry.title);
        assert_eq!(state.active_title, entry.title);
        assert_eq!(
            all_entries().filter(|e| state.is_active(e.title)).count(),
            1
        );
    }
}

#[test]
fn test_double_toggles_are_identity() {
    let mut state = SidebarState::new(ColorScheme::Light);
    state.activate("Payments");
    let snapshot = state;

    state.toggle_open();
    state.toggle_open();
    assert_eq!(state, snapshot);

    state.toggle_scheme();
    state.toggle_scheme();
    assert_eq!(state, snapshot);
}
