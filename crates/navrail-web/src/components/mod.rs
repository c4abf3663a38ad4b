//! Leptos UI components

mod icons;
mod nav_menu;
mod sidebar;
mod theme_toggle;

pub use icons::Icon;
pub use nav_menu::NavMenu;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
