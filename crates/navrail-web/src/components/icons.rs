//! Icon registry with inline Lucide-style SVG glyphs
//!
//! Routes reference icons by logical name; this module is the resolver. An
//! unknown name renders the placeholder glyph rather than failing.

use leptos::prelude::*;

const HOUSE: &[&str] = &[
    "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8",
    "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
];

const CHART_LINE: &[&str] = &["M3 3v16a2 2 0 0 0 2 2h16", "m19 9-5 5-4-4-3 3"];

const CHART_COLUMN: &[&str] = &[
    "M3 3v16a2 2 0 0 0 2 2h16",
    "M18 17V9",
    "M13 17V5",
    "M8 17v-3",
];

const WALLET: &[&str] = &[
    "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
    "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
];

const CHART_PIE: &[&str] = &["M21.21 15.89A10 10 0 1 1 8 2.83", "M22 12A10 10 0 0 0 12 2v10z"];

const ENVELOPE: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

const SLIDERS: &[&str] = &[
    "M21 4h-7", "M10 4H3", "M21 12h-9", "M8 12H3", "M21 20h-5", "M12 20H3", "M14 2v4",
    "M8 10v4", "M16 18v4",
];

const PHONE_VOLUME: &[&str] = &[
    "M15.05 5A5 5 0 0 1 19 8.95",
    "M15.05 1A9 9 0 0 1 23 8.94",
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
];

const ANGLE_LEFT: &[&str] = &["m15 18-6-6 6-6"];

const ANGLE_RIGHT: &[&str] = &["m9 18 6-6-6-6"];

// Circled question mark shown for unregistered names
const PLACEHOLDER: &[&str] = &[
    "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20",
    "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
    "M12 17h.01",
];

/// Resolve a logical icon name to its glyph path data.
pub fn glyph_paths(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "house" => Some(HOUSE),
        "chart-line" => Some(CHART_LINE),
        "chart-column" => Some(CHART_COLUMN),
        "wallet" => Some(WALLET),
        "chart-pie" => Some(CHART_PIE),
        "envelope" => Some(ENVELOPE),
        "sliders" => Some(SLIDERS),
        "phone-volume" => Some(PHONE_VOLUME),
        "angle-left" => Some(ANGLE_LEFT),
        "angle-right" => Some(ANGLE_RIGHT),
        _ => None,
    }
}

/// Inline SVG icon resolved by logical name
#[component]
pub fn Icon(name: &'static str) -> impl IntoView {
    let paths = glyph_paths(name).unwrap_or(PLACEHOLDER);

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="18"
            height="18"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|&d| view! { <path d=d /> }).collect_view()}
        </svg>
    }
}
