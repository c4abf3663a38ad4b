//! CLI commands for route and theme inspection

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use navrail_core::{ColorScheme, Preferences, FOOTER_NAV, PRIMARY_NAV};

/// Resolve the scheme a command should use.
/// Precedence: flag/env override, then the preference file, then the default.
pub fn effective_scheme(flag: Option<ColorScheme>) -> ColorScheme {
    let prefs = Preferences::default_dir()
        .map(|dir| Preferences::load(&dir))
        .unwrap_or_default();
    resolve_scheme(flag, &prefs)
}

fn resolve_scheme(flag: Option<ColorScheme>, prefs: &Preferences) -> ColorScheme {
    flag.unwrap_or(prefs.color_scheme)
}

/// Format the navigation route tables (human or JSON)
pub fn format_routes(json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(&serde_json::json!({
            "primary": PRIMARY_NAV,
            "footer": FOOTER_NAV,
        }))
        .unwrap_or_else(|_| "{}".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Title", "Icon", "Path", "Section"]);
    } else {
        table.set_header(vec![
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Icon").fg(Color::Cyan),
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Section").fg(Color::Cyan),
        ]);
    }

    for entry in PRIMARY_NAV {
        table.add_row(Row::from(vec![entry.title, entry.icon, entry.path, "primary"]));
    }
    for entry in FOOTER_NAV {
        table.add_row(Row::from(vec![entry.title, entry.icon, entry.path, "footer"]));
    }

    table.to_string()
}

/// Format a scheme's color roles (human or JSON)
pub fn format_palette(scheme: ColorScheme, json: bool, no_color: bool) -> String {
    let roles = scheme.palette().roles();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = roles
            .iter()
            .map(|(role, value)| ((*role).to_string(), serde_json::Value::from(*value)))
            .collect();
        return serde_json::to_string_pretty(&serde_json::json!({
            "scheme": scheme.as_str(),
            "roles": map,
        }))
        .unwrap_or_else(|_| "{}".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Role", "Value"]);
    } else {
        table.set_header(vec![
            Cell::new("Role").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);
    }

    for (role, value) in roles {
        table.add_row(Row::from(vec![role, value]));
    }

    format!("Color roles for the {scheme} scheme:\n{table}")
}

/// Show or persist the preferred color scheme
pub fn run_theme(scheme: Option<ColorScheme>) -> Result<String> {
    let dir = Preferences::default_dir()?;
    match scheme {
        Some(color_scheme) => {
            Preferences { color_scheme }.save(&dir)?;
            Ok(format!("Preferred color scheme set to {color_scheme}"))
        }
        None => Ok(Preferences::load(&dir).color_scheme.to_string()),
    }
}
