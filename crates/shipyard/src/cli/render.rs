//! # Rendering Module
//!
//! Turns service results into text. Two modes:
//!
//! - **Table** (default): fixed columns, widths measured with `unicode-width`
//!   so names in any script line up, headers styled through `console`.
//! - **JSON** (`--json`): the structured value as produced by the library,
//!   pretty-printed with `serde_json`.
//!
//! Rendering never prints. Callers get a `String` and decide where it goes.

use console::Style;
use serde::Serialize;
use shipyardapp::model::Ship;
use shipyardapp::page::Page;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 9] = [
    "ID", "NAME", "PLANET", "TYPE", "PROD DATE", "SPEED", "CREW", "USED", "RATING",
];

/// Right-aligned columns (numbers).
const NUMERIC: [bool; 9] = [true, false, false, false, false, true, true, false, true];

const GAP: &str = "  ";

fn header_style() -> Style {
    Style::new().bold()
}

fn muted_style() -> Style {
    Style::new().dim()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|mut s| {
        s.push('\n');
        s
    })
}

fn cells(ship: &Ship) -> [String; 9] {
    let d = &ship.data;
    [
        ship.id.to_string(),
        d.name.clone(),
        d.planet.clone(),
        d.ship_type.to_string(),
        d.prod_date.format("%Y-%m-%d").to_string(),
        format!("{:.2}", d.speed),
        d.crew_size.to_string(),
        if d.is_used { "yes" } else { "no" }.to_string(),
        format!("{:.2}", d.rating),
    ]
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.width()));
    if right {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

/// Renders ships as an aligned table. Empty input yields a short notice.
pub fn render_table(ships: &[Ship]) -> String {
    if ships.is_empty() {
        return format!("{}\n", muted_style().apply_to("No ships found."));
    }

    let rows: Vec<[String; 9]> = ships.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let line = |row: &[String; 9]| -> String {
        row.iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths[i], NUMERIC[i]))
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string()
    };

    let header = line(&HEADERS.map(String::from));
    let mut out = format!("{}\n", header_style().apply_to(header));
    for row in &rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

/// Table plus a footer with the page position.
pub fn render_page(page: &Page<Ship>) -> String {
    let mut out = render_table(&page.items);
    let footer = format!(
        "page {} of {} ({} ships)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_items
    );
    out.push_str(&format!("{}\n", muted_style().apply_to(footer)));
    out
}

/// One ship as `field: value` lines.
pub fn render_ship(ship: &Ship) -> String {
    let labels = [
        "id", "name", "planet", "shipType", "prodDate", "speed", "crewSize", "isUsed", "rating",
    ];
    let d = &ship.data;
    let values = [
        ship.id.to_string(),
        d.name.clone(),
        d.planet.clone(),
        d.ship_type.to_string(),
        d.prod_date.to_rfc3339(),
        d.speed.to_string(),
        d.crew_size.to_string(),
        d.is_used.to_string(),
        format!("{:.2}", d.rating),
    ];
    let width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    labels
        .iter()
        .zip(values)
        .map(|(label, value)| {
            format!(
                "{} {}\n",
                header_style().apply_to(pad(&format!("{label}:"), width + 1, false)),
                value
            )
        })
        .collect()
}
