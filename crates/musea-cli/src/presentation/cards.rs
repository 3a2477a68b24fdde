//! Result cards, navigation and the detail view.
//!
//! Renderers return strings; handlers decide where to print them.

use std::fmt::Write;

use musea_core::{
    ArtworkDetail, ArtworkSummary, BrowsePage, CatalogProvider, NavAction, Navigation,
};

use super::tables::{fit_to_width, format_optional, separator};

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Width of one card column, in characters.
pub const CARD_WIDTH: usize = 30;

const COLUMN_GAP: &str = "  ";

/// "25 results for “bird”. Page 3 / 3."
pub fn results_line(page: &BrowsePage) -> String {
    format!(
        "{} results for “{}”. Page {} / {}.",
        page.pagination.total_items, page.query, page.page, page.pagination.total_pages
    )
}

/// Card heading, "Untitled" when the record has none.
pub fn card_title(summary: &ArtworkSummary) -> &str {
    summary.title.as_deref().unwrap_or("Untitled")
}

/// "artist · date · culture", skipping absent parts. Artist defaults to
/// "Unknown artist".
pub fn card_caption(summary: &ArtworkSummary) -> String {
    let artist = summary.artist.as_deref().unwrap_or("Unknown artist");
    std::iter::once(artist)
        .chain(summary.date_display.as_deref())
        .chain(summary.culture.as_deref())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Label of the link to the collection's own page.
pub const fn link_label(provider: CatalogProvider) -> &'static str {
    match provider {
        CatalogProvider::Met => "↗ View on The Met",
        CatalogProvider::ArtInstitute => "↗ View on the Art Institute",
    }
}

fn card_lines(item: &ArtworkDetail) -> [String; 4] {
    let summary = &item.summary;
    [
        format!("#{}", summary.id),
        card_title(summary).to_string(),
        card_caption(summary),
        summary
            .image_url()
            .unwrap_or("No image available.")
            .to_string(),
    ]
}

/// Lay cards out in rows of [`GRID_COLUMNS`].
pub fn render_grid(items: &[ArtworkDetail]) -> String {
    let mut out = String::new();
    for row in items.chunks(GRID_COLUMNS) {
        let cards: Vec<[String; 4]> = row.iter().map(card_lines).collect();
        for line in 0..4 {
            let cells: Vec<String> = cards
                .iter()
                .map(|card| fit_to_width(&card[line], CARD_WIDTH))
                .collect();
            let _ = writeln!(out, "{}", cells.join(COLUMN_GAP).trim_end());
        }
        out.push('\n');
    }
    out
}

/// Enabled controls only; disabled ones are not offered.
pub fn nav_line(navigation: &Navigation) -> String {
    let controls: Vec<String> = [
        (NavAction::First, "⏮ First"),
        (NavAction::Previous, "◀ Prev"),
        (NavAction::Next, "Next ▶"),
    ]
    .into_iter()
    .filter_map(|(action, label)| {
        navigation
            .target(action)
            .map(|target| format!("{label} ({target})"))
    })
    .collect();

    if controls.is_empty() {
        "No other pages.".to_string()
    } else {
        controls.join("   ")
    }
}

/// One full render cycle: summary line, notices, cards, links, navigation.
pub fn render_page(page: &BrowsePage) -> String {
    let width = CARD_WIDTH * GRID_COLUMNS + COLUMN_GAP.len() * (GRID_COLUMNS - 1);
    let mut out = String::new();

    let _ = writeln!(out, "{}", results_line(page));
    for notice in &page.notices {
        let _ = writeln!(out, "⚠ {notice}");
    }
    let _ = writeln!(out, "{}", separator(width));

    if page.is_empty() {
        let _ = writeln!(out, "No artworks found.");
    } else {
        out.push_str(&render_grid(&page.items));
        for item in &page.items {
            if let Some(url) = &item.summary.web_url {
                let _ = writeln!(out, "#{} {} {url}", item.id(), link_label(page.provider));
            }
        }
    }

    let _ = writeln!(out, "{}", separator(width));
    let _ = writeln!(out, "{}", nav_line(&page.navigation));
    out
}

/// Every known field of one artwork.
pub fn render_detail(detail: &ArtworkDetail, provider: CatalogProvider) -> String {
    let summary = &detail.summary;
    let rows: [(&str, Option<&str>); 10] = [
        ("Artist", summary.artist.as_deref()),
        ("Date", summary.date_display.as_deref()),
        ("Culture", summary.culture.as_deref()),
        ("Medium", summary.medium.as_deref()),
        ("Dimensions", detail.dimensions.as_deref()),
        ("Classification", detail.classification.as_deref()),
        ("Place of origin", detail.place_of_origin.as_deref()),
        ("Credit line", detail.credit_line.as_deref()),
        ("Provenance", detail.provenance.as_deref()),
        ("Image", summary.image_url()),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", card_title(summary), summary.id);
    let _ = writeln!(out, "{}", separator(40));
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<16}{}", format_optional(value, "—"));
    }
    let public_domain = if detail.is_public_domain() { "yes" } else { "no" };
    let _ = writeln!(out, "{:<16}{public_domain}", "Public domain");
    if let Some(url) = &summary.web_url {
        let _ = writeln!(out, "{} {url}", link_label(provider));
    }
    out
}
