//! Detail panel for a loaded plot.
//!
//! The left column holds the gallery, the right column the listing facts:
//! title and status badge, address, price card, dimension cards, owner
//! card, description and the property details table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::domain::{Plot, humanize_status};
use crate::state::LoadedPlot;
use crate::theme::{HEADING_COLOR, LABEL_STYLE, VALUE_STYLE};
use crate::ui::helpers::{create_border_block, key_value_line};
use crate::ui::layout::{DetailLayout, calculate_detail_layout};
use crate::widgets::gallery::{PrimaryImage, Thumbnail};
use crate::widgets::helpers::{
    format_area, format_dimension, format_listed_date, format_owner_verified, truncate_hash,
};
use crate::widgets::{PriceDisplay, StatCard, StatusBadge};

/// Rows of the property details box including borders.
const DETAILS_HEIGHT: u16 = 6;

// ============================================================================
// Public API
// ============================================================================

/// Renders the detail page into the content area.
pub fn render(frame: &mut Frame, area: Rect, loaded: &LoadedPlot) {
    let plot = loaded.plot();
    let layout = calculate_detail_layout(area, plot.images.len());

    render_gallery(frame, &layout, loaded);
    render_info(frame, layout.info, plot);
}

// ============================================================================
// Gallery
// ============================================================================

fn render_gallery(frame: &mut Frame, layout: &DetailLayout, loaded: &LoadedPlot) {
    let images = &loaded.plot().images;
    let selected = loaded.selected_image();

    frame.render_widget(
        PrimaryImage::new(loaded.primary_image(), selected, images.len()),
        layout.primary,
    );

    for (index, cell) in layout.thumbnails.iter().enumerate() {
        frame.render_widget(
            Thumbnail::new(&images[index], index, index == selected),
            *cell,
        );
    }
}

// ============================================================================
// Info Column
// ============================================================================

fn render_info(frame: &mut Frame, area: Rect, plot: &Plot) {
    let badge = StatusBadge::new(&plot.verification_status);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // Title
            Constraint::Length(badge.height()),   // Badge
            Constraint::Length(1),                // Address
            Constraint::Length(4),                // Price
            Constraint::Length(StatCard::HEIGHT), // Length / Width / Area
            Constraint::Length(StatCard::HEIGHT), // Owner
            Constraint::Min(0),                   // Description and details
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        plot.title.clone(),
        Style::default()
            .fg(HEADING_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let badge_area = Rect {
        width: badge.width().min(chunks[1].width),
        ..chunks[1]
    };
    frame.render_widget(badge, badge_area);

    frame.render_widget(
        Paragraph::new(Span::styled(format!("⌂ {}", plot.address_line()), LABEL_STYLE)),
        chunks[2],
    );

    let price_block = create_border_block("Price", true);
    let price_inner = price_block.inner(chunks[3]);
    frame.render_widget(price_block, chunks[3]);
    frame.render_widget(
        PriceDisplay::new(plot.price, plot.price_per_sqft),
        price_inner,
    );

    render_dimension_cards(frame, chunks[4], plot);

    frame.render_widget(
        StatCard::new(
            "Owner Verified",
            format_owner_verified(plot.owner_verified),
            plot.owner_name.clone(),
        ),
        chunks[5],
    );

    render_text_sections(frame, chunks[6], plot);
}

fn render_dimension_cards(frame: &mut Frame, area: Rect, plot: &Plot) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        StatCard::new("Length", format_dimension(plot.length_ft), "ft"),
        StatCard::new("Width", format_dimension(plot.width_ft), "ft"),
        StatCard::new("Total Area", format_area(plot.area_sqft), "sq ft"),
    ];
    for (card, cell) in cards.into_iter().zip(cells.iter()) {
        frame.render_widget(card, *cell);
    }
}

fn render_text_sections(frame: &mut Frame, area: Rect, plot: &Plot) {
    let (description_area, details_area) = match plot.description() {
        Some(_) => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(DETAILS_HEIGHT)])
                .split(area);
            (Some(parts[0]), parts[1])
        }
        None => {
            let height = DETAILS_HEIGHT.min(area.height);
            (None, Rect { height, ..area })
        }
    };

    if let (Some(text), Some(section)) = (plot.description(), description_area) {
        let block = create_border_block("Description", false);
        let paragraph = Paragraph::new(text.to_string())
            .style(VALUE_STYLE)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, section);
    }

    let block = create_border_block("Property Details", false);
    let inner = block.inner(details_area);
    frame.render_widget(block, details_area);
    frame.render_widget(Paragraph::new(property_rows(plot, inner.width)), inner);
}

/// Rows of the property details box; the blockchain row only when a hash exists.
#[must_use]
pub fn property_rows(plot: &Plot, width: u16) -> Vec<Line<'static>> {
    let mut rows = vec![
        key_value_line(
            "Property Owner:",
            plot.property_owner_name.clone(),
            VALUE_STYLE,
            width,
        ),
        key_value_line("Status:", humanize_status(&plot.status), VALUE_STYLE, width),
        key_value_line(
            "Listed:",
            format_listed_date(&plot.created_at),
            VALUE_STYLE,
            width,
        ),
    ];

    if let Some(hash) = plot.blockchain_hash() {
        rows.push(key_value_line(
            "Blockchain:",
            truncate_hash(hash),
            VALUE_STYLE,
            width,
        ));
    }
    rows
}

// ============================================================================
// Tests
// ============================================================================
