//! Layout calculations for the plotview TUI.
//!
//! Rendering and mouse hit testing both go through these functions, so a
//! click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::constants::{
    BACK_LABEL, FOOTER_HEIGHT, HEADER_HEIGHT, THUMBNAIL_COLUMNS, THUMBNAIL_HEIGHT,
};

// ============================================================================
// Layout Structs
// ============================================================================

/// Top-level screen areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Header bar with the back link and page title.
    pub header: Rect,
    /// Clickable back link inside the header.
    pub back_link: Rect,
    /// Page body.
    pub content: Rect,
    /// Key hints.
    pub footer: Rect,
}

/// Areas of the loaded detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLayout {
    /// Left column holding the gallery.
    pub gallery: Rect,
    /// Primary image (or the placeholder when there are no images).
    pub primary: Rect,
    /// One cell per visible thumbnail, in image order.
    pub thumbnails: Vec<Rect>,
    /// Right column with the listing facts.
    pub info: Rect,
}

impl DetailLayout {
    /// Index of the thumbnail under the given terminal cell.
    #[must_use]
    pub fn thumbnail_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.thumbnails
            .iter()
            .position(|cell| cell.contains(position))
    }
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Split the terminal into header, content and footer.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let header = chunks[0];
    // Inside the header border, starting one column in.
    let back_width = string_width(BACK_LABEL).min(header.width.saturating_sub(2));
    let back_link = if header.height >= 3 {
        Rect::new(header.x + 1, header.y + 1, back_width, 1)
    } else {
        Rect::default()
    };

    AppLayout {
        header,
        back_link,
        content: chunks[1],
        footer: chunks[2],
    }
}

/// Split the detail page into gallery and info columns.
///
/// The thumbnail strip only exists for two or more images. Thumbnails that
/// do not fit in the strip are omitted.
#[must_use]
pub fn calculate_detail_layout(content: Rect, image_count: usize) -> DetailLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(content);
    let gallery = columns[0];
    let info = columns[1];

    if image_count < 2 {
        return DetailLayout {
            gallery,
            primary: gallery,
            thumbnails: Vec::new(),
            info,
        };
    }

    let rows = image_count.div_ceil(THUMBNAIL_COLUMNS) as u16;
    let strip_height = (rows * THUMBNAIL_HEIGHT).min(gallery.height / 2);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(strip_height)])
        .split(gallery);
    let primary = parts[0];
    let strip = parts[1];

    DetailLayout {
        gallery,
        primary,
        thumbnails: thumbnail_cells(strip, image_count),
        info,
    }
}

fn thumbnail_cells(strip: Rect, image_count: usize) -> Vec<Rect> {
    let cell_width = strip.width / THUMBNAIL_COLUMNS as u16;
    if cell_width == 0 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(image_count);
    for index in 0..image_count {
        let row = (index / THUMBNAIL_COLUMNS) as u16;
        let column = (index % THUMBNAIL_COLUMNS) as u16;
        let y = strip.y + row * THUMBNAIL_HEIGHT;
        if y + THUMBNAIL_HEIGHT > strip.bottom() {
            break;
        }
        cells.push(Rect::new(
            strip.x + column * cell_width,
            y,
            cell_width,
            THUMBNAIL_HEIGHT,
        ));
    }
    cells
}

/// Calculate a centered popup area within a parent area.
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Display width of a string in cells, counting one per char.
#[must_use]
pub fn string_width(s: &str) -> u16 {
    s.chars().count() as u16
}

// ============================================================================
// Tests
// ============================================================================
