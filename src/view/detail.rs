//! Offer detail overlay.
//!
//! Populated from the detail record when one exists; otherwise a
//! fallback body is shown so a lookup miss never blocks the user.

use crate::model::OfferDetail;
use crate::sanitize::{clean_text, safe_url};
use crate::state::DetailModalState;
use crate::view::styles::Theme;
use chrono::Utc;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the overlay for the open offer, if any.
pub fn render_detail_overlay(
    frame: &mut Frame,
    area: Rect,
    modal: &DetailModalState,
    detail: Option<&OfferDetail>,
    theme: Theme,
) {
    if !modal.is_visible() {
        return;
    }

    let popup = centered(area, 80, 80);
    frame.render_widget(Clear, popup);

    let (title, lines) = match detail {
        Some(detail) => (
            format!(" {} ", clean_text(&detail.title)),
            detail_lines(detail, theme),
        ),
        None => (" Ətraflı ".to_string(), fallback_lines(theme)),
    };

    let visible: Vec<Line> = lines.into_iter().skip(modal.scroll_offset()).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(" Esc: bağla  j/k: sürüşdür ");
    frame.render_widget(Paragraph::new(visible).block(block), popup);
}

/// Total content height, used by the shell to clamp scrolling. Styling
/// never changes the line count, so any theme gives the same answer.
pub fn content_height(detail: Option<&OfferDetail>) -> usize {
    let theme = Theme::default();
    match detail {
        Some(detail) => detail_lines(detail, theme).len(),
        None => fallback_lines(theme).len(),
    }
}

fn detail_lines(detail: &OfferDetail, theme: Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let mut headline = vec![Span::styled(
        format!("{} ENDİRİM", clean_text(&detail.discount_amount)),
        theme.badge(Color::Black, Color::LightRed),
    )];
    if let Some(rating) = &detail.rating {
        headline.push(Span::raw("  "));
        headline.push(Span::styled(
            format!("★ {}", clean_text(rating)),
            theme.fg(Color::Yellow),
        ));
    }
    if let Some(reviews) = &detail.reviews {
        headline.push(Span::styled(
            format!(" ({} rəy)", clean_text(reviews)),
            theme.fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(headline));

    if let Some(location) = detail.primary_location() {
        lines.push(Line::from(Span::styled(
            format!("📍 {}", clean_text(location)),
            theme.fg(Color::Gray),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(clean_text(&detail.description)));
    if let Some(note) = &detail.sub_description {
        lines.push(Line::from(Span::styled(
            clean_text(note),
            theme.fg(Color::DarkGray),
        )));
    }
    lines.push(Line::default());

    if !detail.requirements.is_empty() {
        lines.push(section("Şərtlər"));
        for requirement in &detail.requirements {
            lines.push(Line::from(format!("  ✔ {}", clean_text(requirement))));
        }
        lines.push(Line::default());
    }

    if !detail.contact_info.is_empty() {
        lines.push(section("Əlaqə"));
        for contact in &detail.contact_info {
            let value = clean_text(safe_url(&contact.value));
            lines.push(Line::from(format!("  {} {}", contact.kind.glyph(), value)));
        }
        lines.push(Line::default());
    }

    if let Some(validity) = detail.validity_text() {
        lines.push(section("Etibarlıdır"));
        let mut spans = vec![Span::raw(format!("  {validity}"))];
        if detail.is_expired(Utc::now().date_naive()) {
            spans.push(Span::styled("  (vaxtı bitib)", theme.fg(Color::Red)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    if !detail.locations.is_empty() {
        lines.push(section("Filiallar"));
        for branch in &detail.locations {
            lines.push(Line::from(format!("  📍 {}", clean_text(branch))));
        }
    }

    lines
}

fn fallback_lines(theme: Theme) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            "Bu endirim üçün ətraflı məlumat hələ əlavə olunmayıb.",
            theme.fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Kartdakı məlumatlar keçərlidir.",
            theme.fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Centered sub-rectangle taking the given percentages of the area.
/// The multiply runs in `u32` so very wide terminals cannot overflow.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y) / 100) as u16;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

// ===== Tests =====
