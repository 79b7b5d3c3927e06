//! Offer card list.
//!
//! Renders the revealed slice of the visible set as selectable cards,
//! with a "show more" footer while more items remain.

use crate::model::Offer;
use crate::sanitize::clean_text;
use crate::state::BrowserState;
use crate::view::styles::{category_color, category_glyph, star_rating, truncate_to_width, Theme};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

/// Render the card list with the given selection index.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    state: &BrowserState,
    selected: usize,
    theme: Theme,
) {
    let shown = state.shown_len();
    let title = format!(" Nəticələr ({} / {}) ", shown, state.visible_len());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.visible_len() == 0 {
        frame.render_widget(
            Paragraph::new("Heç bir endirim tapılmadı.").style(theme.fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    let footer_height = u16::from(state.has_more());
    let list_area = Rect {
        height: inner.height.saturating_sub(footer_height),
        ..inner
    };

    let width = usize::from(list_area.width).saturating_sub(2);
    let items: Vec<ListItem> = state
        .shown()
        .map(|offer| card_item(offer, width, theme))
        .collect();
    let mut list_state = ListState::default();
    list_state.select(Some(selected.min(shown.saturating_sub(1))));

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    frame.render_stateful_widget(list, list_area, &mut list_state);

    if state.has_more() && inner.height > 0 {
        let footer = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new("m: daha çox göstər")
                .style(theme.fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            footer,
        );
    }
}

/// Build the multi-line card body for one offer, clipped to `width`
/// display cells.
fn card_item(offer: &Offer, width: usize, theme: Theme) -> ListItem<'static> {
    let title_line = Line::from(vec![
        Span::styled(
            clean_text(&offer.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(star_rating(offer.rating_value()), theme.fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} ENDİRİM", clean_text(&offer.discount_amount)),
            theme.badge(Color::Black, Color::LightRed),
        ),
    ]);

    let tag_line = Line::from(vec![
        Span::styled(
            format!("{} {}", category_glyph(&offer.category), clean_text(&offer.category)),
            theme.fg(category_color(&offer.category)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("📍 {}", clean_text(&offer.location)),
            theme.fg(Color::Gray),
        ),
    ]);

    let requirement = if offer.plus_tier {
        "Tələbə+ kartı tələb olunur"
    } else {
        "Tələbə kartı tələb olunur"
    };

    let body = Line::from(Span::styled(
        truncate_to_width(&clean_text(&offer.desktop_description), width),
        theme.fg(Color::DarkGray),
    ));

    let footer = Line::from(Span::styled(
        format!("✓ {requirement}"),
        theme.fg(Color::Green),
    ));

    ListItem::new(Text::from(vec![title_line, tag_line, body, footer, Line::default()]))
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(plus: bool) -> Offer {
        serde_json::from_str(&format!(
            r#"{{
                "id": "1",
                "title": "Coffee Lab",
                "category": "kofe",
                "location": "Nizami",
                "discount_amount": "20%",
                "rating": "4.5",
                "desktop_description": "Specialty coffee",
                "telebe+": {plus}
            }}"#
        ))
        .unwrap()
    }

    // Debug output carries the span contents, which is enough for
    // substring assertions.
    fn item_text(item: &ListItem) -> String {
        format!("{item:?}")
    }

    #[test]
    fn card_mentions_title_and_badge() {
        let text = item_text(&card_item(&offer(false), 60, Theme::default()));
        assert!(text.contains("Coffee Lab"));
        assert!(text.contains("20% ENDİRİM"));
    }

    #[test]
    fn plus_tier_changes_requirement_line() {
        let plain = item_text(&card_item(&offer(false), 60, Theme::default()));
        let plus = item_text(&card_item(&offer(true), 60, Theme::default()));
        assert!(plain.contains("Tələbə kartı"));
        assert!(plus.contains("Tələbə+ kartı"));
    }
}
