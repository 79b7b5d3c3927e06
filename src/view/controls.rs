//! Filter control bar.
//!
//! The chip row, the search box and the dropdown labels are all
//! redundant views of the same `FilterState`; everything here renders
//! from a `ControlSync` snapshot so the widgets can never disagree.

use crate::state::{ControlSync, SortMode};
use crate::view::styles::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Whether the search box currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    Inactive,
    Active,
}

/// Render the two-line control bar: search box on top, chips below.
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    sync: &ControlSync,
    focus: SearchFocus,
    theme: Theme,
) {
    let block = Block::default().borders(Borders::ALL).title(" Endirimlər ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let search_line = search_line(sync, focus, theme);
    frame.render_widget(Paragraph::new(search_line), Rect { height: 1, ..inner });

    if inner.height > 1 {
        let chips = chip_line(sync, theme);
        let chips_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new(chips), chips_area);
    }
}

fn search_line(sync: &ControlSync, focus: SearchFocus, theme: Theme) -> Line<'static> {
    let style = match focus {
        SearchFocus::Active => theme.fg(Color::Yellow),
        SearchFocus::Inactive => theme.fg(Color::DarkGray),
    };
    let text = if sync.search_text.is_empty() && focus == SearchFocus::Inactive {
        "axtarış üçün / bas".to_string()
    } else {
        sync.search_text.clone()
    };
    let cursor = if focus == SearchFocus::Active { "▏" } else { "" };
    Line::from(vec![
        Span::styled("🔍 ", Style::default()),
        Span::styled(format!("{text}{cursor}"), style),
    ])
}

fn chip_line(sync: &ControlSync, theme: Theme) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(chip("Bütün endirimlər", sync.all_chip_active, theme));
    spans.push(Span::raw(" "));
    spans.push(chip(
        SortMode::HighestDiscount.label(),
        !sync.all_chip_active && sync.sort == SortMode::HighestDiscount,
        theme,
    ));
    spans.push(Span::raw(" "));
    spans.push(chip(
        SortMode::HighestRating.label(),
        !sync.all_chip_active && sync.sort == SortMode::HighestRating,
        theme,
    ));
    spans.push(Span::raw(" "));
    spans.push(chip(
        &format!("{} ▾", sync.location_label()),
        sync.location != crate::state::filter::LOCATION_ALL,
        theme,
    ));

    if let Some(category) = &sync.category {
        spans.push(Span::raw(" "));
        spans.push(chip(category, true, theme));
    }

    Line::from(spans)
}

fn chip(label: &str, active: bool, theme: Theme) -> Span<'static> {
    let style = if active {
        theme
            .badge(Color::Black, Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.fg(Color::Gray)
    };
    Span::styled(format!("[{label}]"), style)
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_default() -> ControlSync {
        ControlSync {
            search_text: String::new(),
            category: None,
            sort: SortMode::HighestDiscount,
            location: "all".to_string(),
            all_chip_active: true,
        }
    }

    #[test]
    fn default_state_activates_all_chip_only() {
        let line = chip_line(&sync_default(), Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("Bütün endirimlər"));
        assert!(text.contains("Məkan"));
    }

    #[test]
    fn location_label_shows_selection() {
        let sync = ControlSync {
            location: "nəsimi".to_string(),
            all_chip_active: false,
            ..sync_default()
        };
        assert_eq!(sync.location_label(), "nəsimi");
    }

    #[test]
    fn active_chip_keeps_no_palette_when_colors_off() {
        use crate::view::styles::ColorConfig;
        let theme = Theme::new(ColorConfig::from_env_and_args(true));
        let span = chip("Bütün endirimlər", true, theme);
        assert_eq!(span.style.fg, None);
        assert_eq!(span.style.bg, None);
        assert!(span.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn search_line_shows_placeholder_when_idle() {
        let line = search_line(&sync_default(), SearchFocus::Inactive, Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("axtarış"));
    }

    #[test]
    fn search_line_shows_term_when_active() {
        let sync = ControlSync {
            search_text: "kofe".to_string(),
            ..sync_default()
        };
        let line = search_line(&sync, SearchFocus::Active, Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("kofe"));
    }
}
