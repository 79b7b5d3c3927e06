//! Shared styling helpers: the color switch, category glyphs and
//! colors, star ratings, width-aware truncation.

use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthChar;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Priority (first match wins):
/// 1. `--no-color` flag (disables colors)
/// 2. `NO_COLOR` env var (any value disables colors)
/// 3. Default: colors enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

// ===== Theme =====

/// Style factory honoring the color switch.
///
/// With colors disabled only the palette is dropped; modifiers (bold,
/// reversed) survive so selection and badges stay legible in
/// monochrome.
#[derive(Debug, Clone, Copy, Default)]
pub struct Theme {
    config: ColorConfig,
}

impl Theme {
    pub fn new(config: ColorConfig) -> Self {
        Self { config }
    }

    /// Foreground-colored style, or unstyled when colors are off.
    pub fn fg(self, color: Color) -> Style {
        if self.config.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Filled badge style (dark text on a bright background); plain
    /// reversed video when colors are off.
    pub fn badge(self, fg: Color, bg: Color) -> Style {
        if self.config.colors_enabled() {
            Style::default().fg(fg).bg(bg)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }
}

/// Glyph shown next to a category tag. Unknown categories fall back to
/// a generic tag glyph.
pub fn category_glyph(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "geyim" => "👜",
        "idman" => "🏋",
        "kofe" => "☕",
        "kitab" => "📖",
        "texnologiya" => "💻",
        "təhsil" | "tehsil" => "🎓",
        "yemək" => "🍔",
        "əyləncə" => "🎭",
        "digər" => "🏷",
        _ => "🏷",
    }
}

/// Accent color for a category tag.
pub fn category_color(category: &str) -> Color {
    match category.to_lowercase().as_str() {
        "geyim" => Color::Magenta,
        "idman" => Color::Green,
        "kofe" => Color::Yellow,
        "kitab" => Color::Blue,
        "texnologiya" => Color::Cyan,
        "təhsil" | "tehsil" => Color::LightBlue,
        "yemək" => Color::Red,
        "əyləncə" => Color::LightMagenta,
        _ => Color::Gray,
    }
}

/// Build a five-slot star string from a fractional rating.
///
/// Full stars for every whole point, a half star for a remaining
/// half-point, empty stars for the rest. Malformed ratings (`None`)
/// render as zero stars.
pub fn star_rating(rating: Option<f64>) -> String {
    let value = rating.unwrap_or(0.0).clamp(0.0, 5.0);
    let mut stars = String::new();
    for slot in 1..=5 {
        let slot = slot as f64;
        if value >= slot {
            stars.push('★');
        } else if value >= slot - 0.5 {
            stars.push('⯨');
        } else {
            stars.push('☆');
        }
    }
    stars
}

/// Truncate to a display-cell budget, appending an ellipsis when cut.
///
/// Counts terminal cells rather than chars so wide glyphs (emoji,
/// CJK) do not overflow the card.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Leave one cell for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

// ===== Tests =====
