/// Deterministic, backend-independent label metrics.
///
/// Layout must not depend on which rendering backend is compiled in, so
/// text extents are estimated from per-character width classes instead
/// of being measured by Pango. The estimate always consumes the string
/// it is asked about.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_size_px
}

/// Constant line height used for horizontal-axis label rows.
///
/// Height does not vary with string content, only with font size; the
/// two extra pixels are breathing room below the glyph box.
#[must_use]
pub fn label_line_height_px(font_size_px: f64) -> f64 {
    font_size_px + 2.0
}
