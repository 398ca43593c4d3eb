use ratatui::prelude::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Center a box of at most `w` x `h` cells inside `area`.
///
/// Output:
/// - A rect clamped to `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Keep the tail of `text` so it fits in `width` terminal cells.
///
/// Inputs:
/// - `text`: Text to fit (may contain wide glyphs such as `×` or `÷`).
/// - `width`: Available cells.
///
/// Output:
/// - `text` unchanged when it fits, otherwise `…` followed by the longest suffix that fits.
///
/// Details:
/// - Long operands grow to the left like a pocket calculator, so the start is dropped.
#[must_use]
pub fn fit_tail(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut used = 0usize;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        start = idx;
    }
    format!("…{}", &text[start..])
}
