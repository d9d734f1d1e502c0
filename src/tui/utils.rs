use ratatui::layout::Rect;

/// Layout utilities for TUI components
pub mod layout {
    use super::*;

    /// Create a centered rectangle with given width and height, clamped to `area`
    pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Scale a dimension by a percentage, keeping at least `min` and at most `max`
    pub fn scaled(total: u16, percent: u16, min: u16) -> u16 {
        let scaled = (u32::from(total) * u32::from(percent.min(100)) / 100) as u16;
        scaled.max(min).min(total)
    }

    /// Check whether a terminal cell lies inside `rect`
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
    }
}

/// Buffer inspection helpers
pub mod buffer {
    use ratatui::buffer::Buffer;
    use unicode_width::UnicodeWidthStr;

    /// Plain text of one row of `area`, wide glyph continuation cells skipped
    pub fn row_text(buffer: &Buffer, area: ratatui::layout::Rect, row: u16) -> String {
        let mut text = String::new();
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buffer.get(x, row).symbol();
            skip = symbol.width().saturating_sub(1);
            text.push_str(symbol);
        }
        text
    }

    /// Plain text of the whole buffer, one line per row, trailing blanks trimmed
    pub fn to_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            out.push_str(row_text(buffer, area, y).trim_end());
            out.push('\n');
        }
        out
    }
}
