// Text processing utilities

/// Preformatted text shaping for terminal display
pub mod string {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    /// Column multiple a tab advances to
    pub const TAB_STOP: usize = 8;

    /// Display width of text in terminal columns
    pub fn display_width(text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }

    /// Expand tabs and neutralize control characters in a single line.
    ///
    /// Control characters would be interpreted by the terminal instead of
    /// displayed, so they are replaced with U+FFFD.
    pub fn sanitize_line(line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut column = 0;

        for ch in line.chars() {
            match ch {
                '\t' => {
                    let pad = TAB_STOP - column % TAB_STOP;
                    out.extend(std::iter::repeat(' ').take(pad));
                    column += pad;
                }
                c if c.is_control() => {
                    out.push(char::REPLACEMENT_CHARACTER);
                    column += 1;
                }
                c => {
                    out.push(c);
                    column += c.width().unwrap_or(0);
                }
            }
        }

        out
    }

    /// Shape text into display rows no wider than `width` columns.
    ///
    /// Hard line breaks are kept, blank lines stay as empty rows and long
    /// lines are soft-wrapped. Empty text yields no rows. A glyph wider than
    /// the whole row is shown as U+FFFD so every row still fits.
    pub fn preformat(text: &str, width: usize) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let width = width.max(1);
        let options = textwrap::Options::new(width)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let mut rows = Vec::new();
        for raw in text.split('\n') {
            let line = fit_glyphs(&sanitize_line(raw.strip_suffix('\r').unwrap_or(raw)), width);
            if line.is_empty() {
                rows.push(String::new());
                continue;
            }
            rows.extend(
                textwrap::wrap(&line, &options)
                    .into_iter()
                    .map(|row| row.into_owned()),
            );
        }

        rows
    }

    fn fit_glyphs(line: &str, width: usize) -> String {
        line.chars()
            .map(|c| {
                if c.width().unwrap_or(0) > width {
                    char::REPLACEMENT_CHARACTER
                } else {
                    c
                }
            })
            .collect()
    }

    /// Pad `text` on both sides so it is centred in `width` columns
    pub fn center(text: &str, width: usize) -> String {
        let text_width = display_width(text);
        if text_width >= width {
            return text.to_string();
        }
        let left = (width - text_width) / 2;
        let right = width - text_width - left;
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }
}

#[cfg(test)]
mod tests {
    use super::string::*;

    #[test]
    fn test_preformat_single_line() {
        let rows = preformat("Patient reports mild discomfort.", 40);
        assert_eq!(rows, vec!["Patient reports mild discomfort.".to_string()]);
    }

    #[test]
    fn test_preformat_keeps_line_breaks() {
        let rows = preformat("Line one\nLine two", 40);
        assert_eq!(rows, vec!["Line one", "Line two"]);

        let rows = preformat("first\r\n\r\nthird", 40);
        assert_eq!(rows, vec!["first", "", "third"]);
    }

    #[test]
    fn test_preformat_empty() {
        assert!(preformat("", 10).is_empty());
    }

    #[test]
    fn test_preformat_wraps_to_width() {
        let rows = preformat("The quick brown fox jumps over the lazy dog", 10);
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| display_width(row) <= 10));

        let rows = preformat("abcdefghijklmnop", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ijkl", "mnop"]);
    }

    #[test]
    fn test_preformat_wide_glyphs() {
        assert_eq!(preformat("日本語", 4), vec!["日本", "語"]);

        let rows = preformat("日本語", 1);
        assert_eq!(rows, vec!["\u{FFFD}", "\u{FFFD}", "\u{FFFD}"]);
        assert!(rows.iter().all(|row| display_width(row) <= 1));
    }

    #[test]
    fn test_preformat_leaves_markup_alone() {
        let text = "<b>bold</b> & &amp; *not emphasis*";
        assert_eq!(preformat(text, 80), vec![text.to_string()]);
    }

    #[test]
    fn test_sanitize_line() {
        assert_eq!(sanitize_line("a\tb"), "a       b");
        assert_eq!(sanitize_line("\tx"), "        x");
        assert_eq!(sanitize_line("bell\u{7}"), "bell\u{FFFD}");
        assert_eq!(sanitize_line("esc\u{1b}[31m"), "esc\u{FFFD}[31m");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("x", 3), " x ");
        assert_eq!(center("x", 4), " x  ");
        assert_eq!(center("wide", 2), "wide");
    }
}
