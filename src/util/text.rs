use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
///
/// Unicode-aware: CJK and emoji occupy two columns, combining marks zero.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text was cut off.
///
/// Returns `Cow::Borrowed` when the string already fits (no allocation).
/// For widths of 3 columns or less there is no room for a character plus
/// the ellipsis, so as many characters as fit are returned without one.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    let budget = if max_width <= ELLIPSIS_WIDTH {
        max_width
    } else {
        max_width - ELLIPSIS_WIDTH
    };

    let mut byte_end = 0;
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        byte_end = idx + c.len_utf8();
    }

    if max_width <= ELLIPSIS_WIDTH {
        Cow::Owned(s[..byte_end].to_string())
    } else {
        Cow::Owned(format!("{}{}", &s[..byte_end], ELLIPSIS))
    }
}

/// Collapse all whitespace runs (including newlines) into single spaces.
///
/// Record bodies arrive with embedded newlines; table cells are one line.
pub fn flatten_whitespace(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| c.is_whitespace() && c != ' ') && !s.contains("  ") {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Derive avatar initials from a display name.
///
/// Takes the first character of each whitespace-separated token, uppercased.
/// An empty or all-whitespace name yields an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
