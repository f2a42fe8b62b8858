//! Label sanitization for terminal output
//!
//! Option labels may come from a user-supplied file. Control characters in
//! them (ESC sequences, bell, backspace, line breaks) would move the cursor or
//! restyle the screen when drawn, so labels are cleaned before rendering.

/// Make a label safe to draw on a single terminal row.
///
/// CSI escape sequences (`ESC [ ... letter`) are removed entirely. Tabs and
/// line breaks become spaces; every other control character is dropped.
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut chars = label.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' if chars.peek() == Some(&'[') => {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            '\t' | '\n' | '\r' => out.push(' '),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}
