//! Logging helpers for player-typed input, so a stray control character or a
//! pasted wall of text cannot break single-line log output.

/// Longest input preview written to the log.
const MAX_PREVIEW: usize = 120;

/// Escape raw player input for single-line logging.
///
/// Newlines, tabs and backslashes get their usual escapes, other control
/// characters are written as `\u{..}`, and anything past the preview limit
/// is replaced by an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    let mut chars = s.chars();
    for ch in chars.by_ref().take(MAX_PREVIEW) {
        match ch {
            '\n' | '\r' | '\t' | '\\' => out.extend(ch.escape_default()),
            c if c.is_control() => out.extend(c.escape_unicode()),
            c => out.push(c),
        }
    }
    if chars.next().is_some() {
        out.push('…');
    }
    out
}
