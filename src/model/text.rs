//! Cleanup for player-supplied names and notes. By "tainted" we mean
//! untrusted user input headed for other players' reports.

/// Replace problematic characters with an underscore, collapsing runs of
/// replacements into a single one.
///
/// The denylist (`\`, `<`, `>`, `%`) covers markup and escape tricks; other
/// non-printable characters get the same treatment. Runs of whitespace
/// collapse to a single space.
pub fn sanitize(s: &str) -> String {
    let mut dst = String::with_capacity(s.len());
    let mut prior: Option<char> = None;
    for c in s.chars() {
        match c {
            '\\' | '<' | '>' | '%' => {
                if prior != Some('_') {
                    dst.push('_');
                    prior = Some('_');
                }
            }
            ' ' => {
                if prior != Some(' ') {
                    dst.push(' ');
                    prior = Some(' ');
                }
            }
            c if c.is_whitespace() => {
                if prior != Some(' ') {
                    dst.push(' ');
                    prior = Some(' ');
                }
            }
            c if !c.is_control() => {
                dst.push(c);
                prior = Some(c);
            }
            _ => {
                if prior != Some('_') {
                    dst.push('_');
                    prior = Some('_');
                }
            }
        }
    }
    dst
}

/// Clean a proposed display name: sanitize, trim, and bound the length.
/// Returns `None` unless the cleaned name is 1 to `max` characters.
pub fn clean_name(raw: &str, max: usize) -> Option<String> {
    let cleaned = sanitize(raw);
    let trimmed = cleaned.trim();
    let n = trimmed.chars().count();
    if n == 0 || n > max {
        return None;
    }
    Some(trimmed.to_string())
}
