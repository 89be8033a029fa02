/// Collapse every run of consecutive newlines into a single newline.
///
/// One-pass equivalent of repeatedly replacing "\n\n" with "\n" until no
/// double newline remains.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_newline = false;
    for ch in text.chars() {
        if ch == '\n' {
            if !last_was_newline {
                out.push('\n');
            }
            last_was_newline = true;
        } else {
            out.push(ch);
            last_was_newline = false;
        }
    }
    out
}
