// Applied exactly once, where a path token joins a shell line. Structured
// argument arrays bypass shell re-parsing and stay unescaped. Not idempotent.
pub fn shell_path(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if needs_escape(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn needs_escape(ch: char) -> bool {
    matches!(
        ch,
        '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '[' | ']' | '\\'
    ) || ch.is_whitespace()
}

#[cfg(test)]
#[path = "tests/escape_tests.rs"]
mod tests;
