use tracing::warn;

/// Main-deck card IDs from `.ydk` text
///
/// Only numeric lines between `#main` and the next `#extra`, `#side` or
/// `!side` marker count. Other `#`/`!` lines are comments. Numbers too large
/// for a card ID are logged and left out.
pub fn parse_ydk(content: &str) -> Vec<u32> {
    let mut ids = Vec::new();
    let mut in_main = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line {
            "#main" => in_main = true,
            "#extra" | "#side" | "!side" => in_main = false,
            _ if line.starts_with('#') || line.starts_with('!') => {}
            _ if in_main && line.bytes().all(|b| b.is_ascii_digit()) => match line.parse() {
                Ok(id) => ids.push(id),
                Err(e) => warn!(%line, error = %e, "skipping main-deck entry that is not a card ID"),
            },
            _ => {}
        }
    }

    ids
}
