/// Display cap for card titles
pub const TITLE_MAX_CHARS: usize = 50;

/// Display cap for card descriptions
pub const DESCRIPTION_MAX_CHARS: usize = 90;

/// Marker appended when text is shortened
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters, appending [`ELLIPSIS`]
/// when anything was cut.
///
/// Counts Unicode scalar values, so a cut never splits a character. Absent
/// text yields an empty string.
pub fn truncate(text: Option<&str>, max_chars: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };

    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate(Some("Backpack"), 50), "Backpack");
    }

    #[test]
    fn test_exact_length_unchanged() {
        let text = "x".repeat(50);
        assert_eq!(truncate(Some(&text), 50), text);
    }

    #[test]
    fn test_long_text_cut_with_ellipsis() {
        let text = "A".repeat(60);
        let cut = truncate(Some(&text), 50);

        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with(ELLIPSIS));
        assert_eq!(&cut[..50], &text[..50]);
    }

    #[test]
    fn test_idempotent_past_cutoff() {
        let text = "B".repeat(100);
        let once = truncate(Some(&text), 90);
        let twice = truncate(Some(&once), 90);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_absent_text_is_empty() {
        assert_eq!(truncate(None, 50), "");
        assert_eq!(truncate(Some(""), 50), "");
    }

    #[test]
    fn test_multibyte_characters_counted_once() {
        let text = "é".repeat(5);
        assert_eq!(truncate(Some(&text), 3), "ééé...");
        assert_eq!(truncate(Some(&text), 5), text);
    }
}
