//! # Text Formatting
//!
//! Pure string helpers used across the UI.

/// Uppercase initials for an avatar, from the first two words of a name.
///
/// Falls back to `"?"` for empty input.
#[must_use]
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Shortens a string to at most `max` characters by cutting out the middle.
///
/// Keeps the start and end visible, joined by an ellipsis. Strings at or
/// under the limit are returned unchanged. `max` values below 5 are treated
/// as 5 so both ends stay visible.
#[must_use]
pub fn truncate_middle(input: &str, max: usize) -> String {
    let max = max.max(5);
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= max {
        return input.to_string();
    }

    let keep = max - 1;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;

    let mut out = String::with_capacity(max);
    out.extend(&chars[..head]);
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}

/// Title-cases a dashed or underscored slug: `"error-rates"` → `"Error Rates"`.
#[must_use]
pub fn title_case(slug: &str) -> String {
    slug.split(|c| c == '-' || c == '_' || c == ' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_words() {
        assert_eq!(initials("ada lovelace"), "AL");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials("ada"), "A");
    }

    #[test]
    fn test_initials_ignores_extra_words() {
        assert_eq!(initials("one two three"), "OT");
    }

    #[test]
    fn test_initials_empty_falls_back() {
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate_middle("short", 18), "short");
    }

    #[test]
    fn test_truncate_keeps_both_ends() {
        let out = truncate_middle("abcdefghijklmnop", 9);
        assert_eq!(out, "abcd…mnop");
        assert_eq!(out.chars().count(), 9);
    }

    #[test]
    fn test_truncate_tiny_max_still_shows_ends() {
        let out = truncate_middle("abcdefghij", 3);
        assert_eq!(out.chars().count(), 5);
        assert!(out.starts_with("ab"));
        assert!(out.ends_with("ij"));
    }

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case("error-rates"), "Error Rates");
        assert_eq!(title_case("team_velocity"), "Team Velocity");
    }

    #[test]
    fn test_title_case_collapses_empty_segments() {
        assert_eq!(title_case("a--b"), "A B");
        assert_eq!(title_case(""), "");
    }
}
