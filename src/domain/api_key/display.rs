//! Display helpers for key secrets

/// Character used in place of hidden key characters
pub const MASK_CHAR: char = '•';

const VISIBLE_PREFIX_CHARS: usize = 4;
const ABBREVIATED_EDGE_CHARS: usize = 8;

/// Mask a key for table display
///
/// Keeps the first 4 characters and replaces every remaining character,
/// so the output has the same character count as the input. Keys shorter
/// than 4 characters are masked entirely.
pub fn mask(key: &str) -> String {
    let len = key.chars().count();

    if len < VISIBLE_PREFIX_CHARS {
        return MASK_CHAR.to_string().repeat(len);
    }

    let visible: String = key.chars().take(VISIBLE_PREFIX_CHARS).collect();
    let hidden = MASK_CHAR.to_string().repeat(len - VISIBLE_PREFIX_CHARS);

    format!("{}{}", visible, hidden)
}

/// Shorten a key to `first8...last8`
///
/// Keys too short to show both ends without overlap fall back to [`mask`].
pub fn abbreviate(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();

    if chars.len() <= ABBREVIATED_EDGE_CHARS * 2 {
        return mask(key);
    }

    let head: String = chars[..ABBREVIATED_EDGE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - ABBREVIATED_EDGE_CHARS..].iter().collect();

    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_twelve_chars() {
        let masked = mask("tvly-abcdefg");

        assert_eq!(masked, "tvly••••••••");
        assert_eq!(masked.chars().count(), 12);
        assert_eq!(masked.chars().filter(|c| *c == MASK_CHAR).count(), 8);
    }

    #[test]
    fn test_mask_preserves_length() {
        let key = "tvly-0123456789abcdefghijklmnop";
        assert_eq!(mask(key).chars().count(), key.chars().count());
    }

    #[test]
    fn test_mask_exactly_four_chars() {
        assert_eq!(mask("abcd"), "abcd");
    }

    #[test]
    fn test_mask_short_keys_fully_hidden() {
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask("a"), "•");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_abbreviate_long_key() {
        let key = "tvly-abcdefghijklmnopqrstuvwxyz";
        assert_eq!(abbreviate(key), "tvly-abc...stuvwxyz");
    }

    #[test]
    fn test_abbreviate_short_key_falls_back_to_mask() {
        assert_eq!(abbreviate("tvly-short"), mask("tvly-short"));
        assert_eq!(abbreviate("0123456789abcdef"), mask("0123456789abcdef"));
    }
}
