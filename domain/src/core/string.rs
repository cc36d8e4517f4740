//! String utilities for the domain layer.

/// Upper-case only the first character, leaving the rest untouched.
///
/// Characters whose upper-case form expands to several characters
/// (e.g. `ß` → `SS`) keep the full expansion.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_ascii() {
        assert_eq!(capitalize_first("youth"), "Youth");
        assert_eq!(capitalize_first("older people"), "Older people");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_capitalize_first_leaves_rest() {
        assert_eq!(capitalize_first("nHS trusts"), "NHS trusts");
        assert_eq!(capitalize_first("1st responders"), "1st responders");
    }

    #[test]
    fn test_capitalize_first_multibyte() {
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first("ßtraße"), "SStraße");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; cutting inside it backs up to the previous boundary
        assert_eq!(truncate("caféteria", 7), "caf...");
    }
}
