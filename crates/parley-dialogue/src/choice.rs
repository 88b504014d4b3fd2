/// `Some(true)` for y/yes, `Some(false)` for n/no, `None` otherwise.
pub fn parse_choice(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_and_long_forms() {
        assert_eq!(parse_choice("Y"), Some(true));
        assert_eq!(parse_choice("  yes \n"), Some(true));
        assert_eq!(parse_choice("n"), Some(false));
        assert_eq!(parse_choice("NO"), Some(false));
    }

    #[test]
    fn anything_else_is_undecided() {
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("yeah"), None);
        assert_eq!(parse_choice("no thanks"), None);
    }
}
