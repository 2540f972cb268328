//! Topic colour tags to CSS classes.

const FALLBACK_BADGE: &str = "badge badge-gray";
const FALLBACK_STRIP: &str = "strip strip-blue";

const KNOWN: [&str; 9] = [
    "sky", "blue", "yellow", "green", "purple", "rose", "indigo", "gray", "orange",
];

fn known(color: &str) -> Option<&'static str> {
    KNOWN.iter().copied().find(|c| *c == color)
}

/// Classes for a topic's colour badge.
pub fn badge_class(color: &str) -> String {
    known(color).map_or_else(|| FALLBACK_BADGE.to_string(), |c| format!("badge badge-{c}"))
}

/// Classes for a topic's colour strip.
pub fn strip_class(color: &str) -> String {
    known(color).map_or_else(|| FALLBACK_STRIP.to_string(), |c| format!("strip strip-{c}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colours() {
        assert_eq!(badge_class("rose"), "badge badge-rose");
        assert_eq!(strip_class("sky"), "strip strip-sky");
    }

    #[test]
    fn test_unknown_colours_fall_back() {
        assert_eq!(badge_class("teal"), "badge badge-gray");
        assert_eq!(strip_class("teal"), "strip strip-blue");
        assert_eq!(badge_class("\"><script>"), "badge badge-gray");
    }
}
