//! Animatable property whitelist and shorthand expansion.
//!
//! Property names use the camelCase style convention. Shorthands
//! (`borderWidth`, `borderColor`) expand into four concrete edge channels;
//! every other whitelisted name is its own channel.

pub const BORDER_WIDTH_EDGES: &[&str] = &[
    "borderTopWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRightWidth",
];

pub const BORDER_COLOR_EDGES: &[&str] = &[
    "borderTopColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderRightColor",
];

/// Every name a keyframe may target. Shorthands are listed alongside their
/// expansions; emitted channel names are always concrete.
pub const WHITELIST: &[&str] = &[
    "width",
    "height",
    "top",
    "bottom",
    "left",
    "right",
    "marginTop",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "paddingTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "borderWidth",
    "borderTopWidth",
    "borderBottomWidth",
    "borderLeftWidth",
    "borderRightWidth",
    "borderColor",
    "color",
    "backgroundColor",
    "borderTopColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderRightColor",
];

pub fn is_animatable(name: &str) -> bool {
    WHITELIST.contains(&name)
}

/// Color properties are recognized by suffix, case-insensitive. Compares
/// bytes so arbitrary (non-ASCII) names classify as non-color instead of
/// tripping a char-boundary slice.
pub fn is_color(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() >= 5 && b[b.len() - 5..].eq_ignore_ascii_case(b"color")
}

/// Concrete edge channels for a shorthand name, `None` for plain properties.
pub fn expand(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "borderWidth" => Some(BORDER_WIDTH_EDGES),
        "borderColor" => Some(BORDER_COLOR_EDGES),
        _ => None,
    }
}

/// Dimensions are measured through the accessor rather than read as styles.
pub fn is_dimension(name: &str) -> bool {
    matches!(name, "width" | "height")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelist_membership() {
        assert!(is_animatable("left"));
        assert!(is_animatable("backgroundColor"));
        assert!(is_animatable("borderWidth"));
        assert!(!is_animatable("fooBar"));
        assert!(!is_animatable("fontSize"));
    }

    #[test]
    fn color_suffix_is_case_insensitive() {
        assert!(is_color("backgroundColor"));
        assert!(is_color("color"));
        assert!(is_color("borderTopCOLOR"));
        assert!(!is_color("borderTopWidth"));
        assert!(!is_color("col"));
        // Multibyte names are simply not colors, never a slicing panic.
        assert!(!is_color("\u{20ac}\u{20ac}"));
        assert!(!is_color("col\u{f6}r"));
    }

    #[test]
    fn shorthands_expand_to_four_edges() {
        assert_eq!(expand("borderWidth").unwrap().len(), 4);
        assert_eq!(expand("borderColor").unwrap().len(), 4);
        assert!(expand("left").is_none());
        assert!(expand("borderColor").unwrap().iter().all(|e| is_color(e)));
    }
}
