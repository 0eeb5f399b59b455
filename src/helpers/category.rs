//! Category badges (icon and CSS classes)

use serde::Serialize;

/// Display treatment for a category badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Symbol or emoji shown in the badge
    pub icon: &'static str,
    /// Utility classes: background, optionally border
    pub classes: &'static [&'static str],
}

/// Badge for categories outside the known set
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    icon: "#",
    classes: &["bg-gray-100"],
};

/// Known categories. Synonyms share a row.
const CATEGORY_TABLE: &[(&[&str], CategoryStyle)] = &[
    (
        &["terminal"],
        CategoryStyle {
            icon: ">",
            classes: &["bg-zinc-900", "border-zinc-700"],
        },
    ),
    (
        &["desktop"],
        CategoryStyle {
            icon: "🖥️",
            classes: &["bg-sky-100", "border-sky-300"],
        },
    ),
    (
        &["config"],
        CategoryStyle {
            icon: "🛠️",
            classes: &["bg-amber-100"],
        },
    ),
    (
        &["hardware"],
        CategoryStyle {
            icon: "💾",
            classes: &["bg-emerald-100"],
        },
    ),
    (
        &["programming"],
        CategoryStyle {
            icon: "👨‍💻",
            classes: &["bg-violet-100", "border-violet-300"],
        },
    ),
    (
        &["web-dev", "web-development"],
        CategoryStyle {
            icon: "💻",
            classes: &["bg-blue-100", "border-blue-300"],
        },
    ),
    (
        &["network"],
        CategoryStyle {
            icon: "🌐",
            classes: &["bg-cyan-100"],
        },
    ),
    (
        &["security"],
        CategoryStyle {
            icon: "🔒",
            classes: &["bg-red-100", "border-red-300"],
        },
    ),
    (
        &["package-management"],
        CategoryStyle {
            icon: "📦",
            classes: &["bg-orange-100"],
        },
    ),
];

/// Look up the badge for a category.
///
/// Absent or unknown categories get [`DEFAULT_STYLE`].
pub fn classify(category: Option<&str>) -> CategoryStyle {
    let Some(category) = category else {
        return DEFAULT_STYLE;
    };

    CATEGORY_TABLE
        .iter()
        .find(|(names, _)| names.contains(&category))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

/// Every category name with a dedicated badge
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().flat_map(|(names, _)| names.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(classify(Some("terminal")).icon, ">");
        assert_eq!(classify(Some("security")).icon, "🔒");
        assert_eq!(classify(Some("package-management")).icon, "📦");
        assert_eq!(
            classify(Some("programming")).classes,
            &["bg-violet-100", "border-violet-300"]
        );
    }

    #[test]
    fn test_web_synonyms_match() {
        assert_eq!(classify(Some("web-dev")), classify(Some("web-development")));
        assert_eq!(classify(Some("web-dev")).icon, "💻");
    }

    #[test]
    fn test_unknown_and_absent_use_default() {
        for category in [None, Some(""), Some("cooking"), Some("Terminal"), Some("web")] {
            let style = classify(category);
            assert_eq!(style, DEFAULT_STYLE, "{:?}", category);
            assert_eq!(style.icon, "#");
        }
    }

    #[test]
    fn test_known_styles_are_distinct_from_default() {
        for name in known_categories() {
            let style = classify(Some(name));
            assert_ne!(style.icon, DEFAULT_STYLE.icon, "{}", name);
            assert!(
                (1..=2).contains(&style.classes.len()),
                "{} has {} classes",
                name,
                style.classes.len()
            );
        }
        assert_eq!(known_categories().count(), 10);
    }
}
