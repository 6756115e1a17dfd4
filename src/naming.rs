//! Identifier derivation from a single raw resource name.
//!
//! All functions here are pure. The one exception to "use the pluralizer
//! everywhere" is [`ResourceName::slug`], which keeps its own lower-case + `s`
//! rule: generated URL paths and table names depend on it.

use crate::error::{Result, ScaffoldError};

/// Strip a raw name down to a Go-style identifier.
///
/// Letters, digits and `_` are kept; space, `-` and `.` become `_`; anything
/// else is dropped. A leading digit gets an `_` prefix.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c);
        } else if matches!(c, ' ' | '-' | '.') {
            out.push('_');
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Upper-case the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Sanitize and upper-case the first character.
pub fn pascal_case(raw: &str) -> String {
    upper_first(&sanitize(raw))
}

/// Suffix-driven English plural.
///
/// Does not recognise words that are already plural: `"books"` becomes `"bookses"`.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    if let Some(stem) = word.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Lower-case package name derived from a raw name.
pub fn format_package_name(raw: &str) -> String {
    sanitize(raw).to_lowercase()
}

/// Project names may only contain ASCII letters, digits, `_` and `-`.
pub fn is_valid_project_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Every naming form a component template can ask for, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName {
    raw: String,
    pascal: String,
}

impl ResourceName {
    /// Derive the naming forms for `raw`.
    ///
    /// Fails with `Invalid` when nothing identifier-like survives sanitizing.
    pub fn new(raw: &str) -> Result<Self> {
        let pascal = pascal_case(raw);
        if pascal.is_empty() {
            return Err(ScaffoldError::invalid(format!(
                "resource name {raw:?} contains no identifier characters"
            )));
        }
        Ok(Self {
            raw: raw.to_string(),
            pascal,
        })
    }

    /// The name exactly as the caller passed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `Order`
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// `order`
    pub fn var_name(&self) -> String {
        lower_first(&self.pascal)
    }

    /// `Orders`, `Cities`, `Boxes`
    pub fn plural(&self) -> String {
        pluralize(&self.pascal)
    }

    /// `orders`, `citys`
    pub fn slug(&self) -> String {
        format!("{}s", self.pascal.to_lowercase())
    }

    /// `orders`, `citys`; same rule as [`ResourceName::slug`].
    pub fn table_name(&self) -> String {
        format!("{}s", self.pascal.to_lowercase())
    }

    /// Stem used in output filenames, e.g. `order` in `order_controller.go`.
    pub fn file_stem(&self) -> String {
        self.pascal.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("validName"), "validName");
        assert_eq!(sanitize("name with spaces"), "name_with_spaces");
        assert_eq!(sanitize("name-with-dashes"), "name_with_dashes");
        assert_eq!(sanitize("name.with.dots"), "name_with_dots");
        assert_eq!(sanitize("name@#$%^"), "name");
        assert_eq!(sanitize("123name"), "_123name");
        assert_eq!(
            sanitize("123-name.with special@chars"),
            "_123_name_with_specialchars"
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for s in [
            "",
            "user",
            "9lives",
            "a-b.c d",
            "__x__",
            "ünïcödé",
            "123-name.with special@chars",
            "--",
        ] {
            let once = sanitize(s);
            assert_eq!(sanitize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn test_pascal_case_is_idempotent() {
        for s in ["", "user", "User", "userProfile", "9lives", "order-item"] {
            let once = pascal_case(s);
            assert_eq!(pascal_case(&once), once, "input {s:?}");
        }
        assert_eq!(pascal_case("userProfile"), "UserProfile");
        assert_eq!(pascal_case("USER"), "USER");
    }

    #[test]
    fn test_case_flips_touch_only_first_char() {
        assert_eq!(upper_first("order"), "Order");
        assert_eq!(upper_first("oRDER"), "ORDER");
        assert_eq!(lower_first("OrderItem"), "orderItem");
        assert_eq!(lower_first(""), "");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("city"), "cities");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("watch"), "watches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("quiz"), "quizes");
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_pluralize_does_not_detect_plurals() {
        assert_eq!(pluralize("books"), "bookses");
    }

    #[test]
    fn test_format_package_name() {
        assert_eq!(format_package_name(""), "");
        assert_eq!(format_package_name("PackageName"), "packagename");
        assert_eq!(format_package_name("package-name"), "package_name");
        assert_eq!(
            format_package_name("Package-Name.With.Special@Chars"),
            "package_name_with_specialchars"
        );
        assert_eq!(format_package_name("123package"), "_123package");
    }

    #[test]
    fn test_is_valid_project_name() {
        assert!(is_valid_project_name("my-app_2"));
        assert!(!is_valid_project_name(""));
        assert!(!is_valid_project_name("my app"));
        assert!(!is_valid_project_name("../escape"));
    }

    #[test]
    fn test_resource_name_forms() {
        let name = ResourceName::new("city").unwrap();
        assert_eq!(name.pascal(), "City");
        assert_eq!(name.var_name(), "city");
        assert_eq!(name.plural(), "Cities");
        assert_eq!(name.slug(), "citys");
        assert_eq!(name.table_name(), "citys");
        assert_eq!(name.file_stem(), "city");
        assert_eq!(name.raw(), "city");
    }

    #[test]
    fn test_slug_diverges_from_plural() {
        let name = ResourceName::new("city").unwrap();
        assert_ne!(name.slug(), name.plural().to_lowercase());
    }

    #[test]
    fn test_resource_name_sanitizes() {
        let name = ResourceName::new("order-item").unwrap();
        assert_eq!(name.pascal(), "Order_item");
        assert_eq!(name.var_name(), "order_item");
        assert_eq!(name.file_stem(), "order_item");
    }

    #[test]
    fn test_resource_name_rejects_empty() {
        assert!(ResourceName::new("").is_err());
        assert!(ResourceName::new("@#$").is_err());
    }
}
