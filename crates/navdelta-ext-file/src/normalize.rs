//! Company name normalization applied while loading.
//!
//! Disclosures spell the same company differently across months
//! ("HDFC Bank Limited", "HDFC Bank Ltd"). The core matcher only ignores case,
//! so legal suffixes and annotations are cleaned up here.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing rating/listing annotation such as ` A**`.
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+[A-Z]\*\*$").expect("Invalid regex pattern"));

/// Parenthetical description such as `(Industrial)` or `(DVR)`.
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]+\)\s*").expect("Invalid regex pattern"));

/// Legal suffix variants, most specific first.
static SUFFIXES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)\s+Private\s+Limited$").expect("Invalid regex pattern"),
        Regex::new(r"(?i)\s+Pvt\.?\s*Ltd\.?$").expect("Invalid regex pattern"),
        Regex::new(r"(?i)\s+(Limited|Ltd\.?)$").expect("Invalid regex pattern"),
    ]
});

/// Collapses runs of whitespace to single spaces and trims.
fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a company name as it appears in a disclosure.
///
/// Returns `None` if nothing is left after cleanup.
///
/// ```
/// use navdelta_ext_file::normalize_company_name;
///
/// assert_eq!(
///     normalize_company_name("  SKF India (Industrial)  Limited ").as_deref(),
///     Some("SKF India Ltd.")
/// );
/// ```
pub fn normalize_company_name(name: &str) -> Option<String> {
    let name = collapse_whitespace(name);
    let name = ANNOTATION.replace(&name, "");
    let name = collapse_whitespace(&PARENTHETICAL.replace_all(&name, " "));

    let mut name = name;
    for suffix in SUFFIXES.iter() {
        if suffix.is_match(&name) {
            name = suffix.replace(&name, " Ltd.").into_owned();
            break;
        }
    }

    let name = collapse_whitespace(&name);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(name: &str) -> String {
        normalize_company_name(name).unwrap()
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(norm("HDFC Bank Limited"), "HDFC Bank Ltd.");
        assert_eq!(norm("HDFC Bank Ltd"), "HDFC Bank Ltd.");
        assert_eq!(norm("HDFC Bank Ltd."), "HDFC Bank Ltd.");
        assert_eq!(norm("Hitachi Energy India LIMITED"), "Hitachi Energy India Ltd.");
        assert_eq!(norm("Acme Pvt Ltd"), "Acme Ltd.");
        assert_eq!(norm("Acme Pvt. Ltd."), "Acme Ltd.");
        assert_eq!(norm("Acme Private Limited"), "Acme Ltd.");
    }

    #[test]
    fn test_annotations_and_parentheticals() {
        assert_eq!(norm("Zomato Ltd. A**"), "Zomato Ltd.");
        assert_eq!(norm("SKF India (Industrial) Ltd."), "SKF India Ltd.");
        assert_eq!(norm("Tata Motors (DVR)"), "Tata Motors");
    }

    #[test]
    fn test_whitespace_and_empty() {
        assert_eq!(norm("  Infosys    Ltd  "), "Infosys Ltd.");
        assert_eq!(normalize_company_name("   "), None);
        assert_eq!(normalize_company_name("(Cash)"), None);
    }

    #[test]
    fn test_leaves_other_names_alone() {
        assert_eq!(norm("Reliance Industries"), "Reliance Industries");
        assert_eq!(norm("Larsen & Toubro Ltd.A"), "Larsen & Toubro Ltd.A");
    }
}
