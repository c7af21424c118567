//! Category vocabulary and sub-type constraints.
//!
//! Categories are free-form names from a managed list, but the two special
//! values `"Asset"` and `"License"` constrain which sub-type an asset may
//! carry. Any other category carries no sub-type at all.

use assethub_core::{AppError, AppResult};

/// Category value whose records carry an asset sub-type.
pub const CATEGORY_ASSET: &str = "Asset";
/// Category value whose records carry a license sub-type.
pub const CATEGORY_LICENSE: &str = "License";

/// Sub-types allowed under the `"Asset"` category.
pub const ASSET_SUB_TYPES: &[&str] = &[
    "Furniture and Fixture",
    "Desktop",
    "Laptop",
    "Printer",
    "Server",
    "Machinery/Equipment",
    "Infrastructure",
    "Vehicles/Transport",
];

/// Sub-types allowed under the `"License"` category.
pub const LICENSE_SUB_TYPES: &[&str] = &[
    "Software License",
    "Business License",
    "Government License",
    "General License",
];

/// Return the sub-type vocabulary for a category, or `None` when the
/// category carries no sub-type.
pub fn allowed_sub_types(category: &str) -> Option<&'static [&'static str]> {
    match category {
        CATEGORY_ASSET => Some(ASSET_SUB_TYPES),
        CATEGORY_LICENSE => Some(LICENSE_SUB_TYPES),
        _ => None,
    }
}

/// Validate a category/sub-type pair.
///
/// A sub-type left over from a previous category is rejected here, so a
/// category change must always supply a sub-type from the new vocabulary
/// (or none).
pub fn validate_sub_type(category: &str, sub_type: Option<&str>) -> AppResult<()> {
    match (allowed_sub_types(category), sub_type) {
        (None, None) => Ok(()),
        (None, Some(sub)) => Err(AppError::validation(format!(
            "Category '{category}' does not take a sub-type (got '{sub}')"
        ))),
        (Some(_), None) => Ok(()),
        (Some(allowed), Some(sub)) => {
            if allowed.contains(&sub) {
                Ok(())
            } else {
                Err(AppError::validation(format!(
                    "'{sub}' is not a valid sub-type for category '{category}'"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_sub_type_accepted() {
        assert!(validate_sub_type(CATEGORY_ASSET, Some("Laptop")).is_ok());
    }

    #[test]
    fn test_license_sub_type_accepted() {
        assert!(validate_sub_type(CATEGORY_LICENSE, Some("Software License")).is_ok());
    }

    #[test]
    fn test_stale_sub_type_rejected() {
        // "Laptop" belongs to the Asset vocabulary, not License.
        assert!(validate_sub_type(CATEGORY_LICENSE, Some("Laptop")).is_err());
    }

    #[test]
    fn test_plain_category_takes_no_sub_type() {
        assert!(validate_sub_type("Networking", None).is_ok());
        assert!(validate_sub_type("Networking", Some("Laptop")).is_err());
    }

    #[test]
    fn test_missing_sub_type_allowed() {
        assert!(validate_sub_type(CATEGORY_ASSET, None).is_ok());
    }
}
