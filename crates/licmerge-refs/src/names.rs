//! License reference name validation.
//!
//! Valid license references:
//! - Must start with `LicenseRef-`
//! - Must have a non-empty suffix after the prefix
//! - The suffix may only contain ASCII letters, digits, `.` and `-`

use crate::error::{AllocationError, Result};

/// Prefix shared by every document-local license reference.
pub const LICENSE_REF_PREFIX: &str = "LicenseRef-";

/// Validate a license reference, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use licmerge_refs::names::validate_license_ref;
///
/// assert!(validate_license_ref("LicenseRef-1").is_ok());
/// assert!(validate_license_ref("LicenseRef-my.license-2").is_ok());
/// assert!(validate_license_ref("LicenseRef-").is_err());
/// assert!(validate_license_ref("MIT").is_err());
/// ```
pub fn validate_license_ref(id: &str) -> Result<()> {
    let Some(suffix) = id.strip_prefix(LICENSE_REF_PREFIX) else {
        return Err(AllocationError::InvalidIdentifier {
            id: id.to_string(),
            reason: format!("must start with {LICENSE_REF_PREFIX:?}"),
        });
    };

    if suffix.is_empty() {
        return Err(AllocationError::InvalidIdentifier {
            id: id.to_string(),
            reason: "suffix must not be empty".into(),
        });
    }

    if let Some(ch) = suffix
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-'))
    {
        return Err(AllocationError::InvalidIdentifier {
            id: id.to_string(),
            reason: format!("contains forbidden character: {ch:?}"),
        });
    }

    Ok(())
}

/// Returns `true` if `id` is a well-formed license reference.
pub fn is_license_ref(id: &str) -> bool {
    validate_license_ref(id).is_ok()
}
