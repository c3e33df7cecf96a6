//! Pure validation rules for contact fields.

use super::error::FieldError;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

/// Characters allowed in the local part besides alphanumerics.
const LOCAL_PART_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-.";

/// Validates the syntax of an email address.
///
/// Accepts `local@domain` where the local part is a dot-atom of at most 64
/// characters and the domain is at least two dot-separated labels of
/// alphanumerics and hyphens, ending in a non-numeric top-level label.
/// Alphanumerics include non-ASCII letters, so internationalized addresses
/// such as `josé@example.com` or `user@münchen.de` are accepted.
///
/// # Examples
///
/// ```
/// use contacts_core::contact::validate_email;
///
/// assert!(validate_email("jane.doe@example.com").is_ok());
/// assert!(validate_email("user@münchen.de").is_ok());
/// assert!(validate_email("jane.doe@localhost").is_err());
/// assert!(validate_email("not an email").is_err());
/// ```
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let invalid = |reason: &str| {
        FieldError::new(
            "email",
            format!("value is not a valid email address: {reason}"),
        )
    };

    if email.is_empty() {
        return Err(invalid("it is empty"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("it is too long"));
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return Err(invalid("it must have exactly one @-sign"));
    };
    if local.contains('@') {
        return Err(invalid("it must have exactly one @-sign"));
    }

    validate_local_part(local).map_err(invalid)?;
    validate_domain(domain).map_err(invalid)?;

    Ok(())
}

fn validate_local_part(local: &str) -> Result<(), &'static str> {
    if local.is_empty() {
        return Err("there must be something before the @-sign");
    }
    if local.chars().count() > MAX_LOCAL_PART_LENGTH {
        return Err("the part before the @-sign is too long");
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err("the part before the @-sign has a misplaced period");
    }
    if !local
        .chars()
        .all(|c| c.is_alphanumeric() || LOCAL_PART_SPECIALS.contains(c))
    {
        return Err("the part before the @-sign contains invalid characters");
    }
    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), &'static str> {
    if domain.is_empty() {
        return Err("there must be something after the @-sign");
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err("the domain name must contain a period");
    }

    for label in &labels {
        if label.is_empty() {
            return Err("the domain name has a misplaced period");
        }
        if label.chars().count() > MAX_DOMAIN_LABEL_LENGTH {
            return Err("a domain label is too long");
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err("a domain label starts or ends with a hyphen");
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return Err("the domain name contains invalid characters");
        }
    }

    if let Some(tld) = labels.last() {
        if tld.chars().all(|c| c.is_ascii_digit()) {
            return Err("the top-level domain must not be numeric");
        }
    }

    Ok(())
}
