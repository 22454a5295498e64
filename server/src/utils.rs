use crate::error::AppError;

/// Trims and rejects empty/whitespace-only fields.
pub fn non_empty(value: &str) -> Result<&str, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::MalformedPayload);
    }

    Ok(trimmed)
}

/// Shallow shape check: something@domain.tld. Deliverability is the mail
/// server's problem, not ours.
pub fn valid_email(value: &str) -> Result<&str, AppError> {
    let trimmed = non_empty(value)?;

    let (local, domain) = trimmed.split_once('@').ok_or(AppError::MalformedPayload)?;

    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || trimmed.contains(char::is_whitespace)
    {
        return Err(AppError::MalformedPayload);
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims() {
        assert_eq!(non_empty("  hello  ").unwrap(), "hello");
    }

    #[test]
    fn non_empty_rejects_blank() {
        assert!(non_empty("").is_err());
        assert!(non_empty("   ").is_err());
        assert!(non_empty("\t\n").is_err());
    }

    #[test]
    fn valid_email_accepts_plain_addresses() {
        assert_eq!(valid_email("ada@clinic.example").unwrap(), "ada@clinic.example");
        assert_eq!(valid_email("  a.b@x.co  ").unwrap(), "a.b@x.co");
    }

    #[test]
    fn valid_email_rejects_malformed_addresses() {
        for bad in [
            "",
            "no-at-sign",
            "@clinic.example",
            "ada@",
            "ada@nodot",
            "ada@.example",
            "ada@example.",
            "ada smith@clinic.example",
        ] {
            assert!(valid_email(bad).is_err(), "accepted {bad:?}");
        }
    }
}
