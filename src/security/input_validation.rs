/*
 * Copyright (C) 2026 Marc Rivero López
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */

//! Input Validation Module
//!
//! Rejects any domain text outside a strict allow-list before it reaches the
//! identity source or the filesystem.
//!
//! # Security Standards
//! - CWE-89: SQL Injection
//! - CWE-22: Path Traversal
//! - OWASP A03:2021 - Injection

/// Maximum accepted domain length in bytes
pub const MAX_DOMAIN_LENGTH: usize = 255;

/// Characters reported separately because they are the usual injection vectors
const DANGEROUS_CHARS: [char; 4] = ['\'', '"', ';', '`'];

/// Suffix appended to the domain to name the output file
pub const OUTPUT_FILE_SUFFIX: &str = "_identities.txt";

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty,
    TooLong(usize),
    DangerousCharacter(String),
    InvalidCharacter(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Domain length must be 1-{} characters", MAX_DOMAIN_LENGTH),
            Self::TooLong(len) => write!(
                f,
                "Domain length must be 1-{} characters (got {})",
                MAX_DOMAIN_LENGTH, len
            ),
            Self::DangerousCharacter(domain) => write!(
                f,
                "Domain '{}' contains invalid characters (quotes, semicolon, backtick)",
                domain
            ),
            Self::InvalidCharacter(domain) => write!(
                f,
                "Domain '{}' must contain only alphanumeric, dot or hyphen",
                domain
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A domain that passed [`validate_domain`]
///
/// Only ASCII alphanumerics, `.` and `-` can appear, so the value is safe to
/// use both as a bound query parameter and as a file name component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidDomain(String);

impl ValidDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the identities for this domain are written to
    pub fn output_file_name(&self) -> String {
        format!("{}{}", self.0, OUTPUT_FILE_SUFFIX)
    }
}

impl std::fmt::Display for ValidDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate raw domain text supplied by the user
///
/// Checks run in order: length, dangerous characters, then the
/// `[A-Za-z0-9.-]` allow-list. The first failing check decides the error.
///
/// # Arguments
/// * `domain` - The raw domain text
///
/// # Returns
/// * `Ok(ValidDomain)` if valid
/// * `Err(ValidationError)` if invalid
pub fn validate_domain(domain: &str) -> std::result::Result<ValidDomain, ValidationError> {
    if domain.is_empty() {
        return Err(ValidationError::Empty);
    }

    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(ValidationError::TooLong(domain.len()));
    }

    if domain.contains(DANGEROUS_CHARS) {
        return Err(ValidationError::DangerousCharacter(domain.to_string()));
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ValidationError::InvalidCharacter(domain.to_string()));
    }

    Ok(ValidDomain(domain.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_domain_valid() {
        assert!(validate_domain("example.com").is_ok());
        assert!(validate_domain("sub-domain.example.co.uk").is_ok());
        assert!(validate_domain("EXAMPLE.com").is_ok());
        assert!(validate_domain("123.example").is_ok());
        assert!(validate_domain(&"a".repeat(255)).is_ok());
    }

    #[test]
    fn test_validate_domain_length() {
        assert_eq!(validate_domain(""), Err(ValidationError::Empty));
        assert_eq!(
            validate_domain(&"a".repeat(256)),
            Err(ValidationError::TooLong(256))
        );
    }

    #[test]
    fn test_validate_domain_dangerous() {
        for input in [
            "example.com; DROP TABLE x",
            "example.com'",
            "exa\"mple.com",
            "`whoami`.com",
        ] {
            assert!(
                matches!(
                    validate_domain(input),
                    Err(ValidationError::DangerousCharacter(_))
                ),
                "expected dangerous-character rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_validate_domain_invalid_chars() {
        for input in [
            "example.com/evil",
            "../etc",
            "exa mple.com",
            "*.example.com",
            "ex_ample.com",
            "exämple.com",
            "example.com\n",
        ] {
            assert!(
                matches!(
                    validate_domain(input),
                    Err(ValidationError::InvalidCharacter(_))
                ),
                "expected allow-list rejection for {input:?}"
            );
        }
    }

    #[test]
    fn test_output_file_name() {
        let domain = validate_domain("example.com").unwrap();
        assert_eq!(domain.output_file_name(), "example.com_identities.txt");
        assert_eq!(domain.as_str(), "example.com");
    }

    #[test]
    fn test_error_messages() {
        let err = validate_domain("a;b").unwrap_err();
        assert!(err.to_string().contains("quotes, semicolon, backtick"));

        let err = validate_domain("a b").unwrap_err();
        assert!(err.to_string().contains("alphanumeric, dot or hyphen"));
    }
}
