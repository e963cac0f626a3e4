//! Respondent details and company-name derivation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Contact and organisation details captured on the final form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub full_name: String,
    pub email: String,
    /// Kept for wire compatibility; never required.
    #[serde(default)]
    pub phone_number: String,
    pub designation: String,
    pub cohort_team: String,
    pub office_typology: String,
    pub company: String,
}

impl UserDetails {
    /// Validates the details the way the form does: every field non-empty
    /// after trimming (full name needs both a first and a last part) and the
    /// email shaped like `local@host.tld`. No uniqueness or domain-allowlist
    /// checks are performed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut name_parts = self.full_name.split_whitespace();
        if name_parts.next().is_none() {
            return Err(ValidationError::empty_field("firstName"));
        }
        if name_parts.next().is_none() {
            return Err(ValidationError::empty_field("lastName"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email_shape_ok(&self.email) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected local@domain.tld",
            ));
        }
        for (field, value) in [
            ("designation", &self.designation),
            ("officeTypology", &self.office_typology),
            ("cohortTeam", &self.cohort_team),
            ("company", &self.company),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(())
    }

    /// True when [`validate`](Self::validate) succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Basic `non-ws @ non-ws . non-ws` email shape check.
fn email_shape_ok(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// TLD suffixes stripped before deriving a company name from an email
/// domain. Longest alternatives first so `.co.in` wins over `.in`.
const STRIPPED_TLDS: [&str; 10] = [
    ".co.uk", ".co.in", ".com", ".org", ".net", ".edu", ".gov", ".mil", ".int", ".in",
];

/// Derives a display company name from an email address.
///
/// Takes the domain, strips one known TLD suffix, splits the remainder on
/// `.` and title-cases each segment. Returns `None` when the address has no
/// domain part. The derivation runs once at submission time and is never
/// re-run for a stored record.
///
/// `jane@acme-labs.co.uk` becomes `Acme-labs`, `bob@mail.initech.com`
/// becomes `Mail Initech`.
pub fn derive_company_name(email: &str) -> Option<String> {
    let (_, domain) = email.trim().split_once('@')?;
    if domain.is_empty() {
        return None;
    }

    let mut domain = domain.to_lowercase();
    if let Some(tld) = STRIPPED_TLDS.iter().find(|tld| domain.ends_with(*tld)) {
        domain.truncate(domain.len() - tld.len());
    }

    let name = domain
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_details() -> UserDetails {
        UserDetails {
            full_name: "Jane Doe".to_string(),
            email: "jane.doe@acme.com".to_string(),
            phone_number: String::new(),
            designation: "Senior Management (e.g., Director, VP)".to_string(),
            cohort_team: "Design".to_string(),
            office_typology: "HQ".to_string(),
            company: "Acme".to_string(),
        }
    }

    #[test]
    fn complete_details_validate() {
        assert!(valid_details().is_valid());
    }

    #[test]
    fn single_word_name_is_rejected() {
        let mut details = valid_details();
        details.full_name = "Jane".to_string();
        assert!(matches!(
            details.validate(),
            Err(ValidationError::EmptyField { field }) if field == "lastName"
        ));
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let mut details = valid_details();
        details.company = "   ".to_string();
        assert!(!details.is_valid());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["jane", "jane@", "@acme.com", "jane@acme", "jane doe@acme.com"] {
            let mut details = valid_details();
            details.email = bad.to_string();
            assert!(!details.is_valid(), "{bad} should be rejected");
        }
    }

    #[test]
    fn phone_number_is_optional() {
        let details = valid_details();
        assert!(details.phone_number.is_empty());
        assert!(details.is_valid());
    }

    #[test]
    fn company_derivation_strips_common_tlds() {
        assert_eq!(derive_company_name("jane@acme.com"), Some("Acme".to_string()));
        assert_eq!(derive_company_name("jane@acme.co.uk"), Some("Acme".to_string()));
        assert_eq!(derive_company_name("jane@acme.co.in"), Some("Acme".to_string()));
        assert_eq!(derive_company_name("jane@acme.in"), Some("Acme".to_string()));
    }

    #[test]
    fn company_derivation_title_cases_remaining_segments() {
        assert_eq!(
            derive_company_name("bob@mail.initech.com"),
            Some("Mail Initech".to_string())
        );
        assert_eq!(
            derive_company_name("bob@INITECH.COM"),
            Some("Initech".to_string())
        );
    }

    #[test]
    fn company_derivation_keeps_unknown_tlds() {
        assert_eq!(
            derive_company_name("ada@example.ac.uk"),
            Some("Example Ac Uk".to_string())
        );
    }

    #[test]
    fn company_derivation_without_domain_yields_none() {
        assert_eq!(derive_company_name("no-at-sign"), None);
        assert_eq!(derive_company_name("dangling@"), None);
    }

    #[test]
    fn details_serialize_in_camel_case() {
        let json = serde_json::to_value(valid_details()).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("officeTypology").is_some());
        assert!(json.get("cohortTeam").is_some());
    }
}
