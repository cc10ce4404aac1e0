use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    AtOurOffice,
    PrivateEvent,
    FindLocation,
}

impl LocationType {
    pub const ALL: [LocationType; 3] = [
        LocationType::AtOurOffice,
        LocationType::PrivateEvent,
        LocationType::FindLocation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationType::AtOurOffice => "at_our_office",
            LocationType::PrivateEvent => "private_event",
            LocationType::FindLocation => "find_location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationType::AtOurOffice => "At our office",
            LocationType::PrivateEvent => "Private event",
            LocationType::FindLocation => "Find a location for us",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LocationType::AtOurOffice => "🏢",
            LocationType::PrivateEvent => "🎉",
            LocationType::FindLocation => "📍",
        }
    }
}

/// Rules are checked in declaration order; the first failure is reported.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter your city")]
    MissingCity,
    #[error("Please select a location type")]
    MissingLocationType,
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub city: String,
    pub location_type: Option<LocationType>,
}

/// A draft that passed every rule, with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidLead {
    pub name: String,
    pub email: String,
    pub city: String,
    pub location_type: LocationType,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl LeadDraft {
    pub fn validate(&self) -> Result<ValidLead, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let city = self.city.trim();
        if city.is_empty() {
            return Err(ValidationError::MissingCity);
        }

        let location_type = self
            .location_type
            .ok_or(ValidationError::MissingLocationType)?;

        Ok(ValidLead {
            name: name.to_string(),
            email: email.to_string(),
            city: city.to_string(),
            location_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, city: &str, location_type: Option<LocationType>) -> LeadDraft {
        LeadDraft {
            name: name.into(),
            email: email.into(),
            city: city.into(),
            location_type,
        }
    }

    #[test]
    fn empty_name_fails_first() {
        let err = draft("", "a@b.com", "NYC", Some(LocationType::AtOurOffice))
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
        assert_eq!(err.to_string(), "Please enter your name");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = draft("Jo", "not-an-email", "NYC", Some(LocationType::PrivateEvent))
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email");
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        assert_eq!(
            draft("  ", "a@b.com", "NYC", Some(LocationType::AtOurOffice)).validate(),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            draft("Jo", "   ", "NYC", Some(LocationType::AtOurOffice)).validate(),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            draft("Jo", "a@b.com", "\t", Some(LocationType::AtOurOffice)).validate(),
            Err(ValidationError::MissingCity)
        );
    }

    #[test]
    fn unselected_location_fails_last() {
        assert_eq!(
            draft("Jo", "a@b.com", "NYC", None).validate(),
            Err(ValidationError::MissingLocationType)
        );
    }

    #[test]
    fn first_failing_rule_wins() {
        assert_eq!(draft("", "bad", "", None).validate(), Err(ValidationError::MissingName));
        assert_eq!(draft("Jo", "bad", "", None).validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let lead = draft(" Jo ", " jo@example.com", "NYC ", Some(LocationType::FindLocation))
            .validate()
            .unwrap();
        assert_eq!(lead.name, "Jo");
        assert_eq!(lead.email, "jo@example.com");
        assert_eq!(lead.city, "NYC");
        assert_eq!(lead.location_type, LocationType::FindLocation);
    }

    #[test]
    fn location_types_use_wire_names() {
        for location in LocationType::ALL {
            assert_eq!(serde_json::to_value(location).unwrap(), location.as_str());
        }
    }
}
