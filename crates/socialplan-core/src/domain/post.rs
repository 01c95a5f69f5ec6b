use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Wire and storage format of a due date.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Post entity - a social media post scheduled for a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: NaiveDate,
}

/// A post that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub brand: String,
    pub platform: String,
    pub due_date: NaiveDate,
}

/// Field-wise changes to a post. `None` means "leave unchanged" on update
/// and "missing" on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl PostChanges {
    /// Reject any supplied text field that is blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("title", &self.title),
            ("brand", &self.brand),
            ("platform", &self.platform),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(DomainError::Validation(format!("{field} cannot be empty")));
            }
        }
        Ok(())
    }

    /// Turn a complete set of changes into a post ready for creation.
    ///
    /// Every field is required; the first missing one is reported.
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        self.validate()?;

        let due_date = self.due_date.ok_or_else(|| required("due_date"))?;
        let title = self.title.ok_or_else(|| required("title"))?;
        let brand = self.brand.ok_or_else(|| required("brand"))?;
        let platform = self.platform.ok_or_else(|| required("platform"))?;

        Ok(NewPost {
            title,
            brand,
            platform,
            due_date,
        })
    }
}

fn required(field: &str) -> DomainError {
    DomainError::Validation(format!("{field} is required"))
}

impl Post {
    /// Build a stored post from a new post and the id the store assigned.
    pub fn from_new(id: i32, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            brand: new.brand,
            platform: new.platform,
            due_date: new.due_date,
        }
    }

    /// Apply a partial update. Fields absent from `changes` keep their value.
    /// Nothing is modified if the changes are invalid.
    pub fn apply(&mut self, changes: PostChanges) -> Result<(), DomainError> {
        changes.validate()?;

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(brand) = changes.brand {
            self.brand = brand;
        }
        if let Some(platform) = changes.platform {
            self.platform = platform;
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// Only the zero-padded form is accepted: `2025-1-5` is rejected even
/// though chrono would read it.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !well_formed {
        return Err(invalid_date(raw));
    }

    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).map_err(|_| invalid_date(raw))
}

/// Format a due date the way it travels on the wire.
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

fn invalid_date(raw: &str) -> DomainError {
    DomainError::Validation(format!("'{raw}' is not a valid YYYY-MM-DD date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Post {
        Post {
            id: 7,
            title: "Launch teaser".to_string(),
            brand: "Acme".to_string(),
            platform: "Instagram".to_string(),
            due_date: date(2025, 1, 10),
        }
    }

    #[test]
    fn parses_padded_dates() {
        assert_eq!(parse_due_date("2025-01-10").unwrap(), date(2025, 1, 10));
        assert_eq!(parse_due_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in [
            "",
            "2025-1-10",
            "2025/01/10",
            "10-01-2025",
            "2025-02-30",
            "2025-13-01",
            "2025-01-10T00:00:00Z",
            "+025-01-10",
        ] {
            assert!(parse_due_date(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn formats_back_to_wire_form() {
        assert_eq!(format_due_date(date(2025, 3, 4)), "2025-03-04");
    }

    #[test]
    fn into_new_post_requires_every_field() {
        let complete = PostChanges {
            title: Some("A".into()),
            brand: Some("B".into()),
            platform: Some("C".into()),
            due_date: Some(date(2025, 1, 10)),
        };
        let new = complete.clone().into_new_post().unwrap();
        assert_eq!(new.title, "A");
        assert_eq!(new.due_date, date(2025, 1, 10));

        let missing_brand = PostChanges {
            brand: None,
            ..complete.clone()
        };
        let err = missing_brand.into_new_post().unwrap_err();
        assert_eq!(err.to_string(), "brand is required");

        let missing_date = PostChanges {
            due_date: None,
            ..complete
        };
        let err = missing_date.into_new_post().unwrap_err();
        assert_eq!(err.to_string(), "due_date is required");
    }

    #[test]
    fn blank_text_is_rejected() {
        let changes = PostChanges {
            platform: Some("   ".into()),
            ..Default::default()
        };
        let err = changes.validate().unwrap_err();
        assert_eq!(err.to_string(), "platform cannot be empty");
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut post = sample();
        post.apply(PostChanges {
            brand: Some("Globex".into()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(post.brand, "Globex");
        assert_eq!(post.title, "Launch teaser");
        assert_eq!(post.platform, "Instagram");
        assert_eq!(post.due_date, date(2025, 1, 10));
        assert_eq!(post.id, 7);
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut post = sample();
        let result = post.apply(PostChanges {
            title: Some("New title".into()),
            brand: Some(String::new()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(post, sample());
    }
}
