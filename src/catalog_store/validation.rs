//! Validation for submitted album forms.
//!
//! Runs before any write. Every failing field is reported, in form order.

use super::models::{AlbumDraft, AlbumFields};
use std::fmt;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 10;

/// Validation error types
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField { field: &'static str },
    NotANumber { field: &'static str, value: String },
    RatingOutOfRange { value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField { field } => {
                write!(f, "\"{}\" is required", field)
            }
            ValidationError::NotANumber { field, value } => {
                write!(f, "\"{}\" must be a number, got \"{}\"", field, value)
            }
            ValidationError::RatingOutOfRange { value } => write!(
                f,
                "\"rating\" must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Joins several validation errors into the single message shown to the client.
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn required_text(
    value: &Option<String>,
    field: &'static str,
    errors: &mut Vec<ValidationError>,
) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            errors.push(ValidationError::EmptyField { field });
            String::new()
        }
    }
}

fn parse_rating(value: &Option<String>, errors: &mut Vec<ValidationError>) -> i64 {
    let raw = match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => {
            errors.push(ValidationError::EmptyField { field: "rating" });
            return 0;
        }
    };
    match raw.parse::<i64>() {
        Ok(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => rating,
        Ok(rating) => {
            errors.push(ValidationError::RatingOutOfRange { value: rating });
            rating
        }
        Err(_) => {
            errors.push(ValidationError::NotANumber {
                field: "rating",
                value: raw.to_string(),
            });
            0
        }
    }
}

/// Validate a submitted album form, producing the draft to persist.
pub fn validate_album_fields(fields: &AlbumFields) -> Result<AlbumDraft, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let album_name = required_text(&fields.album_name, "albumName", &mut errors);
    let artist_name = required_text(&fields.artist_name, "artistName", &mut errors);
    let genre = required_text(&fields.genre, "genre", &mut errors);
    let rating = parse_rating(&fields.rating, &mut errors);
    let cover_art_img = fields
        .cover_art_img
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(AlbumDraft {
        album_name,
        artist_name,
        genre,
        rating,
        cover_art_img,
    })
}
