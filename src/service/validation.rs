//! Field constraints checked before any create or update.

use crate::error::AppError;
use crate::model::Breed;

const NAME_MAX_CHARS: usize = 80;

/// Check every field constraint in order; the first violation wins and its
/// message becomes the 400 response body verbatim.
pub fn validate_breed(breed: &Breed) -> Result<(), AppError> {
    if breed.species.trim().is_empty() {
        return Err(invalid("species is required"));
    } else if breed.species != "dog" && breed.species != "cat" {
        return Err(invalid("species must be either a dog or a cat"));
    }
    if breed.pet_size.trim().is_empty() {
        return Err(invalid("petSize is required"));
    } else if breed.pet_size != "small" && breed.pet_size != "medium" && breed.pet_size != "tall" {
        return Err(invalid("petSize must be either small, medium or tall"));
    }
    if breed.name.trim().is_empty() {
        return Err(invalid("name is required"));
    } else if breed.name.chars().count() > NAME_MAX_CHARS {
        return Err(invalid("name is too long. Cannot exceed 80 characters"));
    }
    if breed.average_male_adult_weight <= 0 {
        return Err(invalid("average_male_adult_weight must be a positive number"));
    }
    if breed.average_female_adult_weight <= 0 {
        return Err(invalid("average_female_adult_weight must be a positive number"));
    }
    Ok(())
}

fn invalid(msg: &str) -> AppError {
    AppError::Validation(msg.to_string())
}
