//! The Breed record and its wire format.

use serde::{Deserialize, Serialize};

/// A breed row as stored and as sent over the wire.
///
/// Wire field names are fixed for client compatibility: `petSize` is
/// camelCase while both weight fields are snake_case. Missing body fields
/// decode to their defaults so the validator reports the domain message
/// instead of a decoder error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Breed {
    pub id: i64,
    pub species: String,
    #[serde(rename = "petSize")]
    pub pet_size: String,
    pub name: String,
    pub average_male_adult_weight: i64,
    pub average_female_adult_weight: i64,
}

/// Search restrictions; `None` means the dimension is unconstrained.
#[derive(Debug, Clone, Default)]
pub struct BreedFilter {
    pub species: Option<String>,
    pub weight: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_mixed_case() {
        let breed = Breed {
            id: 7,
            species: "dog".into(),
            pet_size: "medium".into(),
            name: "Labrador".into(),
            average_male_adult_weight: 30,
            average_female_adult_weight: 25,
        };
        let v = serde_json::to_value(&breed).unwrap();
        assert_eq!(v["petSize"], "medium");
        assert_eq!(v["average_male_adult_weight"], 30);
        assert_eq!(v["average_female_adult_weight"], 25);
        assert!(v.get("pet_size").is_none());
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let breed: Breed = serde_json::from_str(r#"{"name":"Sphynx"}"#).unwrap();
        assert_eq!(breed.id, 0);
        assert_eq!(breed.species, "");
        assert_eq!(breed.average_male_adult_weight, 0);
    }
}
