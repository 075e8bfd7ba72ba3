//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the breeds table.
//!
//! Clause fragments and their bind values accumulate together in one
//! `QueryBuf`, so positional `?` placeholders cannot drift out of order.

use crate::model::{Breed, BreedFilter};
use crate::sql::params::SqlValue;

/// Column list in table order; every SELECT uses it so row decoding stays
/// positionally stable.
const BREED_COLUMNS: &str =
    "id, species, pet_size, name, average_male_adult_weight, average_female_adult_weight";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) {
        self.params.push(v);
    }
}

/// SELECT all rows in table order.
pub fn select_all() -> QueryBuf {
    QueryBuf::new(format!("SELECT {} FROM breeds", BREED_COLUMNS))
}

/// SELECT a single row by primary key.
pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!("SELECT {} FROM breeds WHERE id = ?", BREED_COLUMNS));
    q.push_param(SqlValue::Int(id));
    q
}

/// Existence probe; returns 1 or 0.
pub fn exists_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new("SELECT EXISTS(SELECT 1 FROM breeds WHERE id = ?)".to_string());
    q.push_param(SqlValue::Int(id));
    q
}

/// SELECT with optional species and weight restrictions. The weight clause
/// matches either adult weight column and is grouped, so a species
/// restriction always applies to the whole predicate.
pub fn search(filter: &BreedFilter) -> QueryBuf {
    let mut q = QueryBuf::new(format!("SELECT {} FROM breeds", BREED_COLUMNS));
    let mut where_parts = Vec::new();
    if let Some(species) = &filter.species {
        q.push_param(SqlValue::Text(species.clone()));
        where_parts.push("species = ?");
    }
    if let Some(weight) = filter.weight {
        q.push_param(SqlValue::Int(weight));
        q.push_param(SqlValue::Int(weight));
        where_parts.push("(average_male_adult_weight = ? OR average_female_adult_weight = ?)");
    }
    if !where_parts.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&where_parts.join(" AND "));
    }
    q
}

/// INSERT without id; the store assigns one.
pub fn insert(breed: &Breed) -> QueryBuf {
    let mut q = QueryBuf::new(
        "INSERT INTO breeds (species, pet_size, name, average_male_adult_weight, average_female_adult_weight) \
         VALUES (?, ?, ?, ?, ?)"
            .to_string(),
    );
    push_field_params(&mut q, breed);
    q
}

/// INSERT with a caller-supplied id. Only the bulk loader uses this; the
/// serving path always lets the store assign ids.
pub fn insert_with_id(breed: &Breed) -> QueryBuf {
    let mut q = QueryBuf::new(
        "INSERT INTO breeds (id, species, pet_size, name, average_male_adult_weight, average_female_adult_weight) \
         VALUES (?, ?, ?, ?, ?, ?)"
            .to_string(),
    );
    q.push_param(SqlValue::Int(breed.id));
    push_field_params(&mut q, breed);
    q
}

/// UPDATE every field except id.
pub fn update_by_id(id: i64, breed: &Breed) -> QueryBuf {
    let mut q = QueryBuf::new(
        "UPDATE breeds SET species = ?, pet_size = ?, name = ?, \
         average_male_adult_weight = ?, average_female_adult_weight = ? WHERE id = ?"
            .to_string(),
    );
    push_field_params(&mut q, breed);
    q.push_param(SqlValue::Int(id));
    q
}

/// DELETE by primary key.
pub fn delete_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new("DELETE FROM breeds WHERE id = ?".to_string());
    q.push_param(SqlValue::Int(id));
    q
}

/// The five mutable fields, in column order.
fn push_field_params(q: &mut QueryBuf, breed: &Breed) {
    q.push_param(SqlValue::Text(breed.species.clone()));
    q.push_param(SqlValue::Text(breed.pet_size.clone()));
    q.push_param(SqlValue::Text(breed.name.clone()));
    q.push_param(SqlValue::Int(breed.average_male_adult_weight));
    q.push_param(SqlValue::Int(breed.average_female_adult_weight));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labrador() -> Breed {
        Breed {
            id: 3,
            species: "dog".into(),
            pet_size: "medium".into(),
            name: "Labrador".into(),
            average_male_adult_weight: 30,
            average_female_adult_weight: 25,
        }
    }

    #[test]
    fn search_without_filters_has_no_where_clause() {
        let q = search(&BreedFilter::default());
        assert!(!q.sql.contains("WHERE"));
        assert!(q.params.is_empty());
    }

    #[test]
    fn search_by_species_only() {
        let q = search(&BreedFilter {
            species: Some("dog".into()),
            weight: None,
        });
        assert!(q.sql.ends_with("WHERE species = ?"));
        assert_eq!(q.params, vec![SqlValue::Text("dog".into())]);
    }

    #[test]
    fn search_by_weight_matches_either_column() {
        let q = search(&BreedFilter {
            species: None,
            weight: Some(20),
        });
        assert!(q
            .sql
            .ends_with("WHERE (average_male_adult_weight = ? OR average_female_adult_weight = ?)"));
        assert_eq!(q.params, vec![SqlValue::Int(20), SqlValue::Int(20)]);
    }

    #[test]
    fn combined_search_groups_the_weight_clause() {
        let q = search(&BreedFilter {
            species: Some("cat".into()),
            weight: Some(8),
        });
        assert!(q.sql.ends_with(
            "WHERE species = ? AND (average_male_adult_weight = ? OR average_female_adult_weight = ?)"
        ));
        assert_eq!(
            q.params,
            vec![SqlValue::Text("cat".into()), SqlValue::Int(8), SqlValue::Int(8)]
        );
    }

    #[test]
    fn insert_omits_id_and_binds_fields_in_column_order() {
        let q = insert(&labrador());
        assert!(q.sql.starts_with("INSERT INTO breeds (species,"));
        assert_eq!(q.params.len(), 5);
        assert_eq!(q.params[0], SqlValue::Text("dog".into()));
        assert_eq!(q.params[4], SqlValue::Int(25));
    }

    #[test]
    fn insert_with_id_binds_id_first() {
        let q = insert_with_id(&labrador());
        assert_eq!(q.params[0], SqlValue::Int(3));
        assert_eq!(q.params.len(), 6);
    }

    #[test]
    fn update_binds_id_last() {
        let q = update_by_id(9, &labrador());
        assert_eq!(q.params.len(), 6);
        assert_eq!(q.params[5], SqlValue::Int(9));
    }
}
