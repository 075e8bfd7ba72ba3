//! One-shot CSV-to-table loader.
//!
//! Rows are mapped positionally (id, species, petSize, name, male weight,
//! female weight) and inserted with the file-supplied id. A bad row is
//! logged and skipped; the call fails after the full pass if any row failed.

use crate::error::AppError;
use crate::model::Breed;
use crate::service::BreedService;
use sqlx::SqlitePool;
use std::path::Path;

/// Load `path` into the breeds table, skipping the header row. Returns the
/// number of rows inserted.
pub async fn populate_from_csv(pool: &SqlitePool, path: &Path) -> Result<usize, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut total = 0usize;
    let mut failed = 0usize;
    let mut inserted = 0usize;
    for (index, record) in reader.records().enumerate() {
        total += 1;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(row = index, error = %e, "unreadable row");
                failed += 1;
                continue;
            }
        };
        let breed = match record_to_breed(&record) {
            Ok(b) => b,
            Err(msg) => {
                tracing::error!(row = index, "{}", msg);
                failed += 1;
                continue;
            }
        };
        if let Err(e) = BreedService::insert_with_id(pool, &breed).await {
            tracing::error!(row = index, id = breed.id, error = %e, "insert failed");
            failed += 1;
            continue;
        }
        inserted += 1;
    }

    if failed > 0 {
        return Err(AppError::BulkLoad { failed, total });
    }
    Ok(inserted)
}

fn record_to_breed(record: &csv::StringRecord) -> Result<Breed, String> {
    Ok(Breed {
        id: int_field(record, 0)?,
        species: text_field(record, 1)?,
        pet_size: text_field(record, 2)?,
        name: text_field(record, 3)?,
        average_male_adult_weight: int_field(record, 4)?,
        average_female_adult_weight: int_field(record, 5)?,
    })
}

fn text_field(record: &csv::StringRecord, index: usize) -> Result<String, String> {
    record
        .get(index)
        .map(str::to_string)
        .ok_or_else(|| format!("missing column {}", index))
}

fn int_field(record: &csv::StringRecord, index: usize) -> Result<i64, String> {
    let raw = record
        .get(index)
        .ok_or_else(|| format!("missing column {}", index))?;
    raw.trim()
        .parse()
        .map_err(|_| format!("column {} is not an integer: {:?}", index, raw))
}
