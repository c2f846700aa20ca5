//! Person persistence queries

use crate::StorageError;
use chrono::{DateTime, Utc};
use person_core::{NewPerson, Person};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

type Result<T> = std::result::Result<T, StorageError>;

/// Insert a new person record
///
/// Assigns the internal id and audit timestamps. Uniqueness of
/// `external_id` is enforced by the table's UNIQUE constraint; a
/// constraint violation maps to [`StorageError::Conflict`], so two
/// concurrent inserts of the same external id cannot both succeed.
pub async fn create(pool: &SqlitePool, new_person: &NewPerson) -> Result<Person> {
    let now = Utc::now();

    let result = sqlx::query(
        "INSERT INTO persons (external_id, name, email, date_of_birth, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(new_person.external_id.to_string())
    .bind(&new_person.name)
    .bind(&new_person.email)
    .bind(new_person.date_of_birth.to_rfc3339())
    .bind(now.to_rfc3339())
    .bind(now.to_rfc3339())
    .execute(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::Conflict(new_person.external_id)
        }
        _ => StorageError::Database(e),
    })?;

    let person = Person {
        id: result.last_insert_rowid(),
        external_id: new_person.external_id,
        name: new_person.name.clone(),
        email: new_person.email.clone(),
        date_of_birth: new_person.date_of_birth,
        created_at: now,
        updated_at: now,
    };

    tracing::info!(id = person.id, external_id = %person.external_id, "created person");

    Ok(person)
}

/// Get a person by internal id
///
/// # Errors
///
/// Returns [`StorageError::NotFound`] if no record exists with that id
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Person> {
    let row = sqlx::query(
        "SELECT id, external_id, name, email, date_of_birth, created_at, updated_at
         FROM persons WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StorageError::not_found("Person", id.to_string()))?;

    person_from_row(&row)
}

/// Get a person by external id, if one exists
pub async fn get_by_external_id(pool: &SqlitePool, external_id: Uuid) -> Result<Option<Person>> {
    let row = sqlx::query(
        "SELECT id, external_id, name, email, date_of_birth, created_at, updated_at
         FROM persons WHERE external_id = ?",
    )
    .bind(external_id.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(person_from_row).transpose()
}

fn person_from_row(row: &SqliteRow) -> Result<Person> {
    let external_id: String = row.get("external_id");
    let external_id = Uuid::parse_str(&external_id)
        .map_err(|e| StorageError::Serialization(format!("invalid external_id: {e}")))?;

    Ok(Person {
        id: row.get("id"),
        external_id,
        name: row.get("name"),
        email: row.get("email"),
        date_of_birth: parse_timestamp(&row.get::<String, _>("date_of_birth"))?,
        created_at: parse_timestamp(&row.get::<String, _>("created_at"))?,
        updated_at: parse_timestamp(&row.get::<String, _>("updated_at"))?,
    })
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StorageError::Serialization(format!("invalid timestamp {value:?}: {e}")))
}
