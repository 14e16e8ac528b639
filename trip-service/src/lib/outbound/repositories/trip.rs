use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::UserId;
use crate::trip::errors::TripError;
use crate::trip::models::NewTrip;
use crate::trip::models::Trip;
use crate::trip::models::TripDescription;
use crate::trip::models::TripId;
use crate::trip::models::TripName;
use crate::trip::models::TripStatus;
use crate::trip::ports::TripRepository;

pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_trip(row: &PgRow) -> Result<Trip, TripError> {
        let status: String = row.get("status");

        Ok(Trip {
            id: TripId(row.get("id")),
            name: TripName::new(row.get("name"))?,
            description: TripDescription::new(row.get("description"))?,
            password_hash: row.get("password_hash"),
            creator_id: UserId(row.get("creator_id")),
            status: status.parse()?,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn create(&self, new_trip: NewTrip) -> Result<Trip, TripError> {
        let row = sqlx::query(
            r#"
            INSERT INTO trips (name, description, password_hash, creator_id, status)
            VALUES ($1, $2, $3, $4, 'created')
            RETURNING id, name, description, password_hash, creator_id, status, created_at, updated_at
            "#,
        )
        .bind(new_trip.name.as_str())
        .bind(new_trip.description.as_str())
        .bind(&new_trip.password_hash)
        .bind(new_trip.creator_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        Self::row_to_trip(&row)
    }

    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, TripError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, password_hash, creator_id, status, created_at, updated_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_trip).transpose()
    }

    async fn find_by_creator(&self, creator_id: UserId) -> Result<Vec<Trip>, TripError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, password_hash, creator_id, status, created_at, updated_at
            FROM trips
            WHERE creator_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(creator_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_trip).collect()
    }

    async fn transition_status(
        &self,
        id: TripId,
        creator_id: UserId,
        from: TripStatus,
        to: TripStatus,
    ) -> Result<bool, TripError> {
        // The WHERE predicate carries the whole guard: identity, ownership,
        // and expected prior status. Of two racing callers, the database
        // lets exactly one match the row.
        let result = sqlx::query(
            r#"
            UPDATE trips
            SET status = $4, updated_at = NOW()
            WHERE id = $1 AND creator_id = $2 AND status = $3
            "#,
        )
        .bind(id.as_i64())
        .bind(creator_id.as_i64())
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
