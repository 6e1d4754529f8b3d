use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{is_constraint_violation, timestamp_from_sql, timestamp_to_sql, Store};
use crate::error::{Result, WaypathError};
use crate::id::new_location_id;
use crate::model::{Location, LocationUpdate, NewLocation};

const LOCATION_COLUMNS: &str = "id, name, description, x_coordinate, y_coordinate, created_at";

fn location_from_row(row: &Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        x_coordinate: row.get(3)?,
        y_coordinate: row.get(4)?,
        created_at: timestamp_from_sql(row.get(5)?),
    })
}

pub(super) fn insert_location(conn: &Connection, location: &Location) -> Result<()> {
    conn.execute(
        "INSERT INTO locations (id, name, description, x_coordinate, y_coordinate, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            location.id,
            location.name,
            location.description,
            location.x_coordinate,
            location.y_coordinate,
            timestamp_to_sql(location.created_at),
        ],
    )
    .map_err(|e| {
        if is_constraint_violation(&e) {
            WaypathError::already_exists("location", &location.id)
        } else {
            WaypathError::db_operation("insert location", e)
        }
    })?;
    Ok(())
}

pub(super) fn location_exists(conn: &Connection, id: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM locations WHERE id = ?1", [id], |r| r.get(0))
        .optional()?;
    Ok(found.is_some())
}

impl Store {
    /// Create a location with a fresh id
    #[tracing::instrument(skip(self, new), fields(name = %new.name))]
    pub fn add_location(&self, new: NewLocation) -> Result<Location> {
        new.validate()?;

        let location = Location {
            id: new_location_id(),
            name: new.name.trim().to_string(),
            description: new.description.filter(|d| !d.trim().is_empty()),
            x_coordinate: new.x_coordinate,
            y_coordinate: new.y_coordinate,
            created_at: Some(Utc::now()),
        };
        insert_location(&self.conn, &location)?;

        tracing::debug!(id = %location.id, "location added");
        Ok(location)
    }

    /// Apply a partial update and return the updated record
    #[tracing::instrument(skip(self, update))]
    pub fn update_location(&self, id: &str, update: &LocationUpdate) -> Result<Location> {
        update.validate()?;

        let mut location = self
            .get_location(id)?
            .ok_or_else(|| WaypathError::not_found("location", id))?;
        update.apply(&mut location);
        location.name = location.name.trim().to_string();

        self.conn
            .execute(
                "UPDATE locations
                 SET name = ?2, description = ?3, x_coordinate = ?4, y_coordinate = ?5
                 WHERE id = ?1",
                params![
                    location.id,
                    location.name,
                    location.description,
                    location.x_coordinate,
                    location.y_coordinate,
                ],
            )
            .map_err(|e| WaypathError::db_operation("update location", e))?;

        Ok(location)
    }

    /// Delete a location and every route touching it.
    /// Returns the removed record and the number of route rows removed with it.
    #[tracing::instrument(skip(self))]
    pub fn delete_location(&self, id: &str) -> Result<(Location, usize)> {
        let location = self
            .get_location(id)?
            .ok_or_else(|| WaypathError::not_found("location", id))?;

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| WaypathError::transaction("begin delete location", e))?;

        let connected: i64 = tx.query_row(
            "SELECT COUNT(*) FROM routes WHERE from_location_id = ?1 OR to_location_id = ?1",
            [id],
            |r| r.get(0),
        )?;
        tx.execute("DELETE FROM locations WHERE id = ?1", [id])
            .map_err(|e| WaypathError::db_operation("delete location", e))?;
        tx.commit()
            .map_err(|e| WaypathError::transaction("commit delete location", e))?;

        tracing::debug!(routes_removed = connected, "location deleted");
        Ok((location, connected as usize))
    }

    pub fn get_location(&self, id: &str) -> Result<Option<Location>> {
        let sql = format!("SELECT {} FROM locations WHERE id = ?1", LOCATION_COLUMNS);
        let location = self
            .conn
            .query_row(&sql, [id], location_from_row)
            .optional()?;
        Ok(location)
    }

    /// Resolve a user-supplied reference: an exact id, otherwise a unique
    /// case-insensitive name match
    pub fn resolve_location(&self, reference: &str) -> Result<Location> {
        if let Some(location) = self.get_location(reference)? {
            return Ok(location);
        }

        let sql = format!(
            "SELECT {} FROM locations WHERE name = ?1 COLLATE NOCASE ORDER BY id",
            LOCATION_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut matches = stmt
            .query_map([reference.trim()], location_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        match matches.len() {
            0 => Err(WaypathError::not_found("location", reference)),
            1 => Ok(matches.remove(0)),
            count => Err(WaypathError::AmbiguousName {
                name: reference.to_string(),
                count,
            }),
        }
    }

    /// All locations ordered by name
    pub fn list_locations(&self) -> Result<Vec<Location>> {
        let sql = format!(
            "SELECT {} FROM locations ORDER BY name COLLATE NOCASE, id",
            LOCATION_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let locations = stmt
            .query_map([], location_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(locations)
    }
}
