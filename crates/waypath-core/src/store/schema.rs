//! SQLite schema for the location/route store

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Result, WaypathError};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS locations (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    x_coordinate REAL NOT NULL,
    y_coordinate REAL NOT NULL,
    created_at TEXT
);
CREATE INDEX IF NOT EXISTS idx_locations_name ON locations(name);

-- Each row is one direction; a bidirectional route is stored as two rows
CREATE TABLE IF NOT EXISTS routes (
    id TEXT PRIMARY KEY,
    from_location_id TEXT NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
    to_location_id TEXT NOT NULL REFERENCES locations(id) ON DELETE CASCADE,
    distance REAL NOT NULL CHECK (distance > 0),
    created_at TEXT,
    CHECK (from_location_id <> to_location_id),
    UNIQUE (from_location_id, to_location_id)
);
CREATE INDEX IF NOT EXISTS idx_routes_to ON routes(to_location_id);

CREATE TABLE IF NOT EXISTS store_meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Create tables if needed and check the stored schema version
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| WaypathError::db_operation("enable foreign keys", e))?;
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| WaypathError::db_operation("create database schema", e))?;

    let stored: Option<String> = conn
        .query_row(
            "SELECT value FROM store_meta WHERE key = 'schema_version'",
            [],
            |r| r.get(0),
        )
        .optional()?;

    match stored.map(|v| v.parse::<i32>().unwrap_or(0)) {
        None => {
            conn.execute(
                "INSERT INTO store_meta (key, value) VALUES ('schema_version', ?1)",
                [CURRENT_SCHEMA_VERSION.to_string()],
            )?;
        }
        Some(version) if version > CURRENT_SCHEMA_VERSION => {
            return Err(WaypathError::InvalidStore {
                reason: format!(
                    "database schema version {} is newer than supported version {}",
                    version, CURRENT_SCHEMA_VERSION
                ),
            });
        }
        Some(_) => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();

        let version: String = conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION.to_string());
    }

    #[test]
    fn test_newer_schema_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute(
            "UPDATE store_meta SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        assert!(matches!(
            create_schema(&conn),
            Err(WaypathError::InvalidStore { .. })
        ));
    }

    #[test]
    fn test_distance_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO locations (id, name, x_coordinate, y_coordinate) VALUES ('a', 'A', 0, 0), ('b', 'B', 1, 1)",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO routes (id, from_location_id, to_location_id, distance) VALUES ('r', 'a', 'b', 0)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_self_route_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO locations (id, name, x_coordinate, y_coordinate) VALUES ('a', 'A', 0, 0)",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO routes (id, from_location_id, to_location_id, distance) VALUES ('r', 'a', 'a', 3)",
            [],
        );
        assert!(result.is_err());
    }
}
