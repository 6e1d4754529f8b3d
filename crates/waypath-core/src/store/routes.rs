use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{
    is_constraint_violation, locations::location_exists, timestamp_from_sql, timestamp_to_sql,
    Store,
};
use crate::error::{Result, WaypathError};
use crate::id::new_route_id;
use crate::model::{NewRoute, Route};

const ROUTE_COLUMNS: &str = "id, from_location_id, to_location_id, distance, created_at";

fn route_from_row(row: &Row<'_>) -> rusqlite::Result<Route> {
    Ok(Route {
        id: row.get(0)?,
        from_location_id: row.get(1)?,
        to_location_id: row.get(2)?,
        distance: row.get(3)?,
        created_at: timestamp_from_sql(row.get(4)?),
    })
}

pub(super) fn insert_route(conn: &Connection, route: &Route) -> Result<()> {
    conn.execute(
        "INSERT INTO routes (id, from_location_id, to_location_id, distance, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            route.id,
            route.from_location_id,
            route.to_location_id,
            route.distance,
            timestamp_to_sql(route.created_at),
        ],
    )
    .map_err(|e| {
        if is_constraint_violation(&e) {
            WaypathError::already_exists(
                "route",
                format!("{} -> {}", route.from_location_id, route.to_location_id),
            )
        } else {
            WaypathError::db_operation("insert route", e)
        }
    })?;
    Ok(())
}

impl Store {
    /// Store a route row, plus its mirror when `bidirectional` is set.
    ///
    /// Both rows are written in one transaction; if either direction already
    /// exists nothing is stored.
    #[tracing::instrument(skip(self, new), fields(from = %new.from_location_id, to = %new.to_location_id, bidirectional = new.bidirectional))]
    pub fn add_route(&self, new: NewRoute) -> Result<Vec<Route>> {
        new.validate()?;

        for endpoint in [&new.from_location_id, &new.to_location_id] {
            if !location_exists(&self.conn, endpoint)? {
                return Err(WaypathError::not_found("location", endpoint));
            }
        }

        let created_at = Some(Utc::now());
        let mut rows = vec![Route {
            id: new_route_id(),
            from_location_id: new.from_location_id.clone(),
            to_location_id: new.to_location_id.clone(),
            distance: new.distance,
            created_at,
        }];
        if new.bidirectional {
            rows.push(Route {
                id: new_route_id(),
                from_location_id: new.to_location_id,
                to_location_id: new.from_location_id,
                distance: new.distance,
                created_at,
            });
        }

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| WaypathError::transaction("begin add route", e))?;
        for row in &rows {
            insert_route(&tx, row)?;
        }
        tx.commit()
            .map_err(|e| WaypathError::transaction("commit add route", e))?;

        tracing::debug!(rows = rows.len(), "route added");
        Ok(rows)
    }

    /// Delete one stored route row. The mirrored row, if any, is left in place.
    #[tracing::instrument(skip(self))]
    pub fn delete_route(&self, id: &str) -> Result<Route> {
        let route = self
            .get_route(id)?
            .ok_or_else(|| WaypathError::not_found("route", id))?;

        self.conn
            .execute("DELETE FROM routes WHERE id = ?1", [id])
            .map_err(|e| WaypathError::db_operation("delete route", e))?;

        Ok(route)
    }

    pub fn get_route(&self, id: &str) -> Result<Option<Route>> {
        let sql = format!("SELECT {} FROM routes WHERE id = ?1", ROUTE_COLUMNS);
        let route = self.conn.query_row(&sql, [id], route_from_row).optional()?;
        Ok(route)
    }

    /// All stored route rows
    pub fn list_routes(&self) -> Result<Vec<Route>> {
        let sql = format!(
            "SELECT {} FROM routes ORDER BY from_location_id, to_location_id",
            ROUTE_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let routes = stmt
            .query_map([], route_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(routes)
    }

    /// Route rows touching a location, in either direction
    pub fn routes_for_location(&self, location_id: &str) -> Result<Vec<Route>> {
        let sql = format!(
            "SELECT {} FROM routes
             WHERE from_location_id = ?1 OR to_location_id = ?1
             ORDER BY from_location_id, to_location_id",
            ROUTE_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let routes = stmt
            .query_map([location_id], route_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(routes)
    }
}
