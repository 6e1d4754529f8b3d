//! Store management for waypath
//!
//! The store is a directory (default `.waypath/`) holding `config.toml` and a
//! SQLite database with the `locations` and `routes` tables.

mod locations;
pub mod paths;
mod routes;
mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{Result, WaypathError};
use crate::graph::DataSource;
use crate::model::{Location, Network, Route};
use paths::{CONFIG_FILE, DATABASE_FILE, DEFAULT_STORE_DIR};

pub use schema::CURRENT_SCHEMA_VERSION;

/// Row counts for status reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub locations: usize,
    pub routes: usize,
}

/// Summary of an import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub locations: usize,
    pub routes: usize,
}

/// The waypath store
#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    config: StoreConfig,
    conn: Connection,
}

impl Store {
    /// Discover a store by walking up from the given root directory
    pub fn discover(root: &Path) -> Result<Self> {
        let store_path = paths::discover_store(root)?;
        Self::open(&store_path)
    }

    /// Open an existing store at the given path
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(WaypathError::StoreNotFound {
                search_root: path.to_path_buf(),
            });
        }

        let config_path = path.join(CONFIG_FILE);
        let config = if config_path.exists() {
            StoreConfig::load(&config_path)?
        } else {
            StoreConfig::default()
        };

        let conn = open_database(&path.join(DATABASE_FILE))?;

        Ok(Store {
            root: path.to_path_buf(),
            config,
            conn,
        })
    }

    /// Initialize a new store under the given project root
    pub fn init(project_root: &Path) -> Result<Self> {
        Self::init_at(&project_root.join(DEFAULT_STORE_DIR))
    }

    /// Initialize a store at an explicit store root path. Idempotent.
    #[tracing::instrument(skip(store_root), fields(path = %store_root.display()))]
    pub fn init_at(store_root: &Path) -> Result<Self> {
        fs::create_dir_all(store_root)?;

        let config_path = store_root.join(CONFIG_FILE);
        if !config_path.exists() {
            StoreConfig::default().save(&config_path)?;
        }

        tracing::info!("store initialized");
        Self::open(store_root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of stored locations and route rows
    pub fn counts(&self) -> Result<StoreCounts> {
        let count = |table: &str| -> Result<usize> {
            let n: i64 = self
                .conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
                .map_err(|e| WaypathError::db_operation(&format!("count {}", table), e))?;
            Ok(n as usize)
        };

        Ok(StoreCounts {
            locations: count("locations")?,
            routes: count("routes")?,
        })
    }

    /// Snapshot of every location and route
    pub fn export(&self) -> Result<Network> {
        Ok(Network {
            locations: self.list_locations()?,
            routes: self.list_routes()?,
        })
    }

    /// Insert every record of `network`, keeping its ids, in one transaction.
    ///
    /// Fails without changes if any id already exists or a route names a location
    /// that is in neither the store nor the import.
    #[tracing::instrument(skip_all, fields(locations = network.locations.len(), routes = network.routes.len()))]
    pub fn import(&self, network: &Network) -> Result<ImportSummary> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| WaypathError::transaction("begin import", e))?;

        for location in &network.locations {
            crate::model::validate_name(&location.name)?;
            crate::model::validate_coordinate("x", location.x_coordinate)?;
            crate::model::validate_coordinate("y", location.y_coordinate)?;
            locations::insert_location(&tx, location)?;
        }

        for route in &network.routes {
            crate::model::validate_endpoints(&route.from_location_id, &route.to_location_id)?;
            crate::model::validate_distance(route.distance)?;
            for endpoint in [&route.from_location_id, &route.to_location_id] {
                if !locations::location_exists(&tx, endpoint)? {
                    return Err(WaypathError::not_found("location", endpoint));
                }
            }
            routes::insert_route(&tx, route)?;
        }

        tx.commit()
            .map_err(|e| WaypathError::transaction("commit import", e))?;

        Ok(ImportSummary {
            locations: network.locations.len(),
            routes: network.routes.len(),
        })
    }
}

impl DataSource for Store {
    fn locations(&self) -> Result<Vec<Location>> {
        self.list_locations()
    }

    fn routes(&self) -> Result<Vec<Route>> {
        self.list_routes()
    }
}

fn open_database(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path).map_err(|e| {
        WaypathError::Other(format!(
            "failed to open database at {}: {}",
            db_path.display(),
            e
        ))
    })?;

    schema::create_schema(&conn)?;
    Ok(conn)
}

/// Timestamps are stored as RFC 3339 text
pub(crate) fn timestamp_to_sql(ts: Option<DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.to_rfc3339())
}

pub(crate) fn timestamp_from_sql(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|t| t.with_timezone(&Utc))
}

/// Whether a rusqlite error is a UNIQUE/PRIMARY KEY/CHECK/FOREIGN KEY violation
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
