//! Identifier generation for locations and routes
//!
//! IDs are lowercase ULIDs with a kind prefix: `loc-<ulid>` and `rt-<ulid>`.
//! Imported records keep whatever identifier they were exported with.

use ulid::Ulid;

/// Prefix for location identifiers
pub const LOCATION_PREFIX: &str = "loc-";

/// Prefix for route identifiers
pub const ROUTE_PREFIX: &str = "rt-";

/// Generate a new location identifier
pub fn new_location_id() -> String {
    format!("{}{}", LOCATION_PREFIX, Ulid::new().to_string().to_lowercase())
}

/// Generate a new route identifier
pub fn new_route_id() -> String {
    format!("{}{}", ROUTE_PREFIX, Ulid::new().to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_id_shape() {
        let id = new_location_id();
        assert!(id.starts_with(LOCATION_PREFIX));
        assert_eq!(id.len(), LOCATION_PREFIX.len() + 26);
        assert_eq!(id, id.to_lowercase());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new_route_id();
        let b = new_route_id();
        assert!(a.starts_with(ROUTE_PREFIX));
        assert_ne!(a, b);
    }
}
