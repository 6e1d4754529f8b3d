use waypath_core::format::OutputFormat;
use waypath_core::model::{validate_coordinate, validate_distance};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a route distance; must be finite and positive
pub fn parse_distance(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    validate_distance(value).map_err(|e| e.to_string())?;
    Ok(value)
}

/// Parse a layout coordinate; must be finite
pub fn parse_coordinate(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    validate_coordinate("", value).map_err(|_| format!("'{}' is not a finite number", s))?;
    Ok(value)
}
