use crate::types::{Coordinate, LocationError};

/// Resolve "current location" to the configured home coordinate.
pub fn get_current_location(home: Option<Coordinate>) -> Result<Coordinate, LocationError> {
    let coord = home.ok_or(LocationError::ServiceUnavailable)?;

    if !(-90.0..=90.0).contains(&coord.latitude) || !(-180.0..=180.0).contains(&coord.longitude) {
        return Err(LocationError::Other(format!("Coordinate out of range: {}", coord)));
    }

    Ok(coord)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_home_is_current_location() {
        let home = Coordinate::new(56.95, 24.1);
        assert_eq!(get_current_location(Some(home)).unwrap(), home);
    }

    #[test]
    fn test_no_home_is_unavailable() {
        assert!(matches!(
            get_current_location(None),
            Err(LocationError::ServiceUnavailable)
        ));
    }

    #[test]
    fn test_out_of_range_home() {
        assert!(matches!(
            get_current_location(Some(Coordinate::new(0.0, 200.0))),
            Err(LocationError::Other(_))
        ));
    }
}
