use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::spots::{Coordinates, PointOfInterest};
use crate::ConfigError;

/// Demo catalog served instead of live geo data.
///
/// Elements use the same shape as Overpass elements so they go through the
/// normal pipeline untouched. `origin` stands in for the user position when a
/// request carries no coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub origin: Coordinates,
    #[serde(default)]
    pub elements: Vec<PointOfInterest>,
}

/// Load and validate the demo catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), ConfigError> {
    Coordinates::new(catalog.origin.lat, catalog.origin.lng)
        .map_err(|e| ConfigError::InvalidCatalog(format!("origin: {e}")))?;

    let mut seen_ids = HashSet::new();

    for element in &catalog.elements {
        if !seen_ids.insert(element.id) {
            return Err(ConfigError::InvalidCatalog(format!(
                "duplicate element id: {}",
                element.id
            )));
        }

        let (Some(lat), Some(lon)) = (element.lat, element.lon) else {
            return Err(ConfigError::InvalidCatalog(format!(
                "element {} is missing lat/lon",
                element.id
            )));
        };

        Coordinates::new(lat, lon)
            .map_err(|e| ConfigError::InvalidCatalog(format!("element {}: {e}", element.id)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> CatalogFile {
        serde_yaml::from_str(yaml).expect("yaml should parse")
    }

    #[test]
    fn catalog_parses_overpass_shaped_elements() {
        let catalog = parse(
            r"
origin: { lat: 23.2599, lng: 77.4126 }
elements:
  - id: 1
    lat: 23.2610
    lon: 77.4130
    tags: { name: Lotus Inn, tourism: hotel }
",
        );
        assert_eq!(catalog.elements.len(), 1);
        assert_eq!(catalog.elements[0].tag("tourism"), Some("hotel"));
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn catalog_without_elements_is_valid() {
        let catalog = parse("origin: { lat: 10.0, lng: 10.0 }");
        assert!(catalog.elements.is_empty());
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = parse(
            r"
origin: { lat: 0.0, lng: 0.0 }
elements:
  - { id: 5, lat: 0.1, lon: 0.1 }
  - { id: 5, lat: 0.2, lon: 0.2 }
",
        );
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCatalog(ref m) if m.contains("duplicate")));
    }

    #[test]
    fn elements_without_coordinates_are_rejected() {
        let catalog = parse(
            r"
origin: { lat: 0.0, lng: 0.0 }
elements:
  - { id: 9, tags: { name: Nowhere } }
",
        );
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ConfigError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn out_of_range_origin_is_rejected() {
        let catalog = parse("origin: { lat: 123.0, lng: 0.0 }");
        assert!(matches!(
            validate_catalog(&catalog),
            Err(ConfigError::InvalidCatalog(ref m)) if m.starts_with("origin")
        ));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
    }
}
