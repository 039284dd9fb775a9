use std::str::FromStr;

use serde::Serialize;

use crate::utils::error::Error;

/// Basemaps the viewer can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Basemap {
    #[default]
    Streets,
    Satellite,
    Hybrid,
    Topographic,
    Gray,
    DarkGray,
    Osm,
}

impl Basemap {
    /// Id understood by the external map widget.
    pub fn as_str(&self) -> &'static str {
        match self {
            Basemap::Streets => "streets",
            Basemap::Satellite => "satellite",
            Basemap::Hybrid => "hybrid",
            Basemap::Topographic => "topo",
            Basemap::Gray => "gray",
            Basemap::DarkGray => "dark-gray",
            Basemap::Osm => "osm",
        }
    }
}

impl FromStr for Basemap {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "streets" => Ok(Basemap::Streets),
            "satellite" => Ok(Basemap::Satellite),
            "hybrid" => Ok(Basemap::Hybrid),
            "topo" => Ok(Basemap::Topographic),
            "gray" => Ok(Basemap::Gray),
            "dark-gray" => Ok(Basemap::DarkGray),
            "osm" => Ok(Basemap::Osm),
            other => Err(Error::UnknownBasemap(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for basemap in [
            Basemap::Streets,
            Basemap::Satellite,
            Basemap::Hybrid,
            Basemap::Topographic,
            Basemap::Gray,
            Basemap::DarkGray,
            Basemap::Osm,
        ] {
            assert_eq!(basemap.as_str().parse::<Basemap>().unwrap(), basemap);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert!(matches!(
            "watercolor".parse::<Basemap>(),
            Err(Error::UnknownBasemap(_))
        ));
    }

    #[test]
    fn test_streets_is_the_default() {
        assert_eq!(Basemap::default(), Basemap::Streets);
    }
}
