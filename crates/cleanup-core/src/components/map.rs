use tracing::debug;

use crate::models::{location_message, MapPoint};
use crate::page::Page;

pub struct PollutionMap {
    points: Vec<MapPoint>,
    info: Option<String>,
}

impl PollutionMap {
    /// Requires at least one point control and the info region.
    pub fn init(page: &Page) -> Option<Self> {
        let region = page.map.as_ref()?;
        if region.points.is_empty() || !region.info {
            return None;
        }
        Some(Self {
            points: region.points.clone(),
            info: None,
        })
    }

    pub fn points(&self) -> &[MapPoint] {
        &self.points
    }

    /// Click on the point with identifier `location`.
    pub fn on_point_click(&mut self, location: &str) -> &str {
        debug!(location, "Map point selected");
        self.info.insert(location_message(location))
    }

    /// Click on the point at `index`, if any.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        let location = self.points.get(index)?.location.clone();
        Some(self.on_point_click(&location))
    }

    /// Current text of the info region
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MapRegion;

    #[test]
    fn test_registered_point() {
        let mut map = PollutionMap::init(&Page::builtin()).unwrap();
        assert!(map.info().is_none());
        let message = map.activate(0).unwrap().to_string();
        assert!(message.starts_with("Litter here washes directly into the water"));
        assert_eq!(map.info(), Some(message.as_str()));
    }

    #[test]
    fn test_unknown_point_uses_fallback() {
        let page = Page {
            map: Some(MapRegion {
                points: vec![MapPoint {
                    location: "Unknown Ave".to_string(),
                    label: "Unknown Ave".to_string(),
                }],
                info: true,
            }),
            ..Page::builtin()
        };
        let mut map = PollutionMap::init(&page).unwrap();
        assert_eq!(
            map.activate(0),
            Some("Pollution at Unknown Ave harms our community.")
        );
        assert_eq!(map.activate(1), None);
    }

    #[test]
    fn test_no_points_is_inactive() {
        let page = Page {
            map: Some(MapRegion {
                points: vec![],
                info: true,
            }),
            ..Page::builtin()
        };
        assert!(PollutionMap::init(&page).is_none());
    }
}
