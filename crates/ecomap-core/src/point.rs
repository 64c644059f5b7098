//! Point data model and store payloads.

use serde::{Deserialize, Serialize};

/// Name given to a freshly placed point until the user renames it.
pub const DEFAULT_POINT_NAME: &str = "New Recycling Point";

/// Opaque store-assigned point identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A recycling drop-off marker on the city map.
///
/// `x`/`y` are percentages of the map image width/height in `[0, 100]`,
/// clamped at write time by the viewport transform. The store does not
/// enforce the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub name: String,
    pub category: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub description: String,
}

/// Insert payload; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPoint {
    pub name: String,
    pub category: String,
    pub x: f64,
    pub y: f64,
    pub description: String,
}

impl NewPoint {
    /// Payload for a point placed through add-mode: default name, empty
    /// description, coordinates from the map click.
    pub fn placed(category: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: DEFAULT_POINT_NAME.to_owned(),
            category: category.into(),
            x,
            y,
            description: String::new(),
        }
    }
}

/// Partial update map. Unset fields are omitted from the serialized
/// document and left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PointPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn recategorize(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn describe(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn relocate(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Mirror of the server-side merge: set fields overwrite, unset fields
    /// are left alone.
    pub fn apply_to(&self, point: &mut Point) {
        if let Some(name) = &self.name {
            point.name.clone_from(name);
        }
        if let Some(category) = &self.category {
            point.category.clone_from(category);
        }
        if let Some(x) = self.x {
            point.x = x;
        }
        if let Some(y) = self.y {
            point.y = y;
        }
        if let Some(description) = &self.description {
            point.description.clone_from(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_point() -> Point {
        Point {
            id: PointId::from("p1"),
            name: "Central glass bank".to_owned(),
            category: "glass".to_owned(),
            x: 42.0,
            y: 17.5,
            description: "Behind the market".to_owned(),
        }
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut point = sample_point();
        PointPatch::rename("North glass bank").apply_to(&mut point);

        assert_eq!(point.name, "North glass bank");
        assert_eq!(point.category, "glass");
        assert_eq!((point.x, point.y), (42.0, 17.5));
        assert_eq!(point.description, "Behind the market");
    }

    #[test]
    fn relocate_patch_touches_both_axes() {
        let mut point = sample_point();
        PointPatch::relocate(10.0, 90.0).apply_to(&mut point);

        assert_eq!((point.x, point.y), (10.0, 90.0));
        assert_eq!(point.name, "Central glass bank");
    }

    #[test]
    fn unset_fields_are_omitted_from_the_document() {
        let value = serde_json::to_value(PointPatch::rename("x")).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert!(object.contains_key("name"));
    }

    #[test]
    fn placed_point_uses_the_default_name() {
        let new_point = NewPoint::placed("glass", 30.0, 40.0);

        assert_eq!(new_point.name, DEFAULT_POINT_NAME);
        assert_eq!(new_point.category, "glass");
        assert_eq!((new_point.x, new_point.y), (30.0, 40.0));
        assert!(new_point.description.is_empty());
    }

    #[test]
    fn point_id_serializes_transparently() {
        let json = serde_json::to_string(&PointId::from("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
