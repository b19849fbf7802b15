//! Stops, routes, and the route distance metric.

use crate::geo::{haversine_km, GeoPoint};

/// An ordered visiting sequence of stops.
///
/// The optimizer only permutes a route — it never inserts, drops, or
/// mutates stops, so an optimized route is always a permutation of its
/// input. Total cost is derived on demand via [`total_distance`], never
/// stored.
pub type Route = Vec<Stop>;

/// An identifiable point of interest.
///
/// The `id` is stable and unique within a planning session. Metadata
/// fields (`name`, `category`, `notes`) are opaque to the optimizer and
/// carried through unchanged. The position is a validated [`GeoPoint`],
/// so an unresolved stop cannot be represented; callers filter unresolved
/// geocoding results before building stops.
///
/// # Examples
///
/// ```
/// use itinera::geo::GeoPoint;
/// use itinera::route::Stop;
///
/// let stop = Stop::new("s1", GeoPoint::new(35.6586, 139.7454)?)?
///     .with_name("Tokyo Tower")
///     .with_category("landmark");
/// assert_eq!(stop.id, "s1");
/// # Ok::<(), String>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Stable identifier, unique within a planning session.
    pub id: String,
    /// Resolved geographic position.
    pub position: GeoPoint,
    /// Display name. Not interpreted by the optimizer.
    pub name: Option<String>,
    /// Category tag (e.g. "restaurant"). Not interpreted by the optimizer.
    pub category: Option<String>,
    /// Free-form notes. Not interpreted by the optimizer.
    pub notes: Option<String>,
}

impl Stop {
    /// Creates a stop, rejecting empty identifiers.
    pub fn new(id: impl Into<String>, position: GeoPoint) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("stop id must be non-empty".into());
        }
        Ok(Self {
            id,
            position,
            name: None,
            category: None,
            notes: None,
        })
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets free-form notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Total great-circle distance along a route in kilometers.
///
/// Sum of consecutive-pair distances, recomputed from scratch on each
/// call. Routes of length 0 or 1 cost 0.
pub fn total_distance(route: &[Stop]) -> f64 {
    route
        .windows(2)
        .map(|pair| haversine_km(pair[0].position, pair[1].position))
        .sum()
}
