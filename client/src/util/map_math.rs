//! Projection and viewport math for the ports maps: linear lat/lng for the
//! SVG map, Web Mercator tiles for the OpenStreetMap layer.

#[cfg(test)]
#[path = "map_math_test.rs"]
mod map_math_test;

use std::f64::consts::PI;

use marina::MapBounds;

pub const MAP_WIDTH: f64 = 960.0;
pub const MAP_HEIGHT: f64 = 480.0;
pub const MAX_LAT: f64 = 85.0;
pub const MIN_SPAN_DEG: f64 = 2.0;

pub const TILE_SIZE: f64 = 256.0;
pub const MIN_TILE_ZOOM: u8 = 1;
pub const MAX_TILE_ZOOM: u8 = 18;
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org";
/// Latitude where the Mercator square ends.
pub const MERCATOR_MAX_LAT: f64 = 85.051_128_78;

#[must_use]
pub fn world_bounds() -> MapBounds {
    MapBounds { north: MAX_LAT, south: -MAX_LAT, east: 180.0, west: -180.0 }
}

/// Longitude span of `bounds`, eastward from `west`. A full wrap is 360.
#[must_use]
pub fn lng_span(bounds: &MapBounds) -> f64 {
    let span = (bounds.east - bounds.west).rem_euclid(360.0);
    if span == 0.0 { 360.0 } else { span }
}

/// Linear (equirectangular) projection of a coordinate into a
/// `width`×`height` viewport showing `bounds`. Handles viewports that cross
/// the antimeridian.
#[must_use]
pub fn project(bounds: &MapBounds, lat: f64, lng: f64, width: f64, height: f64) -> (f64, f64) {
    let dx = (lng - bounds.west).rem_euclid(360.0);
    let lat_span = (bounds.north - bounds.south).max(f64::EPSILON);
    let x = dx / lng_span(bounds) * width;
    let y = (bounds.north - lat) / lat_span * height;
    (x, y)
}

/// Smallest bounds covering every point, padded by `pad_deg` and clamped to
/// the world. `None` for no points.
#[must_use]
pub fn fit(points: &[(f64, f64)], pad_deg: f64) -> Option<MapBounds> {
    let (first_lat, first_lng) = *points.first()?;
    let mut b = MapBounds { north: first_lat, south: first_lat, east: first_lng, west: first_lng };
    for &(lat, lng) in &points[1..] {
        b.north = b.north.max(lat);
        b.south = b.south.min(lat);
        b.east = b.east.max(lng);
        b.west = b.west.min(lng);
    }
    Some(MapBounds {
        north: (b.north + pad_deg).min(MAX_LAT),
        south: (b.south - pad_deg).max(-MAX_LAT),
        east: (b.east + pad_deg).min(180.0),
        west: (b.west - pad_deg).max(-180.0),
    })
}

/// Scale `bounds` about its center. `factor < 1` zooms in. Spans never drop
/// below [`MIN_SPAN_DEG`] and zooming out past the world returns the world.
#[must_use]
pub fn zoom(bounds: &MapBounds, factor: f64) -> MapBounds {
    let lng_span = lng_span(bounds);
    let lat_span = bounds.north - bounds.south;
    let new_lng_span = (lng_span * factor).max(MIN_SPAN_DEG);
    let new_lat_span = (lat_span * factor).max(MIN_SPAN_DEG);
    if new_lng_span >= 360.0 || new_lat_span >= 2.0 * MAX_LAT {
        return world_bounds();
    }
    let center_lat = (bounds.north + bounds.south) / 2.0;
    let center_lng = wrap_lng(bounds.west + lng_span / 2.0);
    let north = (center_lat + new_lat_span / 2.0).min(MAX_LAT);
    let south = (north - new_lat_span).max(-MAX_LAT);
    MapBounds {
        north: south + new_lat_span,
        south,
        east: wrap_lng(center_lng + new_lng_span / 2.0),
        west: wrap_lng(center_lng - new_lng_span / 2.0),
    }
}

/// Normalize a longitude into `[-180, 180)`.
#[must_use]
pub fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Google Maps embed URL centered on a port.
#[must_use]
pub fn embed_url(api_key: &str, lat: f64, lng: f64, satellite: bool) -> String {
    let maptype = if satellite { "satellite" } else { "roadmap" };
    format!("https://www.google.com/maps/embed/v1/view?key={api_key}&center={lat},{lng}&zoom=14&maptype={maptype}")
}

/// Edge length in pixels of the whole world at `zoom`.
#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1_u32 << zoom)
}

/// Web Mercator pixel position of a coordinate at `zoom`, origin at the
/// north-west corner of the world.
#[must_use]
pub fn world_pixel(lat: f64, lng: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let x = (lng + 180.0) / 360.0 * size;
    let phi = lat.clamp(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT).to_radians();
    let y = (1.0 - (phi.tan() + 1.0 / phi.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Deepest tile zoom at which `bounds` fits a `width`×`height` viewport.
#[must_use]
pub fn tile_zoom_for(bounds: &MapBounds, width: f64, height: f64) -> u8 {
    (MIN_TILE_ZOOM..=MAX_TILE_ZOOM)
        .rev()
        .find(|&z| {
            let (_, top) = world_pixel(bounds.north, 0.0, z);
            let (_, bottom) = world_pixel(bounds.south, 0.0, z);
            lng_span(bounds) / 360.0 * world_size(z) <= width && bottom - top <= height
        })
        .unwrap_or(MIN_TILE_ZOOM)
}

/// One OpenStreetMap tile placed in a viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
    /// Offset of the tile's top-left corner from the viewport's, in pixels.
    pub left: f64,
    pub top: f64,
}

impl Tile {
    #[must_use]
    pub fn url(&self) -> String {
        format!("{OSM_TILE_URL}/{}/{}/{}.png", self.zoom, self.x, self.y)
    }
}

/// A `width`×`height` pixel window onto the Mercator world at one zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileViewport {
    pub zoom: u8,
    /// World pixel at the viewport's top-left corner.
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl TileViewport {
    /// Viewport centered on `bounds` at the deepest zoom that shows all of it.
    #[must_use]
    pub fn centered(bounds: &MapBounds, width: f64, height: f64) -> Self {
        let zoom = tile_zoom_for(bounds, width, height);
        let center_lat = (bounds.north + bounds.south) / 2.0;
        let center_lng = wrap_lng(bounds.west + lng_span(bounds) / 2.0);
        let (cx, cy) = world_pixel(center_lat, center_lng, zoom);
        Self { zoom, origin_x: cx - width / 2.0, origin_y: cy - height / 2.0, width, height }
    }

    /// Viewport position of a coordinate. Longitudes resolve to the copy of
    /// the world nearest the viewport center.
    #[must_use]
    pub fn locate(&self, lat: f64, lng: f64) -> (f64, f64) {
        let (x, y) = world_pixel(lat, lng, self.zoom);
        let size = world_size(self.zoom);
        let dx = x - self.origin_x;
        let dx = dx - ((dx - self.width / 2.0) / size).round() * size;
        (dx, y - self.origin_y)
    }

    /// Tiles covering the viewport, row by row. Columns wrap around the
    /// antimeridian; rows past the poles are skipped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn tiles(&self) -> Vec<Tile> {
        let count = 1_i64 << self.zoom;
        let first_col = (self.origin_x / TILE_SIZE).floor() as i64;
        let end_col = ((self.origin_x + self.width) / TILE_SIZE).ceil() as i64;
        let first_row = ((self.origin_y / TILE_SIZE).floor() as i64).max(0);
        let end_row = (((self.origin_y + self.height) / TILE_SIZE).ceil() as i64).min(count);
        let mut tiles = Vec::new();
        for row in first_row..end_row {
            for col in first_col..end_col {
                tiles.push(Tile {
                    zoom: self.zoom,
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    left: col as f64 * TILE_SIZE - self.origin_x,
                    top: row as f64 * TILE_SIZE - self.origin_y,
                });
            }
        }
        tiles
    }
}
