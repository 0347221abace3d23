use super::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// =============================================================
// project
// =============================================================

#[test]
fn project_world_corners_and_center() {
    let world = world_bounds();
    let (x, y) = project(&world, 0.0, 0.0, MAP_WIDTH, MAP_HEIGHT);
    assert!(approx(x, MAP_WIDTH / 2.0));
    assert!(approx(y, MAP_HEIGHT / 2.0));
    let (x, y) = project(&world, MAX_LAT, -180.0, MAP_WIDTH, MAP_HEIGHT);
    assert!(approx(x, 0.0));
    assert!(approx(y, 0.0));
}

#[test]
fn project_keeps_east_of_west() {
    let world = world_bounds();
    let (sydney_x, _) = project(&world, -33.86, 151.22, MAP_WIDTH, MAP_HEIGHT);
    let (new_york_x, _) = project(&world, 40.76, -73.99, MAP_WIDTH, MAP_HEIGHT);
    assert!(sydney_x > new_york_x);
}

#[test]
fn project_across_antimeridian() {
    let pacific = MapBounds { north: 10.0, south: -10.0, east: -170.0, west: 170.0 };
    assert!(approx(lng_span(&pacific), 20.0));
    let (x, y) = project(&pacific, 0.0, 180.0, 200.0, 200.0);
    assert!(approx(x, 100.0));
    assert!(approx(y, 100.0));
    let (x, _) = project(&pacific, 0.0, -175.0, 200.0, 200.0);
    assert!(approx(x, 150.0));
}

// =============================================================
// fit / zoom
// =============================================================

#[test]
fn fit_covers_points_with_padding() {
    let b = fit(&[(41.0, 2.0), (44.0, 9.0)], 1.0).unwrap();
    assert!(approx(b.north, 45.0));
    assert!(approx(b.south, 40.0));
    assert!(approx(b.east, 10.0));
    assert!(approx(b.west, 1.0));
    assert!(fit(&[], 1.0).is_none());
}

#[test]
fn fit_clamps_to_world() {
    let b = fit(&[(84.0, 179.5), (-84.0, -179.5)], 5.0).unwrap();
    assert_eq!(b, world_bounds());
}

#[test]
fn zoom_in_halves_spans_about_center() {
    let b = MapBounds { north: 50.0, south: 30.0, east: 20.0, west: -20.0 };
    let z = zoom(&b, 0.5);
    assert!(approx(z.north, 45.0));
    assert!(approx(z.south, 35.0));
    assert!(approx(z.east, 10.0));
    assert!(approx(z.west, -10.0));
}

#[test]
fn zoom_out_past_world_returns_world() {
    let b = MapBounds { north: 60.0, south: -60.0, east: 150.0, west: -150.0 };
    assert_eq!(zoom(&b, 2.0), world_bounds());
}

#[test]
fn zoom_in_stops_at_min_span() {
    let b = MapBounds { north: 41.0, south: 40.0, east: 3.0, west: 2.0 };
    let z = zoom(&b, 0.1);
    assert!(approx(z.north - z.south, MIN_SPAN_DEG));
    assert!(approx(lng_span(&z), MIN_SPAN_DEG));
}

#[test]
fn wrap_lng_normalizes() {
    assert!(approx(wrap_lng(190.0), -170.0));
    assert!(approx(wrap_lng(-190.0), 170.0));
    assert!(approx(wrap_lng(45.0), 45.0));
}

#[test]
fn embed_url_switches_maptype() {
    let url = embed_url("KEY", 43.55, 7.02, true);
    assert!(url.starts_with("https://www.google.com/maps/embed/v1/view?key=KEY"));
    assert!(url.contains("center=43.55,7.02"));
    assert!(url.ends_with("maptype=satellite"));
    assert!(embed_url("KEY", 0.0, 0.0, false).ends_with("maptype=roadmap"));
}

// =============================================================
// tiles
// =============================================================

#[test]
fn world_pixel_center_and_poles() {
    let (x, y) = world_pixel(0.0, 0.0, 0);
    assert!(approx(x, 128.0));
    assert!(approx(y, 128.0));
    let (_, top) = world_pixel(90.0, 0.0, 2);
    assert!(top.abs() < 1e-3);
    let (x, bottom) = world_pixel(-MERCATOR_MAX_LAT, 180.0, 2);
    assert!(approx(x, world_size(2)));
    assert!((bottom - world_size(2)).abs() < 1e-3);
}

#[test]
fn tile_zoom_for_regional_bounds() {
    let coast = MapBounds { north: 43.0, south: 40.0, east: 10.0, west: 2.0 };
    assert_eq!(tile_zoom_for(&coast, MAP_WIDTH, MAP_HEIGHT), 7);
}

#[test]
fn tile_zoom_for_world_falls_back_to_min() {
    assert_eq!(tile_zoom_for(&world_bounds(), MAP_WIDTH, MAP_HEIGHT), MIN_TILE_ZOOM);
}

#[test]
fn viewport_centers_on_bounds() {
    let coast = MapBounds { north: 43.0, south: 40.0, east: 10.0, west: 2.0 };
    let view = TileViewport::centered(&coast, MAP_WIDTH, MAP_HEIGHT);
    let (x, _) = view.locate(41.5, 6.0);
    assert!(approx(x, MAP_WIDTH / 2.0));
    let (west_x, north_y) = view.locate(43.0, 2.0);
    let (east_x, south_y) = view.locate(40.0, 10.0);
    assert!(west_x >= 0.0 && east_x <= MAP_WIDTH);
    assert!(north_y >= 0.0 && south_y <= MAP_HEIGHT);
}

#[test]
fn world_viewport_tiles_wrap_columns() {
    let view = TileViewport::centered(&world_bounds(), MAP_WIDTH, MAP_HEIGHT);
    assert_eq!(view.zoom, 1);
    let tiles = view.tiles();
    assert_eq!(tiles.len(), 8);
    assert!(tiles.iter().all(|t| t.x < 2 && t.y < 2));
    let first = &tiles[0];
    assert_eq!((first.x, first.y), (1, 0));
    assert!(approx(first.left, -32.0));
    assert_eq!(first.url(), "https://tile.openstreetmap.org/1/1/0.png");
}

#[test]
fn locate_across_antimeridian() {
    let pacific = MapBounds { north: 10.0, south: -10.0, east: -170.0, west: 170.0 };
    let view = TileViewport::centered(&pacific, MAP_WIDTH, MAP_HEIGHT);
    assert_eq!(view.zoom, 5);
    let (west_of_line, _) = view.locate(0.0, 179.0);
    let (east_of_line, _) = view.locate(0.0, -179.0);
    assert!(west_of_line > 0.0 && west_of_line < MAP_WIDTH / 2.0);
    assert!(east_of_line > MAP_WIDTH / 2.0 && east_of_line < MAP_WIDTH);
    assert!(view.tiles().iter().all(|t| t.x < 32));
}
