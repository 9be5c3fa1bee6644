//! End-to-end layouts for the reference scenarios.
//!
//! Each test runs the full pipeline (pack, correct, emit) through
//! [`zengrid::layout`] and checks rows, scales, and placements.

use zengrid::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn images(dims: &[(f64, f64)]) -> Vec<ImageDescriptor<usize>> {
    dims.iter()
        .enumerate()
        .map(|(i, &(w, h))| ImageDescriptor::new(w, h, i))
        .collect()
}

fn row_lengths<R>(grid: &GridLayout<R>) -> Vec<usize> {
    grid.rows.iter().map(|r| r.count).collect()
}

// ---- Scenario A: three squares fit one row ----

#[test]
fn three_squares_share_one_row() {
    let config = GridConfig::new().gutter(16.0).baseline_height(300.0);
    let grid = layout(images(&[(1.0, 1.0); 3]), 1000.0, &config).unwrap();

    assert_eq!(row_lengths(&grid), vec![3]);
    let scale = 968.0 / 900.0;
    assert!(approx(grid.rows[0].scale, scale));
    assert!((grid.rows[0].scale - 1.0756).abs() < 1e-4);
    assert!(approx(grid.total_height, 300.0 * scale));
    assert!((grid.total_height - 322.67).abs() < 0.01);

    let lefts: Vec<f64> = grid.placements.iter().map(|p| p.left).collect();
    assert!(approx(lefts[0], 0.0));
    assert!(approx(lefts[1], 300.0 * scale + 16.0));
    assert!(approx(lefts[2], 600.0 * scale + 32.0));
    assert!(approx(grid.placements[2].right(), 1000.0));
}

// ---- Scenario B: wide images each take a row ----

#[test]
fn wide_images_get_single_item_rows() {
    let config = GridConfig::new().gutter(10.0).baseline_height(200.0);
    let grid = layout(images(&[(3.0, 1.0); 5]), 800.0, &config).unwrap();

    assert_eq!(row_lengths(&grid), vec![1, 1, 1, 1, 1]);
    for row in &grid.rows {
        assert!(approx(row.scale, 800.0 / 600.0));
    }
    for p in &grid.placements {
        assert!(approx(p.left, 0.0));
        assert!(approx(p.width, 800.0));
    }
    let height = 200.0 * 800.0 / 600.0;
    assert!(approx(grid.total_height, 5.0 * height + 4.0 * 10.0));
}

// ---- Scenario C: lone trailing image ----

#[test]
fn trailing_image_borrows_previous_scale() {
    // 240px squares, gutter 10, container 1000: two rows of four, one left.
    let config = GridConfig::new().gutter(10.0).baseline_height(240.0);
    let grid = layout(images(&[(1.0, 1.0); 9]), 1000.0, &config).unwrap();

    assert_eq!(row_lengths(&grid), vec![4, 4, 1]);
    let full = 970.0 / 960.0;
    assert!(approx(grid.rows[0].scale, full));
    assert!(approx(grid.rows[1].scale, full));
    // 1000 / 240 would be 4.17; the previous row passes 970 > 960.
    assert_eq!(grid.rows[2].scale, grid.rows[1].scale);

    let last = grid.placements.last().unwrap();
    assert!(approx(last.width, 240.0 * full));
    assert!(approx(last.left, 0.0));
}

#[test]
fn trailing_image_falls_back_to_natural_size() {
    // Without gutters a full previous row fills exactly, which fails the
    // strict fill test, so the trailing row renders at baseline size.
    let config = GridConfig::new().gutter(0.0).baseline_height(100.0);
    let dims = [(125.0, 100.0), (125.0, 100.0), (125.0, 100.0), (125.0, 100.0), (600.0, 100.0)];
    let grid = layout(images(&dims), 1000.0, &config).unwrap();

    assert_eq!(row_lengths(&grid), vec![4, 1]);
    assert_eq!(grid.rows[0].scale, 2.0);
    assert_eq!(grid.rows[1].scale, 1.0);
    let last = grid.placements.last().unwrap();
    assert_eq!((last.width, last.height), (600.0, 100.0));
    assert_eq!(last.top, 200.0);
    assert_eq!(grid.total_height, 300.0);
}

#[test]
fn only_row_stretched_goes_natural() {
    let config = GridConfig::new().gutter(16.0).baseline_height(300.0);
    let grid = layout(images(&[(1.0, 1.0)]), 1000.0, &config).unwrap();
    assert_eq!(grid.rows[0].scale, 1.0);
    assert_eq!(grid.placements[0].width, 300.0);
    assert_eq!(grid.total_height, 300.0);
}

#[test]
fn mildly_stretched_last_row_is_kept() {
    // Last row at 1000 / 700 = 1.43 stays as packed.
    let config = GridConfig::new().gutter(0.0).baseline_height(100.0);
    let grid = layout(images(&[(9.0, 1.0), (7.0, 1.0)]), 1000.0, &config).unwrap();
    assert_eq!(row_lengths(&grid), vec![1, 1]);
    assert!(approx(grid.rows[1].scale, 1000.0 / 700.0));
}

// ---- Scenario D: nothing to lay out ----

#[test]
fn empty_input_is_empty_layout() {
    let grid = layout(images(&[]), 1000.0, &GridConfig::new()).unwrap();
    assert!(grid.placements.is_empty());
    assert!(grid.rows.is_empty());
    assert_eq!(grid.total_height, 0.0);
}

// ---- Scenario E and other failures ----

#[test]
fn zero_baseline_height_is_rejected() {
    let config = GridConfig::new().baseline_height(0.0);
    let err = layout(images(&[(1.0, 1.0)]), 1000.0, &config).unwrap_err();
    assert!(matches!(
        err,
        GridError::InvalidConfiguration {
            field: "baseline_height",
            ..
        }
    ));
}

#[test]
fn bad_container_width_is_rejected_even_when_empty() {
    let err = layout(images(&[]), 0.0, &GridConfig::new()).unwrap_err();
    assert!(matches!(
        err,
        GridError::InvalidConfiguration {
            field: "container_width",
            ..
        }
    ));
}

#[test]
fn negative_gutter_is_rejected() {
    let config = GridConfig::new().gutter(-1.0);
    assert!(matches!(
        layout(images(&[(1.0, 1.0)]), 1000.0, &config),
        Err(GridError::InvalidConfiguration { field: "gutter", .. })
    ));
}

#[test]
fn zero_height_image_is_rejected() {
    let err = layout(images(&[(4.0, 3.0), (4.0, 0.0)]), 1000.0, &GridConfig::new()).unwrap_err();
    assert_eq!(
        err,
        GridError::InvalidImageDescriptor {
            index: 1,
            width: 4.0,
            height: 0.0
        }
    );
}

#[test]
fn oversized_first_image_shrinks_into_its_own_row() {
    let config = GridConfig::new().gutter(16.0).baseline_height(300.0);
    let grid = layout(images(&[(10.0, 1.0), (1.0, 1.0), (1.0, 1.0)]), 1000.0, &config).unwrap();
    assert_eq!(row_lengths(&grid), vec![1, 2]);
    assert!(approx(grid.rows[0].scale, 1000.0 / 3000.0));
    assert!(approx(grid.placements[0].width, 1000.0));
}

#[test]
fn borrowed_references_map_back() {
    let owned = vec![
        ImageDescriptor::new(800.0, 600.0, String::from("dunes.jpg")),
        ImageDescriptor::new(600.0, 800.0, String::from("tower.jpg")),
    ];
    let grid = layout(owned.iter().map(ImageDescriptor::by_ref), 900.0, &GridConfig::new()).unwrap();
    let names: Vec<&str> = grid.placements.iter().map(|p| p.reference.as_str()).collect();
    assert_eq!(names, ["dunes.jpg", "tower.jpg"]);
}
