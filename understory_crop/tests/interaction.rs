// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and wheel scenarios for `CropController`.
//!
//! Every test uses a 1000x600 container showing a wide image laid out at
//! 1000x524 view pixels with a 4:3 crop box (698.67x524), the layout a
//! browser produces for the default demo photo.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use understory_crop::{CropConfig, CropController, CropEvent, CroppedArea, ImageSize};

const CENTER: Point = Point::new(500.0, 300.0);

fn controller() -> CropController {
    let container = Rect::new(0.0, 0.0, 1000.0, 600.0);
    let image = ImageSize::contain(Size::new(4096.0, 2145.0), container.size()).snap_to_pixels();
    let mut crop = CropController::new(CropConfig::default()).unwrap();
    crop.set_container(container).unwrap();
    crop.set_image(image).unwrap();
    crop
}

/// Presses at the container center, moves by `by`, and releases.
fn drag_and_drop(crop: &mut CropController, by: Vec2) {
    crop.pointer_down(CENTER);
    crop.pointer_move(CENTER + by * 0.5);
    crop.pointer_move(CENTER + by);
    crop.pointer_up();
}

/// Asserts the rendered image matrix, rounded the way a browser reports it.
fn assert_matrix(crop: &CropController, zoom: f64, x: f64, y: f64) {
    let coeffs = crop.transform().to_affine().as_coeffs();
    let round3 = |v: f64| (v * 1000.0).round() / 1000.0;
    assert_eq!(coeffs[0], zoom, "scale x in {coeffs:?}");
    assert_eq!(coeffs[3], zoom, "scale y in {coeffs:?}");
    assert_eq!(coeffs[1], 0.0);
    assert_eq!(coeffs[2], 0.0);
    assert_eq!(round3(coeffs[4]), x, "translate x in {coeffs:?}");
    assert_eq!(round3(coeffs[5]), y, "translate y in {coeffs:?}");
}

#[test]
fn starts_centered_at_zoom_one() {
    let crop = controller();
    assert_eq!(crop.transform().to_affine(), Affine::IDENTITY);
    assert!(!crop.is_dragging());
}

#[test]
fn move_the_image_with_the_mouse() {
    let mut crop = controller();
    drag_and_drop(&mut crop, Vec2::new(50.0, 0.0));
    assert_matrix(&crop, 1.0, 50.0, 0.0);
}

#[test]
fn limit_the_left_drag() {
    let mut crop = controller();
    drag_and_drop(&mut crop, Vec2::new(-1000.0, 0.0));
    assert_matrix(&crop, 1.0, -150.667, 0.0);
}

#[test]
fn limit_the_right_drag() {
    let mut crop = controller();
    drag_and_drop(&mut crop, Vec2::new(1000.0, 0.0));
    assert_matrix(&crop, 1.0, 150.667, 0.0);
}

#[test]
fn wheel_zooms_in_and_out_at_the_center() {
    let mut crop = controller();
    crop.wheel(-100.0, CENTER);
    assert_matrix(&crop, 1.5, 0.0, 0.0);
    crop.wheel(50.0, CENTER);
    assert_matrix(&crop, 1.25, 0.0, 0.0);
}

#[test]
fn wheel_zoom_follows_the_pointer() {
    let mut crop = controller();
    crop.wheel(-100.0, Point::new(0.0, 0.0));
    assert_matrix(&crop, 1.5, 250.0, 131.0);
    crop.wheel(50.0, Point::new(800.0, 400.0));
    assert_matrix(&crop, 1.25, 258.333, 65.5);
}

#[test]
fn move_down_and_right_after_zoom() {
    let mut crop = controller();
    crop.wheel(-100.0, CENTER);
    drag_and_drop(&mut crop, Vec2::new(50.0, 50.0));
    assert_matrix(&crop, 1.5, 50.0, 50.0);
}

#[test]
fn move_up_and_left_after_zoom() {
    let mut crop = controller();
    crop.wheel(-100.0, CENTER);
    drag_and_drop(&mut crop, Vec2::new(-50.0, -50.0));
    assert_matrix(&crop, 1.5, -50.0, -50.0);
}

#[test]
fn limit_top_after_zoom() {
    let mut crop = controller();
    crop.wheel(-100.0, CENTER);
    drag_and_drop(&mut crop, Vec2::new(0.0, -1000.0));
    assert_matrix(&crop, 1.5, 0.0, -131.0);
}

#[test]
fn limit_bottom_after_zoom() {
    let mut crop = controller();
    crop.wheel(-100.0, CENTER);
    drag_and_drop(&mut crop, Vec2::new(0.0, 1000.0));
    assert_matrix(&crop, 1.5, 0.0, 131.0);
}

#[test]
fn keep_image_under_crop_area_after_zoom_out() {
    let mut crop = controller();
    crop.wheel(-100.0, CENTER);
    drag_and_drop(&mut crop, Vec2::new(0.0, 1000.0));
    crop.wheel(100.0, CENTER);
    assert_matrix(&crop, 1.0, 0.0, 0.0);
}

#[test]
fn wheel_during_drag_keeps_dragging() {
    let mut crop = controller();
    crop.pointer_down(CENTER);
    crop.wheel(-100.0, CENTER);
    assert!(crop.is_dragging());
    crop.pointer_move(CENTER + Vec2::new(0.0, 40.0));
    crop.pointer_leave();
    assert!(!crop.is_dragging());
    assert_matrix(&crop, 1.5, 0.0, 40.0);
}

#[test]
fn crop_complete_reports_latest_state() {
    let mut last: Option<CroppedArea> = None;
    let mut completions = 0;
    let polled;
    {
        let container = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let mut crop = CropController::with_observer(CropConfig::default(), |event: CropEvent| {
            if let CropEvent::CropComplete(area) = event {
                completions += 1;
                last = Some(area);
            }
        })
        .unwrap();
        crop.set_container(container).unwrap();
        crop.set_image(ImageSize::new(1000.0, 524.0, 3000.0, 1572.0)).unwrap();
        crop.wheel(-100.0, CENTER);
        crop.pointer_down(CENTER);
        crop.pointer_move(CENTER + Vec2::new(0.0, 1000.0));
        crop.pointer_up();

        polled = crop.cropped_area();
    }

    assert_eq!(polled, last, "notification matches a poll");
    // Load, wheel, drag end.
    assert_eq!(completions, 3);
    let area = last.unwrap();
    // Dragged to the bottom limit: the area starts at the top of the image.
    assert!(area.percentages.y.abs() < 1e-9, "got {}", area.percentages.y);
    assert_eq!(area.pixels.y, 0.0);
    assert_eq!(area.pixels.height, 1048.0);
    assert_eq!(area.pixels.width, 1397.0);
}

#[test]
fn area_covers_full_height_at_min_zoom() {
    let crop = controller();
    let image = crop.image_size().unwrap();
    let area = crop.cropped_area().unwrap();
    assert_eq!(area.pixels.height, image.natural_height);
    assert_eq!(area.pixels.y, 0.0);
    let aspect = crop.config().aspect;
    assert!((area.pixels.width - area.pixels.height * aspect).abs() <= 0.5);
}
