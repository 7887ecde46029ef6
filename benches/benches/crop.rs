// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_crop::{
    CropConfig, CropController, ImageSize, compute_cropped_area, crop_size, restrict_position,
};

fn image() -> ImageSize {
    ImageSize::contain(Size::new(4096.0, 2145.0), Size::new(1000.0, 600.0)).snap_to_pixels()
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/geometry");
    let image = image();
    let aspect = 4.0 / 3.0;
    let crop = crop_size(image.width, image.height, aspect);

    group.bench_function("restrict_position", |b| {
        b.iter(|| {
            restrict_position(
                black_box(Vec2::new(-420.0, 77.0)),
                black_box(&image),
                black_box(crop),
                black_box(1.7),
            )
        });
    });

    group.bench_function("compute_cropped_area", |b| {
        b.iter(|| {
            compute_cropped_area(
                black_box(Vec2::new(120.0, -40.0)),
                black_box(&image),
                black_box(crop),
                black_box(aspect),
                black_box(1.7),
                true,
            )
        });
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/controller");
    let setup = || {
        let mut crop = CropController::new(CropConfig::default()).unwrap();
        crop.set_container(Rect::new(0.0, 0.0, 1000.0, 600.0)).unwrap();
        crop.set_image(image()).unwrap();
        crop
    };

    // One drag gesture of 256 moves, sweeping past both horizontal limits.
    group.bench_function("drag_256_moves", |b| {
        b.iter_batched(
            setup,
            |mut crop| {
                crop.pointer_down(Point::new(500.0, 300.0));
                for i in 0..256_u32 {
                    let x = 500.0 + f64::from(i % 64) * 25.0 - 800.0;
                    crop.pointer_move(Point::new(x, 300.0));
                }
                crop.pointer_up();
                black_box(crop.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_64_steps", |b| {
        b.iter_batched(
            setup,
            |mut crop| {
                for i in 0..64_u32 {
                    let delta = if i % 2 == 0 { -40.0 } else { 25.0 };
                    crop.wheel(delta, Point::new(f64::from(i) * 15.0, 120.0));
                }
                black_box(crop.cropped_area());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_controller);
criterion_main!(benches);
