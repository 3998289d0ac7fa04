use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use facewarp_face::{
    align_face, align_image_with_landmarks, align_image_with_landmarks_with,
    crop_image_by_box, estimate_transform, BorderMode, BoundingBox, FaceError, FaceLandmarks,
    ReferenceLandmarks, ResampleOptions,
};
use facewarp_image::{Image, ImageSize};

/// A 100x100 RGB image where each pixel encodes its own position.
fn coordinate_image() -> Image<u8, 3> {
    let data = (0..100)
        .flat_map(|y| (0..100).flat_map(move |x| [x as u8, y as u8, 255]))
        .collect();
    Image::new(
        ImageSize {
            width: 100,
            height: 100,
        },
        data,
    )
    .unwrap()
}

fn square(side: f32) -> [[f32; 2]; 5] {
    [
        [0.0, 0.0],
        [side, 0.0],
        [side, side],
        [0.0, side],
        [side / 2.0, side / 2.0],
    ]
}

#[test]
fn test_crop_box_past_bottom_right_corner() -> Result<(), FaceError> {
    let image = coordinate_image();
    let cropped = crop_image_by_box(&image, &BoundingBox::new(90.0, 90.0, 20.0, 20.0), 20, 20)?;

    assert_eq!(cropped.width(), 20);
    assert_eq!(cropped.height(), 20);
    assert_eq!(cropped.num_channels(), 3);

    for y in 0..20 {
        for x in 0..20 {
            let pixel = cropped.pixel(x, y).unwrap();
            if x < 10 && y < 10 {
                assert_eq!(pixel, &[(90 + x) as u8, (90 + y) as u8, 255]);
            } else {
                assert_eq!(pixel, &[0, 0, 0], "({x}, {y}) must be filled");
            }
        }
    }
    Ok(())
}

#[test]
fn test_crop_box_at_image_edge_has_no_fill() -> Result<(), FaceError> {
    // every source value is at least 100, so a 0 can only come from the fill
    let data = (0..100)
        .flat_map(|y| (0..100).flat_map(move |x| [100 + x as u8, 100 + y as u8, 255]))
        .collect();
    let image = Image::<u8, 3>::new([100, 100].into(), data).unwrap();

    let edge_boxes = [
        BoundingBox::new(60.0, 70.0, 40.0, 30.0),
        BoundingBox::new(0.0, 0.0, 100.0, 100.0),
        BoundingBox::new(87.5, 91.25, 12.5, 8.75),
    ];

    for bbox in edge_boxes {
        for factor in [2.0, 0.5] {
            let width = (bbox.width * factor).round() as usize;
            let height = (bbox.height * factor).round() as usize;

            let cropped = crop_image_by_box(&image, &bbox, height, width)?;

            assert_eq!(cropped.size(), ImageSize { width, height });
            assert!(
                cropped.as_slice().iter().all(|&v| v != 0),
                "{bbox:?} resized by {factor} contains fill pixels"
            );
        }
    }
    Ok(())
}

#[test]
fn test_crop_identity_for_boxes_inside() -> Result<(), FaceError> {
    let image = coordinate_image();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        let w = rng.random_range(1..40usize);
        let h = rng.random_range(1..40usize);
        let x = rng.random_range(0..=(100 - w));
        let y = rng.random_range(0..=(100 - h));

        let cropped = crop_image_by_box(
            &image,
            &BoundingBox::new(x as f32, y as f32, w as f32, h as f32),
            h,
            w,
        )?;

        for j in 0..h {
            for i in 0..w {
                assert_eq!(cropped.pixel(i, j), image.pixel(x + i, y + j));
            }
        }
    }
    Ok(())
}

#[test]
fn test_output_size_always_matches_target() -> Result<(), FaceError> {
    let image = coordinate_image();
    let reference = ReferenceLandmarks::arcface_112().landmarks.to_array();
    let observed = reference.map(|[x, y]| [x * 0.5 + 20.0, y * 0.5 + 10.0]);

    for (h, w) in [(1, 1), (7, 300), (112, 112), (250, 3)] {
        let cropped = crop_image_by_box(&image, &BoundingBox::new(10.0, 20.0, 33.3, 41.7), h, w)?;
        assert_eq!(cropped.size(), ImageSize { width: w, height: h });

        let aligned = align_image_with_landmarks(&image, &observed, &reference, h, w)?;
        assert_eq!(aligned.size(), ImageSize { width: w, height: h });
        assert_eq!(aligned.num_channels(), 3);
    }
    Ok(())
}

#[test]
fn test_fully_outside_is_all_fill() -> Result<(), FaceError> {
    let image = coordinate_image();

    let cropped = crop_image_by_box(&image, &BoundingBox::new(500.0, -300.0, 30.0, 30.0), 16, 16)?;
    assert!(cropped.as_slice().iter().all(|&v| v == 0));

    // landmarks far outside the frame, the transform looks only at empty space
    let src = square(10.0).map(|[x, y]| [x + 1000.0, y + 1000.0]);
    let aligned = align_image_with_landmarks(&image, &src, &square(10.0), 16, 16)?;
    assert!(aligned.as_slice().iter().all(|&v| v == 0));

    let options = ResampleOptions {
        border: BorderMode::Constant(42.0),
        ..Default::default()
    };
    let aligned = align_image_with_landmarks_with(&image, &src, &square(10.0), 16, 16, &options)?;
    assert!(aligned.as_slice().iter().all(|&v| v == 42));
    Ok(())
}

#[test]
fn test_estimate_square_scale_two() -> Result<(), FaceError> {
    let t = estimate_transform(&square(10.0), &square(20.0))?;
    assert_relative_eq!(t.scale, 2.0, epsilon = 1e-5);
    assert_relative_eq!(t.rotation, 0.0, epsilon = 1e-5);
    assert_relative_eq!(t.translation[0], 0.0, epsilon = 1e-4);
    assert_relative_eq!(t.translation[1], 0.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_estimate_identity() -> Result<(), FaceError> {
    let points = ReferenceLandmarks::mobilefacenet_112x96().landmarks.to_array();
    let t = estimate_transform(&points, &points)?;
    assert_relative_eq!(t.scale, 1.0, epsilon = 1e-5);
    assert_relative_eq!(t.rotation, 0.0, epsilon = 1e-5);
    assert_relative_eq!(t.translation[0], 0.0, epsilon = 1e-3);
    assert_relative_eq!(t.translation[1], 0.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn test_estimate_round_trip_is_inverse() -> Result<(), FaceError> {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10 {
        let src: Vec<[f32; 2]> = (0..5)
            .map(|_| [rng.random_range(50.0..300.0), rng.random_range(50.0..300.0)])
            .collect();
        let dst: Vec<[f32; 2]> = src
            .iter()
            .map(|[x, y]| {
                [
                    0.4 * x - 0.1 * y + 7.0 + rng.random_range(-0.1..0.1),
                    0.1 * x + 0.4 * y - 3.0 + rng.random_range(-0.1..0.1),
                ]
            })
            .collect();

        let forward = estimate_transform(&src, &dst)?;
        let backward = estimate_transform(&dst, &src)?;
        let expected = forward.inverse()?;

        assert_relative_eq!(backward.scale, expected.scale, epsilon = 1e-2);
        assert_relative_eq!(backward.rotation, expected.rotation, epsilon = 1e-2);
        for p in src.iter() {
            let a = backward.apply(forward.apply(*p));
            assert_relative_eq!(a[0], p[0], epsilon = 1.0);
            assert_relative_eq!(a[1], p[1], epsilon = 1.0);
        }
    }
    Ok(())
}

#[test]
fn test_align_mismatched_landmarks() {
    let image = coordinate_image();
    let src = [[30.0, 40.0], [60.0, 40.0], [45.0, 60.0]];
    let dst = [[38.3, 51.7], [73.5, 51.5], [56.0, 71.7], [41.5, 92.4]];

    let res = align_image_with_landmarks(&image, &src, &dst, 112, 112);
    assert_eq!(
        res,
        Err(FaceError::InsufficientCorrespondence { src: 3, dst: 4 })
    );
}

#[test]
fn test_align_face_lands_landmarks_on_reference() -> Result<(), FaceError> {
    // draw bright dots at the detected landmarks of a rotated, scaled face
    let reference = ReferenceLandmarks::arcface_112();
    let (sin, cos) = 0.3f32.sin_cos();
    let detected = reference.landmarks.map(|[x, y]| {
        [
            1.5 * (cos * x - sin * y) + 120.0,
            1.5 * (sin * x + cos * y) + 40.0,
        ]
    });

    let size = ImageSize {
        width: 320,
        height: 320,
    };
    let mut image = Image::<u8, 1>::from_size_val(size, 0).unwrap();
    for [x, y] in detected.to_array() {
        let (cx, cy) = (x.round() as usize, y.round() as usize);
        for yy in cy - 2..=cy + 2 {
            for xx in cx - 2..=cx + 2 {
                *image.get_mut([yy, xx, 0]).unwrap() = 255;
            }
        }
    }

    let aligned = align_face(&image, &detected, &reference)?;

    for [x, y] in reference.landmarks.to_array() {
        let value = aligned.get([y.round() as usize, x.round() as usize, 0]).unwrap();
        assert!(*value > 128, "landmark ({x}, {y}) not bright: {value}");
    }
    Ok(())
}

#[test]
fn test_named_landmarks_match_positional() -> Result<(), FaceError> {
    let image = coordinate_image();
    let reference = ReferenceLandmarks::arcface_112();
    let detected = FaceLandmarks {
        left_eye: [35.0, 40.0],
        right_eye: [62.0, 41.0],
        nose: [49.0, 55.0],
        mouth_left: [38.0, 70.0],
        mouth_right: [60.0, 71.0],
    };

    let named = align_face(&image, &detected, &reference)?;
    let positional = align_image_with_landmarks(
        &image,
        &detected.to_array(),
        &reference.landmarks.to_array(),
        112,
        112,
    )?;
    assert_eq!(named, positional);
    Ok(())
}
