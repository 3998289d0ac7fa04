#![cfg(feature = "serde")]

use facewarp_face::{
    BorderMode, BoundingBox, ExecutionStrategy, InterpolationMode, ReferenceLandmarks,
    ResampleOptions, SimilarityTransform,
};

#[test]
fn test_reference_landmarks_json() -> Result<(), serde_json::Error> {
    let reference = ReferenceLandmarks::arcface_112();
    let json = serde_json::to_string(&reference)?;
    let decoded: ReferenceLandmarks = serde_json::from_str(&json)?;
    assert_eq!(decoded, reference);
    Ok(())
}

#[test]
fn test_bbox_from_json() -> Result<(), serde_json::Error> {
    let bbox: BoundingBox =
        serde_json::from_str(r#"{"x": 10.0, "y": 20.0, "width": 30.0, "height": 40.0}"#)?;
    assert_eq!(bbox, BoundingBox::new(10.0, 20.0, 30.0, 40.0));
    Ok(())
}

#[test]
fn test_options_and_transform_json() -> Result<(), serde_json::Error> {
    let options = ResampleOptions {
        interpolation: InterpolationMode::Nearest,
        border: BorderMode::Constant(127.0),
        strategy: ExecutionStrategy::ParallelRows,
    };
    let decoded: ResampleOptions = serde_json::from_str(&serde_json::to_string(&options)?)?;
    assert_eq!(decoded, options);

    let transform = SimilarityTransform {
        scale: 0.5,
        rotation: 0.25,
        translation: [3.0, -4.0],
    };
    let decoded: SimilarityTransform = serde_json::from_str(&serde_json::to_string(&transform)?)?;
    assert_eq!(decoded, transform);
    Ok(())
}
