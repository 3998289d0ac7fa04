/// The five facial keypoints reported by common face detectors (MTCNN, RetinaFace, SCRFD).
///
/// Naming the points fixes their correspondence; [`FaceLandmarks::to_array`] always
/// returns them in the order left eye, right eye, nose, left mouth corner, right mouth corner.
/// Left and right refer to the image, not to the subject.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceLandmarks {
    /// Center of the left eye.
    pub left_eye: [f32; 2],
    /// Center of the right eye.
    pub right_eye: [f32; 2],
    /// Tip of the nose.
    pub nose: [f32; 2],
    /// Left corner of the mouth.
    pub mouth_left: [f32; 2],
    /// Right corner of the mouth.
    pub mouth_right: [f32; 2],
}

impl FaceLandmarks {
    /// The points in their fixed order.
    pub fn to_array(&self) -> [[f32; 2]; 5] {
        [
            self.left_eye,
            self.right_eye,
            self.nose,
            self.mouth_left,
            self.mouth_right,
        ]
    }

    /// Build the landmarks from points in the fixed order.
    pub fn from_array(points: [[f32; 2]; 5]) -> Self {
        let [left_eye, right_eye, nose, mouth_left, mouth_right] = points;
        Self {
            left_eye,
            right_eye,
            nose,
            mouth_left,
            mouth_right,
        }
    }

    /// Map every point with `f`.
    pub fn map(&self, f: impl Fn([f32; 2]) -> [f32; 2]) -> Self {
        Self::from_array(self.to_array().map(f))
    }
}

impl From<[[f32; 2]; 5]> for FaceLandmarks {
    fn from(points: [[f32; 2]; 5]) -> Self {
        Self::from_array(points)
    }
}

impl From<FaceLandmarks> for [[f32; 2]; 5] {
    fn from(landmarks: FaceLandmarks) -> Self {
        landmarks.to_array()
    }
}

/// A canonical landmark layout together with the output size it is defined for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceLandmarks {
    /// Target positions of the landmarks in the aligned image.
    pub landmarks: FaceLandmarks,
    /// Width of the aligned image.
    pub width: usize,
    /// Height of the aligned image.
    pub height: usize,
}

impl ReferenceLandmarks {
    /// The 112×112 layout used by ArcFace style recognition models.
    pub fn arcface_112() -> Self {
        Self {
            landmarks: FaceLandmarks {
                left_eye: [38.2946, 51.6963],
                right_eye: [73.5318, 51.5014],
                nose: [56.0252, 71.7366],
                mouth_left: [41.5493, 92.3655],
                mouth_right: [70.7299, 92.2041],
            },
            width: 112,
            height: 112,
        }
    }

    /// The 96 wide, 112 high layout used to train MobileFaceNet and SphereFace.
    pub fn mobilefacenet_112x96() -> Self {
        Self {
            landmarks: FaceLandmarks {
                left_eye: [30.2946, 51.6963],
                right_eye: [65.5318, 51.5014],
                nose: [48.0252, 71.7366],
                mouth_left: [33.5493, 92.3655],
                mouth_right: [62.7299, 92.2041],
            },
            width: 96,
            height: 112,
        }
    }

    /// Rescale the layout to a different output size.
    ///
    /// ```
    /// use facewarp_face::ReferenceLandmarks;
    ///
    /// let reference = ReferenceLandmarks::arcface_112().scaled_to(224, 224);
    ///
    /// assert_eq!(reference.width, 224);
    /// assert!((reference.landmarks.nose[0] - 112.0504).abs() < 1e-3);
    /// ```
    pub fn scaled_to(&self, width: usize, height: usize) -> Self {
        let sx = width as f32 / self.width as f32;
        let sy = height as f32 / self.height as f32;
        Self {
            landmarks: self.landmarks.map(|[x, y]| [x * sx, y * sy]),
            width,
            height,
        }
    }
}
