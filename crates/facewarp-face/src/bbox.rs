use facewarp_image::ImageSize;

/// An axis aligned box in image pixel coordinates.
///
/// The box starts at its top-left corner `(x, y)` and covers `[x, x + width)` horizontally
/// and `[y, y + height)` vertically. It may extend past the image or lie outside of it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// x-coordinate of the top-left corner.
    pub x: f32,
    /// y-coordinate of the top-left corner.
    pub y: f32,
    /// Width of the box in pixels.
    pub width: f32,
    /// Height of the box in pixels.
    pub height: f32,
}

impl BoundingBox {
    /// Create a box from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box from its top-left `(x1, y1)` and bottom-right `(x2, y2)` corners,
    /// the layout most face detectors report.
    ///
    /// ```
    /// use facewarp_face::BoundingBox;
    ///
    /// let bbox = BoundingBox::from_corners(10.0, 20.0, 50.0, 80.0);
    /// assert_eq!(bbox, BoundingBox::new(10.0, 20.0, 40.0, 60.0));
    /// ```
    pub fn from_corners(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// The x-coordinate of the right edge.
    pub fn x2(&self) -> f32 {
        self.x + self.width
    }

    /// The y-coordinate of the bottom edge.
    pub fn y2(&self) -> f32 {
        self.y + self.height
    }

    /// The center of the box.
    pub fn center(&self) -> [f32; 2] {
        [self.x + 0.5 * self.width, self.y + 0.5 * self.height]
    }

    /// The area of the box, zero when either side is not positive.
    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// True when both sides are finite and positive and the corner is finite.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Scale the box around its center.
    ///
    /// Detectors return tight boxes; recognition crops usually add a margin.
    ///
    /// ```
    /// use facewarp_face::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(10.0, 10.0, 20.0, 40.0).scaled(1.5);
    /// assert_eq!(bbox, BoundingBox::new(5.0, 0.0, 30.0, 60.0));
    /// ```
    pub fn scaled(&self, factor: f32) -> Self {
        let [cx, cy] = self.center();
        let (width, height) = (self.width * factor, self.height * factor);
        Self::new(cx - 0.5 * width, cy - 0.5 * height, width, height)
    }

    /// Grow the shorter side so the box becomes a square with the same center.
    pub fn to_square(&self) -> Self {
        let [cx, cy] = self.center();
        let side = self.width.max(self.height);
        Self::new(cx - 0.5 * side, cy - 0.5 * side, side, side)
    }

    /// The part of the box inside an image of the given size, if any.
    ///
    /// ```
    /// use facewarp_face::BoundingBox;
    /// use facewarp_image::ImageSize;
    ///
    /// let size = ImageSize { width: 100, height: 100 };
    ///
    /// let clamped = BoundingBox::new(90.0, -5.0, 20.0, 20.0).clamp_to(size);
    /// assert_eq!(clamped, Some(BoundingBox::new(90.0, 0.0, 10.0, 15.0)));
    ///
    /// assert_eq!(BoundingBox::new(120.0, 0.0, 5.0, 5.0).clamp_to(size), None);
    /// ```
    pub fn clamp_to(&self, size: ImageSize) -> Option<Self> {
        let x1 = self.x.max(0.0);
        let y1 = self.y.max(0.0);
        let x2 = self.x2().min(size.width as f32);
        let y2 = self.y2().min(size.height as f32);

        let clamped = Self::from_corners(x1, y1, x2, y2);
        clamped.is_valid().then_some(clamped)
    }

    /// True when the box lies fully inside an image of the given size.
    pub fn is_inside(&self, size: ImageSize) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x2() <= size.width as f32
            && self.y2() <= size.height as f32
    }
}
