use crate::error::ImageError;

/// Width and height of an image, in pixels.
///
/// Converts from `[width, height]`:
///
/// ```
/// use facewarp_image::ImageSize;
///
/// let size: ImageSize = [112, 96].into();
///
/// assert_eq!(size, ImageSize { width: 112, height: 96 });
/// assert!(!size.is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl ImageSize {
    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A pixel type the resampling kernels can read and write.
///
/// Samples are blended in `f32` and stored back with [`ImageDtype::from_f32`].
pub trait ImageDtype: Copy + Default + Into<f32> + Send + Sync {
    /// Store a blended sample, rounding and saturating where the type needs it.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// An owned image buffer with `C` interleaved channels per pixel.
///
/// Rows are stored top to bottom, each row holding `width * C` values, so the element at row
/// `y`, column `x`, channel `c` lives at `(y * width + x) * C + c`. Crop and align never write
/// to their input and always hand back a fresh `Image`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Wrap a pixel buffer of exactly `width * height * C` values.
    ///
    /// # Errors
    ///
    /// * [`ImageError::ZeroSizedImage`] if the width or the height is zero.
    /// * [`ImageError::ImageTooLarge`] if `width * height * C` values can not be addressed.
    /// * [`ImageError::InvalidChannelShape`] if the buffer length does not match the size.
    ///
    /// # Examples
    ///
    /// ```
    /// use facewarp_image::{Image, ImageError, ImageSize};
    ///
    /// let size = ImageSize { width: 2, height: 2 };
    ///
    /// let gray = Image::<u8, 1>::new(size, vec![0, 64, 128, 255]).unwrap();
    /// assert_eq!(gray.get([1, 0, 0]), Some(&128));
    ///
    /// let short = Image::<u8, 3>::new(size, vec![0; 4]);
    /// assert_eq!(short, Err(ImageError::InvalidChannelShape(4, 12)));
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = Self::buffer_len(size)?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// An image of the given size with every value set to `val`.
    ///
    /// # Errors
    ///
    /// Fails like [`Image::new`] on a zero or unaddressable size, before allocating.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; Self::buffer_len(size)?];
        Image::new(size, data)
    }

    /// Number of values in the buffer of an image of the given size.
    fn buffer_len(size: ImageSize) -> Result<usize, ImageError> {
        if size.is_empty() {
            return Err(ImageError::ZeroSizedImage(size.width, size.height));
        }

        // a Vec holds at most isize::MAX bytes
        size.width
            .checked_mul(size.height)
            .and_then(|n| n.checked_mul(C))
            .filter(|n| {
                n.checked_mul(std::mem::size_of::<T>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(ImageError::ImageTooLarge(size.width, size.height, C))
    }

    /// Create a new image copying the pixel data from a slice.
    pub fn from_size_slice(size: ImageSize, data: &[T]) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Image::new(size, data.to_vec())
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of columns of the image, equal to the width.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The number of rows of the image, equal to the height.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// The pixel data as a flat slice in (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The pixel data as a flat mutable slice in (H, W, C) order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the element at `[y, x, c]`, or `None` if out of bounds.
    ///
    /// ```
    /// use facewarp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![3, 7]).unwrap();
    ///
    /// assert_eq!(image.get([0, 1, 0]), Some(&7));
    /// assert_eq!(image.get([1, 0, 0]), None);
    /// ```
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.height() || x >= self.width() || c >= C {
            return None;
        }
        self.data.get((y * self.width() + x) * C + c)
    }

    /// Get a mutable reference to the element at `[y, x, c]`, or `None` if out of bounds.
    pub fn get_mut(&mut self, index: [usize; 3]) -> Option<&mut T> {
        let [y, x, c] = index;
        if y >= self.height() || x >= self.width() || c >= C {
            return None;
        }
        let width = self.width();
        self.data.get_mut((y * width + x) * C + c)
    }

    /// Get the pixel value at the given coordinates and channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates or the channel are out of bounds.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if ch >= C {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, C));
        }

        Ok(self.data[(y * self.width() + x) * C + ch])
    }

    /// Get the `C` channel values of the pixel at the given coordinates.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = (y * self.width() + x) * C;
        self.data.get(offset..offset + C)
    }

    /// Convert every value to another numeric type, e.g. `u8` to `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::CastError`] if a value does not fit in `U`.
    pub fn cast<U>(&self) -> Result<Image<U, C>, ImageError>
    where
        T: Copy + num_traits::NumCast,
        U: num_traits::NumCast,
    {
        let data = self
            .data
            .iter()
            .map(|&v| {
                U::from(v).ok_or_else(|| ImageError::CastError(std::any::type_name::<U>().into()))
            })
            .collect::<Result<Vec<U>, _>>()?;

        Image::new(self.size, data)
    }
}
