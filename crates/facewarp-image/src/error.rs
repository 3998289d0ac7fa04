/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size and channels.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has a zero width or height.
    #[error("Image size must be non zero, got {0}x{1}")]
    ZeroSizedImage(usize, usize),

    /// Error when the pixel buffer of an image would not fit in memory.
    #[error("Image size {0}x{1} with {2} channels is too large to allocate")]
    ImageTooLarge(usize, usize, usize),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a pixel value can not be cast to the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when an affine transform has a singular linear part.
    #[error("Affine transform is not invertible (determinant {0})")]
    NonInvertibleTransform(f32),

    /// Error when a crop region has a non positive or non finite size.
    #[error("Invalid region size {0}x{1}, expected positive finite values")]
    InvalidRegionSize(f32, f32),

    /// Error when an integer crop region does not fit inside the source image.
    #[error("Crop region ({0}, {1}, {2}x{3}) exceeds the image bounds ({4}x{5})")]
    CropOutOfBounds(usize, usize, usize, usize, usize, usize),
}
