//! Image decoding and 2D texture upload.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use glow::HasContext;

use super::GlError;

/// Pixel layout accepted by the uploader, derived from the decoded image's
/// channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Single-channel (grayscale) data.
    Red,
    /// Three-channel RGB data.
    Rgb,
    /// Four-channel RGBA data.
    Rgba,
}

impl PixelFormat {
    /// Map a decoded channel count to an upload format.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::UnsupportedChannelCount`] for anything
    /// other than 1, 3, or 4 channels.
    pub fn from_channel_count(channels: u8) -> Result<Self, TextureError> {
        match channels {
            1 => Ok(Self::Red),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(TextureError::UnsupportedChannelCount(other)),
        }
    }

    fn gl_format(self) -> u32 {
        match self {
            Self::Red => glow::RED,
            Self::Rgb => glow::RGB,
            Self::Rgba => glow::RGBA,
        }
    }
}

/// Texture load failure that leaves the GPU handle unpopulated.
#[derive(Debug)]
pub enum TextureError {
    /// The image file could not be opened or decoded.
    Decode(image::ImageError),
    /// The decoded image has a channel count the uploader cannot map to a
    /// GL format.
    UnsupportedChannelCount(u8),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(e) => write!(f, "image decode failed: {e}"),
            Self::UnsupportedChannelCount(n) => {
                write!(f, "unsupported channel count: {n}")
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(e) => Some(e),
            Self::UnsupportedChannelCount(_) => None,
        }
    }
}

/// A 2D texture with mipmaps, repeat wrapping, and linear filtering.
///
/// Dropping the value deletes the GL texture object.
pub struct Texture2d {
    gl: Rc<glow::Context>,
    id: glow::Texture,
}

impl Texture2d {
    /// Allocate a texture object and upload the image at `path` into it.
    ///
    /// A decode failure or unsupported pixel layout is logged and the
    /// allocated-but-unpopulated texture is returned anyway, so a broken
    /// texture reference degrades rendering without aborting the model
    /// load.
    ///
    /// # Errors
    ///
    /// Returns [`GlError::CreateTexture`] when the handle allocation
    /// itself fails.
    pub fn load(gl: &Rc<glow::Context>, path: &Path) -> Result<Self, GlError> {
        let id =
            unsafe { gl.create_texture() }.map_err(GlError::CreateTexture)?;
        let texture = Self {
            gl: Rc::clone(gl),
            id,
        };

        if let Err(e) = texture.upload_from_path(path) {
            log::error!("texture load failed ({}): {e}", path.display());
        }
        Ok(texture)
    }

    /// Decode the image and upload it with mipmaps and default sampling
    /// parameters.
    fn upload_from_path(&self, path: &Path) -> Result<(), TextureError> {
        let img = image::open(path).map_err(TextureError::Decode)?;
        let format =
            PixelFormat::from_channel_count(img.color().channel_count())?;
        let (width, height) = (img.width(), img.height());
        let data = match format {
            PixelFormat::Red => img.into_luma8().into_raw(),
            PixelFormat::Rgb => img.into_rgb8().into_raw(),
            PixelFormat::Rgba => img.into_rgba8().into_raw(),
        };
        log::debug!(
            "uploading {}x{} texture ({:?}) from {}",
            width,
            height,
            format,
            path.display()
        );

        let gl = &self.gl;
        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                format.gl_format() as i32,
                width as i32,
                height as i32,
                0,
                format.gl_format(),
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(&data)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::REPEAT as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::REPEAT as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            gl.bind_texture(glow::TEXTURE_2D, None);
        }
        Ok(())
    }

    /// Bind this texture to the given texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture2d {
    fn drop(&mut self) {
        unsafe { self.gl.delete_texture(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_counts_map_to_formats() {
        assert_eq!(
            PixelFormat::from_channel_count(1).unwrap(),
            PixelFormat::Red
        );
        assert_eq!(
            PixelFormat::from_channel_count(3).unwrap(),
            PixelFormat::Rgb
        );
        assert_eq!(
            PixelFormat::from_channel_count(4).unwrap(),
            PixelFormat::Rgba
        );
    }

    #[test]
    fn odd_channel_counts_are_unsupported() {
        for channels in [0u8, 2, 5, 7] {
            match PixelFormat::from_channel_count(channels) {
                Err(TextureError::UnsupportedChannelCount(n)) => {
                    assert_eq!(n, channels);
                }
                other => panic!("expected unsupported, got {other:?}"),
            }
        }
    }
}
