//! Logo image decoded into a PDF image XObject

use crate::error::Result;
use lopdf::{dictionary, Document, ObjectId, Stream};
use std::path::Path;

/// Decoded logo: 8-bit RGB samples plus an optional alpha mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl Logo {
    /// Load and decode an image file (PNG or JPEG)
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Decode an in-memory image
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for pixel in rgba.pixels() {
            let [r, g, b, a] = pixel.0;
            rgb.extend_from_slice(&[r, g, b]);
            alpha.push(a);
        }
        let opaque = alpha.iter().all(|a| *a == u8::MAX);

        Ok(Self {
            width,
            height,
            rgb,
            alpha: (!opaque).then_some(alpha),
        })
    }

    /// Width in points when drawn `height` points tall, keeping aspect ratio
    pub fn width_for_height(&self, height: f32) -> f32 {
        self.width as f32 * height / self.height.max(1) as f32
    }

    /// Whether the image carries transparency
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Add the image (and its soft mask) to `doc`
    pub(crate) fn add_to(&self, doc: &mut Document) -> ObjectId {
        let mut image = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(self.width),
            "Height" => i64::from(self.height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };

        if let Some(alpha) = &self.alpha {
            let mask = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(self.width),
                "Height" => i64::from(self.height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            };
            let mask_id = doc.add_object(Stream::new(mask, alpha.clone()));
            image.set("SMask", mask_id);
        }

        doc.add_object(Stream::new(image, self.rgb.clone()))
    }
}
