//! Brand asset lookup.
//!
//! The logo is optional decoration: its absence (or a corrupt file) is
//! logged and the invoice renders without it.

use facture_types::ImageResource;
use std::path::PathBuf;

/// Candidate locations for the brand logo, probed in order. The first
/// readable, decodable image wins.
pub fn default_candidate_paths() -> Vec<PathBuf> {
    ["assets/brand/logo.png", "assets/logo.png", "static/images/logo.png"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

pub async fn load_brand_image(candidates: &[PathBuf]) -> Option<ImageResource> {
    for path in candidates {
        match tokio::fs::read(path).await {
            Ok(bytes) => match decode(&bytes) {
                Ok(img) => {
                    log::debug!("loaded brand image from {}", path.display());
                    return Some(img);
                }
                Err(e) => {
                    log::warn!("brand image at {} could not be decoded: {}", path.display(), e);
                }
            },
            Err(e) => {
                log::debug!("no brand image at {}: {}", path.display(), e);
            }
        }
    }
    log::warn!("brand image not found at any candidate path, rendering without it");
    None
}

fn decode(bytes: &[u8]) -> Result<ImageResource, image::ImageError> {
    let rgb = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(ImageResource::new(width, height, rgb.into_raw()))
}
