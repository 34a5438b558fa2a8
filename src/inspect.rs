use crate::error::IconError;
use std::path::Path;

/// Alpha samples read back from a generated icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundIconShape {
    pub width: u32,
    pub height: u32,
    pub center_alpha: u8,
    /// Top-left, top-right, bottom-left, bottom-right.
    pub corner_alpha: [u8; 4],
}

impl RoundIconShape {
    /// Square, opaque in the middle and transparent in every corner.
    pub fn is_circular(&self) -> bool {
        self.width == self.height
            && self.center_alpha == u8::MAX
            && self.corner_alpha.iter().all(|&alpha| alpha == 0)
    }
}

pub fn inspect_round_icon(path: &Path) -> Result<RoundIconShape, IconError> {
    let icon = image::open(path)
        .map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = icon.dimensions();
    let (right, bottom) = (width.saturating_sub(1), height.saturating_sub(1));
    let alpha = |x: u32, y: u32| icon.get_pixel(x, y)[3];

    Ok(RoundIconShape {
        width,
        height,
        center_alpha: alpha(width / 2, height / 2),
        corner_alpha: [
            alpha(0, 0),
            alpha(right, 0),
            alpha(0, bottom),
            alpha(right, bottom),
        ],
    })
}
