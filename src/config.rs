//! Which round icons to produce and where.
//!
//! Everything the driver needs is carried by [`RoundIconConfig`], which
//! makes it easy to point a run at a scratch directory.

use crate::error::IconError;
use std::path::{Path, PathBuf};

/// Resource directory of a standard Android Gradle module.
pub const DEFAULT_RES_DIR: &str = "app/src/main/res";

/// Existing launcher icon the round variants are derived from.
pub const SOURCE_FILE: &str = "mipmap-xxxhdpi/ic_launcher.png";

pub const ROUND_ICON_FILE: &str = "ic_launcher_round.png";

/// Android density buckets and the launcher icon edge length for each.
pub const DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// One icon to render: edge length in pixels and the PNG it goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    density: String,
    size: u32,
    output: PathBuf,
}

impl IconSpec {
    pub fn new(
        density: impl Into<String>,
        size: u32,
        output: impl Into<PathBuf>,
    ) -> Result<Self, IconError> {
        let density = density.into();
        if size == 0 {
            return Err(IconError::InvalidSize { density });
        }
        Ok(Self {
            density,
            size,
            output: output.into(),
        })
    }

    pub fn density(&self) -> &str {
        &self.density
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// Source image plus the ordered list of icons derived from it.
#[derive(Debug, Clone)]
pub struct RoundIconConfig {
    pub source: PathBuf,
    pub icons: Vec<IconSpec>,
}

impl RoundIconConfig {
    /// Layout used by Android projects: read the xxxhdpi launcher icon and
    /// write `ic_launcher_round.png` next to each density's launcher icon.
    pub fn android(res_dir: impl AsRef<Path>) -> Self {
        let res_dir = res_dir.as_ref();

        // DENSITIES only holds positive sizes, so the specs are built directly.
        let icons = DENSITIES
            .iter()
            .map(|&(density, size)| IconSpec {
                density: density.to_string(),
                size,
                output: res_dir
                    .join(format!("mipmap-{density}"))
                    .join(ROUND_ICON_FILE),
            })
            .collect();

        Self {
            source: res_dir.join(SOURCE_FILE),
            icons,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    pub fn default_android() -> Self {
        Self::android(DEFAULT_RES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_android_buckets() {
        let config = RoundIconConfig::default_android();

        assert_eq!(
            config.source,
            PathBuf::from("app/src/main/res/mipmap-xxxhdpi/ic_launcher.png")
        );

        let expected = [
            ("mdpi", 48),
            ("hdpi", 72),
            ("xhdpi", 96),
            ("xxhdpi", 144),
            ("xxxhdpi", 192),
        ];
        assert_eq!(config.icons.len(), expected.len());

        for (spec, (density, size)) in config.icons.iter().zip(expected) {
            assert_eq!(spec.density(), density);
            assert_eq!(spec.size(), size);
            assert_eq!(
                spec.output(),
                Path::new(&format!(
                    "app/src/main/res/mipmap-{density}/ic_launcher_round.png"
                ))
            );
        }
    }

    #[test]
    fn source_can_be_overridden() {
        let config = RoundIconConfig::android("res").with_source("art/logo.png");

        assert_eq!(config.source, PathBuf::from("art/logo.png"));
        assert_eq!(
            config.icons[0].output(),
            Path::new("res/mipmap-mdpi/ic_launcher_round.png")
        );
    }

    #[test]
    fn density_table_sizes_are_valid() {
        for (density, size) in DENSITIES {
            assert!(IconSpec::new(density, size, "out.png").is_ok(), "{density}");
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = IconSpec::new("ldpi", 0, "out.png").unwrap_err();
        assert!(matches!(err, IconError::InvalidSize { density } if density == "ldpi"));
    }
}
