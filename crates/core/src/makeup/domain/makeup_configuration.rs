use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapping::domain::makeup_region::{MakeupRegion, RegionKind};
use crate::shared::polygon::Polygon;

use super::color::Rgb;

#[derive(Error, Debug, PartialEq)]
pub enum MakeupConfigError {
    #[error("{category} intensity must be between 0.0 and 1.0, got {intensity}")]
    Intensity {
        category: ProductCategory,
        intensity: f64,
    },
}

/// Product categories, declared in the order they are layered onto the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Foundation,
    Highlighter,
    Blush,
    Eyeshadow,
    Lipstick,
}

impl ProductCategory {
    pub const ALL: &[ProductCategory] = &[
        ProductCategory::Foundation,
        ProductCategory::Highlighter,
        ProductCategory::Blush,
        ProductCategory::Eyeshadow,
        ProductCategory::Lipstick,
    ];

    pub fn target_regions(&self) -> &'static [RegionKind] {
        match self {
            ProductCategory::Foundation => &[RegionKind::FaceOval],
            ProductCategory::Highlighter => &[RegionKind::Forehead],
            ProductCategory::Blush => &[RegionKind::LeftCheek, RegionKind::RightCheek],
            ProductCategory::Eyeshadow => &[RegionKind::LeftEyelid, RegionKind::RightEyelid],
            ProductCategory::Lipstick => &[RegionKind::Lips],
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Foundation => write!(f, "Foundation"),
            ProductCategory::Highlighter => write!(f, "Highlighter"),
            ProductCategory::Blush => write!(f, "Blush"),
            ProductCategory::Eyeshadow => write!(f, "Eyeshadow"),
            ProductCategory::Lipstick => write!(f, "Lipstick"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSetting {
    pub color: Rgb,
    /// Overlay opacity in [0, 1].
    pub intensity: f64,
}

/// One polygon to tint, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub category: ProductCategory,
    pub region: RegionKind,
    pub polygon: Polygon,
    pub color: Rgb,
    pub opacity: f64,
}

/// User-chosen products; at most one setting per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MakeupConfiguration {
    products: BTreeMap<ProductCategory, ProductSetting>,
}

impl MakeupConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        category: ProductCategory,
        setting: ProductSetting,
    ) -> Result<(), MakeupConfigError> {
        check_intensity(category, setting.intensity)?;
        self.products.insert(category, setting);
        Ok(())
    }

    pub fn remove(&mut self, category: ProductCategory) -> Option<ProductSetting> {
        self.products.remove(&category)
    }

    pub fn get(&self, category: ProductCategory) -> Option<&ProductSetting> {
        self.products.get(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Re-checks every setting; needed after deserialising.
    pub fn validate(&self) -> Result<(), MakeupConfigError> {
        self.products
            .iter()
            .try_for_each(|(&category, s)| check_intensity(category, s.intensity))
    }

    /// Overlays for the current frame, foundation first and lipstick last.
    ///
    /// Zero-intensity products and regions missing from `regions` are skipped.
    pub fn plan_overlays(&self, regions: &[MakeupRegion]) -> Vec<Overlay> {
        let mut overlays = Vec::new();
        for (&category, setting) in &self.products {
            if setting.intensity <= 0.0 {
                continue;
            }
            for &kind in category.target_regions() {
                let Some(region) = regions.iter().find(|r| r.kind == kind) else {
                    continue;
                };
                overlays.push(Overlay {
                    category,
                    region: kind,
                    polygon: region.polygon.clone(),
                    color: setting.color,
                    opacity: setting.intensity,
                });
            }
        }
        overlays
    }
}

fn check_intensity(category: ProductCategory, intensity: f64) -> Result<(), MakeupConfigError> {
    if (0.0..=1.0).contains(&intensity) {
        Ok(())
    } else {
        Err(MakeupConfigError::Intensity {
            category,
            intensity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::domain::region_mapper::MakeupRegionMapper;
    use crate::shared::synthetic_face::FaceProportions;
    use rstest::rstest;

    fn setting(intensity: f64) -> ProductSetting {
        ProductSetting {
            color: Rgb::new(200, 40, 80),
            intensity,
        }
    }

    fn regions() -> Vec<MakeupRegion> {
        MakeupRegionMapper::new()
            .map(&FaceProportions::default().build())
            .unwrap()
    }

    #[rstest]
    #[case::negative(-0.1)]
    #[case::above_one(1.01)]
    #[case::nan(f64::NAN)]
    fn test_set_rejects_bad_intensity(#[case] intensity: f64) {
        let mut config = MakeupConfiguration::new();
        let err = config
            .set(ProductCategory::Lipstick, setting(intensity))
            .unwrap_err();
        assert!(matches!(err, MakeupConfigError::Intensity { .. }));
        assert!(config.is_empty());
    }

    #[test]
    fn test_set_replaces_previous() {
        let mut config = MakeupConfiguration::new();
        config.set(ProductCategory::Blush, setting(0.2)).unwrap();
        config.set(ProductCategory::Blush, setting(0.6)).unwrap();
        assert_eq!(config.get(ProductCategory::Blush).unwrap().intensity, 0.6);
        assert!(config.remove(ProductCategory::Blush).is_some());
        assert!(config.get(ProductCategory::Blush).is_none());
    }

    #[test]
    fn test_overlays_follow_layer_order() {
        let mut config = MakeupConfiguration::new();
        config.set(ProductCategory::Lipstick, setting(0.8)).unwrap();
        config.set(ProductCategory::Blush, setting(0.3)).unwrap();
        config.set(ProductCategory::Foundation, setting(0.1)).unwrap();

        let overlays = config.plan_overlays(&regions());
        let order: Vec<(ProductCategory, RegionKind)> =
            overlays.iter().map(|o| (o.category, o.region)).collect();
        assert_eq!(
            order,
            vec![
                (ProductCategory::Foundation, RegionKind::FaceOval),
                (ProductCategory::Blush, RegionKind::LeftCheek),
                (ProductCategory::Blush, RegionKind::RightCheek),
                (ProductCategory::Lipstick, RegionKind::Lips),
            ]
        );
    }

    #[test]
    fn test_zero_intensity_skipped() {
        let mut config = MakeupConfiguration::new();
        config.set(ProductCategory::Eyeshadow, setting(0.0)).unwrap();
        assert!(config.plan_overlays(&regions()).is_empty());
    }

    #[test]
    fn test_missing_region_skipped() {
        let mut config = MakeupConfiguration::new();
        config.set(ProductCategory::Eyeshadow, setting(0.5)).unwrap();
        let only_left: Vec<MakeupRegion> = regions()
            .into_iter()
            .filter(|r| r.kind == RegionKind::LeftEyelid)
            .collect();
        let overlays = config.plan_overlays(&only_left);
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].region, RegionKind::LeftEyelid);
        assert_eq!(overlays[0].opacity, 0.5);
    }

    #[test]
    fn test_json_shape_and_validate() {
        let json = r##"{"lipstick": {"color": "#c21e56", "intensity": 1.5}}"##;
        let config: MakeupConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.get(ProductCategory::Lipstick).unwrap().color,
            Rgb::new(0xc2, 0x1e, 0x56)
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_every_category_has_targets() {
        for category in ProductCategory::ALL {
            assert!(!category.target_regions().is_empty());
        }
    }
}
