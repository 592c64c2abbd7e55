use serde::Deserialize;
use super::features::FeatureSet;

/// The organization a widget belongs to
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Organization {
    pub slug: String,
    #[serde(default)]
    pub features: FeatureSet,
}

impl Organization {
    pub fn new(slug: impl Into<String>, features: FeatureSet) -> Self {
        Self {
            slug: slug.into(),
            features,
        }
    }
}
