//! Model catalogue.
//!
//! The selected model only picks a row of display constants. It has no
//! effect on the mesh layout or the metrics.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Models offered by the model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelId {
    #[default]
    #[serde(rename = "Gemma-3n-Light")]
    GemmaLight,
    #[serde(rename = "Gemma-3n-Standard")]
    GemmaStandard,
    #[serde(rename = "Gemma-3n-Pro")]
    GemmaPro,
    #[serde(rename = "MatFormer-Elastic")]
    MatFormerElastic,
}

impl ModelId {
    /// Every model, in selector order.
    pub const ALL: [ModelId; 4] = [
        ModelId::GemmaLight,
        ModelId::GemmaStandard,
        ModelId::GemmaPro,
        ModelId::MatFormerElastic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelId::GemmaLight => "Gemma-3n-Light",
            ModelId::GemmaStandard => "Gemma-3n-Standard",
            ModelId::GemmaPro => "Gemma-3n-Pro",
            ModelId::MatFormerElastic => "MatFormer-Elastic",
        }
    }

    pub fn profile(self) -> ModelProfile {
        match self {
            ModelId::MatFormerElastic => ModelProfile::ELASTIC,
            _ => ModelProfile::FIXED,
        }
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| Error::UnknownModel(s.to_string()))
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Display estimates for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelProfile {
    pub inference_time: &'static str,
    pub memory_usage: &'static str,
    pub adaptation_rate: &'static str,
    /// Shows the elastic execution indicators
    pub elastic: bool,
}

impl ModelProfile {
    const ELASTIC: Self = Self {
        inference_time: "847ms",
        memory_usage: "2.1GB",
        adaptation_rate: "94.2%",
        elastic: true,
    };

    const FIXED: Self = Self {
        inference_time: "2.3s",
        memory_usage: "8.4GB",
        adaptation_rate: "67.8%",
        elastic: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(ModelId::default(), ModelId::GemmaLight);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for model in ModelId::ALL {
            assert_eq!(model.label().parse::<ModelId>().unwrap(), model);
        }
    }

    #[test]
    fn unknown_label_rejected() {
        assert_eq!(
            "Gemma-4".parse::<ModelId>(),
            Err(Error::UnknownModel("Gemma-4".to_string()))
        );
        // Labels are case sensitive
        assert!("matformer-elastic".parse::<ModelId>().is_err());
    }

    #[test]
    fn only_elastic_gets_fast_profile() {
        let elastic = ModelId::MatFormerElastic.profile();
        assert_eq!(elastic.inference_time, "847ms");
        assert_eq!(elastic.memory_usage, "2.1GB");
        assert_eq!(elastic.adaptation_rate, "94.2%");
        assert!(elastic.elastic);

        for model in [ModelId::GemmaLight, ModelId::GemmaStandard, ModelId::GemmaPro] {
            let p = model.profile();
            assert_eq!(p.inference_time, "2.3s");
            assert_eq!(p.memory_usage, "8.4GB");
            assert_eq!(p.adaptation_rate, "67.8%");
            assert!(!p.elastic);
        }
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&ModelId::GemmaPro).unwrap();
        assert_eq!(json, "\"Gemma-3n-Pro\"");
        let back: ModelId = serde_json::from_str("\"MatFormer-Elastic\"").unwrap();
        assert_eq!(back, ModelId::MatFormerElastic);
    }
}
