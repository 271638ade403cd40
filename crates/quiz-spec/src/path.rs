use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::AnswerRecord;

const GOAL: &str = "goal";

/// Recommendation track chosen from the stated goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPath {
    Rejuvenecimiento,
    Armonizacion,
    Metabolismo,
    Facial,
    Corporal,
    Bienestar,
    Evaluation,
}

impl RecommendationPath {
    /// Exact-match mapping from the goal answer. Anything unrecognized,
    /// including a missing goal, falls back to a professional evaluation.
    pub fn from_goal(goal: Option<&str>) -> Self {
        match goal {
            Some("Rejuvenecer mi piel (líneas, manchas, textura)") => Self::Rejuvenecimiento,
            Some("Realzar y armonizar la apariencia de mi rostro (labios, pómulos, ojeras)") => {
                Self::Armonizacion
            }
            Some("Bajar de peso, desintoxicar y revitalizar mi cuerpo") => Self::Metabolismo,
            Some("Faciales profesionales y limpieza profunda") => Self::Facial,
            Some("Remodelación corporal y tonificación") => Self::Corporal,
            Some("Bienestar hormonal y salud integral") => Self::Bienestar,
            _ => Self::Evaluation,
        }
    }

    pub fn for_answers(answers: &AnswerRecord) -> Self {
        Self::from_goal(answers.get(GOAL))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejuvenecimiento => "rejuvenecimiento",
            Self::Armonizacion => "armonizacion",
            Self::Metabolismo => "metabolismo",
            Self::Facial => "facial",
            Self::Corporal => "corporal",
            Self::Bienestar => "bienestar",
            Self::Evaluation => "evaluation",
        }
    }

    /// Fixed summary lines shown with the recommendation. Empty for the
    /// evaluation fallback, which gets generic copy on the result screen.
    pub fn summary(&self) -> &'static [&'static str] {
        match self {
            Self::Rejuvenecimiento => {
                &["Tratamientos faciales avanzados para rejuvenecimiento de la piel"]
            }
            Self::Armonizacion => &["Armonización facial y realce de rasgos"],
            Self::Metabolismo => &["Programa de control de peso y detoxificación"],
            Self::Facial => &["Cuidado profundo y salud de la piel"],
            Self::Corporal => &["Plan corporal para tonificación y firmeza"],
            Self::Bienestar => &["Enfoque holístico de bienestar integral"],
            Self::Evaluation => &[],
        }
    }

    /// Heading for the result screen.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Rejuvenecimiento => "Recomendación: Rejuvenecimiento facial avanzado",
            Self::Armonizacion => "Recomendación: Labios y armonización facial",
            Self::Metabolismo => "Recomendación: Control de peso y metabolismo",
            Self::Facial => "Recomendación: Salud de piel y faciales",
            Self::Corporal => "Recomendación: Remodelación corporal",
            Self::Bienestar => "Recomendación: Detox y bienestar integral",
            Self::Evaluation => "Recomendación: Evaluación profesional personalizada",
        }
    }
}
