use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answers::AnswerRecord;

const CONCERN: &str = "concern";
const PREFERENCE: &str = "preference";
const EXPERIENCE: &str = "experience";

const BOTOX_MARKER: &str = "Botox";
const FILLERS_MARKER: &str = "ácido hialurónico";

/// Exact experience answer marking a first visit.
pub const FIRST_TIME_ANSWER: &str = "No, sería mi primera vez";

/// Weight of each concern option. Keys mirror the question's option list.
pub const CONCERN_WEIGHTS: &[(&str, u32)] = &[
    ("Arrugas o líneas de expresión", 3),
    ("Flacidez", 3),
    ("Manchas o melasma", 2),
    ("Poros abiertos o textura irregular", 2),
    ("Ojeras", 2),
    ("Acné o marcas", 2),
    ("Grasa localizada", 2),
    ("Retención de líquidos", 1),
    ("Cansancio, inflamación o estrés", 1),
];

/// Weight of each treatment-preference option.
pub const PREFERENCE_WEIGHTS: &[(&str, u32)] = &[
    (
        "Inyectables estéticos (Botox, toxina botulínica, ácido hialurónico, bioestimuladores)",
        4,
    ),
    ("Tecnología avanzada (HIFU, láser, microagujas)", 3),
    ("No invasivos (faciales, radiofrecuencia, LED, hidrofacial)", 2),
    ("Holístico y detox (ozono, vitaminas, sauna)", 1),
    ("Quiero que el especialista me recomiende", 1),
];

/// Weight of each prior-experience option.
pub const EXPERIENCE_WEIGHTS: &[(&str, u32)] = &[
    ("Sí, tratamientos estéticos avanzados", 3),
    ("Sí, tratamientos estéticos básicos", 2),
    (FIRST_TIME_ANSWER, 1),
    ("Prefiero opciones holísticas y no invasivas", 1),
];

/// Lead quality buckets, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LeadTier {
    Nurture,
    Standard,
    High,
    Elite,
}

impl LeadTier {
    /// Bucket for a score. Inclusive lower bounds, checked highest first
    /// so ties land on the higher tier.
    pub fn from_score(score: u32) -> Self {
        if score >= 9 {
            LeadTier::Elite
        } else if score >= 6 {
            LeadTier::High
        } else if score >= 3 {
            LeadTier::Standard
        } else {
            LeadTier::Nurture
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadTier::Nurture => "nurture",
            LeadTier::Standard => "standard",
            LeadTier::High => "high",
            LeadTier::Elite => "elite",
        }
    }
}

/// Interest markers read straight off the raw answers, independent of the
/// score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IntentFlags {
    pub botox: bool,
    pub fillers: bool,
    pub first_time: bool,
}

/// Score, tier, and intent derived from an answer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeadProfile {
    #[serde(rename = "lead_score")]
    pub score: u32,
    #[serde(rename = "lead_type")]
    pub tier: LeadTier,
    pub intent: IntentFlags,
}

fn weight_for(table: &[(&str, u32)], answer: Option<&str>) -> u32 {
    let Some(answer) = answer else { return 0 };
    table
        .iter()
        .find(|(option, _)| *option == answer)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}

/// Classify an answer record. Total over its input: unknown or missing
/// answers weigh zero and never error.
pub fn classify(answers: &AnswerRecord) -> LeadProfile {
    let preference_answer = answers.get(PREFERENCE);
    let experience_answer = answers.get(EXPERIENCE);

    let score = weight_for(CONCERN_WEIGHTS, answers.get(CONCERN))
        + weight_for(PREFERENCE_WEIGHTS, preference_answer)
        + weight_for(EXPERIENCE_WEIGHTS, experience_answer);

    let intent = IntentFlags {
        botox: preference_answer.is_some_and(|value| value.contains(BOTOX_MARKER)),
        fillers: preference_answer.is_some_and(|value| value.contains(FILLERS_MARKER)),
        first_time: experience_answer == Some(FIRST_TIME_ANSWER),
    };

    LeadProfile {
        score,
        tier: LeadTier::from_score(score),
        intent,
    }
}
