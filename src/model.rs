use serde::{Deserialize, Serialize};

/// Placeholder instruction inserted when no steps could be extracted.
/// Guarantees `Recipe::steps` is never empty, so callers can always
/// index the first step.
pub const PLACEHOLDER_STEP: &str = "See original recipe.";

/// A structured recipe extracted from a web page.
///
/// This is the sole output contract of the extraction engine. Values are
/// constructed once per extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Never empty; falls back to `"Recipe from {hostname}"`.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Defaults to 1 when no yield was detected.
    pub servings: u32,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    /// Document order; empty only if no ingredient selector matched.
    pub ingredients: Vec<Ingredient>,
    pub equipment: Vec<String>,
    /// Never empty; contains the placeholder step if nothing was extracted.
    pub steps: Vec<Step>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Possibly empty; the extractor does not split amounts from names.
    pub amount: String,
    /// Always non-empty trimmed text.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    pub short_title: String,
    /// Always non-empty trimmed text.
    pub instruction: String,
}

/// Cooking phase a step belongs to, when the source page labels one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Prep")]
    Prep,
    #[serde(rename = "Cook Main")]
    CookMain,
    #[serde(rename = "Cook Side")]
    CookSide,
    #[serde(rename = "Make Sauce")]
    MakeSauce,
    #[serde(rename = "Finish & Serve")]
    FinishServe,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            amount: String::new(),
            name: name.into(),
            note: None,
        }
    }
}

impl Step {
    pub fn instruction(text: impl Into<String>) -> Self {
        Self {
            section: None,
            short_title: String::new(),
            instruction: text.into(),
        }
    }

    /// Whether this is the placeholder step emitted for empty extractions.
    pub fn is_placeholder(&self) -> bool {
        self.instruction == PLACEHOLDER_STEP
    }
}
