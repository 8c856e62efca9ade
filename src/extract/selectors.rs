//! Ordered CSS-selector chains for each recipe field.
//!
//! Chains are tried front to back and the first selector that yields any
//! non-blank text wins outright (later selectors are never consulted).
//! Site-specific recipe-card classes come first because the generic
//! fallbacks at the tail are far more likely to pick up page noise.

/// Ingredient line candidates, most specific first.
pub(super) const INGREDIENT_SELECTORS: &[&str] = &[
    // WordPress Recipe Maker (WPRM)
    ".wprm-recipe-ingredient",
    ".wprm-recipe-ingredients-container li",
    // Tasty Recipes
    ".tasty-recipes-ingredients li",
    // Create by Mediavine
    ".mv-create-ingredients li",
    ".wpzoom-recipe-ingredients li",
    ".recipe-ingredients li",
    ".recipe-ingredient-list li",
    ".ingredients-section li",
    ".ingredient-list li",
    // Semantic markup
    "[itemprop='recipeIngredient']",
    // Generic fallbacks
    ".ingredients li",
    "ul.ingredients li",
];

/// Instruction/step candidates, most specific first.
pub(super) const STEP_SELECTORS: &[&str] = &[
    ".wprm-recipe-instruction-text",
    ".wprm-recipe-instructions-container li",
    ".tasty-recipes-instructions li",
    ".mv-create-instructions li",
    ".wpzoom-recipe-instructions li",
    ".recipe-instructions li",
    ".recipe-instruction-list li",
    ".instructions-section li",
    ".recipe-directions li",
    ".directions li",
    ".recipe-method li",
    ".recipe-steps li",
    // Semantic markup: itemprop may sit on the list or on each step
    "[itemprop='recipeInstructions'] li",
    "[itemprop='recipeInstructions']",
    // Generic fallbacks
    ".instructions li",
    ".method li",
];

/// Last-resort step source when the whole chain comes up empty:
/// paragraphs inside the page's main article, capped to avoid swallowing
/// comment threads.
pub(super) const STEP_LAST_RESORT: &str = "article p";
pub(super) const STEP_LAST_RESORT_LIMIT: usize = 20;

pub(super) const TITLE_META: &str = "meta[property='og:title']";

pub(super) const SERVINGS_SELECTORS: &[&str] = &["[itemprop='recipeYield']", "[class*='yield']"];

pub(super) const PREP_TIME_ITEMPROP: &str = "[itemprop='prepTime']";
pub(super) const PREP_TIME_CLASS: &str = "[class*='prep']";
pub(super) const COOK_TIME_ITEMPROP: &str = "[itemprop='cookTime']";
pub(super) const COOK_TIME_CLASS: &str = "[class*='cook']";

pub(super) const EQUIPMENT_CONTAINER: &str = "[class*='equipment']";
pub(super) const TIPS_CONTAINER: &str = "[class*='tips']";
pub(super) const LIST_OR_PARAGRAPH: &str = "li, p";
