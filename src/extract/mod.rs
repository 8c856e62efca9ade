//! Selector-chain recipe extraction.
//!
//! `extract` is a pure function of its HTML input: it never fails, and a
//! document with no matching selectors still produces a minimally
//! populated `Recipe` (hostname-derived title, placeholder step).

mod selectors;
pub mod time;

use log::debug;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::model::{Ingredient, Recipe, Step, PLACEHOLDER_STEP};

use self::selectors::*;
use self::time::{first_integer, parse_minutes};

/// Extract a structured recipe from an HTML document.
pub fn extract(html: &str, source_url: &str) -> Recipe {
    let document = Html::parse_document(html);

    let ingredients: Vec<Ingredient> = first_chain_match(&document, INGREDIENT_SELECTORS)
        .into_iter()
        .map(Ingredient::named)
        .collect();

    let mut steps: Vec<Step> = extract_steps(&document)
        .into_iter()
        .map(Step::instruction)
        .collect();
    if steps.is_empty() {
        steps.push(Step::instruction(PLACEHOLDER_STEP));
    }

    Recipe {
        title: extract_title(&document, source_url),
        subtitle: None,
        servings: extract_servings(&document),
        prep_time_minutes: extract_time(&document, PREP_TIME_ITEMPROP, PREP_TIME_CLASS),
        cook_time_minutes: extract_time(&document, COOK_TIME_ITEMPROP, COOK_TIME_CLASS),
        ingredients,
        equipment: collect_container_items(&document, EQUIPMENT_CONTAINER),
        steps,
        tips: collect_container_items(&document, TIPS_CONTAINER),
    }
}

/// Element text with whitespace collapsed and trimmed.
fn element_text(el: ElementRef) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn select_all(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    document
        .select(&selector)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

fn select_first(document: &Html, selector: &str) -> Option<String> {
    select_all(document, selector).into_iter().next()
}

/// First-match-wins over an ordered selector chain. A selector whose
/// matches are all blank counts as no match, so the chain continues.
fn first_chain_match(document: &Html, chain: &[&str]) -> Vec<String> {
    for selector in chain {
        let texts = select_all(document, selector);
        if !texts.is_empty() {
            debug!("selector chain matched {} items via {selector}", texts.len());
            return texts;
        }
    }
    Vec::new()
}

fn extract_steps(document: &Html) -> Vec<String> {
    let steps = first_chain_match(document, STEP_SELECTORS);
    if !steps.is_empty() {
        return steps;
    }
    // Last resort: a handful of article paragraphs
    select_all(document, STEP_LAST_RESORT)
        .into_iter()
        .take(STEP_LAST_RESORT_LIMIT)
        .collect()
}

fn extract_title(document: &Html, source_url: &str) -> String {
    if let Some(title) = select_first(document, "h1") {
        return title;
    }
    if let Some(title) = meta_content(document, TITLE_META) {
        return title;
    }
    if let Some(title) = select_first(document, "title") {
        return title;
    }
    format!("Recipe from {}", display_host(source_url))
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
}

fn display_host(source_url: &str) -> String {
    Url::parse(source_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .map(|host| host.trim_start_matches("www.").to_string())
        .unwrap_or_else(|| source_url.trim().to_string())
}

fn extract_servings(document: &Html) -> u32 {
    SERVINGS_SELECTORS
        .iter()
        .find_map(|selector| select_first(document, selector))
        .and_then(|text| first_integer(&text))
        .filter(|&n| n >= 1)
        .unwrap_or(1)
}

/// Prefer the machine-readable `datetime` attribute, then visible text of
/// the first class-matched element.
fn extract_time(document: &Html, itemprop_selector: &str, class_selector: &str) -> u32 {
    if let Ok(selector) = Selector::parse(itemprop_selector) {
        for el in document.select(&selector) {
            if let Some(datetime) = el.value().attr("datetime") {
                return parse_minutes(Some(datetime));
            }
            let text = element_text(el);
            if !text.is_empty() {
                return parse_minutes(Some(&text));
            }
        }
    }
    parse_minutes(select_first(document, class_selector).as_deref())
}

/// Collect list/paragraph children of every container matching `selector`.
fn collect_container_items(document: &Html, selector: &str) -> Vec<String> {
    let Ok(container_selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    let Ok(item_selector) = Selector::parse(LIST_OR_PARAGRAPH) else {
        return Vec::new();
    };
    let mut items = Vec::new();
    for container in document.select(&container_selector) {
        for item in container.select(&item_selector) {
            let text = element_text(item);
            if !text.is_empty() && !items.contains(&text) {
                items.push(text);
            }
        }
    }
    items
}
