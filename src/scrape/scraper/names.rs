use crate::prelude::*;
use crate::scrape::record::{DivisionRecord, NameTranslation};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

static INTERLANGUAGE_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#p-lang a.interlanguage-link-target").unwrap());
static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());

/// A division with no article, marked by a red link, has nothing to
/// translate and must not be fetched.
pub fn should_translate(division: &DivisionRecord) -> bool {
    !division.wikipedia_url.is_empty() && !division.wikipedia_url.contains("redlink=1")
}

/// Collects the interlanguage links of a division's article, one translation
/// per language in panel order. An article without the language panel yields
/// zero rows.
pub fn parse_translations(html: &str, division: &DivisionRecord) -> Result<Vec<NameTranslation>> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut translations = Vec::new();
    for link in document.select(&INTERLANGUAGE_LINK) {
        let Some(language_code) = link
            .value()
            .attr("lang")
            .or_else(|| link.value().attr("hreflang"))
        else {
            tracing::warn!(
                "Interlanguage link without a language code on {}",
                division.wikipedia_url
            );
            continue;
        };
        if !seen.insert(language_code.to_string()) {
            continue;
        }

        let title = link.value().attr("title").unwrap_or_default();
        translations.push(NameTranslation {
            country_code: division.country_code.clone(),
            division_code: division.division_code.clone(),
            language_code: language_code.to_string(),
            value: translated_name(title),
            wikipedia: link.value().attr("href").unwrap_or_default().to_string(),
        });
    }

    Ok(translations)
}

/// Link titles read "Native Name – English gloss, disambiguator"; only the
/// native name survives, with any parenthesized aside removed.
fn translated_name(title: &str) -> String {
    let name = title.split(" – ").next().unwrap_or(title);
    let name = name.split(',').next().unwrap_or(name);
    PARENTHESIZED.replace_all(name, "").trim().to_string()
}
