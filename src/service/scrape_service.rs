use crate::prelude::*;
use crate::scrape::france::france_divisions;
use crate::scrape::page::{fetch_page, wiki_url};
use crate::scrape::record::{DIVISIONS_HEADER, NAMES_HEADER, SUBDIVISIONS_HEADER};
use crate::scrape::scraper::division::{parse_divisions, parse_subdivisions};
use crate::scrape::scraper::index::parse_country_links;
use crate::scrape::scraper::names::{parse_translations, should_translate};
use crate::service::csv_service::{open_writer, read_divisions};
use crate::service::var_service::ScrapeConfig;
use reqwest::Client;
use std::fs;

/// Division/Subdivision Extractor: index page, then one detail page per
/// country in index order, writing `divisions.csv` and `subdivisions.csv`.
/// Fetches are sequential and any fetch or structural failure halts the run,
/// leaving the files truncated at the last written row.
pub async fn run_divisions(config: &ScrapeConfig) -> Result<()> {
    fs::create_dir_all(&config.result_dir)?;
    let mut divisions_csv = open_writer(
        &config.result_dir.join("divisions.csv"),
        config.delimiter,
        &DIVISIONS_HEADER,
    )?;
    let mut subdivisions_csv = open_writer(
        &config.result_dir.join("subdivisions.csv"),
        config.delimiter,
        &SUBDIVISIONS_HEADER,
    )?;

    let client = Client::new();
    let index_html = fetch_page(&client, &wiki_url("/wiki/ISO_3166-2")?).await?;
    let countries = parse_country_links(&index_html)?;
    tracing::info!("{} countries with divisions on the index page", countries.len());

    for country in &countries {
        let url = wiki_url(&country.href)?;
        println!("{}: {}", country.country_code, url);
        let html = fetch_page(&client, &url).await?;

        // France's division list on Wikipedia predates the 2016 region
        // reform; the static table below replaces it.
        if country.country_code != "FR" {
            for division in parse_divisions(&html, country)? {
                divisions_csv.serialize(division)?;
            }
        }

        for subdivision in parse_subdivisions(&html, country)? {
            subdivisions_csv.serialize(subdivision)?;
        }
    }

    for division in france_divisions() {
        divisions_csv.serialize(division)?;
    }

    divisions_csv.flush()?;
    subdivisions_csv.flush()?;

    Ok(())
}

/// Name Translator: reads the divisions table back, fetches each division's
/// article, and writes `names.csv` from its interlanguage links.
pub async fn run_names(config: &ScrapeConfig) -> Result<()> {
    let divisions = read_divisions(&config.result_dir.join("divisions.csv"), config.delimiter)?;
    let mut names_csv = open_writer(
        &config.result_dir.join("names.csv"),
        config.delimiter,
        &NAMES_HEADER,
    )?;

    let client = Client::new();
    for division in &divisions {
        if !should_translate(division) {
            continue;
        }

        println!(
            "{}-{}: {}",
            division.country_code, division.division_code, division.wikipedia_url
        );
        let html = fetch_page(&client, &division.wikipedia_url).await?;
        for translation in parse_translations(&html, division)? {
            names_csv.serialize(translation)?;
        }
    }

    names_csv.flush()?;

    Ok(())
}
