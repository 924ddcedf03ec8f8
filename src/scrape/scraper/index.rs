use crate::prelude::*;
use crate::scrape::record::CountryLink;
use crate::scrape::util::{row_cells, visible_text, SORTABLE_TABLE, TR};
use anyhow::anyhow;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static COUNTRY_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href^="/wiki/ISO_3166-2"]"#).unwrap());

// "â€”" is the em dash mangled through a Latin-1 round trip; it shows up on
// some revisions of the index page and means the same thing.
const NO_DIVISIONS_PLACEHOLDERS: [&str; 2] = ["\u{2014}", "â€”"];

/// Parses the ISO 3166-2 index page into one [`CountryLink`] per country that
/// has divisions, in row order. Countries whose type cell is the em-dash
/// placeholder are skipped.
pub fn parse_country_links(html: &str) -> Result<Vec<CountryLink>> {
    let document = Html::parse_document(html);
    let table = document
        .select(&SORTABLE_TABLE)
        .exactly_one()
        .map_err(|_| anyhow!("Expected exactly one sortable wikitable on the index page"))?;

    let mut countries = Vec::new();
    for row in table.select(&TR).skip(1) {
        let cells = row_cells(row);
        if cells.is_empty() {
            continue;
        }

        let type_cell = cells
            .get(2)
            .ok_or_else(|| anyhow!("Index row is missing the subdivision types cell"))?;
        let types = visible_text(*type_cell);
        let types = types.trim();
        if NO_DIVISIONS_PLACEHOLDERS.contains(&types) {
            continue;
        }

        let mut lines = types.lines().map(str::trim).filter(|line| !line.is_empty());
        let division_type = match lines.next() {
            Some(line) => type_label(line)?,
            None => return Err(anyhow!("Index row has an empty subdivision types cell")),
        };
        let subdivision_type = lines.next().map(type_label).transpose()?;

        let country_cell = cells
            .first()
            .ok_or_else(|| anyhow!("Index row is missing the country cell"))?;
        let link = country_cell.select(&COUNTRY_LINK).next().ok_or_else(|| {
            anyhow!("Index row for types {:?} has no ISO 3166-2 country link", types)
        })?;
        let href = link
            .value()
            .attr("href")
            .ok_or_else(|| anyhow!("Country link has no href"))?
            .to_string();
        let country_code = visible_text(link).trim().to_string();

        countries.push(CountryLink {
            country_code,
            href,
            division_type,
            subdivision_type,
        });
    }

    Ok(countries)
}

/// A type line reads like "13 regions"; the label is everything after the
/// leading count.
fn type_label(line: &str) -> Result<String> {
    line.split_once(' ')
        .map(|(_, label)| label.trim().to_string())
        .ok_or_else(|| anyhow!("Unexpected subdivision type line on the index page: {:?}", line))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_PAGE: &str = r#"
        <table class="wikitable sortable">
            <tr><th>Entry</th><th>Country name</th><th>Subdivisions assigned codes</th></tr>
            <tr>
                <td><a href="/wiki/ISO_3166-2:US">US</a></td>
                <td>United States</td>
                <td>50 states<br>1 district</td>
            </tr>
            <tr>
                <td><a href="/wiki/ISO_3166-2:AQ">AQ</a></td>
                <td>Antarctica</td>
                <td>&#8212;</td>
            </tr>
            <tr>
                <td><a href="/wiki/ISO_3166-2:BV">BV</a></td>
                <td>Bouvet Island</td>
                <td>â€”</td>
            </tr>
            <tr>
                <td><a href="/wiki/ISO_3166-2:EE">EE</a></td>
                <td>Estonia</td>
                <td>15 counties</td>
            </tr>
        </table>"#;

    #[test]
    fn parses_countries_with_divisions_in_row_order() {
        let countries = parse_country_links(INDEX_PAGE).unwrap();
        assert_eq!(
            countries,
            vec![
                CountryLink {
                    country_code: "US".to_string(),
                    href: "/wiki/ISO_3166-2:US".to_string(),
                    division_type: "states".to_string(),
                    subdivision_type: Some("district".to_string()),
                },
                CountryLink {
                    country_code: "EE".to_string(),
                    href: "/wiki/ISO_3166-2:EE".to_string(),
                    division_type: "counties".to_string(),
                    subdivision_type: None,
                },
            ]
        );
    }

    #[test]
    fn placeholder_dash_rows_produce_no_country_link() {
        let countries = parse_country_links(INDEX_PAGE).unwrap();
        assert!(!countries.iter().any(|c| c.country_code == "AQ"));
        assert!(!countries.iter().any(|c| c.country_code == "BV"));
    }

    #[test]
    fn missing_country_link_is_fatal() {
        let html = r#"
            <table class="wikitable sortable">
                <tr><th>Entry</th><th>Country name</th><th>Subdivisions assigned codes</th></tr>
                <tr><td>US</td><td>United States</td><td>50 states</td></tr>
            </table>"#;
        assert!(parse_country_links(html).is_err());
    }

    #[test]
    fn type_line_without_count_is_fatal() {
        let html = r#"
            <table class="wikitable sortable">
                <tr><th>Entry</th><th>Country name</th><th>Subdivisions assigned codes</th></tr>
                <tr><td><a href="/wiki/ISO_3166-2:XX">XX</a></td><td>Example</td><td>states</td></tr>
            </table>"#;
        assert!(parse_country_links(html).is_err());
    }

    #[test]
    fn two_sortable_tables_are_fatal() {
        let html = format!(
            "{}<table class=\"wikitable sortable\"><tr><th>x</th></tr></table>",
            INDEX_PAGE
        );
        assert!(parse_country_links(&html).is_err());
    }
}
