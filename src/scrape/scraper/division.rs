use crate::prelude::*;
use crate::scrape::page::wiki_url;
use crate::scrape::record::{CountryLink, DivisionRecord, SubdivisionRecord};
use crate::scrape::util::{row_cells, visible_text, MONOSPACE, SORTABLE_TABLE, TH, TR};
use anyhow::anyhow;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TITLED_ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[title]").unwrap());

/// Extracts the divisions table of a per-country detail page. The divisions
/// table is the first sortable wikitable on the page; its absence is a broken
/// page assumption and fatal.
pub fn parse_divisions(html: &str, country: &CountryLink) -> Result<Vec<DivisionRecord>> {
    let document = Html::parse_document(html);
    let table = document.select(&SORTABLE_TABLE).next().ok_or_else(|| {
        anyhow!(
            "No sortable wikitable on the {} detail page",
            country.country_code
        )
    })?;
    let mut rows = table.select(&TR);
    let header_row = rows.next().ok_or_else(|| {
        anyhow!("Empty divisions table on the {} detail page", country.country_code)
    })?;
    let type_index = type_column_index(header_row);

    let mut divisions = Vec::new();
    for row in rows {
        let cells = row_cells(row);
        if cells.is_empty() {
            continue;
        }

        let Some(division_code) = code_suffix(&cells, &country.country_code) else {
            continue;
        };
        let (name, display_name, wikipedia_url) = resolve_row_name(row, &cells)?;
        let division_type = row_type(&cells, type_index, &country.division_type);

        divisions.push(DivisionRecord {
            country_code: country.country_code.clone(),
            division_code,
            name,
            display_name,
            wikipedia_url,
            division_type,
        });
    }

    Ok(divisions)
}

/// Extracts the subdivisions table, located through its parent-code header
/// cell. A page without such a header has no subdivisions, which is not an
/// error.
pub fn parse_subdivisions(html: &str, country: &CountryLink) -> Result<Vec<SubdivisionRecord>> {
    let document = Html::parse_document(html);
    let Some(parent_header) = find_parent_header(&document) else {
        return Ok(Vec::new());
    };
    let table = parent_header
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .ok_or_else(|| {
            anyhow!(
                "Parent subdivision header outside a table on the {} detail page",
                country.country_code
            )
        })?;
    let header_row = parent_header
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or_else(|| anyhow!("Parent subdivision header has no row"))?;
    let parent_index = row_cells(header_row)
        .iter()
        .position(|cell| cell.id() == parent_header.id())
        .ok_or_else(|| anyhow!("Parent subdivision header is not a cell of its row"))?;
    let type_index = type_column_index(header_row);
    let fallback_type = country.subdivision_type.clone().unwrap_or_default();

    let mut subdivisions = Vec::new();
    for row in table.select(&TR).skip(1) {
        let cells = row_cells(row);
        if cells.is_empty() {
            continue;
        }

        let Some(subdivision_code) = code_suffix(&cells, &country.country_code) else {
            continue;
        };
        let Some(parent_cell) = cells.get(parent_index) else {
            tracing::warn!(
                "Skipping {} subdivision row without a parent cell at column {}",
                country.country_code,
                parent_index
            );
            continue;
        };
        let parent_code = parent_code(*parent_cell);
        let (name, display_name, wikipedia_url) = resolve_row_name(row, &cells)?;
        let subdivision_type = row_type(&cells, type_index, &fallback_type);

        subdivisions.push(SubdivisionRecord {
            country_code: country.country_code.clone(),
            subdivision_code,
            parent_code,
            name,
            display_name,
            wikipedia_url,
            subdivision_type,
        });
    }

    Ok(subdivisions)
}

/// Locates the subdivisions table header cell: exactly "Parent subdivision",
/// or the first header starting with "In " when no exact match exists.
fn find_parent_header(document: &Html) -> Option<ElementRef<'_>> {
    let mut prefixed = None;
    for table in document.select(&SORTABLE_TABLE) {
        for header in table.select(&TH) {
            let text = visible_text(header);
            let text = text.trim();
            if text == "Parent subdivision" {
                return Some(header);
            }
            if text.starts_with("In ") && prefixed.is_none() {
                prefixed = Some(header);
            }
        }
    }

    prefixed
}

fn type_column_index(header_row: ElementRef) -> Option<usize> {
    row_cells(header_row).iter().position(|cell| {
        let text = visible_text(*cell);
        let text = text.trim();
        text == "Subdivision category" || text == "Subdivision type"
    })
}

fn code_cell_text(cell: ElementRef) -> String {
    let node = cell.select(&MONOSPACE).next().unwrap_or(cell);
    visible_text(node).trim().to_string()
}

/// Suffix of the "CC-XXX" code in column 0; a hyphenless code cell skips the row.
fn code_suffix(cells: &[ElementRef], country_code: &str) -> Option<String> {
    let text = code_cell_text(*cells.first()?);
    match text.split_once('-') {
        Some((_, suffix)) if !suffix.trim().is_empty() => Some(suffix.trim().to_string()),
        _ => {
            tracing::warn!(
                "Skipping {} row with malformed code cell: {:?}",
                country_code,
                text
            );
            None
        }
    }
}

/// Bare country-level parent codes like "FR" have no hyphen and are kept verbatim.
fn parent_code(cell: ElementRef) -> String {
    let text = code_cell_text(cell);
    match text.split_once('-') {
        Some((_, suffix)) => suffix.trim().to_string(),
        None => text,
    }
}

/// First titled anchor that is not a flag-icon thumbnail, or column 1's plain text.
fn resolve_row_name(row: ElementRef, cells: &[ElementRef]) -> Result<(String, String, String)> {
    for anchor in row.select(&TITLED_ANCHOR) {
        let title = anchor.value().attr("title").unwrap_or_default();
        if title.is_empty() || anchor.value().classes().any(|class| class == "image") {
            continue;
        }

        let wikipedia_url = match anchor.value().attr("href") {
            Some(href) => wiki_url(href)?,
            None => String::new(),
        };
        return Ok((
            title.trim().to_string(),
            visible_text(anchor).trim().to_string(),
            wikipedia_url,
        ));
    }

    let name_cell = cells
        .get(1)
        .ok_or_else(|| anyhow!("Row has neither a titled link nor a name cell"))?;
    let name = visible_text(*name_cell).trim().to_string();
    Ok((name.clone(), name, String::new()))
}

fn row_type(cells: &[ElementRef], type_index: Option<usize>, fallback: &str) -> String {
    type_index
        .and_then(|index| cells.get(index))
        .map(|cell| visible_text(*cell))
        .unwrap_or_else(|| fallback.to_string())
        .trim()
        .to_string()
}
