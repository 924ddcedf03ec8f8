use crate::prelude::*;
use crate::scrape::record::DivisionRecord;
use csv::{Reader, ReaderBuilder, Writer, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// Opens a delimited CSV writer and emits the header row up front, so a table
/// that ends up empty still carries its header.
pub fn open_writer(path: &Path, delimiter: u8, header: &[&str]) -> Result<Writer<File>> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    Ok(writer)
}

pub fn open_reader(path: &Path, delimiter: u8) -> Result<Reader<File>> {
    Ok(ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?)
}

/// Reads back the divisions table written by the extractor pipeline.
pub fn read_divisions(path: &Path, delimiter: u8) -> Result<Vec<DivisionRecord>> {
    let mut reader = open_reader(path, delimiter)?;
    let mut divisions = Vec::new();
    for division in reader.deserialize() {
        divisions.push(division?);
    }

    Ok(divisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::record::{DivisionRecord, SubdivisionRecord, DIVISIONS_HEADER, SUBDIVISIONS_HEADER};

    fn division() -> DivisionRecord {
        DivisionRecord {
            country_code: "US".to_string(),
            division_code: "CA".to_string(),
            name: "California".to_string(),
            display_name: "California".to_string(),
            wikipedia_url: "https://en.wikipedia.org/wiki/California".to_string(),
            division_type: "state".to_string(),
        }
    }

    #[test]
    fn division_rows_round_trip_through_semicolon_csv() {
        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(DIVISIONS_HEADER).unwrap();
        writer.serialize(division()).unwrap();
        let bytes = writer.into_inner().unwrap();

        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("ISO-3166-1;ISO-3166-2;Name1;Name2;Wikipedia;Type\n"));

        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(bytes.as_slice());
        let parsed: Vec<DivisionRecord> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(parsed, vec![division()]);
    }

    #[test]
    fn subdivision_rows_round_trip_through_semicolon_csv() {
        let subdivision = SubdivisionRecord {
            country_code: "GB".to_string(),
            subdivision_code: "BKM".to_string(),
            parent_code: "ENG".to_string(),
            name: "Buckinghamshire".to_string(),
            display_name: "Buckinghamshire".to_string(),
            wikipedia_url: "https://en.wikipedia.org/wiki/Buckinghamshire".to_string(),
            subdivision_type: "county".to_string(),
        };

        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(SUBDIVISIONS_HEADER).unwrap();
        writer.serialize(subdivision.clone()).unwrap();
        let bytes = writer.into_inner().unwrap();

        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(bytes.as_slice());
        let parsed: Vec<SubdivisionRecord> = reader
            .deserialize()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(parsed, vec![subdivision]);
    }
}
