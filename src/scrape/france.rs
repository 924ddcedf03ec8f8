use crate::scrape::record::DivisionRecord;

/// Metropolitan regions of France after the January 1, 2016 reform. The
/// detail page for France is not scraped for divisions; these rows are
/// appended to the divisions output instead.
const FRANCE_REGIONS: [(&str, &str, Option<&str>, &str); 13] = [
    (
        "ARA",
        "Auvergne-Rhône-Alpes",
        None,
        "https://fr.wikipedia.org/wiki/Auvergne-Rh%C3%B4ne-Alpes",
    ),
    (
        "BFC",
        "Bourgogne-Franche-Comté",
        None,
        "https://fr.wikipedia.org/wiki/Bourgogne-Franche-Comt%C3%A9",
    ),
    ("BRE", "Bretagne", None, "https://fr.wikipedia.org/wiki/Bretagne"),
    (
        "CVL",
        "Centre-Val de Loire",
        None,
        "https://fr.wikipedia.org/wiki/Centre-Val_de_Loire",
    ),
    ("COR", "Corse", None, "https://fr.wikipedia.org/wiki/Corse"),
    ("GES", "Grand Est", None, "https://fr.wikipedia.org/wiki/Grand_Est"),
    (
        "HDF",
        "Hauts-de-France",
        None,
        "https://fr.wikipedia.org/wiki/Hauts-de-France",
    ),
    (
        "IDF",
        "Île-de-France",
        None,
        "https://fr.wikipedia.org/wiki/%C3%8Ele-de-France",
    ),
    ("NOR", "Normandie", None, "https://fr.wikipedia.org/wiki/Normandie"),
    (
        "NAQ",
        "Nouvelle-Aquitaine",
        None,
        "https://fr.wikipedia.org/wiki/Nouvelle-Aquitaine",
    ),
    (
        "OCC",
        "Occitanie (région administrative)",
        Some("Occitanie"),
        "https://fr.wikipedia.org/wiki/Occitanie_(r%C3%A9gion_administrative)",
    ),
    (
        "PDL",
        "Pays de la Loire",
        None,
        "https://fr.wikipedia.org/wiki/Pays_de_la_Loire",
    ),
    (
        "PAC",
        "Provence-Alpes-Côte d'Azur",
        None,
        "https://fr.wikipedia.org/wiki/Provence-Alpes-C%C3%B4te_d%27Azur",
    ),
];

pub fn france_divisions() -> Vec<DivisionRecord> {
    FRANCE_REGIONS
        .iter()
        .map(|(code, name, display_name, url)| DivisionRecord {
            country_code: "FR".to_string(),
            division_code: code.to_string(),
            name: name.to_string(),
            display_name: display_name.unwrap_or(name).to_string(),
            wikipedia_url: url.to_string(),
            division_type: "metropolitan region".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_regions_with_display_name_defaulting() {
        let divisions = france_divisions();
        assert_eq!(divisions.len(), 13);
        assert!(divisions
            .iter()
            .all(|d| d.country_code == "FR" && d.division_type == "metropolitan region"));

        let bretagne = divisions.iter().find(|d| d.division_code == "BRE").unwrap();
        assert_eq!(bretagne.display_name, bretagne.name);

        let occitanie = divisions.iter().find(|d| d.division_code == "OCC").unwrap();
        assert_eq!(occitanie.name, "Occitanie (région administrative)");
        assert_eq!(occitanie.display_name, "Occitanie");
    }
}
