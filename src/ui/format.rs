//! Display formatting for country details. Missing data renders as "N/A".

use crate::country::types::CountryRecord;

pub const MISSING: &str = "N/A";

/// Insert thousands separators into a non-negative integer.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn population_text(country: &CountryRecord) -> String {
    country
        .population
        .map(group_thousands)
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn area_text(country: &CountryRecord) -> String {
    match country.area {
        Some(area) => format!("{} km\u{b2}", group_thousands(area.round() as u64)),
        None => MISSING.to_string(),
    }
}

pub fn capital_text(country: &CountryRecord) -> String {
    match &country.capital {
        Some(capitals) if !capitals.is_empty() => capitals.join(", "),
        _ => MISSING.to_string(),
    }
}

pub fn region_text(country: &CountryRecord) -> String {
    country
        .region
        .clone()
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn subregion_text(country: &CountryRecord) -> String {
    country
        .subregion
        .clone()
        .unwrap_or_else(|| MISSING.to_string())
}

/// Currencies as "Name (symbol)" pairs, symbol omitted when absent.
pub fn currencies_text(country: &CountryRecord) -> String {
    match &country.currencies {
        Some(currencies) if !currencies.is_empty() => currencies
            .values()
            .map(|c| match &c.symbol {
                Some(symbol) => format!("{} ({symbol})", c.name),
                None => c.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => MISSING.to_string(),
    }
}

pub fn languages_text(country: &CountryRecord) -> String {
    match &country.languages {
        Some(languages) if !languages.is_empty() => {
            languages.values().cloned().collect::<Vec<_>>().join(", ")
        }
        _ => MISSING.to_string(),
    }
}

pub fn borders_text(country: &CountryRecord) -> String {
    match &country.borders {
        Some(borders) if !borders.is_empty() => borders.join(", "),
        _ => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::types::{CountryName, Currency};
    use std::collections::BTreeMap;

    fn record(cca3: &str) -> CountryRecord {
        CountryRecord {
            cca3: cca3.to_string(),
            name: Some(CountryName {
                common: cca3.to_string(),
                official: cca3.to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(67_391_582), "67,391,582");
    }

    #[test]
    fn capital_joins_and_falls_back() {
        let mut france = record("FRA");
        france.capital = Some(vec!["Paris".to_string()]);
        assert_eq!(capital_text(&france), "Paris");

        let mut stateless = record("ATA");
        stateless.capital = Some(vec![]);
        assert_eq!(capital_text(&stateless), "N/A");
        stateless.capital = None;
        assert_eq!(capital_text(&stateless), "N/A");
    }

    #[test]
    fn currencies_include_symbols_when_present() {
        let mut country = record("FRA");
        let mut currencies = BTreeMap::new();
        currencies.insert(
            "EUR".to_string(),
            Currency {
                name: "Euro".to_string(),
                symbol: Some("\u{20ac}".to_string()),
            },
        );
        currencies.insert(
            "XTS".to_string(),
            Currency {
                name: "Test unit".to_string(),
                symbol: None,
            },
        );
        country.currencies = Some(currencies);
        assert_eq!(currencies_text(&country), "Euro (\u{20ac}), Test unit");
    }

    #[test]
    fn missing_fields_render_na() {
        let country = record("XXX");
        assert_eq!(population_text(&country), "N/A");
        assert_eq!(area_text(&country), "N/A");
        assert_eq!(region_text(&country), "N/A");
        assert_eq!(languages_text(&country), "N/A");
        assert_eq!(borders_text(&country), "N/A");
    }

    #[test]
    fn borders_join_and_fall_back() {
        let mut country = record("CHE");
        country.borders = Some(vec![
            "AUT".to_string(),
            "FRA".to_string(),
            "ITA".to_string(),
        ]);
        assert_eq!(borders_text(&country), "AUT, FRA, ITA");

        country.borders = Some(vec![]);
        assert_eq!(borders_text(&country), "N/A");
        country.borders = None;
        assert_eq!(borders_text(&country), "N/A");
    }

    #[test]
    fn area_rounds_and_groups() {
        let mut country = record("FRA");
        country.area = Some(551_695.4);
        assert_eq!(area_text(&country), "551,695 km\u{b2}");
    }
}
