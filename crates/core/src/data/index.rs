//! Lookup index over the loaded data set.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::error::DataError;
use super::raw::{RawDataset, RawStats};
use super::record::{LocationRecord, Metric};
use crate::color::Domain;

/// Immutable index of country records and their cities.
///
/// Country codes are stored upper-cased. City and name lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct DataIndex {
    locations: BTreeMap<String, LocationRecord>,
    cities: BTreeMap<String, BTreeMap<String, LocationRecord>>,
    names: HashMap<String, String>,
}

impl DataIndex {
    /// Builds the index from a parsed data set.
    ///
    /// Any supplied `Total_Expenses` is discarded in favour of the sum of
    /// categories.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCode` when two codes collide after upper-casing and
    /// `NegativeValue` for negative statistics.
    pub fn from_raw(raw: &RawDataset) -> Result<Self, DataError> {
        let mut index = Self::default();

        for (code, country) in raw {
            let code = code.trim().to_uppercase();
            let record = Self::record_from_stats(&code, &country.country_name, &country.country)?;
            index.insert(record)?;

            let mut cities = BTreeMap::new();
            for (city, stats) in &country.cities {
                let city_code = format!("{code}/{city}");
                let record = Self::record_from_stats(&city_code, city, stats)?;
                if cities.insert(city.to_lowercase(), record).is_some() {
                    return Err(DataError::DuplicateCode(city_code));
                }
            }
            if !cities.is_empty() {
                index.cities.insert(code, cities);
            }
        }

        Ok(index)
    }

    /// Builds a country-level index from already validated records.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCode` if two records share a code.
    pub fn from_records(
        records: impl IntoIterator<Item = LocationRecord>,
    ) -> Result<Self, DataError> {
        let mut index = Self::default();
        for record in records {
            index.insert(record)?;
        }
        Ok(index)
    }

    fn record_from_stats(
        code: &str,
        name: &str,
        stats: &RawStats,
    ) -> Result<LocationRecord, DataError> {
        let record = LocationRecord::new(
            code,
            name,
            stats.net_salary,
            stats.category_expenses(),
        )?;

        if let Some(supplied) = stats.total_expenses
            && record.total_expenses != Some(supplied)
        {
            debug!(
                code,
                %supplied,
                derived = ?record.total_expenses,
                "Discarding supplied total expenses"
            );
        }

        Ok(record)
    }

    fn insert(&mut self, record: LocationRecord) -> Result<(), DataError> {
        if self.locations.contains_key(&record.code) {
            return Err(DataError::DuplicateCode(record.code));
        }
        self.names
            .entry(record.display_name.to_lowercase())
            .or_insert_with(|| record.code.clone());
        self.locations.insert(record.code.clone(), record);
        Ok(())
    }

    /// Number of country records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if no country is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterates over country records in code order.
    pub fn iter(&self) -> impl Iterator<Item = &LocationRecord> {
        self.locations.values()
    }

    /// Looks up a country by code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if the code is not indexed.
    pub fn get(&self, code: &str) -> Result<&LocationRecord, DataError> {
        self.locations
            .get(code)
            .or_else(|| self.locations.get(&code.trim().to_uppercase()))
            .ok_or_else(|| DataError::UnknownLocation(code.to_string()))
    }

    /// Looks up a country by display name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if no country has that name.
    pub fn by_name(&self, name: &str) -> Result<&LocationRecord, DataError> {
        self.names
            .get(&name.trim().to_lowercase())
            .and_then(|code| self.locations.get(code))
            .ok_or_else(|| DataError::UnknownLocation(name.to_string()))
    }

    /// Looks up a country by code, falling back to display name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if neither matches.
    pub fn resolve(&self, code_or_name: &str) -> Result<&LocationRecord, DataError> {
        self.get(code_or_name)
            .or_else(|_| self.by_name(code_or_name))
    }

    /// Looks up a city of a country.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if the country or the city is unknown.
    pub fn city(&self, code: &str, city: &str) -> Result<&LocationRecord, DataError> {
        let country = self.get(code)?;
        self.cities
            .get(&country.code)
            .and_then(|cities| cities.get(&city.trim().to_lowercase()))
            .ok_or_else(|| DataError::UnknownLocation(format!("{}/{city}", country.code)))
    }

    /// City records of a country, ordered by city name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLocation` if the country is unknown.
    pub fn cities(&self, code: &str) -> Result<Vec<&LocationRecord>, DataError> {
        let country = self.get(code)?;
        Ok(self
            .cities
            .get(&country.code)
            .map(|cities| cities.values().collect())
            .unwrap_or_default())
    }

    /// Countries whose display name contains `term`, ignoring case, sorted
    /// by name. An empty term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&LocationRecord> {
        let needle = term.trim().to_lowercase();
        let mut matches: Vec<_> = self
            .locations
            .values()
            .filter(|record| record.display_name.to_lowercase().contains(&needle))
            .collect();
        Self::sort_by_name(&mut matches);
        matches
    }

    /// Countries that have data for `metric`, sorted by name.
    #[must_use]
    pub fn with_metric(&self, metric: Metric) -> Vec<&LocationRecord> {
        let mut matches: Vec<_> = self
            .locations
            .values()
            .filter(|record| metric.value_of(record).is_some())
            .collect();
        Self::sort_by_name(&mut matches);
        matches
    }

    /// Minimum and maximum of `metric` over countries with data.
    ///
    /// # Errors
    ///
    /// Returns `NoData` if no country has a value for the metric.
    pub fn domain(&self, metric: Metric) -> Result<Domain, DataError> {
        Domain::from_values(self.locations.values().map(|record| metric.value_of(record)))
            .ok_or_else(|| DataError::NoData(metric.to_string()))
    }

    fn sort_by_name(records: &mut [&LocationRecord]) {
        records.sort_by_cached_key(|record| (record.display_name.to_lowercase(), record.code.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, RawCountry};
    use rust_decimal_macros::dec;

    fn dataset() -> RawDataset {
        serde_json::from_str(
            r#"{
                "SWE": {
                    "country_name": "Sweden",
                    "country": {
                        "Net_Salary": 5000, "Markets": 300, "Clothing_And_Shoes": 100,
                        "Rent_Per_Month": 400, "Restaurants": 120, "Public_Transportation": 50,
                        "Utilities": 100, "Sports_And_Leisure": 50, "Total_Expenses": 9999
                    },
                    "cities": { "Stockholm": { "Rent_Per_Month": 900 } }
                },
                "usa": {
                    "country_name": "United States",
                    "country": { "Net_Salary": 6000, "Rent_Per_Month": 1500 }
                },
                "AFG": { "country_name": "Afghanistan" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_by_code_and_name() {
        let index = DataIndex::from_raw(&dataset()).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get("SWE").unwrap().display_name, "Sweden");
        assert_eq!(index.get("usa").unwrap().code, "USA");
        assert_eq!(index.by_name("united states").unwrap().code, "USA");
        assert_eq!(index.resolve("Sweden").unwrap().code, "SWE");
        assert!(matches!(
            index.get("XXX"),
            Err(DataError::UnknownLocation(code)) if code == "XXX"
        ));
    }

    #[test]
    fn test_supplied_total_is_replaced() {
        let index = DataIndex::from_raw(&dataset()).unwrap();
        assert_eq!(index.get("SWE").unwrap().total_expenses, Some(dec!(1120)));
    }

    #[test]
    fn test_city_lookup() {
        let index = DataIndex::from_raw(&dataset()).unwrap();

        let stockholm = index.city("swe", "STOCKHOLM").unwrap();
        assert_eq!(stockholm.code, "SWE/Stockholm");
        assert_eq!(stockholm.expense(Category::Rent), Some(dec!(900)));
        assert_eq!(index.cities("SWE").unwrap().len(), 1);
        assert!(index.cities("AFG").unwrap().is_empty());
        assert!(index.city("SWE", "Malmo").is_err());
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let mut raw = dataset();
        raw.insert("swe".to_string(), RawCountry::default());
        assert!(matches!(
            DataIndex::from_raw(&raw),
            Err(DataError::DuplicateCode(code)) if code == "SWE"
        ));
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let index = DataIndex::from_raw(&dataset()).unwrap();

        let names: Vec<_> = index.search("E").iter().map(|r| r.code.as_str()).collect();
        assert_eq!(names, vec!["SWE", "USA"]);
        assert_eq!(index.search("").len(), 3);
        assert!(index.search("narnia").is_empty());
    }

    #[test]
    fn test_domain_ignores_absent_values() {
        let index = DataIndex::from_raw(&dataset()).unwrap();

        let salary = index.domain(Metric::NetSalary).unwrap();
        assert_eq!((salary.min, salary.max), (dec!(5000), dec!(6000)));

        let rent = index.domain(Metric::Category(Category::Rent)).unwrap();
        assert_eq!((rent.min, rent.max), (dec!(400), dec!(1500)));

        assert_eq!(index.with_metric(Metric::TotalExpenses).len(), 1);
    }

    #[test]
    fn test_domain_without_data_is_error() {
        let index = DataIndex::from_raw(&RawDataset::new()).unwrap();
        assert!(matches!(
            index.domain(Metric::Savings),
            Err(DataError::NoData(_))
        ));
    }
}
