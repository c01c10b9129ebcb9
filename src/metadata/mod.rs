// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod country_lengths;
mod dial_codes;

use std::{collections::BTreeMap, fmt};

use dashmap::DashMap;
use log::trace;

use crate::{i18n::RegionCode, validator::errors::MetadataError};

/// Inclusive digit-count bounds for a region. `0 < min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRule {
    min: u32,
    max: u32,
}

impl LengthRule {
    pub fn new(min: u32, max: u32) -> Result<Self, MetadataError> {
        if min == 0 || max == 0 {
            return Err(MetadataError::ZeroLength);
        }
        if min > max {
            return Err(MetadataError::MinGreaterThanMax { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub const fn as_tuple(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn contains(&self, length: usize) -> bool {
        self.min as usize <= length && length <= self.max as usize
    }

    /// Spreadsheet-safe rendering, e.g. `"10 to 11"`. A bare `10-11` would
    /// be read back as a date by spreadsheet programs.
    pub fn to_range_text(&self) -> String {
        let mut min_buf = itoa::Buffer::new();
        let min = min_buf.format(self.min);
        let mut max_buf = itoa::Buffer::new();
        let max = max_buf.format(self.max);
        fast_cat::concat_str!(min, " to ", max)
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

fn table_key(region_code: &str) -> Result<String, MetadataError> {
    RegionCode::normalize(region_code)
        .filter(|region| RegionCode::is_well_formed(region))
        .ok_or_else(|| MetadataError::InvalidRegionCode(region_code.to_owned()))
}

/// Region code -> [`LengthRule`]. Grows by insert-or-update, never shrinks.
#[derive(Debug, Default)]
pub struct LengthRuleTable {
    rules: DashMap<String, LengthRule>,
}

impl LengthRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table loaded with the compiled-in country lengths.
    pub fn builtin() -> Self {
        let rules = DashMap::with_capacity(country_lengths::COUNTRY_PHONE_LENGTHS.len());
        for &(region, min, max) in country_lengths::COUNTRY_PHONE_LENGTHS {
            rules.insert(region.to_owned(), LengthRule { min, max });
        }
        Self { rules }
    }

    /// Looks the region up case-insensitively.
    pub fn get(&self, region_code: &str) -> Option<LengthRule> {
        let key = RegionCode::normalize(region_code)?;
        self.rules.get(&key).map(|rule| *rule.value())
    }

    /// Inserts or replaces the rule of a region, returning the previous one.
    pub fn insert(
        &self,
        region_code: &str,
        rule: LengthRule,
    ) -> Result<Option<LengthRule>, MetadataError> {
        let key = table_key(region_code)?;
        trace!("Setting length rule {key}: {rule}");
        Ok(self.rules.insert(key, rule))
    }

    /// Copy of the whole table, ordered by region code.
    pub fn snapshot(&self) -> BTreeMap<String, LengthRule> {
        self.rules
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Region code -> international dial code (digits only, e.g. `"44"`).
#[derive(Debug, Default)]
pub struct DialCodeTable {
    codes: DashMap<String, String>,
}

impl DialCodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let codes = DashMap::with_capacity(dial_codes::DIAL_CODES.len());
        for &(region, code) in dial_codes::DIAL_CODES {
            codes.insert(region.to_owned(), code.to_owned());
        }
        Self { codes }
    }

    pub fn get(&self, region_code: &str) -> Option<String> {
        let key = RegionCode::normalize(region_code)?;
        self.codes.get(&key).map(|code| code.value().clone())
    }

    pub fn insert(&self, region_code: &str, dial_code: &str) -> Result<Option<String>, MetadataError> {
        let key = table_key(region_code)?;
        let dial_code = dial_code.trim().trim_start_matches('+');
        if dial_code.is_empty() || dial_code.len() > 3 || !dial_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MetadataError::InvalidDialCode(dial_code.to_owned()));
        }
        trace!("Setting dial code {key}: {dial_code}");
        Ok(self.codes.insert(key, dial_code.to_owned()))
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.codes
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Both country tables, injected into the validator at construction.
///
/// The two tables are independent: a region may be known to one and not
/// the other.
#[derive(Debug, Default)]
pub struct CountryMetadata {
    pub lengths: LengthRuleTable,
    pub dial_codes: DialCodeTable,
}

impl CountryMetadata {
    pub fn builtin() -> Self {
        Self {
            lengths: LengthRuleTable::builtin(),
            dial_codes: DialCodeTable::builtin(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_length_rule(self, region_code: &str, min: u32, max: u32) -> Result<Self, MetadataError> {
        self.lengths.insert(region_code, LengthRule::new(min, max)?)?;
        Ok(self)
    }

    pub fn with_dial_code(self, region_code: &str, dial_code: &str) -> Result<Self, MetadataError> {
        self.dial_codes.insert(region_code, dial_code)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{CountryMetadata, DialCodeTable, LengthRule, LengthRuleTable};
    use crate::validator::errors::MetadataError;

    #[test]
    fn builtin_tables_are_loaded() {
        let lengths = LengthRuleTable::builtin();
        assert_eq!(lengths.len(), 84);
        assert_eq!(lengths.get("AU").map(|r| r.as_tuple()), Some((11, 11)));
        assert_eq!(lengths.get("de").map(|r| r.as_tuple()), Some((8, 15)));

        let dial_codes = DialCodeTable::builtin();
        assert_eq!(dial_codes.get("DE").as_deref(), Some("49"));
        assert_eq!(dial_codes.get("au").as_deref(), Some("61"));
    }

    #[test]
    fn every_length_region_has_a_dial_code() {
        let dial_codes = DialCodeTable::builtin();
        for region in LengthRuleTable::builtin().snapshot().keys() {
            assert!(dial_codes.get(region).is_some(), "missing dial code for {region}");
        }
    }

    #[test]
    fn dial_code_table_covers_regions_without_length_rules() {
        assert!(LengthRuleTable::builtin().get("RU").is_none());
        assert_eq!(DialCodeTable::builtin().get("RU").as_deref(), Some("7"));
    }

    #[test]
    fn length_rule_rejects_bad_bounds() {
        assert_eq!(LengthRule::new(0, 5), Err(MetadataError::ZeroLength));
        assert_eq!(
            LengthRule::new(12, 10),
            Err(MetadataError::MinGreaterThanMax { min: 12, max: 10 })
        );
        assert!(LengthRule::new(10, 10).is_ok());
    }

    #[test]
    fn range_text_is_not_a_bare_range() {
        let rule = LengthRule::new(10, 11).unwrap();
        assert_eq!(rule.to_range_text(), "10 to 11");
        assert_eq!(rule.to_string(), rule.to_range_text());
        assert!(rule.contains(10));
        assert!(rule.contains(11));
        assert!(!rule.contains(9));
        assert!(!rule.contains(12));
    }

    #[test]
    fn insert_updates_and_snapshot_is_a_copy() {
        let table = LengthRuleTable::builtin();
        let previous = table.insert("au", LengthRule::new(10, 12).unwrap()).unwrap();
        assert_eq!(previous.map(|r| r.as_tuple()), Some((11, 11)));

        let mut snapshot = table.snapshot();
        assert_eq!(snapshot.get("AU").map(|r| r.as_tuple()), Some((10, 12)));
        snapshot.clear();
        assert_eq!(table.len(), 84);
    }

    #[test]
    fn insert_rejects_malformed_regions() {
        let table = LengthRuleTable::new();
        let rule = LengthRule::new(8, 9).unwrap();
        assert!(matches!(table.insert("", rule), Err(MetadataError::InvalidRegionCode(_))));
        assert!(matches!(table.insert("ZZ", rule), Err(MetadataError::InvalidRegionCode(_))));
        assert!(matches!(table.insert("ABC", rule), Err(MetadataError::InvalidRegionCode(_))));
        assert!(table.is_empty());
    }

    #[test]
    fn dial_code_insert_validates_digits() {
        let table = DialCodeTable::new();
        assert_eq!(table.insert("XK", "+383"), Ok(None));
        assert_eq!(table.get("XK").as_deref(), Some("383"));
        assert!(matches!(table.insert("XK", "38a"), Err(MetadataError::InvalidDialCode(_))));
        assert!(matches!(table.insert("XK", "3834"), Err(MetadataError::InvalidDialCode(_))));
    }

    #[test]
    fn builders_produce_alternate_rule_sets() {
        let metadata = CountryMetadata::empty()
            .with_length_rule("AU", 11, 11)
            .unwrap()
            .with_dial_code("AU", "61")
            .unwrap();
        assert_eq!(metadata.lengths.len(), 1);
        assert_eq!(metadata.dial_codes.len(), 1);
        assert!(CountryMetadata::empty().with_length_rule("AU", 5, 4).is_err());
    }
}
