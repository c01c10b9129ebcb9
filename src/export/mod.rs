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

//! Flattening of verdicts into tabular rows for CSV, spreadsheet and JSON
//! writers owned by the caller.

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::validator::verdicts::CompositeVerdict;

/// Export columns, in output order. The snake_case names are stable.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Original,
    StructurallyValid,
    RegionCode,
    CountryCallingCode,
    E164,
    International,
    National,
    NumberType,
    LengthValid,
    ActualLength,
    ExpectedRange,
    LengthMessage,
    TollFree,
    TollFreePrefix,
    TollFreeMessage,
    DuplicateCode,
    DialCode,
    DuplicatePattern,
    DuplicateMessage,
    PatternWarning,
    OverallValid,
    Error,
}

impl Column {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Header row for CSV writers.
    pub fn header() -> Vec<&'static str> {
        Column::iter().map(|column| column.name()).collect()
    }
}

/// One verdict as a flat record. Field names match [`Column`] names.
///
/// `expected_range` holds the text form (`"10 to 11"`) so spreadsheet
/// programs never reinterpret it as a date or a numeric range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictRow {
    pub original: String,
    pub structurally_valid: bool,
    pub region_code: String,
    pub country_calling_code: String,
    pub e164: String,
    pub international: String,
    pub national: String,
    pub number_type: String,
    /// `"true"`, `"false"`, `"unknown"` or `"error"`.
    pub length_valid: &'static str,
    pub actual_length: String,
    pub expected_range: String,
    pub length_message: String,
    pub toll_free: bool,
    pub toll_free_prefix: String,
    pub toll_free_message: String,
    pub duplicate_code: bool,
    pub dial_code: String,
    pub duplicate_pattern: String,
    pub duplicate_message: String,
    pub pattern_warning: String,
    pub overall_valid: bool,
    pub error: String,
}

const ERROR_STATUS: &str = "error";

fn bool_cell(value: bool) -> String {
    value.to_string()
}

impl From<&CompositeVerdict> for VerdictRow {
    fn from(verdict: &CompositeVerdict) -> Self {
        let error = verdict.error().map(ToString::to_string).unwrap_or_default();
        let formats = verdict.formats.as_ref();

        let mut row = VerdictRow {
            original: verdict.original.clone(),
            structurally_valid: verdict.is_structurally_valid,
            region_code: verdict.region_code.clone().unwrap_or_default(),
            country_calling_code: verdict
                .country_calling_code
                .map(|code| itoa::Buffer::new().format(code).to_owned())
                .unwrap_or_default(),
            e164: formats.map(|f| f.e164.clone()).unwrap_or_default(),
            international: formats.map(|f| f.international.clone()).unwrap_or_default(),
            national: formats.map(|f| f.national.clone()).unwrap_or_default(),
            number_type: String::new(),
            length_valid: ERROR_STATUS,
            actual_length: String::new(),
            expected_range: String::new(),
            length_message: error.clone(),
            toll_free: false,
            toll_free_prefix: String::new(),
            toll_free_message: error.clone(),
            duplicate_code: false,
            dial_code: String::new(),
            duplicate_pattern: String::new(),
            duplicate_message: error.clone(),
            pattern_warning: String::new(),
            overall_valid: verdict.overall_valid,
            error,
        };

        if let Ok(length) = &verdict.length {
            row.length_valid = length.matched.as_str();
            row.actual_length = itoa::Buffer::new().format(length.actual_length).to_owned();
            row.expected_range = length.expected_range_text().unwrap_or_default();
            row.length_message = length.message.clone();
        }
        if let Ok(toll_free) = &verdict.toll_free {
            row.number_type = toll_free
                .number_type
                .map(|number_type| number_type.as_str())
                .unwrap_or_default()
                .to_owned();
            row.toll_free = toll_free.is_toll_free;
            row.toll_free_prefix = toll_free.matched_prefix.clone().unwrap_or_default();
            row.toll_free_message = toll_free.message.clone();
        }
        if let Ok(duplicate) = &verdict.duplicate {
            row.duplicate_code = duplicate.has_duplicate;
            row.dial_code = duplicate.dial_code.clone().unwrap_or_default();
            row.duplicate_pattern = duplicate.detected_pattern.clone().unwrap_or_default();
            row.duplicate_message = duplicate.message.clone();
        }
        if let Ok(repeated) = &verdict.repeated_digits {
            row.pattern_warning = repeated.message.clone();
        }
        row
    }
}

impl VerdictRow {
    /// The row as text cells in [`Column`] order.
    pub fn cells(&self) -> Vec<String> {
        Column::iter().map(|column| self.cell(column)).collect()
    }

    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Original => self.original.clone(),
            Column::StructurallyValid => bool_cell(self.structurally_valid),
            Column::RegionCode => self.region_code.clone(),
            Column::CountryCallingCode => self.country_calling_code.clone(),
            Column::E164 => self.e164.clone(),
            Column::International => self.international.clone(),
            Column::National => self.national.clone(),
            Column::NumberType => self.number_type.clone(),
            Column::LengthValid => self.length_valid.to_owned(),
            Column::ActualLength => self.actual_length.clone(),
            Column::ExpectedRange => self.expected_range.clone(),
            Column::LengthMessage => self.length_message.clone(),
            Column::TollFree => bool_cell(self.toll_free),
            Column::TollFreePrefix => self.toll_free_prefix.clone(),
            Column::TollFreeMessage => self.toll_free_message.clone(),
            Column::DuplicateCode => bool_cell(self.duplicate_code),
            Column::DialCode => self.dial_code.clone(),
            Column::DuplicatePattern => self.duplicate_pattern.clone(),
            Column::DuplicateMessage => self.duplicate_message.clone(),
            Column::PatternWarning => self.pattern_warning.clone(),
            Column::OverallValid => bool_cell(self.overall_valid),
            Column::Error => self.error.clone(),
        }
    }
}

/// Counts over a batch of verdicts, computed by the caller after the batch
/// ran.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub structurally_valid: usize,
    pub length_valid: usize,
    pub toll_free: usize,
    pub duplicate_flagged: usize,
    pub repeated_digits_flagged: usize,
    pub overall_valid: usize,
    /// Verdicts that are not overall valid.
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_verdicts<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a CompositeVerdict>,
    {
        verdicts
            .into_iter()
            .fold(BatchSummary::default(), |mut summary, verdict| {
                summary.total += 1;
                summary.structurally_valid += usize::from(verdict.is_structurally_valid);
                summary.length_valid += usize::from(verdict.is_length_valid());
                summary.toll_free += usize::from(verdict.is_toll_free());
                summary.duplicate_flagged += usize::from(verdict.has_duplicate_dial_code());
                summary.repeated_digits_flagged += usize::from(verdict.has_repeated_digits());
                summary.overall_valid += usize::from(verdict.overall_valid);
                summary.invalid += usize::from(!verdict.overall_valid);
                summary
            })
    }
}
