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

use crate::metadata::LengthRule;

use super::{
    enums::{LengthMatch, NumberType},
    errors::ValidationError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthVerdict {
    pub matched: LengthMatch,
    pub actual_length: usize,
    /// Configured bounds, absent when the region has no rule.
    pub expected_range: Option<LengthRule>,
    pub message: String,
}

impl LengthVerdict {
    /// Raw `(min, max)` tuple for programmatic consumers.
    pub fn expected_tuple(&self) -> Option<(u32, u32)> {
        self.expected_range.map(|rule| rule.as_tuple())
    }

    /// Text form safe for CSV and spreadsheet exports, e.g. `"10 to 11"`.
    pub fn expected_range_text(&self) -> Option<String> {
        self.expected_range.map(|rule| rule.to_range_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TollFreeVerdict {
    pub is_toll_free: bool,
    /// Leading digits of the national significant number. Informational.
    pub matched_prefix: Option<String>,
    /// Classification reported by the numbering plan, when it produced one.
    pub number_type: Option<NumberType>,
    pub message: String,
}

impl TollFreeVerdict {
    pub(crate) fn not_classified(message: String) -> Self {
        Self {
            is_toll_free: false,
            matched_prefix: None,
            number_type: None,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateCodeVerdict {
    pub has_duplicate: bool,
    pub dial_code: Option<String>,
    /// The doubled dial code found at the start of the digits.
    pub detected_pattern: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedDigitsVerdict {
    pub has_pattern: bool,
    /// The repeated tail, e.g. `"11111"`.
    pub pattern: Option<String>,
    pub message: String,
}

/// Renderings of a parsed number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedNumber {
    pub e164: String,
    pub international: String,
    pub national: String,
}

/// Everything known about one input after all rule checks ran.
///
/// A failed parse is represented here, never raised: every check then holds
/// the same [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeVerdict {
    /// The input exactly as received.
    pub original: String,
    pub is_structurally_valid: bool,
    /// Region resolved by the numbering plan, or the hint it fell back to.
    pub region_code: Option<String>,
    pub country_calling_code: Option<u16>,
    pub national_significant_number: Option<String>,
    pub formats: Option<FormattedNumber>,
    pub length: Result<LengthVerdict, ValidationError>,
    pub toll_free: Result<TollFreeVerdict, ValidationError>,
    pub duplicate: Result<DuplicateCodeVerdict, ValidationError>,
    pub repeated_digits: Result<RepeatedDigitsVerdict, ValidationError>,
    /// Length matched and no duplicated dial code. Structural validity and
    /// toll-free status do not take part.
    pub overall_valid: bool,
}

impl CompositeVerdict {
    pub(crate) fn failed(original: &str, error: ValidationError) -> Self {
        Self {
            original: original.to_owned(),
            is_structurally_valid: false,
            region_code: None,
            country_calling_code: None,
            national_significant_number: None,
            formats: None,
            length: Err(error.clone()),
            toll_free: Err(error.clone()),
            duplicate: Err(error.clone()),
            repeated_digits: Err(error),
            overall_valid: false,
        }
    }

    pub(crate) fn overall_valid(
        length: &Result<LengthVerdict, ValidationError>,
        duplicate: &Result<DuplicateCodeVerdict, ValidationError>,
    ) -> bool {
        let length_matched = matches!(length, Ok(verdict) if verdict.matched.is_matched());
        let no_duplicate = matches!(duplicate, Ok(verdict) if !verdict.has_duplicate);
        length_matched && no_duplicate
    }

    /// The failure that prevented the checks from running, if any.
    pub fn error(&self) -> Option<&ValidationError> {
        self.length.as_ref().err()
    }

    pub fn is_length_valid(&self) -> bool {
        matches!(&self.length, Ok(verdict) if verdict.matched.is_matched())
    }

    pub fn is_toll_free(&self) -> bool {
        matches!(&self.toll_free, Ok(verdict) if verdict.is_toll_free)
    }

    pub fn has_duplicate_dial_code(&self) -> bool {
        matches!(&self.duplicate, Ok(verdict) if verdict.has_duplicate)
    }

    pub fn has_repeated_digits(&self) -> bool {
        matches!(&self.repeated_digits, Ok(verdict) if verdict.has_pattern)
    }
}
