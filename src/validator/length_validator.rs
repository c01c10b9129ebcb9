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

use log::trace;

use crate::{i18n::RegionCode, metadata::LengthRuleTable};

use super::{enums::LengthMatch, verdicts::LengthVerdict};

const LENGTH_NOT_DEFINED: &str = "Length not pre-defined for this region";

/// Compares the digit count of `digits` against the rule of `region_code`.
///
/// A missing region or a region without a rule is not an error: the verdict
/// is [`LengthMatch::Unknown`] without an expected range.
pub fn validate_length(
    digits: &str,
    region_code: Option<&str>,
    rules: &LengthRuleTable,
) -> LengthVerdict {
    let actual_length = digits.bytes().filter(u8::is_ascii_digit).count();
    let rule = region_code
        .and_then(RegionCode::normalize)
        .and_then(|region| rules.get(&region));

    let Some(rule) = rule else {
        trace!("No length rule for region {region_code:?}");
        return LengthVerdict {
            matched: LengthMatch::Unknown,
            actual_length,
            expected_range: None,
            message: LENGTH_NOT_DEFINED.to_owned(),
        };
    };

    let mut buf = itoa::Buffer::new();
    let actual_length_str = buf.format(actual_length);
    let (matched, message) = if rule.contains(actual_length) {
        (
            LengthMatch::Matched,
            fast_cat::concat_str!("Length is valid (", actual_length_str, " digits)"),
        )
    } else {
        let range = rule.to_range_text();
        (
            LengthMatch::NotMatched,
            fast_cat::concat_str!(
                "Invalid length as per country format (",
                actual_length_str,
                " digits, expected ",
                &range,
                ")"
            ),
        )
    };
    trace!("Length {actual_length} against {rule} for {region_code:?}: {matched:?}");

    LengthVerdict {
        matched,
        actual_length,
        expected_range: Some(rule),
        message,
    }
}
