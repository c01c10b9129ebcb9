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

use crate::{i18n::RegionCode, metadata::DialCodeTable, string_util::digits_only};

use super::verdicts::DuplicateCodeVerdict;

/// Detects the region's dial code written twice at the start of the number,
/// e.g. `+4949...` for Germany. Typical of a country code prepended to a
/// number that already carried one.
///
/// Purely syntactic: the remainder is not checked for plausibility.
pub fn detect_duplicate_dial_code(
    input: &str,
    region_code: Option<&str>,
    dial_codes: &DialCodeTable,
) -> DuplicateCodeVerdict {
    let Some(region) = region_code.and_then(RegionCode::normalize) else {
        return DuplicateCodeVerdict {
            has_duplicate: false,
            dial_code: None,
            detected_pattern: None,
            message: "No region resolved, duplicate dial code not checked".to_owned(),
        };
    };
    let Some(dial_code) = dial_codes.get(&region) else {
        trace!("Region {region} missing from dial code table");
        return DuplicateCodeVerdict {
            has_duplicate: false,
            dial_code: None,
            detected_pattern: None,
            message: fast_cat::concat_str!("Dial code unknown for region ", &region),
        };
    };

    let digits = digits_only(input);
    let doubled = fast_cat::concat_str!(&dial_code, &dial_code);
    if digits.starts_with(&doubled) {
        trace!("Duplicated dial code {dial_code} in '{digits}'");
        let message = fast_cat::concat_str!(
            "Country code +",
            &dial_code,
            " appears twice (",
            &doubled,
            "...)"
        );
        DuplicateCodeVerdict {
            has_duplicate: true,
            dial_code: Some(dial_code),
            detected_pattern: Some(doubled),
            message,
        }
    } else {
        DuplicateCodeVerdict {
            has_duplicate: false,
            dial_code: Some(dial_code),
            detected_pattern: None,
            message: "No duplicated country code".to_owned(),
        }
    }
}
