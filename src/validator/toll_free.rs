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

use log::{trace, warn};

use crate::{interfaces::NumberingPlan, i18n::RegionCode, string_util::normalize};

use super::{
    enums::NumberType,
    errors::ValidationError,
    verdicts::TollFreeVerdict,
};

/// Digits of the national significant number reported as the matched prefix.
const TOLL_FREE_PREFIX_LENGTH: usize = 4;

/// Parses `raw` with the numbering plan and reports whether it is a
/// toll-free number. Never fails: unparseable or invalid input yields a
/// non-toll-free verdict explaining why.
pub fn classify_toll_free<P: NumberingPlan>(
    plan: &P,
    raw: &str,
    region_hint: Option<&str>,
) -> TollFreeVerdict {
    let normalized = match normalize(raw) {
        Ok(normalized) => normalized,
        Err(err) => return TollFreeVerdict::not_classified(ValidationError::from(err).to_string()),
    };
    let region_hint = region_hint.and_then(RegionCode::normalize);
    match plan.parse(&normalized.parse_ready, region_hint.as_deref()) {
        Ok(number) => {
            let is_valid = plan.is_valid_number(&number);
            classify_parsed(plan, &number, is_valid)
        }
        Err(err) => TollFreeVerdict::not_classified(ValidationError::from(err).to_string()),
    }
}

/// Toll-free status of an already parsed number. The decision is exactly
/// the numbering plan's classification.
pub(crate) fn classify_parsed<P: NumberingPlan>(
    plan: &P,
    number: &P::Number,
    is_valid: bool,
) -> TollFreeVerdict {
    if !is_valid {
        return TollFreeVerdict::not_classified(
            "Number is not structurally valid, toll-free status not determined".to_owned(),
        );
    }

    let number_type = match plan.number_type(number) {
        Ok(number_type) => number_type,
        Err(err) => {
            warn!("Number type classification failed: {err}");
            return TollFreeVerdict::not_classified(
                fast_cat::concat_str!("Toll-free check failed: ", &err.to_string()),
            );
        }
    };

    if number_type != NumberType::TollFree {
        return TollFreeVerdict {
            is_toll_free: false,
            matched_prefix: None,
            number_type: Some(number_type),
            message: fast_cat::concat_str!("Not a toll-free number (", number_type.as_str(), ")"),
        };
    }

    let nsn = plan.national_significant_number(number);
    let prefix: String = nsn.chars().take(TOLL_FREE_PREFIX_LENGTH).collect();
    trace!("Number with national number '{nsn}' is toll-free");
    TollFreeVerdict {
        is_toll_free: true,
        message: fast_cat::concat_str!("Toll-free number (prefix ", &prefix, ")"),
        matched_prefix: Some(prefix),
        number_type: Some(number_type),
    }
}
