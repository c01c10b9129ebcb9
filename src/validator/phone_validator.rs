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

use std::{collections::BTreeMap, sync::Arc};

use log::trace;

use crate::{
    i18n::RegionCode,
    interfaces::NumberingPlan,
    metadata::{CountryMetadata, LengthRule},
    numbering_plan::LibPhoneNumberPlan,
    string_util::normalize,
};

use super::{
    duplicate_code::detect_duplicate_dial_code,
    enums::NumberFormat,
    errors::{MetadataError, ValidationError},
    length_validator::validate_length,
    repeated_digits::detect_repeated_digits,
    toll_free,
    verdicts::{
        CompositeVerdict, DuplicateCodeVerdict, FormattedNumber, LengthVerdict, TollFreeVerdict,
    },
};

/// Runs every rule check against phone numbers and merges the results.
///
/// Holds no per-call state: the same input always yields the same verdict,
/// and a shared reference can be used from several threads as long as the
/// numbering plan allows it.
pub struct PhoneValidator<P: NumberingPlan = LibPhoneNumberPlan> {
    plan: P,
    metadata: Arc<CountryMetadata>,
}

impl Default for PhoneValidator<LibPhoneNumberPlan> {
    fn default() -> Self {
        Self::new(LibPhoneNumberPlan, Arc::new(CountryMetadata::builtin()))
    }
}

impl<P: NumberingPlan> PhoneValidator<P> {
    pub fn new(plan: P, metadata: Arc<CountryMetadata>) -> Self {
        Self { plan, metadata }
    }

    pub fn plan(&self) -> &P {
        &self.plan
    }

    pub fn metadata(&self) -> &CountryMetadata {
        &self.metadata
    }

    /// Validates a single number. `region_hint` is only used when the
    /// number itself does not identify a region.
    ///
    /// Every outcome, including empty or unparseable input, is returned as
    /// data inside the verdict.
    pub fn validate(&self, raw: &str, region_hint: Option<&str>) -> CompositeVerdict {
        let normalized = match normalize(raw) {
            Ok(normalized) => normalized,
            Err(err) => {
                trace!("Rejecting empty input {raw:?}");
                return CompositeVerdict::failed(raw, err.into());
            }
        };
        let region_hint = region_hint.and_then(RegionCode::normalize);

        let number = match self.plan.parse(&normalized.parse_ready, region_hint.as_deref()) {
            Ok(number) => number,
            Err(err) => {
                trace!("Could not parse '{}': {err}", normalized.parse_ready);
                return CompositeVerdict::failed(raw, ValidationError::ParseFailure(err));
            }
        };

        let is_structurally_valid = self.plan.is_valid_number(&number);
        let region_code = self
            .plan
            .region_code_for(&number)
            .and_then(|region| RegionCode::normalize(&region))
            .or(region_hint);
        trace!(
            "Parsed '{}': region {region_code:?}, valid {is_structurally_valid}",
            normalized.parse_ready
        );

        let length = validate_length(
            &normalized.digits,
            region_code.as_deref(),
            &self.metadata.lengths,
        );
        let toll_free = toll_free::classify_parsed(&self.plan, &number, is_structurally_valid);
        let duplicate = detect_duplicate_dial_code(
            &normalized.digits,
            region_code.as_deref(),
            &self.metadata.dial_codes,
        );
        let repeated_digits = detect_repeated_digits(&normalized.digits);

        let formats = FormattedNumber {
            e164: self.plan.format(&number, NumberFormat::E164),
            international: self.plan.format(&number, NumberFormat::International),
            national: self.plan.format(&number, NumberFormat::National),
        };

        let length = Ok(length);
        let duplicate = Ok(duplicate);
        let overall_valid = CompositeVerdict::overall_valid(&length, &duplicate);

        CompositeVerdict {
            original: raw.to_owned(),
            is_structurally_valid,
            region_code,
            country_calling_code: Some(self.plan.country_calling_code(&number)),
            national_significant_number: Some(self.plan.national_significant_number(&number)),
            formats: Some(formats),
            length,
            toll_free: Ok(toll_free),
            duplicate,
            repeated_digits: Ok(repeated_digits),
            overall_valid,
        }
    }

    /// Validates each line in order. Lines are trimmed and blank ones are
    /// skipped before counting; a failing line never aborts the batch.
    pub fn validate_all<I, S>(&self, lines: I) -> Vec<CompositeVerdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let verdicts: Vec<CompositeVerdict> = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                (!line.is_empty()).then(|| self.validate(line, None))
            })
            .collect();
        trace!("Validated batch of {} numbers", verdicts.len());
        verdicts
    }

    /// Validates pasted text, one number per line.
    pub fn validate_text(&self, text: &str) -> Vec<CompositeVerdict> {
        self.validate_all(text.lines())
    }

    pub fn validate_length(&self, digits: &str, region_code: Option<&str>) -> LengthVerdict {
        validate_length(digits, region_code, &self.metadata.lengths)
    }

    pub fn classify_toll_free(&self, raw: &str, region_hint: Option<&str>) -> TollFreeVerdict {
        toll_free::classify_toll_free(&self.plan, raw, region_hint)
    }

    pub fn detect_duplicate_dial_code(
        &self,
        input: &str,
        region_code: Option<&str>,
    ) -> DuplicateCodeVerdict {
        detect_duplicate_dial_code(input, region_code, &self.metadata.dial_codes)
    }

    /// Adds or replaces the length rule of a region. Meant for setup, not
    /// for use while a batch is running.
    pub fn set_length_rule(&self, region_code: &str, min: u32, max: u32) -> Result<(), MetadataError> {
        self.metadata
            .lengths
            .insert(region_code, LengthRule::new(min, max)?)?;
        Ok(())
    }

    pub fn get_length_rule(&self, region_code: &str) -> Option<LengthRule> {
        self.metadata.lengths.get(region_code)
    }

    pub fn list_length_rules(&self) -> BTreeMap<String, LengthRule> {
        self.metadata.lengths.snapshot()
    }

    pub fn get_dial_code(&self, region_code: &str) -> Option<String> {
        self.metadata.dial_codes.get(region_code)
    }

    pub fn set_dial_code(&self, region_code: &str, dial_code: &str) -> Result<(), MetadataError> {
        self.metadata.dial_codes.insert(region_code, dial_code)?;
        Ok(())
    }

    pub fn list_dial_codes(&self) -> BTreeMap<String, String> {
        self.metadata.dial_codes.snapshot()
    }
}
