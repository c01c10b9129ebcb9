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

use std::panic::{self, AssertUnwindSafe};

use log::warn;
use phonenumber::{country, metadata::DATABASE, Mode, PhoneNumber, Type};

use crate::{
    interfaces::NumberingPlan,
    string_util::PLUS_CHARS,
    validator::{
        enums::{NumberFormat, NumberType},
        errors::PlanError,
    },
};

/// [`NumberingPlan`] backed by the `phonenumber` crate and its compiled-in
/// libphonenumber metadata.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibPhoneNumberPlan;

/// Runs a call into the library and turns a panic into
/// [`PlanError::LibraryPanic`]. The library unwraps in a few places on
/// unusual input.
fn guarded<T>(operation: &str, f: impl FnOnce() -> T) -> Result<T, PlanError> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_owned());
        warn!("phonenumber panicked in {operation}: {reason}");
        PlanError::LibraryPanic(reason)
    })
}

impl NumberingPlan for LibPhoneNumberPlan {
    type Number = PhoneNumber;

    fn parse(&self, text: &str, region_hint: Option<&str>) -> Result<PhoneNumber, PlanError> {
        // With a country the library strips that region's national prefix
        // even from international input, so "+61 1800..." under US loses its "1".
        let region_hint = region_hint.filter(|_| !text.trim_start().starts_with(PLUS_CHARS));
        let country = region_hint.and_then(|region| match region.parse::<country::Id>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Ignoring unknown region hint: {region}");
                None
            }
        });
        guarded("parse", || phonenumber::parse(country, text))?
            .map_err(|err| PlanError::NotANumber(err.to_string()))
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> bool {
        guarded("is_valid", || phonenumber::is_valid(number)).unwrap_or(false)
    }

    fn region_code_for(&self, number: &PhoneNumber) -> Option<String> {
        guarded("region_code_for", || number.country().id())
            .ok()
            .flatten()
            // Id variants are named after the ISO code
            .map(|id| format!("{id:?}"))
    }

    fn number_type(&self, number: &PhoneNumber) -> Result<NumberType, PlanError> {
        guarded("number_type", || number.number_type(&DATABASE)).map(NumberType::from)
    }

    fn format(&self, number: &PhoneNumber, style: NumberFormat) -> String {
        let mode = match style {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
        };
        guarded("format", || number.format().mode(mode).to_string()).unwrap_or_default()
    }

    fn national_significant_number(&self, number: &PhoneNumber) -> String {
        let e164 = self.format(number, NumberFormat::E164);
        let mut buf = itoa::Buffer::new();
        let country_code = buf.format(self.country_calling_code(number));
        let digits = e164.trim_start_matches('+');
        digits
            .strip_prefix(country_code)
            .unwrap_or(digits)
            .to_owned()
    }

    fn country_calling_code(&self, number: &PhoneNumber) -> u16 {
        guarded("country_calling_code", || number.country().code()).unwrap_or_default()
    }
}

impl From<Type> for NumberType {
    fn from(value: Type) -> Self {
        match value {
            Type::FixedLine => NumberType::FixedLine,
            Type::Mobile => NumberType::Mobile,
            Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
            Type::TollFree => NumberType::TollFree,
            Type::PremiumRate => NumberType::PremiumRate,
            Type::SharedCost => NumberType::SharedCost,
            Type::Voip => NumberType::VoIP,
            Type::PersonalNumber => NumberType::PersonalNumber,
            Type::Pager => NumberType::Pager,
            _ => NumberType::Unknown,
        }
    }
}
