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

use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

/// Standardized renderings of a phone number requested from the numbering plan.
///
/// For example, the Google Switzerland office number would be:
/// - **E164**: `+41446681800`
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// "+" followed by the country calling code and the national significant
    /// number, no separators.
    E164,
    /// Country calling code plus grouped national number, as recommended
    /// for international display.
    International,
    /// The form dialled inside the number's own country, including a
    /// national prefix where the region uses one.
    National,
}

/// Categorizes phone numbers based on their primary use, as reported by the
/// numbering plan.
#[derive(Debug, EnumIter, IntoStaticStr, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NumberType {
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    Mobile,
    /// Used in regions (e.g., the USA) where it's impossible to distinguish
    /// between fixed-line and mobile numbers by looking at the number itself.
    FixedLineOrMobile,
    /// Calls are free for the caller, the recipient pays.
    /// Examples include "800" or "888" numbers in the US.
    TollFree,
    PremiumRate,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    #[strum(serialize = "voip")]
    #[serde(rename = "voip")]
    VoIP,
    PersonalNumber,
    Pager,
    /// The number does not match any of the known patterns for its region,
    /// or the plan reported a type this crate does not distinguish.
    Unknown,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Outcome of comparing a digit count against the country length table.
///
/// `Unknown` is a terminal outcome of its own: the region has no entry in
/// the table. It must never be read as a failed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMatch {
    /// The digit count lies inside the configured inclusive range.
    Matched,
    /// The digit count lies outside the configured range.
    NotMatched,
    /// No length rule exists for the region.
    Unknown,
}

impl LengthMatch {
    pub const fn is_matched(&self) -> bool {
        matches!(self, LengthMatch::Matched)
    }

    /// Text form used in tabular exports.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LengthMatch::Matched => "true",
            LengthMatch::NotMatched => "false",
            LengthMatch::Unknown => "unknown",
        }
    }
}
