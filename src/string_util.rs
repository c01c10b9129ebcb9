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

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::validator::errors::InvalidInputError;

const PLUS_SIGN: &str = "+";
/// ASCII plus and its full-width variant.
pub(crate) const PLUS_CHARS: [char; 2] = ['+', '\u{FF0B}'];

static NON_DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]+").expect("constant pattern [^0-9]+ must compile"));

/// The two projections of a raw input every check works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput<'a> {
    /// Only the ASCII digits of the input, leading "+" removed.
    pub digits: String,
    /// Trimmed input guaranteed to start with a plus sign. Borrowed when the
    /// input already had one.
    pub parse_ready: Cow<'a, str>,
}

/// Projects raw text into digit-only and parse-ready forms.
///
/// Fails with [`InvalidInputError`] when the text is empty after trimming.
pub fn normalize(raw: &str) -> Result<NormalizedInput<'_>, InvalidInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInputError);
    }
    Ok(NormalizedInput {
        digits: digits_only(trimmed),
        parse_ready: with_plus_sign(trimmed),
    })
}

/// Strips everything but digits. Decimal digits of other scripts (for
/// example full-width "６") are folded to ASCII first.
pub fn digits_only(s: &str) -> String {
    let decimals = dec_from_char::normalize_decimals(s);
    NON_DIGITS_PATTERN.replace_all(&decimals, "").into_owned()
}

fn with_plus_sign(trimmed: &str) -> Cow<'_, str> {
    if trimmed.starts_with(PLUS_CHARS) {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, trimmed))
    }
}
