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

use super::verdicts::RepeatedDigitsVerdict;

/// Length of the repeated tail that marks a number as a likely placeholder.
const REPEATED_TAIL_LENGTH: usize = 5;

/// Flags numbers whose last five digits are the same digit (`...11111`),
/// a common sign of a fake or test entry. Informational only.
pub fn detect_repeated_digits(digits: &str) -> RepeatedDigitsVerdict {
    let digits: Vec<u8> = digits.bytes().filter(u8::is_ascii_digit).collect();
    if digits.len() >= REPEATED_TAIL_LENGTH {
        let tail = &digits[digits.len() - REPEATED_TAIL_LENGTH..];
        if tail.iter().all(|&digit| digit == tail[0]) {
            let pattern: String = tail.iter().map(|&digit| char::from(digit)).collect();
            let message = fast_cat::concat_str!(
                "Last 5 digits are same (",
                &pattern,
                ") - potentially fake/test number"
            );
            return RepeatedDigitsVerdict {
                has_pattern: true,
                pattern: Some(pattern),
                message,
            };
        }
    }
    RepeatedDigitsVerdict {
        has_pattern: false,
        pattern: None,
        message: String::new(),
    }
}
