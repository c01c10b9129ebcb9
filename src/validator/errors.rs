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

use thiserror::Error;

/// Errors surfaced by a [`crate::NumberingPlan`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The library could not interpret the text as any phone number.
    #[error("Not a number: {0}")]
    NotANumber(String),
    /// The library panicked while handling the number.
    #[error("Numbering plan library fault: {0}")]
    LibraryPanic(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Input is empty")]
pub struct InvalidInputError;

/// Per-number failure carried inside a verdict. Never returned as the
/// outcome of a validation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
    #[error("Error parsing number: {0}")]
    ParseFailure(#[from] PlanError),
}

/// Rejected updates of the country tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("Length bounds must be positive")]
    ZeroLength,
    #[error("Minimum length {min} is greater than maximum length {max}")]
    MinGreaterThanMax { min: u32, max: u32 },
    #[error("Invalid region code: {0:?}")]
    InvalidRegionCode(String),
    #[error("Dial code must be 1 to 3 ASCII digits, got {0:?}")]
    InvalidDialCode(String),
}
