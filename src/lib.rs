pub mod interfaces;
mod numbering_plan;
pub mod metadata;
pub mod validator;
pub mod export;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::NumberingPlan;
pub use numbering_plan::LibPhoneNumberPlan;
pub use metadata::{CountryMetadata, DialCodeTable, LengthRule, LengthRuleTable};
pub use string_util::{digits_only, normalize, NormalizedInput};
pub use validator::{
    enums::{LengthMatch, NumberFormat, NumberType},
    errors::{InvalidInputError, MetadataError, PlanError, ValidationError},
    verdicts::{
        CompositeVerdict, DuplicateCodeVerdict, FormattedNumber, LengthVerdict,
        RepeatedDigitsVerdict, TollFreeVerdict,
    },
    classify_toll_free, detect_duplicate_dial_code, detect_repeated_digits, validate_length,
    PhoneValidator,
};
pub use export::{BatchSummary, Column, VerdictRow};
