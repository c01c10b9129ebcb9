use crate::validator::{
    enums::{NumberFormat, NumberType},
    errors::PlanError,
};

/// Numbering plan API used by the validator to isolate the underlying
/// parsing library and allow different implementations to be swapped in
/// easily (the real libphonenumber port in production, fakes in tests).
///
/// Implementations must not panic. Faults inside the backing library are
/// reported through [`PlanError`] or the documented fallback values.
pub trait NumberingPlan {
    /// Library-owned representation of a successfully parsed number.
    type Number;

    /// Interprets `text` as a phone number. `region_hint` is an uppercased
    /// ISO 3166-1 alpha-2 code used when `text` carries no country calling
    /// code. Text starting with a plus sign must be parsed without it.
    fn parse(&self, text: &str, region_hint: Option<&str>) -> Result<Self::Number, PlanError>;

    /// Returns whether the number matches a valid pattern of its region.
    /// Returns `false` if the library could not decide.
    fn is_valid_number(&self, number: &Self::Number) -> bool;

    /// Returns the region the number belongs to, if the library can
    /// determine one.
    fn region_code_for(&self, number: &Self::Number) -> Option<String>;

    /// Classifies the number by its primary use.
    fn number_type(&self, number: &Self::Number) -> Result<NumberType, PlanError>;

    /// Renders the number in the given style. Returns an empty string if
    /// the library failed to format it.
    fn format(&self, number: &Self::Number, style: NumberFormat) -> String;

    /// Digits of the number without the country calling code.
    fn national_significant_number(&self, number: &Self::Number) -> String;

    fn country_calling_code(&self, number: &Self::Number) -> u16;
}
