use std::{collections::HashMap, sync::Mutex};

use crate::{
    digits_only,
    interfaces::NumberingPlan,
    validator::{
        enums::{NumberFormat, NumberType},
        errors::PlanError,
    },
};

/// What the fake plan answers for one registered number.
#[derive(Debug, Clone, PartialEq)]
pub struct FakeNumber {
    pub country_code: u16,
    pub nsn: String,
    pub region: Option<&'static str>,
    pub valid: bool,
    pub number_type: Result<NumberType, PlanError>,
}

impl FakeNumber {
    pub fn valid(country_code: u16, nsn: &str, region: &'static str, number_type: NumberType) -> Self {
        Self {
            country_code,
            nsn: nsn.to_owned(),
            region: Some(region),
            valid: true,
            number_type: Ok(number_type),
        }
    }

    pub fn invalid(country_code: u16, nsn: &str, region: &'static str) -> Self {
        Self {
            valid: false,
            number_type: Ok(NumberType::Unknown),
            ..Self::valid(country_code, nsn, region, NumberType::Unknown)
        }
    }

    pub fn without_region(mut self) -> Self {
        self.region = None;
        self
    }

    pub fn failing_type(mut self, reason: &str) -> Self {
        self.number_type = Err(PlanError::LibraryPanic(reason.to_owned()));
        self
    }
}

/// Numbering plan answering from a fixed registry keyed by the digits of
/// the parsed text. Anything unregistered fails to parse.
#[derive(Debug, Default)]
pub struct FakePlan {
    numbers: HashMap<String, FakeNumber>,
    seen_hints: Mutex<Vec<Option<String>>>,
}

impl FakePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, digits: &str, number: FakeNumber) -> Self {
        self.numbers.insert(digits.to_owned(), number);
        self
    }

    pub fn seen_hints(&self) -> Vec<Option<String>> {
        self.seen_hints.lock().unwrap().clone()
    }
}

impl NumberingPlan for FakePlan {
    type Number = FakeNumber;

    fn parse(&self, text: &str, region_hint: Option<&str>) -> Result<FakeNumber, PlanError> {
        self.seen_hints
            .lock()
            .unwrap()
            .push(region_hint.map(str::to_owned));
        self.numbers
            .get(&digits_only(text))
            .cloned()
            .ok_or_else(|| PlanError::NotANumber("The string supplied did not seem to be a phone number".to_owned()))
    }

    fn is_valid_number(&self, number: &FakeNumber) -> bool {
        number.valid
    }

    fn region_code_for(&self, number: &FakeNumber) -> Option<String> {
        number.region.map(str::to_owned)
    }

    fn number_type(&self, number: &FakeNumber) -> Result<NumberType, PlanError> {
        number.number_type.clone()
    }

    fn format(&self, number: &FakeNumber, style: NumberFormat) -> String {
        match style {
            NumberFormat::E164 => format!("+{}{}", number.country_code, number.nsn),
            NumberFormat::International => format!("+{} {}", number.country_code, number.nsn),
            NumberFormat::National => format!("0{}", number.nsn),
        }
    }

    fn national_significant_number(&self, number: &FakeNumber) -> String {
        number.nsn.clone()
    }

    fn country_calling_code(&self, number: &FakeNumber) -> u16 {
        number.country_code
    }
}

/// Plan with the numbers used across the suite.
pub fn standard_plan() -> FakePlan {
    FakePlan::new()
        // Adelaide fixed line
        .with_number("61872252566", FakeNumber::valid(61, "872252566", "AU", NumberType::FixedLine))
        // Australian freephone
        .with_number("611800123456", FakeNumber::valid(61, "1800123456", "AU", NumberType::TollFree))
        // US freephone
        .with_number("18002530000", FakeNumber::valid(1, "8002530000", "US", NumberType::TollFree))
        .with_number("12025551234", FakeNumber::valid(1, "2025551234", "US", NumberType::FixedLineOrMobile))
        // German number with the country code typed twice
        .with_number("4949123456789", FakeNumber::valid(49, "49123456789", "DE", NumberType::FixedLine))
        .with_number("49301234567", FakeNumber::valid(49, "301234567", "DE", NumberType::FixedLine))
        // Too short for AU but known to the plan
        .with_number("6187225256", FakeNumber::invalid(61, "87225256", "AU"))
        // Region with a dial code but no length rule
        .with_number("79251234567", FakeNumber::valid(7, "9251234567", "RU", NumberType::Mobile))
        .with_number("447911111111", FakeNumber::valid(44, "7911111111", "GB", NumberType::Mobile))
}
