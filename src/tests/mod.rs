mod fake_plan;

use std::sync::Arc;

use crate::{metadata::CountryMetadata, PhoneValidator};

use fake_plan::FakePlan;

pub(crate) fn init_logging() {
    let _ = colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Validator over the fake plan with the compiled-in country tables.
pub(crate) fn fake_validator(plan: FakePlan) -> PhoneValidator<FakePlan> {
    init_logging();
    PhoneValidator::new(plan, Arc::new(CountryMetadata::builtin()))
}
