mod duplicate_code;
mod length_validator;
mod phone_validator;
mod repeated_digits;
mod toll_free;
pub mod enums;
pub mod errors;
pub mod verdicts;

pub use duplicate_code::detect_duplicate_dial_code;
pub use length_validator::validate_length;
pub use phone_validator::PhoneValidator;
pub use repeated_digits::detect_repeated_digits;
pub use toll_free::classify_toll_free;
