pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }

    /// Canonical lookup key for a user or library supplied region code:
    /// trimmed and uppercased. Empty input and the unknown region yield
    /// `None`.
    pub fn normalize(region_code: &str) -> Option<String> {
        let trimmed = region_code.trim();
        if trimmed.is_empty() {
            return None;
        }
        let upper = trimmed.to_ascii_uppercase();
        if upper == Self::get_unknown() {
            return None;
        }
        Some(upper)
    }

    /// Two ASCII letters, the only shape accepted as a table key.
    pub fn is_well_formed(region_code: &str) -> bool {
        region_code.len() == 2 && region_code.bytes().all(|b| b.is_ascii_alphabetic())
    }
}
