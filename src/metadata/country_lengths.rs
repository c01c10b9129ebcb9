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

//! Accepted phone number lengths per region, counted in digits of the full
//! international number (country calling code included, no "+").

/// `(region, min, max)`, both bounds inclusive.
pub(super) const COUNTRY_PHONE_LENGTHS: &[(&str, u32, u32)] = &[
    // Europe
    ("AL", 11, 12),
    ("AT", 8, 13),
    ("AZ", 12, 12),
    ("BE", 10, 10),
    ("BG", 11, 11),
    ("BA", 11, 11),
    ("HR", 11, 12),
    ("CY", 11, 11),
    ("CZ", 12, 12),
    ("DK", 10, 10),
    ("EE", 10, 10),
    ("FI", 8, 12),
    ("FR", 11, 12),
    ("DE", 8, 15),
    ("GR", 12, 12),
    ("HU", 10, 10),
    ("IE", 11, 13),
    ("IT", 9, 13),
    ("LV", 11, 11),
    ("LT", 11, 11),
    ("LU", 8, 11),
    ("MT", 11, 11),
    ("MD", 11, 11),
    ("ME", 9, 9),
    ("NL", 11, 11),
    ("MK", 11, 11),
    ("NO", 10, 10),
    ("PL", 11, 11),
    ("PT", 12, 12),
    ("RO", 11, 11),
    ("RS", 11, 12),
    ("SK", 12, 12),
    ("SI", 11, 11),
    ("ES", 11, 11),
    ("SE", 9, 11),
    ("CH", 11, 11),
    ("TR", 9, 12),
    ("GB", 12, 12),
    // Africa
    ("AO", 12, 12),
    ("BW", 10, 10),
    ("EG", 10, 11),
    ("ET", 12, 12),
    ("GH", 12, 12),
    ("KE", 12, 13),
    ("MU", 10, 10),
    ("MZ", 11, 11),
    ("NA", 12, 12),
    ("NG", 11, 13),
    ("RW", 12, 12),
    ("ZA", 11, 12),
    ("UG", 12, 12),
    ("ZW", 12, 13),
    // Middle East
    ("BH", 11, 11),
    ("IL", 11, 12),
    ("JO", 11, 11),
    ("OM", 11, 11),
    ("QA", 10, 11),
    ("SA", 12, 12),
    ("AE", 10, 12),
    // Asia
    ("AM", 11, 11),
    ("CN", 11, 13),
    ("HK", 11, 11),
    ("IN", 12, 12),
    ("ID", 8, 13),
    ("JP", 10, 11),
    ("KZ", 10, 11),
    ("KR", 9, 11),
    ("MY", 10, 11),
    ("PH", 11, 11),
    ("SG", 10, 10),
    ("LK", 11, 11),
    ("TW", 12, 12),
    ("TH", 10, 11),
    ("VN", 12, 12),
    // Americas
    ("AR", 10, 12),
    ("BR", 12, 13),
    ("CA", 11, 11),
    ("CL", 10, 11),
    ("CO", 10, 10),
    ("MX", 12, 12),
    ("PE", 10, 11),
    ("US", 11, 11),
    // Oceania
    ("AU", 11, 11),
    ("NZ", 10, 10),
];
