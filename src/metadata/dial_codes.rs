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

//! International dial codes per region. Covers every region of the length
//! table plus a few regions that only take part in duplicate detection.

pub(super) const DIAL_CODES: &[(&str, &str)] = &[
    // Europe
    ("AL", "355"),
    ("AT", "43"),
    ("AZ", "994"),
    ("BE", "32"),
    ("BG", "359"),
    ("BA", "387"),
    ("HR", "385"),
    ("CY", "357"),
    ("CZ", "420"),
    ("DK", "45"),
    ("EE", "372"),
    ("FI", "358"),
    ("FR", "33"),
    ("DE", "49"),
    ("GR", "30"),
    ("HU", "36"),
    ("IE", "353"),
    ("IS", "354"),
    ("IT", "39"),
    ("LV", "371"),
    ("LT", "370"),
    ("LU", "352"),
    ("MT", "356"),
    ("MD", "373"),
    ("ME", "382"),
    ("NL", "31"),
    ("MK", "389"),
    ("NO", "47"),
    ("PL", "48"),
    ("PT", "351"),
    ("RO", "40"),
    ("RS", "381"),
    ("RU", "7"),
    ("SK", "421"),
    ("SI", "386"),
    ("ES", "34"),
    ("SE", "46"),
    ("CH", "41"),
    ("TR", "90"),
    ("UA", "380"),
    ("GB", "44"),
    // Africa
    ("AO", "244"),
    ("BW", "267"),
    ("DZ", "213"),
    ("EG", "20"),
    ("ET", "251"),
    ("GH", "233"),
    ("KE", "254"),
    ("MA", "212"),
    ("MU", "230"),
    ("MZ", "258"),
    ("NA", "264"),
    ("NG", "234"),
    ("RW", "250"),
    ("TN", "216"),
    ("TZ", "255"),
    ("ZA", "27"),
    ("UG", "256"),
    ("ZW", "263"),
    // Middle East
    ("BH", "973"),
    ("IL", "972"),
    ("JO", "962"),
    ("KW", "965"),
    ("OM", "968"),
    ("QA", "974"),
    ("SA", "966"),
    ("AE", "971"),
    // Asia
    ("AM", "374"),
    ("BD", "880"),
    ("CN", "86"),
    ("HK", "852"),
    ("IN", "91"),
    ("ID", "62"),
    ("JP", "81"),
    ("KZ", "7"),
    ("KR", "82"),
    ("MY", "60"),
    ("NP", "977"),
    ("PK", "92"),
    ("PH", "63"),
    ("SG", "65"),
    ("LK", "94"),
    ("TW", "886"),
    ("TH", "66"),
    ("VN", "84"),
    // Americas
    ("AR", "54"),
    ("BO", "591"),
    ("BR", "55"),
    ("CA", "1"),
    ("CL", "56"),
    ("CO", "57"),
    ("EC", "593"),
    ("MX", "52"),
    ("PE", "51"),
    ("PY", "595"),
    ("US", "1"),
    ("UY", "598"),
    ("VE", "58"),
    // Oceania
    ("AU", "61"),
    ("FJ", "679"),
    ("NZ", "64"),
];
