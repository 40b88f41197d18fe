/*
 * Copyright © 2024, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! compact (separator free) date formats as they are used in remote sensing product names

use chrono::{Datelike, NaiveDate};

/// strip all non-digit characters, e.g. "2020-07-20" -> "20200720"
pub fn normalize_date_string (s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// parse a 7 digit "YYYYDDD" (year + day-of-year) string
pub fn parse_yyyyddd (s: &str) -> Option<NaiveDate> {
    if s.len() != 7 || !s.bytes().all(|b| b.is_ascii_digit()) { return None }

    let year: i32 = s[0..4].parse().ok()?;
    let doy: u32 = s[4..7].parse().ok()?;
    NaiveDate::from_yo_opt( year, doy)
}

/// parse a 8 digit "YYYYMMDD" calendar date string
pub fn parse_yyyymmdd (s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) { return None }

    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt( year, month, day)
}

/// parse a date that is either given as day-of-year or as calendar date, with or without separators.
/// Day-of-year takes precedence
pub fn parse_compact_date (s: &str) -> Option<NaiveDate> {
    let s = normalize_date_string(s);
    parse_yyyyddd(&s).or_else(|| parse_yyyymmdd(&s))
}

/// the "YYYYDDD" representation of a date
pub fn yyyyddd (date: &NaiveDate) -> String {
    format!("{:04}{:03}", date.year(), date.ordinal())
}
