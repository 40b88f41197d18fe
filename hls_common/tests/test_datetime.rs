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
#![allow(unused)]

use chrono::NaiveDate;
use hls_common::datetime::*;

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_day_of_year_and_calendar_agree() {
    let dates = [ (2020,1,1), (2020,7,20), (2020,12,31), (2021,3,1), (2019,2,28), (2024,2,29) ];

    for (y,m,d) in dates {
        let date = NaiveDate::from_ymd_opt(y,m,d).unwrap();
        let doy = yyyyddd(&date);
        let cal = date.format("%Y%m%d").to_string();
        println!("{cal} -> {doy}");

        assert_eq!( parse_compact_date(&doy), Some(date));
        assert_eq!( parse_compact_date(&cal), Some(date));
        assert_eq!( yyyyddd( &parse_compact_date(&cal).unwrap()), doy);
    }
}

#[test]
fn test_separators() {
    let date = NaiveDate::from_ymd_opt(2020,7,20).unwrap();
    assert_eq!( normalize_date_string("2020-07-20"), "20200720");
    assert_eq!( parse_compact_date("2020-07-20"), Some(date));
    assert_eq!( parse_compact_date("2020/07/20"), Some(date));
    assert_eq!( parse_compact_date("2020.202"), Some(date));
    assert_eq!( yyyyddd(&date), "2020202");
}

#[test]
fn test_invalid_dates() {
    assert_eq!( parse_compact_date(""), None);
    assert_eq!( parse_compact_date("2020"), None);
    assert_eq!( parse_compact_date("2021366"), None); // 2021 is no leap year
    assert_eq!( parse_compact_date("2020000"), None);
    assert_eq!( parse_compact_date("20201332"), None);
    assert_eq!( parse_compact_date("not a date"), None);
    assert_eq!( parse_yyyyddd("20200720"), None);
    assert_eq!( parse_yyyymmdd("2020202"), None);
}
