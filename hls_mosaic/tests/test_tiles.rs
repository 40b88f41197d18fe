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
use hls_mosaic::{HlsError, Product, TileId, GranuleName, generate_tile_ids, generate_tile_names, mosaic_filename};

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_tile_names() {
    let names = generate_tile_names( &["T1", "T2"], "2020202", Some("S30"), None).unwrap();
    assert_eq!( names, vec![ "HLS.S30.T1.2020202.v1.4.hdf", "HLS.S30.T2.2020202.v1.4.hdf" ]);

    let names = generate_tile_names( &["T16XEP"], "2020-07-20", Some("L30"), Some("1.5")).unwrap();
    assert_eq!( names, vec![ "HLS.L30.T16XEP.2020202.v1.5.hdf" ]);
}

#[test]
fn test_date_formats_agree() {
    let cells = ["T16XEP", "T15XWG"];
    let doy = generate_tile_names( &cells, "2020202", None, None).unwrap();
    let cal = generate_tile_names( &cells, "20200720", None, None).unwrap();
    assert_eq!( doy, cal);

    // default product
    assert!( doy[0].starts_with("HLS.S30."));
}

#[test]
fn test_empty_cells() {
    let names = generate_tile_names::<&str>( &[], "2020202", None, None).unwrap();
    assert!( names.is_empty());
}

#[test]
fn test_invalid_inputs() {
    assert!( matches!( generate_tile_names( &["T1"], "2020202", Some("X99"), None), Err(HlsError::UnsupportedProduct(_))));
    assert!( matches!( generate_tile_names( &["T1"], "2020-13-45", None, None), Err(HlsError::InvalidDate(_))));
    assert!( matches!( generate_tile_names( &["T1"], "yesterday", None, None), Err(HlsError::InvalidDate(_))));
}

#[test]
fn test_remote_url() {
    let tiles = generate_tile_ids( &["T16XEP"], "2020202", Some("S30"), None).unwrap();
    let url = tiles[0].remote_url("https://hls.gsfc.nasa.gov/data/v1.4/").unwrap();
    assert_eq!( url, "https://hls.gsfc.nasa.gov/data/v1.4/S30/2020/16/X/E/P/HLS.S30.T16XEP.2020202.v1.4.hdf");

    let tiles = generate_tile_ids( &["T1"], "2020202", None, None).unwrap();
    assert!( matches!( tiles[0].remote_url("http://localhost"), Err(HlsError::InvalidGridCell(_))));
}

#[test]
fn test_product() {
    assert_eq!( "s30".parse::<Product>().unwrap(), Product::S30);
    assert_eq!( "L30".parse::<Product>().unwrap(), Product::L30);
    assert_eq!( Product::default(), Product::S30);
    assert_eq!( Product::L30.rgb_bands(), ["band04", "band03", "band02"]);
    assert_eq!( Product::S30.rgb_bands(), ["B04", "B03", "B02"]);
    assert_eq!( Product::S30.to_string(), "S30");
}

#[test]
fn test_granule_name() {
    let g = GranuleName::parse("hls_downloads/HLS.S30.T16XEP.2020202.v1.4.hdf").unwrap();
    assert_eq!( g.product, Product::S30);
    assert_eq!( g.grid_cell, "T16XEP");
    assert_eq!( g.zone(), "16");
    assert_eq!( g.date, NaiveDate::from_ymd_opt(2020,7,20).unwrap());
    assert_eq!( g.version, "1.4");

    let g = GranuleName::parse("HLS.L30.T08WNB.2019001.v1.4_reproj.tif").unwrap();
    assert_eq!( g.product, Product::L30);
    assert_eq!( g.zone(), "08");

    let g = GranuleName::parse("HLS.S30.T29UNV.2020100.v1.4").unwrap();
    assert_eq!( g.version, "1.4");

    assert!( matches!( GranuleName::parse("HLS.X30.T16XEP.2020202.v1.4.hdf"), Err(HlsError::UnsupportedProduct(_))));
    assert!( matches!( GranuleName::parse("random.tif"), Err(HlsError::InvalidGranuleName(_))));
    assert!( matches!( GranuleName::parse("HLS.S30.T16XEP.20200720.v1.4.hdf"), Err(HlsError::InvalidGranuleName(_))));
}

#[test]
fn test_mosaic_filename() {
    let date = NaiveDate::from_ymd_opt(2020,7,20).unwrap();
    assert_eq!( mosaic_filename( Product::S30, "Eureka", &date, "1.4"), "HLS.S30.Eureka.2020202.v1.4.tif");
}
