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

use std::collections::BTreeMap;
use hls_gdal::merge::MergePolicy;
use hls_mosaic::{load_config, HlsConfig, AreaTable, HlsError, Product};

#[test]
fn test_load_hls_config() {
    let config: HlsConfig = load_config("hls.ron").unwrap();
    println!("{config:#?}");

    assert_eq!( config.product, Product::S30);
    assert_eq!( config.version, "1.4");
    assert_eq!( config.max_download_threads, 2);
    assert_eq!( config.overview_levels, vec![2, 4, 6, 12]);
    assert_eq!( config.resampling, "cubic");
    assert_eq!( config.merge_policy, MergePolicy::First);
    assert_eq!( config.max_cloud_coverage, None);
    assert!( config.cleanup);
}

#[test]
fn test_partial_config() {
    let config: HlsConfig = ron::from_str("HlsConfig( product: L30, max_cloud_coverage: Some(25.0), merge_policy: Max )").unwrap();

    assert_eq!( config.product, Product::L30);
    assert_eq!( config.max_cloud_coverage, Some(25.0));
    assert_eq!( config.merge_policy, MergePolicy::Max);
    assert_eq!( config.version, "1.4");
    assert_eq!( config.resampling, "cubic");
}

#[test]
fn test_load_areas() {
    let areas: AreaTable = load_config("areas.ron").unwrap();
    assert_eq!( areas.area_names(), vec!["Eureka", "Ireland", "TVC"]);

    let (name, cells) = areas.lookup("Eureka").unwrap();
    assert_eq!( name, "Eureka");
    assert_eq!( cells, ["T16XEP", "T16XDP", "T16XEN", "T16XDN"]);

    let (name, cells) = areas.lookup("Ireland").unwrap();
    assert_eq!( cells.len(), 4);
    assert_eq!( cells[3], "T30UUE");
}

#[test]
fn test_area_fallback() {
    let areas = AreaTable::default();
    let (name, cells) = areas.lookup("Atlantis").unwrap();
    assert_eq!( name, "Eureka");
    assert_eq!( cells.len(), 4);

    let no_default = AreaTable { default_area: "Nowhere".into(), areas: BTreeMap::new() };
    assert!( matches!( no_default.lookup("Atlantis"), Err(HlsError::UnknownArea(a)) if a == "Atlantis"));
}

#[test]
fn test_missing_config() {
    let res: hls_common::config::Result<HlsConfig> = load_config("no_such_config.ron");
    assert!( res.is_err());
}
