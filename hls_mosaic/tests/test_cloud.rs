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

use std::path::{Path,PathBuf};
use hls_gdal::*;
use hls_mosaic::cloud::{cloud_coverage, acceptable_cloud_coverage, filter_by_cloud_coverage, CLOUD_COVERAGE_KEY};

fn create_granule (path: &Path, coverage: Option<&str>) {
    let driver = gtiff_driver().unwrap();
    let mut ds = create_dataset( &driver, path, 4, 4, 1, GdalDataType::Int16, None).unwrap();
    if let Some(cc) = coverage {
        ds.set_metadata_item( CLOUD_COVERAGE_KEY, cc, "").unwrap();
    }
}

#[test]
fn test_cloud_coverage() {
    let dir = tempfile::tempdir().unwrap();
    let cloudy = dir.path().join("cloudy.tif");
    let clear = dir.path().join("clear.tif");
    let unknown = dir.path().join("unknown.tif");
    let garbage = dir.path().join("garbage.tif");

    create_granule( &cloudy, Some("45"));
    create_granule( &clear, Some("10.5"));
    create_granule( &unknown, None);
    create_granule( &garbage, Some("n/a"));

    assert_eq!( cloud_coverage( &cloudy).unwrap(), 45.0);
    assert_eq!( cloud_coverage( &clear).unwrap(), 10.5);
    assert_eq!( cloud_coverage( &unknown).unwrap(), 0.0);
    assert_eq!( cloud_coverage( &garbage).unwrap(), 0.0);

    assert!( !acceptable_cloud_coverage( &cloudy, 30.0).unwrap());
    assert!( acceptable_cloud_coverage( &cloudy, 45.0).unwrap());
    assert!( acceptable_cloud_coverage( &clear, 30.0).unwrap());
}

#[test]
fn test_filter() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.tif");
    let b = dir.path().join("b.tif");
    let c = dir.path().join("c.tif");
    create_granule( &a, Some("80"));
    create_granule( &b, Some("5"));
    create_granule( &c, None);

    let (accepted, rejected) = filter_by_cloud_coverage( vec![a.clone(), b.clone(), c.clone()], 30.0).unwrap();
    assert_eq!( accepted, vec![b, c]);
    assert_eq!( rejected, vec![(a, 80.0)]);
}

#[test]
fn test_missing_granule() {
    assert!( cloud_coverage( Path::new("/nonexistent/granule.hdf")).is_err());
}
