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

use std::fs;
use serde::Deserialize;
use hls_common::config::{load_config_path, load_config_for_crate, HlsConfigError};

#[derive(Deserialize,Debug,PartialEq)]
struct TestConfig {
    name: String,
    levels: Vec<i32>,
    threshold: Option<f64>,
}

#[test]
fn test_load_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.ron");
    fs::write( &path, r#"TestConfig( name: "x", levels: [2,4], threshold: Some(30.0) )"#).unwrap();

    let cfg: TestConfig = load_config_path(&path).unwrap();
    assert_eq!( cfg, TestConfig{ name: "x".into(), levels: vec![2,4], threshold: Some(30.0) });
}

#[test]
fn test_config_errors() {
    let dir = tempfile::tempdir().unwrap();

    let res: Result<TestConfig,_> = load_config_path( dir.path().join("nope.ron"));
    assert!( matches!( res, Err(HlsConfigError::ConfigNotFound(_))));

    let path = dir.path().join("bad.ron");
    fs::write( &path, "TestConfig( name: ").unwrap();
    let res: Result<TestConfig,_> = load_config_path(&path);
    assert!( matches!( res, Err(HlsConfigError::ConfigParseError(_))));

    let res: Result<TestConfig,_> = load_config_for_crate( "hls_common", env!("CARGO_MANIFEST_DIR"), "no_such_config.ron");
    assert!( matches!( res, Err(HlsConfigError::ConfigNotFound(_))));
}
