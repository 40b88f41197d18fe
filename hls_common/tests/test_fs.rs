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

use std::{fs, path::{Path,PathBuf}};
use regex::Regex;
use hls_common::fs::*;

#[test]
fn test_matching_files() {
    let re = Regex::new( r".*\.rs").unwrap();
    let dir = Path::new("src");
    let res = matching_files_in_dir( &dir, &re);

    assert!(res.is_ok());

    if let Ok(files) = res {
        assert!( !files.is_empty());
        for f in files {
            println!("{f:?}");
        }
    } else {
        panic!("no matching files in src/ ?")
    }
}

#[test]
fn test_stem_suffix() {
    let p = with_stem_suffix( "dl/HLS.S30.T16XEL.2020202.v1.4.tif", "_reproj", "tif").unwrap();
    assert_eq!( p, PathBuf::from("dl/HLS.S30.T16XEL.2020202.v1.4_reproj.tif"));

    let p = with_stem_suffix( "HLS.L30.T15XWG.2020202.v1.4.hdf", "", "tif").unwrap();
    assert_eq!( p, PathBuf::from("HLS.L30.T15XWG.2020202.v1.4.tif"));
}

#[test]
fn test_remove_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.tif");
    let b = dir.path().join("b.tif");
    let missing = dir.path().join("missing.tif");
    fs::write( &a, b"a").unwrap();
    fs::write( &b, b"b").unwrap();

    let paths = vec![a.clone(), missing.clone(), b.clone()];
    assert_eq!( existing_files(&paths), vec![a.clone(), b.clone()]);

    assert_eq!( remove_files(&paths), 2);
    assert!( !a.exists() && !b.exists());
    assert_eq!( remove_files(&paths), 0);
}

#[test]
fn test_ensure_writable_dir() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("hls_downloads").join("nested");
    assert!( ensure_writable_dir(&sub).is_ok());
    assert!( sub.is_dir());
    assert!( ensure_writable_dir(&sub).is_ok()); // existing dir is fine
}

#[test]
fn test_env_var_path() {
    unsafe { std::env::set_var("HLS_TEST_DIR", "/tmp/hls_test"); }
    let p = replace_env_var_path("$HLS_TEST_DIR/downloads").unwrap();
    assert_eq!( p, PathBuf::from("/tmp/hls_test/downloads"));

    let p = replace_env_var_path("plain/dir").unwrap();
    assert_eq!( p, PathBuf::from("plain/dir"));

    assert!( replace_env_var_path("$HLS_SURELY_NOT_SET_VAR/x").is_err());
}
