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

//! RON based configuration lookup.
//!
//! Config files are looked up by filename in this order:
//!   1. `$HLS_HOME/configs/<crate>/<filename>`
//!   2. `~/.hls/configs/<crate>/<filename>`
//!   3. `<crate source dir>/configs/<filename>` (the defaults that ship with the sources)
//!
//! crates that own configs expand `define_load_config!()` at their top level, which defines
//! a `load_config::<C>(filename)` function that uses the crate name and source dir of the
//! expanding crate

use std::{env, fs, path::{Path,PathBuf}};
use serde::Deserialize;
use tracing::debug;

use crate::define_error;

pub const CONFIGS: &'static str = "configs";

define_error!{ pub HlsConfigError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    ConfigNotFound(String) : "config not found: {0}",
    ConfigParseError(#[from] ron::error::SpannedError) : "config parse error: {0}"
}

pub type Result<T> = std::result::Result<T, HlsConfigError>;

pub fn find_config_file (resource_crate: &str, manifest_dir: &str, filename: &str) -> Option<PathBuf> {
    // check an explicit HLS_HOME first
    if let Ok(hls_home) = env::var("HLS_HOME") {
        let path = Path::new(&hls_home).join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    // then a user specific ~/.hls
    if let Ok(usr_home) = env::var("HOME") {
        let path = Path::new(&usr_home).join(".hls").join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    // try to find the config within the repo
    let path = Path::new(manifest_dir).join(CONFIGS).join(filename);
    if path.is_file() { return Some(path) }

    None
}

/// load config from an explicit pathname
pub fn load_config_path<C> (path: impl AsRef<Path>) -> Result<C> where C: for <'a> Deserialize<'a> {
    let path = path.as_ref();
    if !path.is_file() { return Err( HlsConfigError::ConfigNotFound( format!("{:?}", path))) }

    debug!("loading config {:?}", path);
    let data = fs::read(path)?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn load_config_for_crate<C> (resource_crate: &str, manifest_dir: &str, filename: &str) -> Result<C> where C: for <'a> Deserialize<'a> {
    if let Some(path) = find_config_file( resource_crate, manifest_dir, filename) {
        load_config_path( path)
    } else {
        Err( HlsConfigError::ConfigNotFound( filename.to_string()))
    }
}

/// this is the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        /// load config using the HLS_HOME / ~/.hls / source tree lookup
        pub fn load_config<C> (filename: &str) -> $crate::config::Result<C> where C: for <'a> serde::Deserialize<'a> {
            $crate::config::load_config_for_crate( env!("CARGO_PKG_NAME"), env!("CARGO_MANIFEST_DIR"), filename)
        }
    }
}
pub use define_load_config;
