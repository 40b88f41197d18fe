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

use std::path::Path;
use tracing::info;

use hls_gdal::errors::HlsGdalError;
use hls_gdal::overview::add_overviews;
pub use hls_gdal::overview::{DEFAULT_OVERVIEW_LEVELS, DEFAULT_OVERVIEW_RESAMPLING, OVERVIEW_DOMAIN, OVERVIEW_RESAMPLING_KEY};
use crate::errors::{Result, HlsError};

/// add internal overviews to a mosaic file. An unsupported `method` is reported as
/// `HlsError::UnsupportedResampling` without touching the file
pub fn add_mosaic_overviews (path: &Path, levels: &[i32], method: &str) -> Result<()> {
    add_overviews( path, levels, method).map_err( |e| match e {
        HlsGdalError::UnsupportedResampling(m) => HlsError::UnsupportedResampling(m),
        other => HlsError::RasterError(other)
    })?;

    info!("added overviews {:?} ({}) to {:?}", levels, method, path);
    Ok(())
}
