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

//! optional pre-filter that skips granules with too much cloud cover, based on the `cloud_coverage`
//! (percent) metadata item of the granule

use std::path::{Path,PathBuf};
use tracing::{info, warn};

use hls_gdal::{Dataset, Metadata, run_quiet};
use crate::errors::Result;

pub const CLOUD_COVERAGE_KEY: &str = "cloud_coverage";
pub const DEFAULT_MAX_CLOUD_COVERAGE: f64 = 30.0;

/// cloud coverage in percent. Granules without (parseable) coverage info count as cloud free
pub fn cloud_coverage (granule: &Path) -> Result<f64> {
    let ds = run_quiet( || Ok( Dataset::open( granule)? ))?;

    match ds.metadata_item( CLOUD_COVERAGE_KEY, "") {
        Some(s) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(v),
            Err(_) => {
                warn!("invalid {} value {:?} in {:?}", CLOUD_COVERAGE_KEY, s, granule);
                Ok(0.0)
            }
        }
        None => Ok(0.0)
    }
}

pub fn acceptable_cloud_coverage (granule: &Path, max_coverage: f64) -> Result<bool> {
    Ok( cloud_coverage( granule)? <= max_coverage )
}

/// split `granules` into (accepted, rejected with their coverage)
pub fn filter_by_cloud_coverage (granules: Vec<PathBuf>, max_coverage: f64) -> Result<(Vec<PathBuf>, Vec<(PathBuf,f64)>)> {
    let mut accepted = Vec::with_capacity( granules.len());
    let mut rejected = Vec::new();

    for granule in granules {
        let coverage = cloud_coverage( &granule)?;
        if coverage <= max_coverage {
            accepted.push( granule);
        } else {
            info!("{:?} rejected, cloud coverage {}% > {}%", granule, coverage, max_coverage);
            rejected.push( (granule, coverage));
        }
    }

    Ok( (accepted, rejected) )
}
