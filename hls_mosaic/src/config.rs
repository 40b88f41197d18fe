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

use std::{collections::BTreeMap, path::PathBuf};
use serde::{Deserialize, Serialize};
use tracing::warn;

use hls_gdal::merge::MergePolicy;
use hls_gdal::overview::{DEFAULT_OVERVIEW_LEVELS, DEFAULT_OVERVIEW_RESAMPLING};
use crate::errors::{Result, HlsError};
use crate::fetch::DEFAULT_MAX_WORKERS;
use crate::tiles::{Product, DEFAULT_VERSION};

pub const DEFAULT_BASE_URL: &str = "https://hls.gsfc.nasa.gov/data/v1.4";
pub const DEFAULT_DOWNLOAD_DIR: &str = "hls_downloads";
pub const DEFAULT_AREA: &str = "Eureka";

/// general HLS download and mosaic parameters (see configs/hls.ron)
#[derive(Clone,Serialize,Deserialize,Debug)]
#[serde(default)]
pub struct HlsConfig {
    /// root URL of the HLS archive
    pub base_url: String,

    /// directory for granules, intermediate GeoTIFFs and mosaics
    pub download_dir: PathBuf,

    pub product: Product,
    pub version: String,

    /// max number of concurrent downloads
    pub max_download_threads: usize,

    /// remove granules and intermediate GeoTIFFs after the mosaic has been created
    pub cleanup: bool,

    pub overview_levels: Vec<i32>,
    pub resampling: String,

    pub merge_policy: MergePolicy,

    /// if set, granules with a higher cloud coverage (percent) are not used
    pub max_cloud_coverage: Option<f64>,

    pub show_progress: bool,
}

impl Default for HlsConfig {
    fn default() -> Self {
        HlsConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: PathBuf::from( DEFAULT_DOWNLOAD_DIR),
            product: Product::default(),
            version: DEFAULT_VERSION.to_string(),
            max_download_threads: DEFAULT_MAX_WORKERS,
            cleanup: true,
            overview_levels: DEFAULT_OVERVIEW_LEVELS.to_vec(),
            resampling: DEFAULT_OVERVIEW_RESAMPLING.to_string(),
            merge_policy: MergePolicy::default(),
            max_cloud_coverage: None,
            show_progress: true,
        }
    }
}

/// named areas of interest -> grid cells (see configs/areas.ron)
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct AreaTable {
    /// area to use for unknown area names
    pub default_area: String,
    pub areas: BTreeMap<String,Vec<String>>,
}

impl Default for AreaTable {
    fn default() -> Self {
        let cells = ["T16XEP", "T16XDP", "T16XEN", "T16XDN"].iter().map(|c| c.to_string()).collect();
        AreaTable { default_area: DEFAULT_AREA.to_string(), areas: BTreeMap::from( [(DEFAULT_AREA.to_string(), cells)]) }
    }
}

impl AreaTable {
    /// the (resolved name, grid cells) of `area`. Unknown names fall back to the default area
    pub fn lookup (&self, area: &str) -> Result<(&str, &[String])> {
        if let Some((name,cells)) = self.areas.get_key_value( area) {
            return Ok( (name.as_str(), cells.as_slice()) )
        }

        warn!("unknown area {:?} (known: {}), using default area {:?}", area, self.area_names().join(", "), self.default_area);
        match self.areas.get_key_value( &self.default_area) {
            Some((name,cells)) => Ok( (name.as_str(), cells.as_slice()) ),
            None => Err( HlsError::UnknownArea( area.to_string()))
        }
    }

    pub fn area_names (&self) -> Vec<&str> {
        self.areas.keys().map( |k| k.as_str()).collect()
    }
}
