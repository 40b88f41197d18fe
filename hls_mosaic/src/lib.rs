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

//! retrieval and mosaicking of Harmonized Landsat Sentinel-2 (HLS) surface reflectance tiles.
//!
//! For a named area of interest and an acquisition date the granules of all covering grid cells
//! are downloaded concurrently, converted into RGB GeoTIFFs, brought into a common CRS, merged into a
//! single mosaic with internal overviews, and intermediate files are removed

pub mod errors;
pub mod tiles;
pub mod fetch;
pub mod convert;
pub mod mosaic;
pub mod overviews;
pub mod cloud;
pub mod config;
pub mod pipeline;

hls_common::define_load_config!{}

pub use errors::{HlsError, Result};
pub use tiles::{Product, TileId, GranuleName, generate_tile_ids, generate_tile_names, mosaic_filename};
pub use fetch::{FetchRequest, FetchReport, DownloadFailure, fetch_all};
pub use convert::granule_to_geotiff;
pub use mosaic::{MosaicInfo, merge_tifs};
pub use overviews::add_mosaic_overviews;
pub use config::{HlsConfig, AreaTable};
pub use pipeline::{PipelineOutcome, run_pipeline, process_granules};
