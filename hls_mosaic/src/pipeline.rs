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

//! the end-to-end flow: tile names -> download -> [cloud filter] -> per-tile GeoTIFFs -> mosaic -> overviews -> cleanup.
//! Stages run strictly one after the other

use std::path::{Path,PathBuf};
use reqwest::Client;
use tracing::{error, info, warn};

use hls_common::datetime::{parse_compact_date, yyyyddd};
use hls_common::fs::{ensure_writable_dir, remove_files, replace_env_var_path};
use crate::cloud::filter_by_cloud_coverage;
use crate::config::{AreaTable, HlsConfig};
use crate::convert::granule_to_geotiff;
use crate::errors::{Result, HlsError, task_error};
use crate::fetch::{FetchRequest, fetch_all, new_progress};
use crate::mosaic::{MosaicInfo, merge_tifs};
use crate::overviews::add_mosaic_overviews;
use crate::tiles::{generate_tile_ids, mosaic_filename};

#[derive(Debug)]
pub enum PipelineOutcome {
    Mosaic(MosaicInfo),
    /// none of the granules for this date could be retrieved (or all were rejected)
    NoData { area: String, date: String },
}

/// run the whole pipeline for `area` at `date`
pub async fn run_pipeline (config: &HlsConfig, areas: &AreaTable, area: &str, date: &str) -> Result<PipelineOutcome> {
    let (area_name, cells) = areas.lookup( area)?;
    let area_name = area_name.to_string();

    let product = config.product.code();
    let tiles = generate_tile_ids( cells, date, Some(product), Some(&config.version))?;
    let date = parse_compact_date( date).ok_or_else( || HlsError::InvalidDate( date.to_string()))?;
    info!("{} {} tiles for {} at {}", tiles.len(), product, area_name, yyyyddd(&date));

    let dir = replace_env_var_path( &config.download_dir)?;
    ensure_writable_dir( &dir)?;

    let requests = tiles.iter().map( |t| FetchRequest::for_tile( t, &config.base_url)).collect::<Result<Vec<_>>>()?;

    let client = Client::builder().build()?;
    let progress = new_progress( config.show_progress);
    let report = fetch_all( &client, requests, &dir, config.max_download_threads, &progress).await?;

    if !report.failures.is_empty() {
        warn!("{} of {} downloads failed:\n{}", report.failures.len(), tiles.len(), report.summary());
    }
    info!("{} granules downloaded", report.downloaded.len());

    let no_data = PipelineOutcome::NoData { area: area_name.clone(), date: yyyyddd(&date) };
    if report.is_empty() { return Ok( no_data) }

    let granules = report.downloaded;
    let mosaic_file = dir.join( mosaic_filename( config.product, &area_name, &date, &config.version));
    let cfg = config.clone();

    // GDAL work is blocking
    let mosaic = tokio::task::spawn_blocking( move || process_granules( granules, &mosaic_file, &cfg, granule_to_geotiff))
        .await.map_err( |e| task_error(e))??;

    Ok( match mosaic {
        Some(info) => PipelineOutcome::Mosaic(info),
        None => no_data
    })
}

/// the raster stages for downloaded `granules`: [cloud filter] -> `convert` each granule -> mosaic -> overviews -> cleanup.
/// Returns `None` if the cloud filter rejected all granules. An unsupported overview resampling method is
/// logged but does not fail. With `config.cleanup` set, all granules (including rejected ones), per-tile
/// GeoTIFFs and reprojected files are removed, leaving only the mosaic
pub fn process_granules<F> (granules: Vec<PathBuf>, mosaic_file: &Path, config: &HlsConfig, convert: F) -> Result<Option<MosaicInfo>>
    where F: Fn(&Path)->Result<PathBuf>
{
    let accepted = match config.max_cloud_coverage {
        Some(max_coverage) => {
            let (accepted, rejected) = filter_by_cloud_coverage( granules.clone(), max_coverage)?;
            if !rejected.is_empty() { warn!("{} granules rejected because of cloud coverage", rejected.len()) }
            accepted
        }
        None => granules.clone()
    };
    if accepted.is_empty() {
        if config.cleanup { remove_files( &granules); }
        return Ok(None)
    }

    let mut tifs = Vec::with_capacity( accepted.len());
    for granule in &accepted {
        info!("converting {:?}", granule);
        tifs.push( convert( granule)?);
    }

    info!("merging {} GeoTIFFs", tifs.len());
    let mosaic = merge_tifs( &tifs, mosaic_file, config.merge_policy)?;

    match add_mosaic_overviews( &mosaic.path, &config.overview_levels, &config.resampling) {
        Ok(()) => {}
        Err(e) if e.is_unsupported_resampling() => error!("overviews not added: {}", e),
        Err(e) => return Err(e)
    }

    if config.cleanup {
        let n = remove_files( &granules) + remove_files( &tifs) + remove_files( &mosaic.reprojected);
        info!("removed {} intermediate files", n);
    }

    Ok( Some(mosaic))
}
