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

//! CRS reconciliation and mosaicking of per-tile GeoTIFFs

use std::{fs, path::{Path,PathBuf}};
use tracing::{info, warn};

use hls_common::fs::with_stem_suffix;
use hls_gdal::{Dataset, SpatialRef, epsg_code, set_rgb_color_interp, tiled_deflate_create_opts};
use hls_gdal::merge::{MergePolicy, merge_datasets, write_merged};
use hls_gdal::warp::{ResampleAlg, reproject_dataset};
use crate::convert::BLOCK_SIZE;
use crate::errors::{Result, HlsError};

pub const REPROJ_SUFFIX: &str = "_reproj";

/// nodata value of reprojected and mosaic files
pub const MOSAIC_NO_DATA: i16 = 0;

/// index of the first occurrence of the most frequent value in `items`, using `eq` to identify values.
/// Ties are broken in favor of the value that was encountered first
pub fn majority_index<T,F> (items: &[T], eq: F) -> Option<usize> where F: Fn(&T,&T)->bool {
    let mut classes: Vec<(usize,usize)> = Vec::new(); // (first index, count) in order of first occurrence

    for (i,item) in items.iter().enumerate() {
        match classes.iter_mut().find( |(first,_)| eq( &items[*first], item)) {
            Some((_,count)) => *count += 1,
            None => classes.push( (i,1))
        }
    }

    let mut best: Option<(usize,usize)> = None;
    for (first,count) in classes {
        if best.map_or( true, |(_,best_count)| count > best_count) {
            best = Some((first,count));
        }
    }
    best.map( |(first,_)| first)
}

/// reproject `tif` into `dst_srs` (cubic resampling, nodata 0) and store the result as `<stem>_reproj.tif`
pub fn reproject_tif (tif: &Path, dst_srs: &SpatialRef) -> Result<PathBuf> {
    let out = with_stem_suffix( tif, REPROJ_SUFFIX, "tif")?;
    let src = Dataset::open( tif)?;

    reproject_dataset( &src, dst_srs, &out, ResampleAlg::Cubic,
                       Some( tiled_deflate_create_opts( BLOCK_SIZE)), Some( MOSAIC_NO_DATA as f64))?;

    info!("reprojected {:?} -> {:?}", tif, out);
    Ok(out)
}

#[derive(Debug,Clone)]
pub struct MosaicInfo {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub epsg: Option<u32>,
    /// the `_reproj` files that were created for minority CRS inputs
    pub reprojected: Vec<PathBuf>,
}

fn srs_label (srs: &SpatialRef) -> String {
    match epsg_code(srs) {
        Some(code) => format!("EPSG:{}", code),
        None => srs.to_proj4().unwrap_or_else( |_| "<unknown>".to_string())
    }
}

/// merge `tifs` into a single RGB int16 GeoTIFF at `mosaic_file`.
/// All inputs are brought into the most frequent CRS among them before merging, the output covers
/// the union of all inputs at the resolution of the first one
pub fn merge_tifs (tifs: &[PathBuf], mosaic_file: &Path, policy: MergePolicy) -> Result<MosaicInfo> {
    if tifs.is_empty() { return Err( HlsError::EmptyInput("no GeoTIFFs to merge".to_string())) }

    let mut datasets = Vec::with_capacity( tifs.len());
    for tif in tifs {
        datasets.push( Dataset::open( tif)?);
    }

    let srs_list = datasets.iter().map( |ds| ds.spatial_ref()).collect::<std::result::Result<Vec<SpatialRef>,_>>()?;
    let major = majority_index( &srs_list, |a,b| a == b).ok_or_else( || HlsError::EmptyInput("no CRS".to_string()))?;
    let dst_srs = srs_list[major].clone();
    info!("mosaic CRS is {} ({} inputs)", srs_label(&dst_srs), tifs.len());

    let mut reprojected = Vec::new();
    for (i,srs) in srs_list.iter().enumerate() {
        if *srs != dst_srs {
            info!("{:?} uses {}, reprojecting", tifs[i], srs_label(srs));
            let path = reproject_tif( &tifs[i], &dst_srs)?;
            datasets[i] = Dataset::open( &path)?;
            reprojected.push( path);
        }
    }

    let merged = merge_datasets::<i16>( &datasets, 3, policy, MOSAIC_NO_DATA)?;
    let (width,height) = (merged.width, merged.height);

    if mosaic_file.exists() {
        warn!("{:?} already exists, overwriting", mosaic_file);
        fs::remove_file( mosaic_file)?;
    }

    let ds = write_merged( merged, mosaic_file, &dst_srs, Some( tiled_deflate_create_opts( BLOCK_SIZE)))?;
    set_rgb_color_interp( &ds)?;

    info!("mosaic {:?} ({}x{}) written", mosaic_file, width, height);
    Ok( MosaicInfo { path: mosaic_file.to_path_buf(), width, height, epsg: epsg_code(&dst_srs), reprojected } )
}
