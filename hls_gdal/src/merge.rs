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

//! merge several north-up datasets that share a SRS into a single raster covering the union of their
//! extents. The output grid uses the resolution of the first dataset, inputs are resampled (nearest)
//! onto it and composited according to a MergePolicy

use std::path::Path;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use gdal::raster::RasterCreationOptions;

use crate::{Buffer, Dataset, GdalValueType, GeoTransform, RasterInfo, SpatialRef, get_raster_info, gtiff_driver, set_no_data_value};
use crate::errors::{Result, misc_error};

/// how overlapping valid input pixels are combined
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize,ValueEnum)]
pub enum MergePolicy {
    /// the first valid pixel in input order wins. Validity is decided by the nodata value of each input,
    /// a written output pixel is never replaced even if it equals the output fill value (rasterio's
    /// `copy_first` would let a later input overwrite such a pixel)
    #[default]
    First,
    /// the last valid pixel in input order wins
    Last,
    /// the maximum valid pixel wins
    Max,
}

/// merged band data in row-major order
#[derive(Debug)]
pub struct MergedRaster<T> {
    pub width: usize,
    pub height: usize,
    pub geo_transform: GeoTransform,
    pub no_data: T,
    pub bands: Vec<Vec<T>>,
}

struct OutputGrid {
    left: f64,
    top: f64,
    dx: f64,
    dy: f64,
    width: usize,
    height: usize,
}

fn union_grid (infos: &[RasterInfo]) -> Result<OutputGrid> {
    let first = infos.first().ok_or( misc_error("no datasets to merge"))?;
    let dx = first.dx;
    let dy = first.dy;
    if dx <= 0.0 || dy >= 0.0 { return Err( misc_error("merge requires north-up datasets")) }

    let left = infos.iter().map(|i| i.left).fold( f64::INFINITY, f64::min);
    let right = infos.iter().map(|i| i.right).fold( f64::NEG_INFINITY, f64::max);
    let top = infos.iter().map(|i| i.top).fold( f64::NEG_INFINITY, f64::max);
    let bottom = infos.iter().map(|i| i.bottom).fold( f64::INFINITY, f64::min);

    let width = ((right - left) / dx).round() as usize;
    let height = ((top - bottom) / -dy).round() as usize;
    if width == 0 || height == 0 { return Err( misc_error("empty merge extent")) }

    Ok( OutputGrid { left, top, dx, dy, width, height } )
}

/// merge the first `n_bands` bands of all `datasets`. All datasets have to use the same SRS
pub fn merge_datasets<T> (datasets: &[Dataset], n_bands: usize, policy: MergePolicy, no_data: T) -> Result<MergedRaster<T>>
    where T: GdalValueType
{
    let infos = datasets.iter().map( get_raster_info).collect::<Result<Vec<RasterInfo>>>()?;
    let grid = union_grid( &infos)?;

    let n_pixels = grid.width * grid.height;
    let mut bands: Vec<Vec<T>> = (0..n_bands).map( |_| vec![no_data; n_pixels]).collect();
    let mut written: Vec<Vec<bool>> = (0..n_bands).map( |_| vec![false; n_pixels]).collect();

    for (ds,info) in datasets.iter().zip( infos.iter()) {
        if ds.raster_count() < n_bands { return Err( misc_error( format!("dataset has less than {} bands", n_bands))) }

        // target window of this dataset in the output grid
        let col_off = ((info.left - grid.left) / grid.dx).round() as isize;
        let row_off = ((grid.top - info.top) / -grid.dy).round() as isize;
        let win_w = ((info.right - info.left) / grid.dx).round() as usize;
        let win_h = ((info.top - info.bottom) / -grid.dy).round() as usize;
        if win_w == 0 || win_h == 0 { continue }

        for b in 0..n_bands {
            let band = ds.rasterband(b+1)?;
            let src_no_data = band.no_data_value();
            let buf: Buffer<T> = band.read_as::<T>( (0,0), (info.cols,info.rows), (win_w,win_h), None)?;
            let src = buf.data();

            let out = &mut bands[b];
            let done = &mut written[b];

            for r in 0..win_h {
                let row = row_off + r as isize;
                if row < 0 || row >= grid.height as isize { continue }

                for c in 0..win_w {
                    let col = col_off + c as isize;
                    if col < 0 || col >= grid.width as isize { continue }

                    let v = src[r * win_w + c];
                    if src_no_data.is_some_and( |nd| Into::<f64>::into(v) == nd) { continue }

                    let idx = row as usize * grid.width + col as usize;
                    let take = match policy {
                        MergePolicy::First => !done[idx],
                        MergePolicy::Last => true,
                        MergePolicy::Max => !done[idx] || v > out[idx],
                    };
                    if take {
                        out[idx] = v;
                        done[idx] = true;
                    }
                }
            }
        }
    }

    let geo_transform: GeoTransform = [grid.left, grid.dx, 0.0, grid.top, 0.0, grid.dy];
    Ok( MergedRaster { width: grid.width, height: grid.height, geo_transform, no_data, bands } )
}

/// write a merged raster as GeoTIFF
pub fn write_merged<T,P> (merged: MergedRaster<T>, path: P, srs: &SpatialRef, create_opts: Option<RasterCreationOptions>) -> Result<Dataset>
    where T: GdalValueType, P: AsRef<Path>
{
    let driver = gtiff_driver()?;
    let co = create_opts.unwrap_or_else( RasterCreationOptions::new);
    let n_bands = merged.bands.len();
    let (width,height) = (merged.width, merged.height);

    let mut ds = driver.create_with_band_type_with_options::<T,P>( path, width, height, n_bands, &co)?;
    ds.set_geo_transform( &merged.geo_transform)?;
    ds.set_spatial_ref( srs)?;
    set_no_data_value( &ds, Some( Into::<f64>::into(merged.no_data)))?;

    for (i,data) in merged.bands.into_iter().enumerate() {
        let mut band = ds.rasterband(i+1)?;
        let mut buf = Buffer::new( (width,height), data);
        band.write( (0,0), (width,height), &mut buf)?;
    }

    Ok(ds)
}
