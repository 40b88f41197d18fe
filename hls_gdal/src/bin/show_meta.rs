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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use hls_gdal::{Dataset, Metadata, epsg_code, has_rgb_color_interp, overview::{overview_factors, overview_resampling}};

/// show_meta - show size, SRS, color interpretation, overviews and meta information of a GDAL dataset
#[derive(Parser,Debug)]
#[command(version, about)]
struct Args {
    /// path to GDAL dataset to analyze
    path: PathBuf,
}

fn main ()->Result<()> {
    let args = Args::parse();
    let ds = Dataset::open(&args.path)?;

    let (cols,rows) = ds.raster_size();
    println!("raster size: {},{}", cols,rows);
    println!("bands: {}", ds.raster_count());

    match ds.spatial_ref() {
        Ok(srs) => match epsg_code(&srs) {
            Some(code) => println!("srs: EPSG:{}", code),
            None => println!("srs: {}", srs.to_proj4().unwrap_or_default())
        }
        Err(_) => println!("srs: none")
    }

    println!("rgb color interpretation: {}", has_rgb_color_interp(&ds));
    println!("overview factors: {:?}", overview_factors(&ds)?);
    if let Some(method) = overview_resampling(&ds) {
        println!("overview resampling: {}", method);
    }

    show_meta( &ds, 0)?;

    for i in 0..ds.raster_count() {
        let band_id = i+1;
        let band = ds.rasterband( band_id)?;
        println!("--- band {} ({:?}, nodata: {:?})", band_id, band.color_interpretation(), band.no_data_value());
        show_meta( &band, 4)?;
    }

    Ok(())
}

fn show_meta<M> (meta: &M, level: usize)->Result<()> where M: Metadata {
    let indent = " ".repeat(level);

    for domain in meta.metadata_domains() {
        if let Some(items) = meta.metadata_domain( &domain) {
            if !items.is_empty() {
                println!("{}domain: {}", indent, if domain.is_empty() { "<default>" } else { domain.as_str() });
                for item in &items {
                    println!("{}    {}", indent, item);
                }
            }
        }
    }

    Ok(())
}
