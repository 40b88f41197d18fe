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

//! conversion of HLS HDF4 granules into 3-band (RGB) int16 GeoTIFFs

use std::{collections::HashMap, fs, path::{Path,PathBuf}};
use lazy_static::lazy_static;
use tracing::{info, warn};

use hls_common::fs::with_stem_suffix;
use hls_gdal::{Dataset, GdalDataType, SpatialRef, copy_band_as, create_dataset, gtiff_driver, run_quiet,
               set_rgb_color_interp, srs_epsg, tiled_deflate_create_opts};
use crate::errors::{Result, HlsError};
use crate::tiles::GranuleName;

/// internal tile size of all GeoTIFFs we produce
pub const BLOCK_SIZE: usize = 256;

lazy_static! {
    // the UTM zones (north) of the grid cells we process -> EPSG code
    static ref ZONE_EPSG: HashMap<&'static str,u32> = HashMap::from( [
        ("08", 32608),
        ("15", 32615),
        ("16", 32616),
        ("29", 32629),
        ("30", 32630),
    ]);
}

pub fn zone_epsg (zone: &str) -> Result<u32> {
    ZONE_EPSG.get( zone).copied().ok_or_else( || HlsError::UnknownZone( zone.to_string()))
}

pub fn zone_srs (zone: &str) -> Result<SpatialRef> {
    Ok( srs_epsg( zone_epsg( zone)?)? )
}

/// GDAL name of a HDF-EOS grid field within a granule
pub fn subdataset_name (granule: &Path, band: &str) -> String {
    format!("HDF4_EOS:EOS_GRID:{}:Grid:{}", granule.display(), band)
}

/// convert the granule at `granule` into `<stem>.tif` in the same directory.
/// The SRS is taken from the UTM zone of the grid cell, not from the granule
pub fn granule_to_geotiff (granule: &Path) -> Result<PathBuf> {
    let name = GranuleName::parse( granule)?;
    let srs = zone_srs( name.zone())?;
    let sources = name.product.rgb_bands().map( |band| subdataset_name( granule, band));
    let out = with_stem_suffix( granule, "", "tif")?;

    rgb_geotiff_from_sources( &sources, &srs, &out)?;
    Ok(out)
}

/// write the first bands of the red, green and blue `sources` into a DEFLATE compressed, tiled int16
/// GeoTIFF. Geometry is taken from the red source, nodata is left unset. An existing `out` file is replaced
pub fn rgb_geotiff_from_sources (sources: &[String;3], srs: &SpatialRef, out: &Path) -> Result<()> {
    let mut datasets: Vec<Dataset> = Vec::with_capacity(3);
    for src in sources {
        datasets.push( run_quiet( || Ok( Dataset::open( src)? ))?);
    }

    let template = &datasets[0];
    let (width,height) = template.raster_size();
    let geo_transform = template.geo_transform()?;

    for (ds,src) in datasets.iter().zip( sources.iter()).skip(1) {
        if ds.raster_size() != (width,height) {
            return Err( HlsError::RasterError( hls_gdal::errors::misc_error( format!("{} has a different size than {}", src, sources[0]))))
        }
    }

    if out.exists() {
        warn!("{:?} already exists, overwriting", out);
        fs::remove_file( out)?;
    }

    let driver = gtiff_driver()?;
    let mut tgt = create_dataset( &driver, out, width, height, 3, GdalDataType::Int16, Some( tiled_deflate_create_opts( BLOCK_SIZE)))?;
    tgt.set_geo_transform( &geo_transform)?;
    tgt.set_spatial_ref( srs)?;

    for (i,src) in datasets.iter().enumerate() {
        let src_band = src.rasterband(1)?;
        let mut tgt_band = tgt.rasterband(i+1)?;
        copy_band_as::<i16>( &src_band, &mut tgt_band, 0)?;
    }
    set_rgb_color_interp( &tgt)?;

    info!("wrote {:?} ({}x{})", out, width, height);
    Ok(())
}
