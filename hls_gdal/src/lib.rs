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

//! thin layer over the gdal crate that provides the raster operations used by the HLS pipeline:
//! dataset creation with tiled/compressed GeoTIFF options, band copies with type conversion,
//! RGB color interpretation, reprojection, merging and overviews

pub mod errors;
pub mod warp;
pub mod merge;
pub mod overview;

use std::{path::Path, sync::Mutex};
use gdal::{raster::RasterCreationOptions, DatasetOptions, GdalOpenFlags};
use trait_set::trait_set;

// we re-export these so that other crates don't have to use a direct gdal dependency to import.
pub use gdal::{self, Driver, DriverManager, Metadata, Dataset, errors::GdalError, GeoTransform, cpl::CslStringList};
pub use gdal::raster::{GdalType,GdalDataType,RasterBand,Buffer,ColorInterpretation};
pub use gdal::spatial_ref::SpatialRef;

use gdal_sys::CPLErr;
use crate::errors::{Result, misc_error, last_gdal_error, HlsGdalError};

/// use this to protect non-threadsafe GDAL error handler manipulation
static GLOB_GDAL_MUTEX: Mutex<usize> = Mutex::new(0);

/// band order of RGB datasets
pub const RGB_INTERP: [ColorInterpretation;3] = [
    ColorInterpretation::RedBand, ColorInterpretation::GreenBand, ColorInterpretation::BlueBand
];

trait_set! {
    pub trait GdalValueType = std::fmt::Debug + Copy + PartialOrd + Into<f64> + GdalType;
}

pub fn ok_ce_none (res: CPLErr::Type) -> Result<()> {
    if res == CPLErr::CE_None { Ok(()) } else { Err(last_gdal_error()) }
}

pub fn open_update<P:AsRef<Path>> (path: P)->Result<Dataset> {
    let dso = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_UPDATE,
        allowed_drivers: None,
        open_options: None,
        sibling_files: None
    };
    Ok( Dataset::open_ex(path, dso)? )
}

/// run the provided closure with the global GDAL error handler disabled. Note this does not
/// change the return value but prevents GDAL from printing errors and warnings to the console
pub fn run_quiet<T,F> (f: F)->Result<T> where F: Fn()->Result<T> {
    let _lock = GLOB_GDAL_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    unsafe { gdal_sys::CPLPushErrorHandler( Some(gdal_sys::CPLQuietErrorHandler)); }
    let result = f();
    unsafe { gdal_sys::CPLPopErrorHandler(); }
    result
}

/* #region spatial refs *********************************************************************************/

pub fn srs_epsg (epsg: u32) -> Result<SpatialRef> {
    Ok(SpatialRef::from_epsg(epsg)?)
}

/// the EPSG code of a spatial reference, if it has an EPSG authority
pub fn epsg_code (srs: &SpatialRef) -> Option<u32> {
    match (srs.auth_name(), srs.auth_code()) {
        (Some(name), Ok(code)) if name.eq_ignore_ascii_case("EPSG") && code > 0 => Some(code as u32),
        _ => None
    }
}

/* #endregion spatial refs */

/* #region dataset creation and band access *************************************************************/

/// GeoTIFF creation options for DEFLATE compressed, internally tiled output
pub fn tiled_deflate_create_opts (block_size: usize)->RasterCreationOptions {
    let block = block_size.to_string();
    let mut co = RasterCreationOptions::new();
    co.add_name_value("COMPRESS", "DEFLATE");
    co.add_name_value("TILED", "YES");
    co.add_name_value("BLOCKXSIZE", &block);
    co.add_name_value("BLOCKYSIZE", &block);
    co
}

pub fn gtiff_driver ()->Result<Driver> {
    Ok( DriverManager::get_driver_by_name("GTiff")? )
}

pub fn create_dataset<P> (driver: &Driver, path: P, width: usize, height: usize, n_bands: usize, data_type: GdalDataType, co: Option<RasterCreationOptions>)->Result<Dataset>
    where P: AsRef<Path>
{
    use GdalDataType::*;
    let co = co.unwrap_or_else( RasterCreationOptions::new);

    match data_type {
        UInt8   => Ok( driver.create_with_band_type_with_options::<u8,P>(path, width, height, n_bands, &co)? ),
        UInt16  => Ok( driver.create_with_band_type_with_options::<u16,P>(path, width, height, n_bands, &co)? ),
        UInt32  => Ok( driver.create_with_band_type_with_options::<u32,P>(path, width, height, n_bands, &co)? ),
        Int8    => Ok( driver.create_with_band_type_with_options::<i8,P>(path, width, height, n_bands, &co)? ),
        Int16   => Ok( driver.create_with_band_type_with_options::<i16,P>(path, width, height, n_bands, &co)? ),
        Int32   => Ok( driver.create_with_band_type_with_options::<i32,P>(path, width, height, n_bands, &co)? ),
        Float32 => Ok( driver.create_with_band_type_with_options::<f32,P>(path, width, height, n_bands, &co)? ),
        Float64 => Ok( driver.create_with_band_type_with_options::<f64,P>(path, width, height, n_bands, &co)? ),
        _ => Err( HlsGdalError::MiscError( format!("unsupported GDAL data type {data_type:?}")))
    }
}

/// copy a full rasterband line-by-line, letting GDAL convert source values into `T`.
/// Both bands have to have the same size
pub fn copy_band_as <T: Copy + GdalType> (src: &RasterBand, tgt: &mut RasterBand, init: T)->Result<()> {
    let (width,height) = tgt.size();
    if src.size() != (width,height) { return Err( misc_error("different rasterband sizes")) }

    let mut line: Buffer<T> = Buffer::new((width,1), vec![init; width]);

    for j in 0..height {
        src.read_into_slice( (0, j as isize), (width,1), (width,1), line.data_mut(), None)?;
        tgt.write( (0, j as isize), (width,1), &mut line)?;
    }

    Ok(())
}

/// tag the first three bands as red, green and blue
pub fn set_rgb_color_interp (ds: &Dataset)->Result<()> {
    if ds.raster_count() < 3 { return Err( misc_error("not a RGB dataset")) }

    for (i,interp) in RGB_INTERP.into_iter().enumerate() {
        let mut band = ds.rasterband(i+1)?;
        band.set_color_interpretation( interp)?;
    }
    Ok(())
}

/// true if the first three bands are tagged as red, green and blue
pub fn has_rgb_color_interp (ds: &Dataset)->bool {
    ds.raster_count() >= 3 && RGB_INTERP.iter().enumerate().all( |(i,interp)| {
        ds.rasterband(i+1).map( |band| band.color_interpretation() == *interp).unwrap_or(false)
    })
}

/// set (or clear) the nodata value of all bands
pub fn set_no_data_value (ds: &Dataset, no_data: Option<f64>)->Result<()> {
    for i in 1..=ds.raster_count() {
        let mut band = ds.rasterband(i)?;
        band.set_no_data_value( no_data)?;
    }
    Ok(())
}

#[derive(Debug,Clone,PartialEq)]
pub struct RasterInfo {
    pub cols: usize,
    pub left: f64,
    pub right: f64,
    pub dx: f64,

    pub rows: usize,
    pub top: f64,
    pub bottom: f64,
    pub dy: f64 // negative for north-up rasters
}

/// extent and resolution of a north-up dataset
pub fn get_raster_info (ds: &Dataset)->Result<RasterInfo> {
    let (cols,rows) = ds.raster_size();
    let a = ds.geo_transform()?;
    if a[2] != 0.0 || a[4] != 0.0 { return Err( misc_error("rotated geotransforms not supported")) }

    let left = a[0];
    let dx = a[1];
    let right = left + (dx * cols as f64);

    let top = a[3];
    let dy = a[5];
    let bottom = top + (dy * rows as f64);

    Ok( RasterInfo { cols, left, right, dx, rows, top, bottom, dy } )
}

/* #endregion dataset creation and band access */
