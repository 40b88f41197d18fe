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

//! reprojection of complete datasets into a target SRS, using GDAL's suggested output
//! geometry (transformed source bounds at source resolution)

use std::{ffi::CString, path::Path, ptr::{null, null_mut}};
use libc::c_int;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use gdal::raster::RasterCreationOptions;
use gdal_sys::GDALResampleAlg;

use crate::{Dataset, SpatialRef, create_dataset, gtiff_driver, ok_ce_none, set_no_data_value};
use crate::errors::{Result, misc_error, last_gdal_error};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize,ValueEnum)]
pub enum ResampleAlg {
    NearestNeighbour,
    Bilinear,
    Cubic,
    CubicSpline,
    Lanczos,
    Average,
    Mode,
}

impl ResampleAlg {
    pub fn to_gdal (&self) -> GDALResampleAlg::Type {
        match self {
            ResampleAlg::NearestNeighbour => GDALResampleAlg::GRA_NearestNeighbour,
            ResampleAlg::Bilinear => GDALResampleAlg::GRA_Bilinear,
            ResampleAlg::Cubic => GDALResampleAlg::GRA_Cubic,
            ResampleAlg::CubicSpline => GDALResampleAlg::GRA_CubicSpline,
            ResampleAlg::Lanczos => GDALResampleAlg::GRA_Lanczos,
            ResampleAlg::Average => GDALResampleAlg::GRA_Average,
            ResampleAlg::Mode => GDALResampleAlg::GRA_Mode,
        }
    }
}

/// compute the default output geotransform and size (cols,rows) for warping `src` into `tgt_srs`
pub fn suggested_warp_output (src: &Dataset, tgt_srs: &SpatialRef) -> Result<([f64;6],usize,usize)> {
    let tgt_wkt = CString::new( tgt_srs.to_wkt()?).map_err(|e| misc_error(e))?;
    let mut geo_transform: [f64;6] = [0.0; 6];
    let mut n_pixels: c_int = 0;
    let mut n_lines: c_int = 0;

    unsafe {
        let h_src = src.c_dataset();
        let transformer = gdal_sys::GDALCreateGenImgProjTransformer( h_src, null(), null_mut(), tgt_wkt.as_ptr(), 0, 0.0, 0);
        if transformer.is_null() { return Err( last_gdal_error()) }

        let res = gdal_sys::GDALSuggestedWarpOutput( h_src, Some(gdal_sys::GDALGenImgProjTransform), transformer,
                                                     geo_transform.as_mut_ptr(), &mut n_pixels, &mut n_lines);
        gdal_sys::GDALDestroyGenImgProjTransformer( transformer);
        ok_ce_none(res)?;
    }

    if n_pixels <= 0 || n_lines <= 0 { return Err( misc_error("empty warp output")) }
    Ok( (geo_transform, n_pixels as usize, n_lines as usize) )
}

/// reproject all bands of `src` into a new GeoTIFF at `path` that uses `tgt_srs`.
/// The output keeps the band count and type of the source. If `no_data` is set it becomes
/// the nodata value of all output bands (and the fill value for areas not covered by `src`)
pub fn reproject_dataset<P: AsRef<Path>> (src: &Dataset, tgt_srs: &SpatialRef, path: P, alg: ResampleAlg,
                                          create_opts: Option<RasterCreationOptions>, no_data: Option<f64>) -> Result<Dataset>
{
    let n_bands = src.raster_count();
    if n_bands == 0 { return Err( misc_error("no rasterbands to reproject")) }
    let band_type = src.rasterband(1)?.band_type();

    let (geo_transform, cols, rows) = suggested_warp_output( src, tgt_srs)?;

    let driver = gtiff_driver()?;
    let mut tgt = create_dataset( &driver, path, cols, rows, n_bands, band_type, create_opts)?;
    tgt.set_geo_transform( &geo_transform)?;
    tgt.set_spatial_ref( tgt_srs)?;
    if no_data.is_some() { set_no_data_value( &tgt, no_data)?; }

    let res = unsafe {
        gdal_sys::GDALReprojectImage( src.c_dataset(), null(), tgt.c_dataset(), null(),
                                      alg.to_gdal(), 0.0, 0.125, None, null_mut(), null_mut())
    };
    ok_ce_none(res)?;

    Ok(tgt)
}
