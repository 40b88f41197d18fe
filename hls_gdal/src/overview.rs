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

//! internal overview (pyramid) generation for GeoTIFFs. The resampling method that was used is
//! recorded as metadata item `resampling` in the `rio_overview` domain, which is where rasterio
//! based readers look for it

use std::{fmt, path::Path, str::FromStr};
use tracing::debug;

use crate::{Dataset, Metadata, open_update};
use crate::errors::{Result, HlsGdalError, misc_error};

pub const OVERVIEW_DOMAIN: &str = "rio_overview";
pub const OVERVIEW_RESAMPLING_KEY: &str = "resampling";

pub const DEFAULT_OVERVIEW_LEVELS: [i32;4] = [2, 4, 6, 12];
pub const DEFAULT_OVERVIEW_RESAMPLING: &str = "cubic";

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ResamplingMethod {
    Nearest,
    Cubic,
    Average,
    CubicSpline,
    Gauss,
    Mode,
    Lanczos,
}

impl ResamplingMethod {
    pub const ALL: [ResamplingMethod;7] = [
        ResamplingMethod::Nearest, ResamplingMethod::Cubic, ResamplingMethod::Average, ResamplingMethod::CubicSpline,
        ResamplingMethod::Gauss, ResamplingMethod::Mode, ResamplingMethod::Lanczos
    ];

    /// the name we accept and record in the overview tag
    pub fn name (&self) -> &'static str {
        match self {
            ResamplingMethod::Nearest => "nearest",
            ResamplingMethod::Cubic => "cubic",
            ResamplingMethod::Average => "average",
            ResamplingMethod::CubicSpline => "cubic-spline",
            ResamplingMethod::Gauss => "gauss",
            ResamplingMethod::Mode => "mode",
            ResamplingMethod::Lanczos => "lanczos",
        }
    }

    /// the name GDALBuildOverviews expects
    pub fn gdal_name (&self) -> &'static str {
        match self {
            ResamplingMethod::Nearest => "NEAREST",
            ResamplingMethod::Cubic => "CUBIC",
            ResamplingMethod::Average => "AVERAGE",
            ResamplingMethod::CubicSpline => "CUBICSPLINE",
            ResamplingMethod::Gauss => "GAUSS",
            ResamplingMethod::Mode => "MODE",
            ResamplingMethod::Lanczos => "LANCZOS",
        }
    }
}

impl FromStr for ResamplingMethod {
    type Err = HlsGdalError;

    fn from_str (s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResamplingMethod::Nearest),
            "cubic" => Ok(ResamplingMethod::Cubic),
            "average" => Ok(ResamplingMethod::Average),
            "cubic-spline" | "cubic_spline" | "cubicspline" => Ok(ResamplingMethod::CubicSpline),
            "gauss" => Ok(ResamplingMethod::Gauss),
            "mode" => Ok(ResamplingMethod::Mode),
            "lanczos" => Ok(ResamplingMethod::Lanczos),
            _ => Err( HlsGdalError::UnsupportedResampling(s.to_string()))
        }
    }
}

impl fmt::Display for ResamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// build internal overviews for all bands of the GeoTIFF at `path` and record the resampling method.
/// Method and levels are checked before the file is opened, i.e. invalid arguments leave the file untouched.
/// Running this again with the same arguments regenerates the same levels
pub fn add_overviews (path: impl AsRef<Path>, levels: &[i32], method: &str) -> Result<()> {
    let method: ResamplingMethod = method.parse()?;
    if levels.is_empty() { return Err( misc_error("no overview levels")) }
    if let Some(lvl) = levels.iter().find( |l| **l < 2) { return Err( misc_error( format!("invalid overview level {lvl}"))) }

    let path = path.as_ref();
    let mut ds = open_update( path)?;

    debug!("building overviews {:?} ({}) for {:?}", levels, method, path);
    ds.build_overviews( method.gdal_name(), levels, &[])?;
    ds.set_metadata_item( OVERVIEW_RESAMPLING_KEY, method.name(), OVERVIEW_DOMAIN)?;

    Ok(())
}

/// the resampling method recorded by `add_overviews`, if any
pub fn overview_resampling (ds: &Dataset) -> Option<String> {
    ds.metadata_item( OVERVIEW_RESAMPLING_KEY, OVERVIEW_DOMAIN)
}

/// decimation factors of the overviews of the first band
pub fn overview_factors (ds: &Dataset) -> Result<Vec<usize>> {
    let band = ds.rasterband(1)?;
    let (width,_) = band.size();
    let n = band.overview_count()?;

    let mut factors = Vec::with_capacity( n.max(0) as usize);
    for i in 0..n {
        let ov = band.overview( i as _)?;
        let (ov_width,_) = ov.size();
        if ov_width > 0 {
            factors.push( (width as f64 / ov_width as f64).round() as usize);
        }
    }
    Ok(factors)
}
