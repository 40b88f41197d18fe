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

use thiserror::Error;
use hls_common::{config::HlsConfigError, net::HlsNetError};
use hls_gdal::errors::HlsGdalError;

pub type Result<T> = std::result::Result<T, HlsError>;

#[derive(Error,Debug)]
pub enum HlsError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("unsupported product {0}")]
    UnsupportedProduct( String ),

    #[error("invalid date {0}")]
    InvalidDate( String ),

    #[error("invalid grid cell {0}")]
    InvalidGridCell( String ),

    #[error("invalid granule name {0}")]
    InvalidGranuleName( String ),

    #[error("unknown UTM zone {0}")]
    UnknownZone( String ),

    #[error("unknown area {0}")]
    UnknownArea( String ),

    #[error("no input files: {0}")]
    EmptyInput( String ),

    #[error("unsupported resampling method {0}")]
    UnsupportedResampling( String ),

    #[error("net error {0}")]
    NetError( #[from] HlsNetError),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("config error {0}")]
    ConfigError( #[from] HlsConfigError),

    #[error("raster error {0}")]
    RasterError( #[from] HlsGdalError),

    // pass through for errors in gdal crate
    #[error("gdal error {0}")]
    GdalError( #[from] hls_gdal::GdalError),

    #[error("task error {0}")]
    TaskError( String ),
}

impl HlsError {
    /// errors of the overview stage that are reported but do not fail the pipeline
    pub fn is_unsupported_resampling (&self) -> bool {
        matches!( self, HlsError::UnsupportedResampling(_) | HlsError::RasterError(HlsGdalError::UnsupportedResampling(_)))
    }
}

pub fn task_error (msg: impl ToString)->HlsError {
    HlsError::TaskError(msg.to_string())
}
