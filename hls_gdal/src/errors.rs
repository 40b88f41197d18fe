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

use std::ffi::CStr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HlsGdalError>;

#[derive(Error,Debug)]
pub enum HlsGdalError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    // pass through for errors in gdal crate
    #[error("gdal error {0}")]
    GdalError( #[from] gdal::errors::GdalError),

    #[error("GDAL CPL error {0}")]
    CplError( String ),

    #[error("unsupported resampling method: {0}")]
    UnsupportedResampling( String ),

    #[error("Misc error {0}")]
    MiscError( String ),
}

pub fn misc_error (msg: impl ToString)->HlsGdalError {
    HlsGdalError::MiscError(msg.to_string())
}

/// turn the last error recorded by GDAL into a HlsGdalError. Use this after direct gdal_sys calls
pub fn last_gdal_error ()->HlsGdalError {
    let msg = unsafe {
        let p = gdal_sys::CPLGetLastErrorMsg();
        if p.is_null() { String::new() } else { CStr::from_ptr(p).to_string_lossy().to_string() }
    };
    if msg.is_empty() {
        HlsGdalError::CplError("unknown GDAL error".to_string())
    } else {
        HlsGdalError::CplError(msg)
    }
}
