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

//! common utility functions for network operations

use std::{fs::File, io::Write, path::Path};
use reqwest::{Client, StatusCode};

use crate::define_error;

define_error!{ pub HlsNetError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    HttpStatus(u16,String) : "HTTP-{0}: {1}"
}

pub type Result<T> = std::result::Result<T, HlsNetError>;

impl HlsNetError {
    /// the HTTP status code if this error was caused by a non-success response
    pub fn status (&self) -> Option<u16> {
        match self {
            HlsNetError::HttpStatus(code,_) => Some(*code),
            HlsNetError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None
        }
    }
}

pub fn status_error (status: StatusCode) -> HlsNetError {
    HlsNetError::HttpStatus( status.as_u16(), status.canonical_reason().unwrap_or("unknown status").to_string())
}

/// fetch file from URL using HTTP GET method. Retrieve in chunks to support large files.
/// The local file is only created once the server responded with a success status, so failed
/// requests do not leave empty files behind. A transfer that breaks off mid-stream leaves the
/// partial file in place.
/// `on_chunk` is called with (bytes received so far, content length if known) after each chunk
pub async fn download_url<F> (client: &Client, url: &str, path: impl AsRef<Path>, mut on_chunk: F) -> Result<u64>
    where F: FnMut(u64,Option<u64>)
{
    let mut response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err( status_error(status))
    }

    let content_length = response.content_length();
    let mut file = File::create(path)?;
    let mut len: u64 = 0;

    while let Some(chunk) = response.chunk().await? {
        len += chunk.len() as u64;
        file.write_all(&chunk)?;
        on_chunk( len, content_length);
    }

    file.flush()?;
    Ok(len)
}
