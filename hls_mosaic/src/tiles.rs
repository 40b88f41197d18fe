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

//! HLS product codes, tile identifiers and the file/URL names derived from them.
//!
//! HLS v1.4 granules are named
//! ```text
//!     HLS.<product>.<grid-cell>.<yyyyddd>.v<version>.hdf      e.g. HLS.S30.T16XEP.2020202.v1.4.hdf
//! ```
//! with `<product>` being "L30" (Landsat 8) or "S30" (Sentinel-2), `<grid-cell>` a "T" prefixed
//! MGRS tile id (2 digit UTM zone, latitude band, 2 letter 100km square) and `<yyyyddd>` the
//! year and day-of-year of the acquisition

use std::{fmt, path::Path, str::FromStr};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use hls_common::{if_let, datetime::{parse_compact_date, parse_yyyyddd, yyyyddd}};
use crate::errors::{Result, HlsError};

pub const DEFAULT_VERSION: &str = "1.4";
pub const GRANULE_EXT: &str = "hdf";

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize,ValueEnum)]
pub enum Product {
    /// Landsat 8 OLI at 30m
    #[value(name = "L30")]
    L30,
    /// Sentinel-2 MSI at 30m
    #[default]
    #[value(name = "S30")]
    S30,
}

impl Product {
    pub fn code (&self) -> &'static str {
        match self {
            Product::L30 => "L30",
            Product::S30 => "S30",
        }
    }

    /// HDF subdataset names of the red, green and blue bands
    pub fn rgb_bands (&self) -> [&'static str;3] {
        match self {
            Product::L30 => ["band04", "band03", "band02"],
            Product::S30 => ["B04", "B03", "B02"],
        }
    }

    /// product family as identified by the first letter of its code
    pub fn from_family_letter (c: char) -> Result<Product> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Product::L30),
            'S' => Ok(Product::S30),
            _ => Err( HlsError::UnsupportedProduct(c.to_string()))
        }
    }
}

impl FromStr for Product {
    type Err = HlsError;

    fn from_str (s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L30" => Ok(Product::L30),
            "S30" => Ok(Product::S30),
            _ => Err( HlsError::UnsupportedProduct(s.to_string()))
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// a single granule to retrieve
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct TileId {
    pub product: Product,
    pub grid_cell: String,
    pub date: NaiveDate,
    pub version: String,
}

impl TileId {
    pub fn filename (&self) -> String {
        format!("HLS.{}.{}.{}.v{}.{}", self.product, self.grid_cell, yyyyddd(&self.date), self.version, GRANULE_EXT)
    }

    /// URL of this granule within the archive rooted at `base_url`. This requires a complete grid cell id
    /// ("T" + zone digits + latitude band + 100km square letters)
    pub fn remote_url (&self, base_url: &str) -> Result<String> {
        let c = &self.grid_cell;
        if c.len() < 6 || !c.is_ascii() { return Err( HlsError::InvalidGridCell( c.clone())) }

        Ok( format!("{}/{}/{}/{}/{}/{}/{}/{}", base_url.trim_end_matches('/'), self.product, self.date.year(),
                    &c[1..3], &c[3..4], &c[4..5], &c[5..6], self.filename()) )
    }
}

/// create the tile ids for all `grid_cells` at `date` ("YYYYDDD", "YYYYMMDD", with or without separators).
/// Product and version default to S30 and "1.4"
pub fn generate_tile_ids<S: AsRef<str>> (grid_cells: &[S], date: &str, product: Option<&str>, version: Option<&str>) -> Result<Vec<TileId>> {
    let product = match product {
        Some(p) => p.parse::<Product>()?,
        None => Product::default()
    };
    let date = parse_compact_date(date).ok_or_else( || HlsError::InvalidDate(date.to_string()))?;
    let version = version.unwrap_or(DEFAULT_VERSION);

    Ok( grid_cells.iter().map( |cell| {
        TileId { product, grid_cell: cell.as_ref().to_string(), date, version: version.to_string() }
    }).collect() )
}

/// granule filenames for all `grid_cells` at `date`, in input order
pub fn generate_tile_names<S: AsRef<str>> (grid_cells: &[S], date: &str, product: Option<&str>, version: Option<&str>) -> Result<Vec<String>> {
    Ok( generate_tile_ids( grid_cells, date, product, version)?.iter().map( |t| t.filename()).collect() )
}

/// name of the mosaic file for an area
pub fn mosaic_filename (product: Product, area: &str, date: &NaiveDate, version: &str) -> String {
    format!("HLS.{}.{}.{}.v{}.tif", product, area, yyyyddd(date), version)
}

lazy_static! {
    // HLS.<product>.<grid-cell>.<yyyyddd>.v<version>[_reproj][.<ext>]
    static ref GRANULE_RE: Regex = Regex::new(r#"^HLS\.([^.]+)\.([^.]+)\.(\d{7})\.v(\d+(?:\.\d+)*)(?:_reproj)?(?:\.[A-Za-z0-9]+)?$"#).unwrap();
}

/// identification of a granule (or a file derived from it) as encoded in its filename
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct GranuleName {
    pub product: Product,
    pub grid_cell: String,
    pub date: NaiveDate,
    pub version: String,
}

impl GranuleName {
    pub fn parse (path: impl AsRef<Path>) -> Result<GranuleName> {
        let path = path.as_ref();
        let invalid = || HlsError::InvalidGranuleName( path.display().to_string());
        let filename = path.file_name().and_then(|f| f.to_str()).ok_or_else(invalid)?;

        if_let! {
            Some(cap) = GRANULE_RE.captures(filename),
            Some(c) = cap[1].chars().next(),
            Some(date) = parse_yyyyddd(&cap[3]) => {
                let product = Product::from_family_letter(c)?;
                let grid_cell = cap[2].to_string();
                if grid_cell.len() < 3 || !grid_cell.is_ascii() { return Err(invalid()) }
                return Ok( GranuleName { product, grid_cell, date, version: cap[4].to_string() } )
            }
        }
        Err( invalid())
    }

    /// the 2 digit UTM zone code of the grid cell (e.g. "16" for "T16XEP")
    pub fn zone (&self) -> &str {
        &self.grid_cell[1..3]
    }
}
