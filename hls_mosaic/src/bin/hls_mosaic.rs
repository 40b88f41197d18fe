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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hls_common::config::load_config_path;
use hls_mosaic::{load_config, run_pipeline, AreaTable, HlsConfig, PipelineOutcome, Product};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "download HLS tiles of an area for a given date and merge them into a RGB GeoTIFF mosaic")]
pub struct Args {
    /// pathname of HLS config file to use (default: hls.ron lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// pathname of area table to use (default: areas.ron lookup)
    #[arg(long)]
    pub areas: Option<PathBuf>,

    /// product to retrieve (overrides config)
    #[arg(long, value_enum)]
    pub product: Option<Product>,

    /// product version (overrides config)
    #[arg(long)]
    pub product_version: Option<String>,

    /// directory for downloads and output (overrides config)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// max number of concurrent downloads (overrides config)
    #[arg(long)]
    pub threads: Option<usize>,

    /// overview resampling method (overrides config)
    #[arg(long)]
    pub resampling: Option<String>,

    /// keep granules and intermediate GeoTIFFs
    #[arg(long)]
    pub keep: bool,

    /// name of the area of interest (unknown names use the default area)
    pub area: String,

    /// acquisition date as YYYYDDD or YYYYMMDD (separators are ignored)
    pub date: String,
}

fn get_config (args: &Args)->Result<HlsConfig> {
    let mut config: HlsConfig = match &args.config {
        Some(path) => load_config_path( path)?,
        None => load_config("hls.ron").unwrap_or_else( |e| {
            warn!("using default config ({})", e);
            HlsConfig::default()
        })
    };

    if let Some(product) = args.product { config.product = product }
    if let Some(version) = &args.product_version { config.version = version.clone() }
    if let Some(dir) = &args.out_dir { config.download_dir = dir.clone() }
    if let Some(n) = args.threads { config.max_download_threads = n }
    if let Some(method) = &args.resampling { config.resampling = method.clone() }
    if args.keep { config.cleanup = false }

    Ok(config)
}

fn get_areas (args: &Args)->Result<AreaTable> {
    Ok( match &args.areas {
        Some(path) => load_config_path( path)?,
        None => load_config("areas.ron").unwrap_or_else( |e| {
            warn!("using default area table ({})", e);
            AreaTable::default()
        })
    })
}

#[tokio::main]
async fn main()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = get_config( &args)?;
    let areas = get_areas( &args)?;

    println!("retrieving {} tiles of {} for {} into {:?}", config.product, args.area, args.date, config.download_dir);

    match run_pipeline( &config, &areas, &args.area, &args.date).await? {
        PipelineOutcome::Mosaic(info) => {
            println!("Mosaic file ready: {}", info.path.display());
            if !info.reprojected.is_empty() {
                println!("({} tiles reprojected into EPSG:{})", info.reprojected.len(), info.epsg.map(|c| c.to_string()).unwrap_or("?".into()));
            }
        }
        PipelineOutcome::NoData { area, date } => {
            println!("No data found for {} at date {}", area, date);
        }
    }

    Ok(())
}
