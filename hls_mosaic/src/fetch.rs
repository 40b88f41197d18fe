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

//! concurrent retrieval of granules with a bounded number of workers.
//!
//! Work items are handed out through a bounded kanal channel to `max_workers` tokio tasks. Each
//! worker reports per-file outcomes, the controller joins all workers before it partitions the
//! outcomes into downloaded files and failures. A failed file never aborts the others

use std::{fmt, path::{Path,PathBuf}};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use reqwest::Client;
use tracing::{debug, info, warn};

use hls_common::net::{download_url, HlsNetError};
use crate::errors::{Result, task_error};
use crate::tiles::TileId;

pub const DEFAULT_MAX_WORKERS: usize = 2;

#[derive(Debug,Clone,PartialEq,Eq)]
pub struct FetchRequest {
    pub filename: String,
    pub url: String,
}

impl FetchRequest {
    pub fn for_tile (tile: &TileId, base_url: &str) -> Result<FetchRequest> {
        Ok( FetchRequest { filename: tile.filename(), url: tile.remote_url( base_url)? } )
    }
}

/// a file that could not be retrieved. `status` is the HTTP status code if the server responded
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct DownloadFailure {
    pub filename: String,
    pub status: Option<u16>,
    pub reason: String,
}

impl fmt::Display for DownloadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "Failed | {} | HTTP-{}: {}", self.filename, code, self.reason),
            None => write!(f, "Failed | {} | {}", self.filename, self.reason)
        }
    }
}

#[derive(Debug,Default)]
pub struct FetchReport {
    /// local paths of retrieved files, in request order
    pub downloaded: Vec<PathBuf>,
    /// failures in request order
    pub failures: Vec<DownloadFailure>,
}

impl FetchReport {
    pub fn is_empty (&self) -> bool {
        self.downloaded.is_empty()
    }

    /// one line per failed file
    pub fn summary (&self) -> String {
        self.failures.iter().map( |f| f.to_string()).collect::<Vec<_>>().join("\n")
    }
}

pub fn new_progress (show: bool) -> MultiProgress {
    if show {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target( ProgressDrawTarget::hidden())
    }
}

fn bar_style () -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg:40} [{bar:30}] {bytes}/{total_bytes}")
        .unwrap_or_else( |_| ProgressStyle::default_bar())
        .progress_chars("##-")
}

fn failure_reason (e: &HlsNetError) -> String {
    match e {
        HlsNetError::HttpStatus(_,reason) => reason.clone(),
        other => other.to_string()
    }
}

async fn fetch_one (client: &Client, req: &FetchRequest, dir: &Path, progress: &MultiProgress) -> std::result::Result<PathBuf,DownloadFailure> {
    let path = dir.join( &req.filename);
    let pb = progress.add( ProgressBar::new(0));
    pb.set_style( bar_style());
    pb.set_message( req.filename.clone());

    debug!("retrieving {}", req.url);
    let res = download_url( client, &req.url, &path, |n,total| {
        if let Some(len) = total { pb.set_length(len) }
        pb.set_position(n);
    }).await;

    match res {
        Ok(len) => {
            pb.finish();
            info!("{} kB saved to {:?}", len / 1024, path);
            Ok(path)
        }
        Err(e) => {
            pb.abandon_with_message( format!("{} failed", req.filename));
            warn!("retrieving {} failed: {}", req.url, e);
            Err( DownloadFailure { filename: req.filename.clone(), status: e.status(), reason: failure_reason(&e) })
        }
    }
}

/// download all `requests` into `dir`, using at most `max_workers` concurrent transfers.
/// Returns after all transfers have completed (successfully or not)
pub async fn fetch_all (client: &Client, requests: Vec<FetchRequest>, dir: &Path, max_workers: usize, progress: &MultiProgress) -> Result<FetchReport> {
    if requests.is_empty() { return Ok( FetchReport::default()) }

    let n_requests = requests.len();
    let n_workers = max_workers.max(1).min( n_requests);

    // None is the end-of-work marker, one per worker
    let (tx, rx) = kanal::bounded_async::<Option<(usize,FetchRequest)>>( n_workers);

    let mut workers = Vec::with_capacity( n_workers);
    for _ in 0..n_workers {
        let rx = rx.clone();
        let client = client.clone();
        let dir = dir.to_path_buf();
        let progress = progress.clone();

        workers.push( tokio::spawn( async move {
            let mut outcomes = Vec::new();
            while let Ok(Some((idx,req))) = rx.recv().await {
                let outcome = fetch_one( &client, &req, &dir, &progress).await;
                outcomes.push( (idx,outcome));
            }
            outcomes
        }));
    }
    drop(rx);

    for item in requests.into_iter().enumerate() {
        tx.send( Some(item)).await.map_err( |e| task_error(e))?;
    }
    for _ in 0..n_workers {
        tx.send( None).await.map_err( |e| task_error(e))?;
    }

    let mut outcomes = Vec::with_capacity( n_requests);
    for w in workers {
        outcomes.extend( w.await.map_err( |e| task_error(e))?);
    }
    outcomes.sort_by_key( |(idx,_)| *idx);

    let mut report = FetchReport::default();
    for (_,outcome) in outcomes {
        match outcome {
            Ok(path) => report.downloaded.push(path),
            Err(failure) => report.failures.push(failure)
        }
    }

    Ok(report)
}
