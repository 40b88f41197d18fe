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
#![allow(unused)]

use std::{fs, net::SocketAddr};
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use hls_common::net::{download_url, HlsNetError};

async fn spawn_server ()->SocketAddr {
    let app = Router::new()
        .route( "/files/data.bin", get( || async { vec![42u8; 10_000] }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn( async move { axum::serve( listener, app).await.unwrap() });
    addr
}

#[tokio::test]
async fn test_download() {
    let addr = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    let path = dir.path().join("data.bin");
    let mut last = 0;
    let len = download_url( &client, &format!("http://{addr}/files/data.bin"), &path, |n,_| last = n).await.unwrap();

    assert_eq!( len, 10_000);
    assert_eq!( last, 10_000);
    assert_eq!( fs::read(&path).unwrap().len(), 10_000);
}

#[tokio::test]
async fn test_not_found_leaves_no_file() {
    let addr = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();

    let path = dir.path().join("missing.bin");
    let res = download_url( &client, &format!("http://{addr}/files/missing.bin"), &path, |_,_| {}).await;

    match res {
        Err(e) => {
            println!("{e}");
            assert_eq!( e.status(), Some(404));
            assert!( matches!( e, HlsNetError::HttpStatus(404,_)));
        }
        Ok(_) => panic!("download of missing file should fail")
    }
    assert!( !path.exists());
}
