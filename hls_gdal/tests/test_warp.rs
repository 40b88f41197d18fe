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

use std::path::Path;
use hls_gdal::*;
use hls_gdal::warp::{ResampleAlg, reproject_dataset, suggested_warp_output};

/// 3-band int16 north-up GeoTIFF with constant band values
fn create_tile (path: &Path, epsg: u32, left: f64, top: f64, size: usize, res: f64, values: [i16;3]) {
    let driver = gtiff_driver().unwrap();
    let mut ds = create_dataset( &driver, path, size, size, 3, GdalDataType::Int16, Some(tiled_deflate_create_opts(256))).unwrap();
    ds.set_geo_transform( &[left, res, 0.0, top, 0.0, -res]).unwrap();
    ds.set_spatial_ref( &srs_epsg(epsg).unwrap()).unwrap();

    for b in 0..3 {
        let mut band = ds.rasterband(b+1).unwrap();
        let mut buf = Buffer::new( (size,size), vec![values[b]; size*size]);
        band.write( (0,0), (size,size), &mut buf).unwrap();
    }
}

#[test]
fn test_reproject_to_neighbor_zone() {
    let dir = tempfile::tempdir().unwrap();
    let src_path = dir.path().join("zone16.tif");
    let tgt_path = dir.path().join("zone16_reproj.tif");

    // close to the western edge of UTM 16N, around 50N 89.5W
    create_tile( &src_path, 32616, 320_000.0, 5_540_000.0, 40, 30.0, [100,200,300]);
    let src = Dataset::open(&src_path).unwrap();
    let tgt_srs = srs_epsg(32615).unwrap();

    let (gt, cols, rows) = suggested_warp_output( &src, &tgt_srs).unwrap();
    assert!( cols > 0 && rows > 0);
    assert!( gt[1] > 0.0 && gt[5] < 0.0);

    {
        let tgt = reproject_dataset( &src, &tgt_srs, &tgt_path, ResampleAlg::Cubic, Some(tiled_deflate_create_opts(256)), Some(0.0)).unwrap();
        assert_eq!( tgt.raster_size(), (cols,rows));
    }

    let tgt = Dataset::open(&tgt_path).unwrap();
    assert_eq!( epsg_code( &tgt.spatial_ref().unwrap()), Some(32615));
    assert_eq!( tgt.raster_count(), 3);

    let band = tgt.rasterband(1).unwrap();
    assert_eq!( band.band_type(), GdalDataType::Int16);
    assert_eq!( band.no_data_value(), Some(0.0));

    // the center of the output is covered by the source
    let (w,h) = tgt.raster_size();
    let buf = band.read_as::<i16>( ((w/2) as isize, (h/2) as isize), (1,1), (1,1), None).unwrap();
    assert_eq!( buf.data()[0], 100);
}

#[test]
fn test_srs_helpers() {
    assert_eq!( epsg_code( &srs_epsg(32616).unwrap()), Some(32616));
    assert_eq!( epsg_code( &srs_epsg(32608).unwrap()), Some(32608));
    assert!( srs_epsg(999999).is_err());
}
