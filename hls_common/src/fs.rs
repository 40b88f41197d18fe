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

use std::fs;
use std::io::{self, Error as IOError, ErrorKind};
use std::env;
use std::path::{Path,PathBuf};
use io::ErrorKind::*;
use regex::Regex;
use tracing::warn;

use crate::io_error;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename<'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_name().and_then(|ostr| ostr.to_str())
}

pub fn filestem <'a,T: AsRef<Path>> (path: &'a T)->Option<&'a str> {
    path.as_ref().file_stem().and_then(|ostr| ostr.to_str())
}

/// check if dir pathname exists and is writable, try to create dir otherwise
pub fn ensure_writable_dir (path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        let md = fs::metadata(&path)?;
        if md.permissions().readonly() {
            Err(io_error!(PermissionDenied, "dir {:?} not writable", &path))
        } else {
            Ok(())
        }

    } else {
        fs::create_dir_all(path)
    }
}

/// sibling path of `path` with the file stem extended by `suffix` and the extension replaced by `ext`
/// e.g. ("a/b.v1.4.tif", "_reproj", "tif") -> "a/b.v1.4_reproj.tif"
pub fn with_stem_suffix (path: impl AsRef<Path>, suffix: &str, ext: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    let stem = filestem(&path).ok_or( IOError::new(ErrorKind::InvalidInput, format!("not a valid filename {path:?}")))?;
    Ok( path.with_file_name( format!("{stem}{suffix}.{ext}")) )
}

/// filter the provided paths down to the ones that refer to existing regular files
pub fn existing_files<P: AsRef<Path>> (paths: &[P]) -> Vec<PathBuf> {
    paths.iter().map(|p| p.as_ref()).filter(|p| p.is_file()).map(|p| p.to_path_buf()).collect()
}

/// best effort removal of files. Returns the number of files that were removed.
/// Paths that do not exist are ignored, all other failures are logged
pub fn remove_files<P: AsRef<Path>> (paths: &[P]) -> usize {
    let mut n_removed = 0;
    for p in paths {
        let path = p.as_ref();
        if path.is_file() {
            match fs::remove_file(path) {
                Ok(()) => n_removed += 1,
                Err(e) => warn!("failed to remove {:?}: {}", path, e)
            }
        }
    }
    n_removed
}

pub fn matching_files_in_dir<P: AsRef<Path>> (dir: &P, fname_regex: &Regex) -> Result<Vec<PathBuf>> {
    let dir: &Path = dir.as_ref();
    let mut list: Vec<PathBuf> = Vec::new();

    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            if let Ok(entry) = entry {
                if let Some(fname) = entry.file_name().to_str() {
                    if fname_regex.is_match( fname) {
                        list.push(entry.path())
                    }
                }
            }
        }
    }

    list.sort();
    Ok(list)
}

/// replace leading '~' and '$<name>' path elements
pub fn replace_env_var_path (path: impl AsRef<Path>)->Result<PathBuf> {
    let mut p = PathBuf::new();

    for (n,c) in path.as_ref().iter().enumerate() {
        let e = c.to_str().ok_or( IOError::new(ErrorKind::Other, format!("invalid path: {:?}", path.as_ref())))?;

        if e == "~" && n == 0 {
            p.push( env::var("HOME").map_err( |_| IOError::new(ErrorKind::Other, "HOME not set"))?)
        } else if let Some(var) = e.strip_prefix('$').filter(|v| !v.is_empty()) {
            p.push( env::var( var).map_err( |_| IOError::new(ErrorKind::Other, format!("{e} not set")))?)
        } else {
            p.push(e)
        }
    }

    Ok(p)
}
