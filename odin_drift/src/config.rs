/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
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

use std::{env, fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use crate::{errors::{OdinDriftError, Result}, leeway::{LeewayTable, DEFAULT_LEEWAY_TABLE}};

pub const CONFIGS: &str = "configs";
pub const LEEWAY_CONFIG: &str = "leeway.ron";

/// look up a config file for this crate in (in this order)
/// `$ODIN_HOME/configs/odin_drift/`, `~/.odin/configs/odin_drift/` and the crate-local `configs/` dir
pub fn find_config_file (filename: &str) -> Option<PathBuf> {
    let resource_crate = env!("CARGO_PKG_NAME");

    if let Ok(odin_home) = env::var("ODIN_HOME") {
        let path = Path::new(&odin_home).join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let path = Path::new(&usr_home).join(".odin").join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIGS).join(filename);
    if path.is_file() { Some(path) } else { None }
}

/// deserialize a RON file
pub fn load_ron_file<C,P> (path: P) -> Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let path = path.as_ref();
    debug!("loading {path:?}");
    let data = fs::read_to_string(path)?;
    Ok( ron::from_str( &data)? )
}

/// load a named config (e.g. "leeway.ron") from the first location reported by `find_config_file`
pub fn load_config<C> (filename: &str) -> Result<C> where C: DeserializeOwned {
    let path = find_config_file(filename).ok_or_else(|| OdinDriftError::ConfigNotFound(filename.to_string()))?;
    load_ron_file(path)
}

/// the leeway table from an explicit path, the leeway.ron config, or the built-in default (in this order)
pub fn load_leeway_table (path: Option<&Path>) -> Result<LeewayTable> {
    if let Some(path) = path {
        load_ron_file(path)
    } else {
        load_leeway_config( LEEWAY_CONFIG)
    }
}

/// the named leeway table config, falling back to the built-in table if there is no such config file.
/// A config that exists but does not parse is still an error
pub fn load_leeway_config (filename: &str) -> Result<LeewayTable> {
    match load_config::<LeewayTable>(filename) {
        Err(OdinDriftError::ConfigNotFound(_)) => {
            info!("no {filename} config found, using built-in leeway table");
            Ok( DEFAULT_LEEWAY_TABLE.clone() )
        }
        res => res
    }
}
