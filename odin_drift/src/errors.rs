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

use thiserror::Error;
use crate::LegKind;

pub type Result<T> = std::result::Result<T, OdinDriftError>;

#[derive(Error,Debug)]
pub enum OdinDriftError {

    #[error("invalid clock time {0}")]
    InvalidTimeFormat(String),

    #[error("invalid observation: {0}")]
    InvalidObservation(String),

    #[error("empty drift leg composition")]
    EmptyComposition,

    #[error("no {0:?} leg with index {1}")]
    InvalidLegIndex(LegKind, usize),

    #[error("unknown leeway class {0}")]
    UnknownLeewayClass(String),

    #[error("config not found {0}")]
    ConfigNotFound(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON error {0}")]
    RonError( #[from] ron::error::SpannedError),
}

pub fn invalid_observation (msg: impl ToString)->OdinDriftError {
    OdinDriftError::InvalidObservation(msg.to_string())
}

pub fn invalid_time_format (msg: impl ToString)->OdinDriftError {
    OdinDriftError::InvalidTimeFormat(msg.to_string())
}

#[macro_export]
macro_rules! invalid_observation {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::invalid_observation( format!( $fmt $(, $arg)* ))
    };
}

#[macro_export]
macro_rules! invalid_time_format {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::invalid_time_format( format!( $fmt $(, $arg)* ))
    };
}
