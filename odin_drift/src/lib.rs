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
#![allow(unused)]

//! crate to compute the Total Drift Vector (TDV) of a search object from timed current and wind observations.
//! The resultant (bearing, distance) is the offset from the last known position that search planning uses as
//! the new datum

pub mod errors;
pub mod clock_time;
pub mod drift_leg;
pub mod leeway;
pub mod legs;
pub mod accumulator;
pub mod calculator;
pub mod session;
pub mod config;

pub use errors::{OdinDriftError, Result};
pub use clock_time::ClockTime;
pub use drift_leg::DriftLeg;
pub use leeway::{LeewayProfile, LeewayClass, LeewayTable, DEFAULT_LEEWAY_TABLE};
pub use legs::{LegKind, CurrentLeg, WindLeg};
pub use accumulator::VectorAccumulator;
pub use calculator::{TotalDriftVectorCalculator, DriftReport};
pub use session::{DriftSession, CurrentObservation, WindObservation};
pub use config::{load_config, load_leeway_config, load_leeway_table, load_ron_file};
