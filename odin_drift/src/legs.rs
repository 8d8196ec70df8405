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

use std::sync::Arc;
use serde::{Serialize,Deserialize};
use tracing::debug;
use uom::si::{f64::Velocity, velocity::knot};
use crate::{
    invalid_observation, errors::Result,
    clock_time::ClockTime, drift_leg::{DriftLeg, normalize_360}, leeway::LeewayProfile
};

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum LegKind {
    Current,
    Wind
}

fn check_interval (time_from: &ClockTime, time_to: &ClockTime) -> Result<()> {
    if time_to < time_from {
        Err( invalid_observation!("interval {time_from}-{time_to} ends before it starts (midnight crossing is not supported)"))
    } else {
        Ok(())
    }
}

fn check_direction (what: &str, deg: f64) -> Result<()> {
    if deg.is_finite() { Ok(()) } else { Err( invalid_observation!("{what} {deg} is not a finite number")) }
}

fn check_speed (what: &str, kn: f64) -> Result<()> {
    if kn.is_finite() && kn >= 0.0 { Ok(()) } else { Err( invalid_observation!("{what} {kn} is not a non-negative number")) }
}

/// a timed water current observation
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct CurrentLeg {
    time_from: ClockTime,
    time_to: ClockTime,
    direction_deg: f64, // true, where the current sets to
    speed_kn: f64,
}

impl CurrentLeg {
    pub fn new (time_from: ClockTime, time_to: ClockTime, direction_deg: f64, speed_kn: f64) -> Result<CurrentLeg> {
        check_interval( &time_from, &time_to)?;
        check_direction( "current direction", direction_deg)?;
        check_speed( "current speed", speed_kn)?;

        let distance = speed_kn * time_from.duration_to( &time_to);
        if !distance.is_finite() {
            return Err( invalid_observation!("current drift {speed_kn}kn over {time_from}-{time_to} is out of range"))
        }

        Ok( CurrentLeg { time_from, time_to, direction_deg: normalize_360(direction_deg), speed_kn } )
    }

    #[inline] pub fn time_from (&self)->ClockTime { self.time_from }
    #[inline] pub fn time_to (&self)->ClockTime { self.time_to }
    #[inline] pub fn direction_deg (&self)->f64 { self.direction_deg }
    #[inline] pub fn speed_kn (&self)->f64 { self.speed_kn }
    #[inline] pub fn speed (&self)->Velocity { Velocity::new::<knot>(self.speed_kn) }

    #[inline] pub fn duration_hours (&self)->f64 { self.time_from.duration_to( &self.time_to) }

    /// drift rate in knots
    #[inline] pub fn rate_kn (&self)->f64 { self.speed_kn }

    pub fn to_drift_leg (&self)->DriftLeg {
        DriftLeg::from_validated( self.direction_deg, self.speed_kn * self.duration_hours())
    }
}

/// a timed wind observation. Its drift contribution depends on the leeway profile of the search object, which is
/// shared with (and can be replaced by) the owning calculator
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct WindLeg {
    time_from: ClockTime,
    time_to: ClockTime,
    wind_from_deg: f64, // true, where the wind is coming from
    wind_speed_kn: f64,
    leeway: Arc<LeewayProfile>,
}

impl WindLeg {
    /// the `leeway` profile is only used while the leg is standalone. Adding the leg to a
    /// [`TotalDriftVectorCalculator`](crate::TotalDriftVectorCalculator) re-attaches it to the calculator's active profile
    pub fn new (time_from: ClockTime, time_to: ClockTime, wind_from_deg: f64, wind_speed_kn: f64, leeway: Arc<LeewayProfile>) -> Result<WindLeg> {
        check_interval( &time_from, &time_to)?;
        check_direction( "wind direction", wind_from_deg)?;
        check_speed( "wind speed", wind_speed_kn)?;

        let leg = WindLeg { time_from, time_to, wind_from_deg: normalize_360(wind_from_deg), wind_speed_kn, leeway };
        leg.check_leeway( &leg.leeway)?;
        leg.log_clamp();
        Ok(leg)
    }

    /// check if this leg would produce a finite drift distance with the given profile
    pub fn check_leeway (&self, leeway: &LeewayProfile) -> Result<()> {
        leeway.check()?;

        let linear = leeway.linear_rate( self.wind_speed_kn);
        let distance = linear.max(0.0) * self.duration_hours();
        if !linear.is_finite() || !distance.is_finite() {
            return Err( invalid_observation!("leeway of '{}' at {}kn over {}-{} is out of range",
                leeway.description, self.wind_speed_kn, self.time_from, self.time_to))
        }
        Ok(())
    }

    fn log_clamp (&self) {
        let linear = self.leeway.linear_rate( self.wind_speed_kn);
        if linear < 0.0 {
            debug!("negative leeway rate {linear} for '{}' at {}kn clamped to 0", self.leeway.description, self.wind_speed_kn);
        }
    }

    #[inline] pub fn time_from (&self)->ClockTime { self.time_from }
    #[inline] pub fn time_to (&self)->ClockTime { self.time_to }
    #[inline] pub fn wind_from_deg (&self)->f64 { self.wind_from_deg }
    #[inline] pub fn wind_speed_kn (&self)->f64 { self.wind_speed_kn }
    #[inline] pub fn wind_speed (&self)->Velocity { Velocity::new::<knot>(self.wind_speed_kn) }
    #[inline] pub fn leeway (&self)->&Arc<LeewayProfile> { &self.leeway }

    /// caller has to `check_leeway` first
    pub(crate) fn set_leeway (&mut self, leeway: Arc<LeewayProfile>) {
        if !Arc::ptr_eq( &self.leeway, &leeway) {
            self.leeway = leeway;
            self.log_clamp();
        }
    }

    #[inline] pub fn duration_hours (&self)->f64 { self.time_from.duration_to( &self.time_to) }

    /// the wind blows from wind_from, the object drifts the other way
    #[inline]
    pub fn downwind_deg (&self)->f64 {
        normalize_360( self.wind_from_deg + 180.0)
    }

    /// leeway rate in knots (never negative)
    #[inline]
    pub fn rate_kn (&self)->f64 {
        self.leeway.leeway_rate( self.wind_speed_kn)
    }

    pub fn to_drift_leg (&self)->DriftLeg {
        DriftLeg::from_validated( self.downwind_deg(), self.rate_kn() * self.duration_hours())
    }
}
