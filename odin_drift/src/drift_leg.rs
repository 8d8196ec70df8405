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

use std::{fmt, ops};
use serde::Serialize;
use uom::si::{f64::Length, length::nautical_mile};
use crate::{invalid_observation, errors::Result};

#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x } // 360.0 + tiny negative rounds up
}

/// the elemental drift displacement: a bearing in degrees true (clockwise from north, [0..360)) and a
/// distance in nautical miles (>= 0).
///
/// Legs are composed as plane vectors with north component `d·cos(bearing)` and east component `d·sin(bearing)`,
/// the resultant bearing is recovered with `atan2(east,north)` so that it ends up in the correct quadrant
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct DriftLeg {
    bearing_deg: f64,
    distance_nm: f64,
}

impl DriftLeg {
    pub fn new (bearing_deg: f64, distance_nm: f64) -> Result<DriftLeg> {
        if !bearing_deg.is_finite() {
            return Err( invalid_observation!("bearing {bearing_deg} is not a finite number"))
        }
        if !distance_nm.is_finite() || distance_nm < 0.0 {
            return Err( invalid_observation!("distance {distance_nm} is not a non-negative number"))
        }
        Ok( DriftLeg::from_validated( bearing_deg, distance_nm) )
    }

    /// caller guarantees finite bearing and finite non-negative distance
    pub(crate) fn from_validated (bearing_deg: f64, distance_nm: f64) -> DriftLeg {
        DriftLeg { bearing_deg: normalize_360(bearing_deg), distance_nm }
    }

    /// the value of an empty composition. Note that this is not a general "no data" marker since a due north
    /// leg of zero length looks exactly the same
    pub const fn zero()->DriftLeg {
        DriftLeg { bearing_deg: 0.0, distance_nm: 0.0 }
    }

    /// build from (north,east) plane components in nautical miles
    pub fn from_components (north: f64, east: f64) -> DriftLeg {
        let distance_nm = north.hypot(east);
        let bearing_deg = normalize_360( east.atan2(north).to_degrees());
        DriftLeg { bearing_deg, distance_nm }
    }

    /// (north,east) plane components in nautical miles
    pub fn components (&self) -> (f64,f64) {
        let (sin_b, cos_b) = self.bearing_deg.to_radians().sin_cos();
        (self.distance_nm * cos_b, self.distance_nm * sin_b)
    }

    /// vector sum of two legs
    pub fn add (&self, other: &DriftLeg) -> DriftLeg {
        let (n1,e1) = self.components();
        let (n2,e2) = other.components();
        DriftLeg::from_components( n1 + n2, e1 + e2)
    }

    #[inline] pub fn bearing_deg (&self)->f64 { self.bearing_deg }
    #[inline] pub fn distance_nm (&self)->f64 { self.distance_nm }

    #[inline] pub fn distance (&self)->Length { Length::new::<nautical_mile>(self.distance_nm) }

    #[inline] pub fn is_zero_length (&self)->bool { self.distance_nm == 0.0 }
}

impl ops::Add for DriftLeg {
    type Output = DriftLeg;
    fn add (self, rhs: DriftLeg) -> DriftLeg { DriftLeg::add( &self, &rhs) }
}

impl fmt::Display for DriftLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05.1}°T {:.2}nm", self.bearing_deg, self.distance_nm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_360() {
        assert_eq!( normalize_360(0.0), 0.0);
        assert_eq!( normalize_360(360.0), 0.0);
        assert_eq!( normalize_360(-90.0), 270.0);
        assert_eq!( normalize_360(450.0), 90.0);
        assert!( normalize_360(-1e-17) < 360.0);
    }

    #[test]
    fn test_components() {
        let (n,e) = DriftLeg::from_validated( 90.0, 10.0).components();
        assert!( n.abs() < 1e-12);
        assert!( (e - 10.0).abs() < 1e-12);

        let leg = DriftLeg::from_components( -10.0, -10.0); // south west
        assert!( (leg.bearing_deg() - 225.0).abs() < 1e-12);
    }
}
