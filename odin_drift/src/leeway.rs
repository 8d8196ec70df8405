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
use lazy_static::lazy_static;
use crate::{invalid_observation, errors::{OdinDriftError, Result}};

/// linear leeway model for one search object class: downwind leeway rate = wind_speed * multiplier + modifier (knots).
/// The divergence (left/right spread of the leeway heading) is only carried for display
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct LeewayProfile {
    pub description: String,
    pub multiplier: f64,
    pub modifier: f64,
    pub divergence: f64, // degrees
}

impl LeewayProfile {
    pub fn new (description: impl ToString, multiplier: f64, modifier: f64, divergence: f64)->Self {
        LeewayProfile { description: description.to_string(), multiplier, modifier, divergence }
    }

    /// coefficients have to be finite numbers
    pub fn check (&self)->Result<()> {
        if self.multiplier.is_finite() && self.modifier.is_finite() && self.divergence.is_finite() {
            Ok(())
        } else {
            Err( invalid_observation!("leeway profile '{}' has non-finite coefficients", self.description))
        }
    }

    /// the linear model value in knots, which can be negative for low wind speeds if the modifier is negative
    #[inline]
    pub fn linear_rate (&self, wind_speed_kn: f64)->f64 {
        wind_speed_kn * self.multiplier + self.modifier
    }

    /// the leeway rate in knots, clamped at zero since the object can't drift upwind
    #[inline]
    pub fn leeway_rate (&self, wind_speed_kn: f64)->f64 {
        self.linear_rate(wind_speed_kn).max(0.0)
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct LeewayClass {
    pub id: String,
    pub profile: LeewayProfile,
}

/// the leeway coefficients for all known search object classes, as provided by the leeway data source
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct LeewayTable {
    pub classes: Vec<LeewayClass>,
}

impl LeewayTable {
    pub fn len (&self)->usize { self.classes.len() }
    pub fn is_empty (&self)->bool { self.classes.is_empty() }

    pub fn ids (&self)->impl Iterator<Item=&str> {
        self.classes.iter().map(|c| c.id.as_str())
    }

    pub fn get (&self, id: &str)->Option<&LeewayProfile> {
        self.classes.iter().find(|c| c.id == id).map(|c| &c.profile)
    }

    pub fn get_index (&self, idx: usize)->Option<&LeewayProfile> {
        self.classes.get(idx).map(|c| &c.profile)
    }

    /// shareable copy of a known profile, the form in which the calculator holds it
    pub fn profile (&self, id: &str)->Result<Arc<LeewayProfile>> {
        self.get(id)
            .map(|p| Arc::new(p.clone()))
            .ok_or_else(|| OdinDriftError::UnknownLeewayClass(id.to_string()))
    }
}

lazy_static! {
    /// built-in table, used if there is no leeway.ron config
    pub static ref DEFAULT_LEEWAY_TABLE: LeewayTable = ron::from_str( include_str!("../configs/leeway.ron"))
        .expect("invalid built-in leeway table");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        assert!( !DEFAULT_LEEWAY_TABLE.is_empty());
        for id in DEFAULT_LEEWAY_TABLE.ids() {
            assert!( DEFAULT_LEEWAY_TABLE.get(id).is_some());
        }
        assert!( DEFAULT_LEEWAY_TABLE.profile("no-such-class").is_err());
    }

    #[test]
    fn test_clamped_rate() {
        let p = LeewayProfile::new( "neg", 0.04, -0.2, 20.0);
        assert!( p.linear_rate( 2.0) < 0.0);
        assert_eq!( p.leeway_rate( 2.0), 0.0);
        assert!( (p.leeway_rate( 10.0) - 0.2).abs() < 1e-12);
    }
}
