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

use serde::{Serialize,Deserialize};
use tracing::warn;
use crate::{
    errors::Result, clock_time::ClockTime, leeway::LeewayTable,
    legs::CurrentLeg, calculator::TotalDriftVectorCalculator
};

/* #region raw observations *************************************************************************/

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct CurrentObservation {
    pub from: ClockTime,
    pub to: ClockTime,
    pub direction: f64, // degrees true the current sets to
    pub speed: f64,     // knots
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct WindObservation {
    pub from: ClockTime,
    pub to: ClockTime,
    pub wind_from: f64, // degrees true the wind is coming from
    pub speed: f64,     // knots
}

/* #endregion raw observations */

/// the serializable input of a drift calculation, as entered by the user
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct DriftSession {
    pub leeway_class: String,

    #[serde(default)]
    pub currents: Vec<CurrentObservation>,

    #[serde(default)]
    pub winds: Vec<WindObservation>,
}

impl DriftSession {
    /// build a calculator for this session. Fails on the first invalid observation or an unknown leeway class
    pub fn to_calculator (&self, table: &LeewayTable) -> Result<TotalDriftVectorCalculator> {
        let leeway = table.profile( &self.leeway_class)?;
        let mut calc = TotalDriftVectorCalculator::new( leeway)?;

        for (i,c) in self.currents.iter().enumerate() {
            let leg = CurrentLeg::new( c.from, c.to, c.direction, c.speed).inspect_err(|e| warn!("current observation {i} rejected: {e}"))?;
            calc.add_current_leg( leg);
        }

        for (i,w) in self.winds.iter().enumerate() {
            calc.add_wind_observation( w.from, w.to, w.wind_from, w.speed).inspect_err(|e| warn!("wind observation {i} rejected: {e}"))?;
        }

        Ok(calc)
    }
}
