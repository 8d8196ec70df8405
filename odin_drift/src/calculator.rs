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

use std::{fmt, sync::Arc};
use serde::Serialize;
use tracing::debug;
use crate::{
    errors::{OdinDriftError, Result},
    accumulator::VectorAccumulator, clock_time::ClockTime, drift_leg::DriftLeg, leeway::LeewayProfile,
    legs::{CurrentLeg, LegKind, WindLeg}
};

/// the drift computation state of one search session: the current and wind observations since the last known
/// position plus the leeway profile of the search object.
///
/// All wind legs share the active leeway profile, i.e. `set_leeway_profile` applies retroactively
#[derive(Debug,Clone)]
pub struct TotalDriftVectorCalculator {
    current_legs: Vec<CurrentLeg>,
    wind_legs: Vec<WindLeg>,
    leeway: Arc<LeewayProfile>,
}

impl TotalDriftVectorCalculator {
    pub fn new (leeway: impl Into<Arc<LeewayProfile>>) -> Result<Self> {
        let leeway = leeway.into();
        leeway.check()?;
        Ok( TotalDriftVectorCalculator { current_legs: Vec::new(), wind_legs: Vec::new(), leeway } )
    }

    /// append a current leg and return its index
    pub fn add_current_leg (&mut self, leg: CurrentLeg) -> usize {
        debug!("adding current leg {}-{} {}° {}kn", leg.time_from(), leg.time_to(), leg.direction_deg(), leg.speed_kn());
        self.current_legs.push(leg);
        self.current_legs.len() - 1
    }

    /// append a wind leg and return its index. The leg gets attached to the active leeway profile, replacing the
    /// one it was constructed with. Fails if the active profile gives the leg a non-finite drift distance
    pub fn add_wind_leg (&mut self, mut leg: WindLeg) -> Result<usize> {
        leg.check_leeway( &self.leeway)?;

        debug!("adding wind leg {}-{} from {}° {}kn", leg.time_from(), leg.time_to(), leg.wind_from_deg(), leg.wind_speed_kn());
        leg.set_leeway( self.leeway.clone());
        self.wind_legs.push(leg);
        Ok( self.wind_legs.len() - 1 )
    }

    /// build a wind leg with the active leeway profile, append it and return its index
    pub fn add_wind_observation (&mut self, time_from: ClockTime, time_to: ClockTime, wind_from_deg: f64, wind_speed_kn: f64) -> Result<usize> {
        let leg = WindLeg::new( time_from, time_to, wind_from_deg, wind_speed_kn, self.leeway.clone())?;
        self.add_wind_leg( leg)
    }

    /// remove leg by position. Remaining legs keep their order
    pub fn remove_leg (&mut self, kind: LegKind, idx: usize) -> Result<()> {
        let len = match kind {
            LegKind::Current => self.current_legs.len(),
            LegKind::Wind => self.wind_legs.len(),
        };
        if idx >= len {
            return Err( OdinDriftError::InvalidLegIndex(kind, idx))
        }

        match kind {
            LegKind::Current => { self.current_legs.remove(idx); }
            LegKind::Wind => { self.wind_legs.remove(idx); }
        }
        debug!("removed {kind:?} leg {idx}");
        Ok(())
    }

    /// replace the active leeway profile, which re-points all existing wind legs to the new profile.
    /// Nothing changes if the new profile is rejected for any of the wind legs
    pub fn set_leeway_profile (&mut self, leeway: impl Into<Arc<LeewayProfile>>) -> Result<()> {
        let leeway = leeway.into();
        leeway.check()?;
        for leg in &self.wind_legs {
            leg.check_leeway( &leeway)?;
        }

        debug!("switching leeway profile to '{}'", leeway.description);
        for leg in self.wind_legs.iter_mut() {
            leg.set_leeway( leeway.clone());
        }
        self.leeway = leeway;
        Ok(())
    }

    pub fn leeway_profile (&self)->&Arc<LeewayProfile> { &self.leeway }
    pub fn current_legs (&self)->&[CurrentLeg] { &self.current_legs }
    pub fn wind_legs (&self)->&[WindLeg] { &self.wind_legs }

    pub fn len (&self)->usize { self.current_legs.len() + self.wind_legs.len() }
    pub fn is_empty (&self)->bool { self.current_legs.is_empty() && self.wind_legs.is_empty() }

    pub fn clear (&mut self) {
        self.current_legs.clear();
        self.wind_legs.clear();
    }

    /// the drift legs of all observations, current legs first
    pub fn drift_legs (&self)->Vec<DriftLeg> {
        self.current_legs.iter().map( CurrentLeg::to_drift_leg)
            .chain( self.wind_legs.iter().map( WindLeg::to_drift_leg))
            .collect()
    }

    /// the total drift vector. This is the zero leg if there are no observations
    pub fn compute_resultant (&self)->DriftLeg {
        let resultant = VectorAccumulator::resultant( self.drift_legs().iter());
        debug!("total drift vector of {} legs: {}", self.len(), resultant);
        resultant
    }

    /// total drift vector plus the partial resultants of current and wind legs
    pub fn compute_report (&self)->DriftReport {
        let current: Vec<DriftLeg> = self.current_legs.iter().map( CurrentLeg::to_drift_leg).collect();
        let wind: Vec<DriftLeg> = self.wind_legs.iter().map( WindLeg::to_drift_leg).collect();

        let mut acc = VectorAccumulator::new();
        acc.extend( current.iter());
        acc.extend( wind.iter());

        DriftReport {
            total: acc.result(),
            current: VectorAccumulator::resultant( current.iter()),
            wind: VectorAccumulator::resultant( wind.iter()),
            n_current_legs: current.len(),
            n_wind_legs: wind.len(),
            leeway_description: self.leeway.description.clone(),
            leeway_divergence: self.leeway.divergence,
        }
    }
}

/// what we hand out to the search planning layer
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct DriftReport {
    pub total: DriftLeg,
    pub current: DriftLeg,
    pub wind: DriftLeg,
    pub n_current_legs: usize,
    pub n_wind_legs: usize,
    pub leeway_description: String,
    pub leeway_divergence: f64,
}

impl fmt::Display for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total drift vector: {}", self.total)?;
        writeln!(f, "  current ({} legs): {}", self.n_current_legs, self.current)?;
        writeln!(f, "  wind    ({} legs): {}", self.n_wind_legs, self.wind)?;
        write!(f, "  leeway: {} (divergence ±{}°)", self.leeway_description, self.leeway_divergence)
    }
}
