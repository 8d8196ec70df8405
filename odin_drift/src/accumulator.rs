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

use crate::{drift_leg::DriftLeg, errors::{OdinDriftError, Result}};

/// incremental vector sum of drift legs.
///
/// The first leg becomes the running resultant as-is, all following legs are vector-added in the order in which they
/// are pushed. We do not seed with a zero leg since a zero leg can't be told apart from an observed due north leg
#[derive(Debug,Clone,Default)]
pub struct VectorAccumulator {
    acc: Option<DriftLeg>,
    n_legs: usize,
}

impl VectorAccumulator {
    pub fn new()->Self { VectorAccumulator { acc: None, n_legs: 0 } }

    pub fn push (&mut self, leg: &DriftLeg) {
        self.acc = Some( match &self.acc {
            Some(acc) => acc.add(leg),
            None => *leg
        });
        self.n_legs += 1;
    }

    #[inline] pub fn len (&self)->usize { self.n_legs }
    #[inline] pub fn is_empty (&self)->bool { self.n_legs == 0 }

    /// the running resultant, or the zero leg if nothing was pushed yet
    pub fn result (&self)->DriftLeg {
        self.acc.unwrap_or( DriftLeg::zero())
    }

    /// the running resultant, failing if nothing was pushed yet
    pub fn try_result (&self)->Result<DriftLeg> {
        self.acc.ok_or( OdinDriftError::EmptyComposition)
    }

    /// compose legs in iteration order. An empty sequence yields `DriftLeg::zero()`
    pub fn resultant<'a> (legs: impl IntoIterator<Item=&'a DriftLeg>) -> DriftLeg {
        Self::from_legs(legs).result()
    }

    /// strict version of [`resultant`](Self::resultant) that distinguishes "no data" from a zero resultant
    pub fn try_resultant<'a> (legs: impl IntoIterator<Item=&'a DriftLeg>) -> Result<DriftLeg> {
        Self::from_legs(legs).try_result()
    }

    fn from_legs<'a> (legs: impl IntoIterator<Item=&'a DriftLeg>) -> Self {
        let mut acc = VectorAccumulator::new();
        for leg in legs { acc.push(leg) }
        acc
    }
}

impl<'a> Extend<&'a DriftLeg> for VectorAccumulator {
    fn extend<I: IntoIterator<Item=&'a DriftLeg>> (&mut self, iter: I) {
        for leg in iter { self.push(leg) }
    }
}
