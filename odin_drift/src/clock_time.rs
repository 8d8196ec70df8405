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

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};
use crate::{invalid_time_format, errors::{OdinDriftError, Result}};

/// a time of day in the "HHMM as integer" encoding (e.g. 0830 is 8:30) used for drift observations.
/// There is no date or timezone component - a `ClockTime` interval must not span midnight
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct ClockTime {
    hours: u8,   // 0..23
    minutes: u8, // 0..59
}

impl ClockTime {
    pub const MAX_RAW: i64 = 2359;

    /// parse the integer HHMM encoding. Fails if raw is negative, exceeds 2359 or has minutes >= 60
    pub fn parse (raw: i64) -> Result<ClockTime> {
        if raw < 0 || raw > Self::MAX_RAW {
            return Err( invalid_time_format!("{raw} not within [0..{}]", Self::MAX_RAW))
        }

        let hours = (raw / 100) as u8;
        let minutes = (raw % 100) as u8;
        if minutes >= 60 {
            return Err( invalid_time_format!("{raw} has minutes >= 60"))
        }

        Ok( ClockTime { hours, minutes } )
    }

    pub fn from_hm (hours: u8, minutes: u8) -> Result<ClockTime> {
        if hours > 23 || minutes > 59 {
            return Err( invalid_time_format!("{hours}:{minutes} is not a valid time of day"))
        }
        Ok( ClockTime { hours, minutes } )
    }

    #[inline] pub fn hours (&self)->u8 { self.hours }
    #[inline] pub fn minutes (&self)->u8 { self.minutes }

    /// the HHMM integer encoding
    #[inline] pub fn raw (&self)->u16 { self.hours as u16 * 100 + self.minutes as u16 }

    #[inline]
    pub fn to_fractional_hours (&self)->f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }

    /// hours from self to other. This is negative if other is earlier - there is no midnight wraparound
    #[inline]
    pub fn duration_to (&self, other: &ClockTime)->f64 {
        other.to_fractional_hours() - self.to_fractional_hours()
    }
}

impl TryFrom<i64> for ClockTime {
    type Error = OdinDriftError;
    fn try_from (raw: i64) -> Result<Self> { ClockTime::parse(raw) }
}

impl From<ClockTime> for u16 {
    fn from (t: ClockTime) -> Self { t.raw() }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hours, self.minutes)
    }
}

/// user entered times are either "HHMM" (leading zeros optional) or "HH:MM"
impl FromStr for ClockTime {
    type Err = OdinDriftError;

    fn from_str (s: &str) -> Result<Self> {
        let s = s.trim();
        let is_digits = |v: &str| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit());

        if let Some((h,m)) = s.split_once(':') {
            if h.len() > 2 || m.len() != 2 || !is_digits(h) || !is_digits(m) {
                return Err( invalid_time_format!("'{s}' is not HH:MM"))
            }
            // both parts are at most two digits so this can't overflow
            let hours: u8 = h.parse().map_err(|_| invalid_time_format!("'{s}' has invalid hours"))?;
            let minutes: u8 = m.parse().map_err(|_| invalid_time_format!("'{s}' has invalid minutes"))?;
            ClockTime::from_hm( hours, minutes)

        } else {
            if s.len() > 4 || !is_digits(s) {
                return Err( invalid_time_format!("'{s}' is not HHMM"))
            }
            let raw: i64 = s.parse().map_err(|_| invalid_time_format!("'{s}' is not HHMM"))?;
            ClockTime::parse(raw)
        }
    }
}
