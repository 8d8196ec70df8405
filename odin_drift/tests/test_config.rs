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

use std::path::Path;
use odin_drift::*;

// run with "cargo test --test test_config -- --nocapture"

#[test]
fn test_clock_time_parse() {
    let ct = ClockTime::parse(830).unwrap();
    assert_eq!( (ct.hours(), ct.minutes()), (8, 30));
    assert_eq!( ct.to_fractional_hours(), 8.5);
    assert_eq!( ct.to_string(), "0830");
    assert_eq!( ct.raw(), 830);

    assert_eq!( ClockTime::parse(0).unwrap().to_fractional_hours(), 0.0);
    assert_eq!( ClockTime::parse(2359).unwrap().to_fractional_hours(), 23.0 + 59.0/60.0);

    for raw in [-1, 60, 1275, 2360, 2400, 9999] {
        let res = ClockTime::parse(raw);
        println!("{raw} -> {res:?}");
        assert!( matches!( res, Err(OdinDriftError::InvalidTimeFormat(_))));
    }
}

#[test]
fn test_clock_time_duration() {
    let t0 = ClockTime::parse(800).unwrap();
    let t1 = ClockTime::parse(1015).unwrap();
    assert_eq!( t0.duration_to(&t1), 2.25);
    assert_eq!( t1.duration_to(&t0), -2.25); // no wraparound
}

#[test]
fn test_clock_time_from_str() {
    for (s, raw) in [("0800", 800), ("800", 800), ("08:00", 800), ("8:05", 805), ("2359", 2359), (" 1200 ", 1200), ("0", 0)] {
        let ct: ClockTime = s.parse().unwrap();
        println!("'{s}' -> {ct}");
        assert_eq!( ct.raw(), raw);
    }

    for s in ["", "12345", "08:5", "8:60", "24:00", "ab12", "-100", "12:3a", "1.5"] {
        assert!( s.parse::<ClockTime>().is_err(), "'{s}' should not parse");
    }
}

#[test]
fn test_clock_time_serde() {
    let ct: ClockTime = ron::from_str("1430").unwrap();
    assert_eq!( ct.raw(), 1430);
    assert_eq!( ron::to_string(&ct).unwrap(), "1430");
    assert!( ron::from_str::<ClockTime>("1460").is_err());
}

#[test]
fn test_leeway_config() {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join("configs/leeway.ron");
    let table: LeewayTable = load_ron_file(&path).unwrap();
    println!("{} leeway classes", table.len());

    assert_eq!( table.len(), DEFAULT_LEEWAY_TABLE.len());
    let piw = table.get("piw").unwrap();
    assert_eq!( piw.description, "person in water");
    assert_eq!( table.get_index(0), Some(piw));
    assert!( table.get("ufo").is_none());
    assert!( matches!( table.profile("ufo"), Err(OdinDriftError::UnknownLeewayClass(_))));

    let explicit = load_leeway_table( Some(&path)).unwrap();
    assert_eq!( explicit.len(), table.len());
}

#[test]
fn test_missing_leeway_config() {
    let res = load_config::<LeewayTable>("no_such_leeway_table.ron");
    assert!( matches!( res, Err(OdinDriftError::ConfigNotFound(_))));

    // falls back to the built-in table
    let table = load_leeway_config("no_such_leeway_table.ron").unwrap();
    assert_eq!( table.len(), DEFAULT_LEEWAY_TABLE.len());
    assert_eq!( table.get("piw"), DEFAULT_LEEWAY_TABLE.get("piw"));

    // an existing config is loaded as is
    let table = load_leeway_config("leeway.ron").unwrap();
    assert!( table.get("piw").is_some());
}

const SESSION: &str = r#"
DriftSession(
    leeway_class: "raft_drogue",
    currents: [
        ( from: 800, to: 1000, direction: 90.0, speed: 2.0 ),
    ],
    winds: [
        ( from: 800, to: 1000, wind_from: 0.0, speed: 20.0 ),
    ],
)
"#;

#[test]
fn test_session() {
    let session: DriftSession = ron::from_str(SESSION).unwrap();
    let calc = session.to_calculator( &DEFAULT_LEEWAY_TABLE).unwrap();
    assert_eq!( calc.current_legs().len(), 1);
    assert_eq!( calc.wind_legs().len(), 1);
    assert_eq!( calc.leeway_profile().as_ref(), DEFAULT_LEEWAY_TABLE.get("raft_drogue").unwrap());

    let report = calc.compute_report();
    println!("{report}");
    assert!( report.total.bearing_deg() > 90.0 && report.total.bearing_deg() < 180.0);
}

#[test]
fn test_session_sample_file() {
    let path = Path::new( env!("CARGO_MANIFEST_DIR")).join("configs/drift_session.ron");
    let session: DriftSession = load_ron_file(&path).unwrap();
    let calc = session.to_calculator( &DEFAULT_LEEWAY_TABLE).unwrap();
    assert_eq!( calc.len(), 4);
    println!("{}", calc.compute_report());
}

#[test]
fn test_session_rejects() {
    let mut session: DriftSession = ron::from_str(SESSION).unwrap();
    session.leeway_class = "ufo".to_string();
    assert!( matches!( session.to_calculator( &DEFAULT_LEEWAY_TABLE), Err(OdinDriftError::UnknownLeewayClass(_))));

    let mut session: DriftSession = ron::from_str(SESSION).unwrap();
    session.currents[0].speed = -1.0;
    assert!( matches!( session.to_calculator( &DEFAULT_LEEWAY_TABLE), Err(OdinDriftError::InvalidObservation(_))));

    // invalid clock times are already rejected when parsing the session
    let bad = SESSION.replace("to: 1000, direction", "to: 1075, direction");
    assert!( ron::from_str::<DriftSession>(&bad).is_err());
}
