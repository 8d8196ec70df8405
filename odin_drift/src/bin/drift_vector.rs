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

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use odin_drift::{load_leeway_table, load_ron_file, DriftSession, LeewayTable};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "compute the total drift vector of a search object from a RON drift session file")]
pub struct Args {
    /// pathname of leeway table RON file (default is the leeway.ron config or the built-in table)
    #[arg(short,long)]
    pub leeway: Option<PathBuf>,

    /// use this leeway class instead of the one specified in the session
    #[arg(short,long)]
    pub class: Option<String>,

    /// list the known leeway classes and exit
    #[arg(long)]
    pub list_classes: bool,

    /// print report as JSON
    #[arg(long)]
    pub json: bool,

    /// pathname of drift session RON file
    pub session: Option<PathBuf>,
}

fn list_classes (table: &LeewayTable) {
    for c in &table.classes {
        let p = &c.profile;
        println!("{:<16} {:<45} {:.3} * W {:+.2}  ±{}°", c.id, p.description, p.multiplier, p.modifier, p.divergence);
    }
}

fn main()->Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let table = load_leeway_table( args.leeway.as_deref())?;
    if args.list_classes {
        list_classes(&table);
        return Ok(())
    }

    let Some(path) = &args.session else {
        anyhow::bail!("no drift session file given")
    };
    let mut session: DriftSession = load_ron_file(path)?;
    if let Some(class) = &args.class {
        session.leeway_class = class.clone();
    }

    let calc = session.to_calculator(&table)?;
    let report = calc.compute_report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
