//! Growth report for a sample subject
//!
//! ```text
//! cargo run --example report -- [INFANT_JSON CHILD_JSON]
//! ```
//!
//! Without arguments the abridged tables under `tests/data` are used.

use anthropometry::prelude::*;

static REFERENCE: ReferenceStore = ReferenceStore::new();

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let data_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");
    let infant = args
        .next()
        .unwrap_or_else(|| format!("{}/lms_0_5.json", data_dir));
    let child = args
        .next()
        .unwrap_or_else(|| format!("{}/lms_5_19.json", data_dir));

    REFERENCE.install(ReferenceSet::from_json_files(&infant, &child)?)?;

    let subject = Subject::builder(Sex::Male)
        .born(NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
        .evaluated(NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"))
        .weight_kg(14.0)
        .height_cm(95.0)
        .parents(170.0, 160.0)
        .build();

    let report = subject.growth_from_store(&REFERENCE, &GrowthOptions::default())?;
    println!("{}", report);

    if let Some(chart) = report.chart(Measurement::Height) {
        println!("\n{}", serde_json::to_string_pretty(chart)?);
    }
    Ok(())
}
