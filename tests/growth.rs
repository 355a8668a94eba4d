use anthropometry::prelude::*;
use anthropometry::reference::AgeDomain;
use anthropometry::score::{curve_at_z, sweep_ages};
use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

const INFANT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/lms_0_5.json");
const CHILD: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/lms_5_19.json");
const CHILD_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/lms_5_19.csv");

fn reference() -> ReferenceSet {
    ReferenceSet::from_json_files(INFANT, CHILD).expect("fixture tables")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fixture_tables_load() {
    let reference = reference();
    for domain in [AgeDomain::Infant, AgeDomain::Child] {
        let table = reference.table(domain);
        assert_eq!(table.domain(), domain);
        assert_eq!(table.len(), 6);
    }
    assert_eq!(reference.table(AgeDomain::Infant).knot_count(), 37);
    assert_eq!(reference.table(AgeDomain::Child).knot_count(), 20);
}

#[test]
fn csv_and_json_tables_agree() {
    let json = reference();
    let csv = ReferenceTable::from_csv_path(AgeDomain::Child, CHILD_CSV).expect("csv fixture");
    let json = json.table(AgeDomain::Child);

    for sex in [Sex::Male, Sex::Female] {
        for measurement in Measurement::ALL {
            let a = json.lookup(sex, measurement).unwrap();
            let b = csv.lookup(sex, measurement).unwrap();
            assert_eq!(a, b, "{} {}", sex, measurement);
        }
    }
}

#[test]
fn missing_file_is_reported() {
    let err = ReferenceSet::from_json_files("does/not/exist.json", CHILD).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn forward_and_inverse_transforms_agree() {
    let reference = reference();
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..2_000 {
        let sex = if rng.random_bool(0.5) { Sex::Male } else { Sex::Female };
        let measurement = Measurement::ALL[rng.random_range(0..3)];
        let months = rng.random_range(0.0..=228.0);
        let z = rng.random_range(-4.0..=4.0);

        let lms = reference.lms_at_months(sex, measurement, months).unwrap();
        let x = value_at_z(&lms, z).unwrap();
        let back = z_score(x, &lms).unwrap();
        assert_relative_eq!(back, z, epsilon = 1e-6);
    }
}

#[test]
fn lms_is_continuous_inside_each_table() {
    let reference = reference();
    for measurement in Measurement::ALL {
        let ages = sweep_ages(60.0, 0.01);
        let values: Vec<f64> = ages
            .iter()
            .map(|&m| reference.lms_at_months(Sex::Female, measurement, m).unwrap().m)
            .collect();
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0]).abs() < 0.1, "{} jumps inside the infant table", measurement);
        }
    }
}

#[test]
fn table_switch_is_a_hard_boundary() {
    let reference = reference();
    let at_switch = reference
        .lms_at_months(Sex::Male, Measurement::Height, 60.0)
        .unwrap();
    let past_switch = reference
        .lms_at_months(Sex::Male, Measurement::Height, 60.01)
        .unwrap();

    // 60 months is 1826.25 days, interpolated in the infant table
    assert_relative_eq!(at_switch.m, 109.9638 + 0.25 / 30.0 * (110.2647 - 109.9638), epsilon = 1e-9);
    // past the switch the child table clamps to its first knot
    assert_relative_eq!(past_switch.m, 110.2647);
}

#[test]
fn ages_beyond_tables_clamp() {
    let reference = reference();
    let last = reference
        .lms_at_months(Sex::Female, Measurement::Bmi, 228.0)
        .unwrap();
    let beyond = reference
        .lms_at_months(Sex::Female, Measurement::Bmi, 400.0)
        .unwrap();
    assert_eq!(last, beyond);
}

#[test]
fn median_curve_follows_reference() {
    let reference = reference();
    let curve = curve_at_z(&reference, Sex::Male, Measurement::Weight, 0.0, 120.0, 0.5);
    assert_eq!(curve.len(), 241);
    for point in &curve {
        let lms = reference
            .lms_at_months(Sex::Male, Measurement::Weight, point.x)
            .unwrap();
        assert_relative_eq!(point.y, lms.m, epsilon = 1e-9);
    }
}

#[test]
fn school_age_girl_report() {
    let reference = reference();
    let subject = Subject::builder(Sex::Female)
        .born(date(2011, 9, 1))
        .evaluated(date(2024, 9, 1))
        .weight_kg(45.0)
        .height_cm(155.0)
        .parents(178.0, 164.0)
        .build();

    let report = subject.growth(&reference, &GrowthOptions::default()).unwrap();
    assert_eq!(report.domain, AgeDomain::Child);
    assert!((report.age.years() - 13.0).abs() < 0.01);
    assert_eq!(report.height.category, Category::AdequateStature);
    assert_eq!(report.bmi.category, Category::Normal);

    let target = report.target.unwrap();
    assert_relative_eq!(target.median, 164.5);
    assert!(target.z_median.unwrap() > 0.0);

    let text = report.to_string();
    assert!(text.starts_with("Age: 4749 days"));
    assert!(text.contains("Target height: 164.5 cm (158.0–171.0 cm)"));
}

#[test]
fn shared_store_serves_many_subjects() {
    static STORE: ReferenceStore = ReferenceStore::new();
    assert!(!STORE.is_loaded());
    STORE.install(reference()).unwrap();
    assert!(matches!(
        STORE.install(reference()),
        Err(GrowthError::AlreadyLoaded)
    ));

    let options = GrowthOptions::scores_only();
    let reports: Vec<_> = (0..12)
        .map(|months| {
            Subject::builder(Sex::Male)
                .born(date(2020, 1, 1))
                .evaluated(date(2020 + months / 12, 1 + (months % 12) as u32, 1))
                .weight_kg(3.5 + months as f64 * 0.6)
                .height_cm(50.0 + months as f64 * 2.2)
                .build()
                .growth_from_store(&STORE, &options)
                .unwrap()
        })
        .collect();

    assert_eq!(reports.len(), 12);
    assert!(reports.iter().all(|r| r.height.is_scored() && r.weight.is_scored()));
}
