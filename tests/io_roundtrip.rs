#![forbid(unsafe_code)]
use effectif::{
    io, Demand, GoodLpSolver, JsonStorage, Planner, Storage, StaffingPlan, WeekLabels,
};
use std::fs;
use tempfile::tempdir;

fn sample_plan() -> StaffingPlan {
    let demand = Demand::new(vec![4, 2, 3, 5, 1, 0, 2]).unwrap();
    Planner::new()
        .plan(&demand, WeekLabels::default(), &GoodLpSolver)
        .unwrap()
}

#[test]
fn save_and_load_plan_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let storage = JsonStorage::open(&path).unwrap();
    let plan = sample_plan();

    assert!(!storage.exists());
    storage.save(&plan).unwrap();
    assert!(storage.exists());

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.id, plan.id);
    assert_eq!(loaded.total_staff, plan.total_staff);
    assert_eq!(loaded.demand, plan.demand);
    assert_eq!(loaded.shift_counts, plan.shift_counts);
    assert_eq!(loaded.summary, plan.summary);
}

#[test]
fn import_demand_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demand.csv");
    fs::write(
        &path,
        "day,demand\n\
         Monday,31\nTuesday,45\nWednesday,40\nThursday,40\nFriday,48\nSaturday,30\nSunday,25\n",
    )
    .unwrap();

    let (labels, demand) = io::import_demand_csv(&path).unwrap();
    assert_eq!(labels.get(0), "Monday");
    assert_eq!(labels.get(6), "Sunday");
    assert_eq!(demand.values(), [31, 45, 40, 40, 48, 30, 25]);
}

#[test]
fn import_rejects_short_or_negative_demand() {
    let dir = tempdir().unwrap();

    let short = dir.path().join("short.csv");
    fs::write(&short, "day,demand\nMonday,3\nTuesday,4\n").unwrap();
    assert!(io::import_demand_csv(&short).is_err());

    let negative = dir.path().join("negative.csv");
    fs::write(
        &negative,
        "day,demand\n\
         Monday,31\nTuesday,-1\nWednesday,40\nThursday,40\nFriday,48\nSaturday,30\nSunday,25\n",
    )
    .unwrap();
    assert!(io::import_demand_csv(&negative).is_err());
}

#[test]
fn export_artifacts() {
    let dir = tempdir().unwrap();
    let plan = sample_plan();

    let summary = dir.path().join("summary.csv");
    io::export_summary_csv(&summary, &plan).unwrap();
    let content = fs::read_to_string(&summary).unwrap();
    assert!(content.starts_with("day,demand,supply,slack"));
    assert!(content.contains("Monday"));

    let coverage = dir.path().join("coverage.csv");
    io::export_coverage_csv(&coverage, &plan).unwrap();
    let content = fs::read_to_string(&coverage).unwrap();
    // header + une ligne par jour de départ
    assert_eq!(content.lines().count(), 8);

    let json = dir.path().join("plan.json");
    io::export_plan_json(&json, &plan).unwrap();
    let content = fs::read_to_string(&json).unwrap();
    assert!(content.contains("\"total_staff\""));
}
