use crate::model::{Demand, StaffingPlan, WeekLabels, DAYS_PER_WEEK};
use crate::planner::PlanError;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'une demande depuis CSV : header `day,demand`, exactement 7 lignes.
///
/// Les libellés de la première colonne deviennent les libellés d'affichage.
pub fn import_demand_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<(WeekLabels, Demand)> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut labels = Vec::new();
    let mut values = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let day = rec.get(0).context("missing day label")?.trim();
        let raw = rec.get(1).context("missing demand value")?.trim();
        if day.is_empty() {
            bail!("invalid demand row (empty day label)");
        }
        let value: i64 = raw
            .parse()
            .with_context(|| format!("invalid demand value for {day}: {raw}"))?;
        labels.push(day.to_string());
        values.push(value);
    }
    if values.len() != DAYS_PER_WEEK {
        bail!(
            "demand file must contain {DAYS_PER_WEEK} rows, found {}",
            values.len()
        );
    }
    let demand = Demand::from_signed(&values).map_err(PlanError::InvalidDemand)?;
    let labels = WeekLabels::new(labels).map_err(PlanError::InvalidLabels)?;
    Ok((labels, demand))
}

/// Export JSON du plan (jolie mise en forme)
pub fn export_plan_json<P: AsRef<Path>>(path: P, plan: &StaffingPlan) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(plan)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la matrice de couverture : header `start_day,<libellés>`.
pub fn export_coverage_csv<P: AsRef<Path>>(path: P, plan: &StaffingPlan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    let mut header = vec!["start_day".to_string()];
    header.extend(plan.labels.iter().map(str::to_owned));
    w.write_record(&header)?;

    let mut buf = itoa::Buffer::new();
    for (start, row) in plan.coverage.rows().enumerate() {
        let mut record = vec![plan.labels.get(start).to_string()];
        for &count in row {
            record.push(buf.format(count).to_string());
        }
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV de la synthèse : header `day,demand,supply,slack`.
pub fn export_summary_csv<P: AsRef<Path>>(path: P, plan: &StaffingPlan) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "demand", "supply", "slack"])?;

    let mut buf = itoa::Buffer::new();
    for row in &plan.summary {
        let mut record = vec![plan.labels.get(row.day).to_string()];
        record.push(buf.format(row.demand).to_string());
        record.push(buf.format(row.supply).to_string());
        record.push(buf.format(row.slack).to_string());
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}
