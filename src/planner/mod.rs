mod decode;
mod formulate;
mod pattern;
mod types;

pub use formulate::{CoverageRow, StaffingProblem};
pub use pattern::{week_patterns, ShiftPattern};
pub use types::PlanError;

use crate::model::{Demand, PlanId, SolveStatus, StaffingPlan, WeekLabels};
use crate::solver::MipSolver;
use chrono::Utc;

/// Planner : encapsule les motifs de rotation et déroule le pipeline
/// formulation → résolution → décodage → synthèse.
#[derive(Debug)]
pub struct Planner {
    patterns: Vec<ShiftPattern>,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            patterns: pattern::week_patterns(),
        }
    }

    pub fn patterns(&self) -> &[ShiftPattern] {
        &self.patterns
    }

    /// Génère le programme en nombres entiers pour une demande donnée.
    pub fn formulate(&self, demand: &Demand) -> StaffingProblem {
        formulate::build_problem(&self.patterns, demand)
    }

    /// Calcule un plan d'effectif complet.
    ///
    /// Échoue sans rien décoder si le solveur ne renvoie pas un statut
    /// optimal ; échoue également si une valeur renvoyée n'est pas un entier
    /// non négatif à la tolérance près.
    pub fn plan(
        &self,
        demand: &Demand,
        labels: WeekLabels,
        solver: &dyn MipSolver,
    ) -> Result<StaffingPlan, PlanError> {
        let problem = self.formulate(demand);
        let raw = solver.solve(&problem)?;

        if raw.status != SolveStatus::Optimal {
            return Err(PlanError::NonOptimal(raw.status));
        }

        let counts = decode::decode_counts(&raw)?;
        let coverage = decode::coverage_matrix(&self.patterns, &counts);
        let summary = decode::summarize(&coverage, demand);
        let total_staff = counts.iter().map(|&c| u64::from(c)).sum();

        Ok(StaffingPlan {
            id: PlanId::random(),
            solved_at: Utc::now(),
            status: raw.status,
            total_staff,
            labels,
            demand: demand.clone(),
            shift_counts: counts,
            coverage,
            summary,
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}
