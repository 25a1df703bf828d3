use crate::model::{SolveStatus, DAYS_PER_WEEK};
use crate::planner::{PlanError, StaffingProblem};
use good_lp::{
    constraint, default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable,
};

/// Sortie brute du solveur : statut, objectif et une valeur par variable,
/// indexée par jour de départ (jamais par relecture d'un nom généré).
#[derive(Debug, Clone)]
pub struct RawSolution {
    pub status: SolveStatus,
    pub objective: f64,
    pub values: Vec<f64>,
}

impl RawSolution {
    /// Sortie vide portant un statut d'échec.
    pub fn unsolved(status: SolveStatus) -> Self {
        Self {
            status,
            objective: 0.0,
            values: vec![0.0; DAYS_PER_WEEK],
        }
    }
}

/// Frontière vers un solveur en nombres entiers.
///
/// Seul point bloquant du pipeline ; un service qui expose le calcul doit
/// appliquer son timeout autour de cet appel. Aucun état n'est conservé
/// entre deux résolutions.
pub trait MipSolver {
    fn solve(&self, problem: &StaffingProblem) -> Result<RawSolution, PlanError>;
}

/// Implémentation par défaut via `good_lp` (backend pur Rust `microlp`).
#[derive(Debug, Default, Clone, Copy)]
pub struct GoodLpSolver;

impl MipSolver for GoodLpSolver {
    fn solve(&self, problem: &StaffingProblem) -> Result<RawSolution, PlanError> {
        let mut vars = variables!();
        let x: Vec<Variable> = (0..DAYS_PER_WEEK)
            .map(|_| vars.add(variable().integer().min(0)))
            .collect();

        let objective: Expression = x.iter().copied().sum();
        let mut model = vars.minimise(objective).using(default_solver);

        for row in &problem.rows {
            let staffed = row
                .covering
                .iter()
                .fold(Expression::from(0), |acc, &start| acc + x[start]);
            model = model.with(constraint!(staffed >= f64::from(row.required)));
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = x.iter().map(|&v| solution.value(v)).collect();
                let objective = values.iter().sum();
                Ok(RawSolution {
                    status: SolveStatus::Optimal,
                    objective,
                    values,
                })
            }
            Err(ResolutionError::Infeasible) => Ok(RawSolution::unsolved(SolveStatus::Infeasible)),
            Err(ResolutionError::Unbounded) => Ok(RawSolution::unsolved(SolveStatus::Unbounded)),
            Err(err) => Err(PlanError::SolverUnavailable(err.to_string())),
        }
    }
}
