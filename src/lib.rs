#![forbid(unsafe_code)]
//! Effectif — dimensionnement d'effectif hebdomadaire (sans BD).
//!
//! - Règle fixe : 5 jours travaillés puis 2 jours de repos, en cycle sur 7 jours.
//! - Formulation d'un programme en nombres entiers (une variable par jour de départ).
//! - Résolution via un solveur MIP interchangeable (`good_lp`).
//! - Décodage en matrice de couverture et synthèse demande/couverture/marge.

pub mod io;
pub mod model;
pub mod planner;
pub mod report;
pub mod solver;
pub mod storage;

pub use model::{
    CoverageMatrix, DaySummary, Demand, PlanId, SolveStatus, StaffingPlan, WeekLabels,
    DAYS_PER_WEEK, REST_DAYS, WORKED_DAYS,
};
pub use planner::{week_patterns, CoverageRow, PlanError, Planner, ShiftPattern, StaffingProblem};
pub use report::{ReportRenderer, TextReport};
pub use solver::{GoodLpSolver, MipSolver, RawSolution};
pub use storage::{JsonStorage, Storage};
