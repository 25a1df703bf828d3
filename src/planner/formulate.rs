use super::pattern::ShiftPattern;
use crate::model::{Demand, DAYS_PER_WEEK};

/// Contrainte de couverture d'un jour calendaire : la somme des variables
/// des jours de départ listés dans `covering` doit atteindre `required`.
#[derive(Debug, Clone)]
pub struct CoverageRow {
    pub day: usize,
    pub covering: Vec<usize>,
    pub required: u32,
}

/// Programme en nombres entiers prêt à passer au solveur : une variable
/// entière ≥ 0 par jour de départ, objectif = minimiser leur somme, une
/// ligne de couverture par jour calendaire.
#[derive(Debug, Clone)]
pub struct StaffingProblem {
    pub rows: Vec<CoverageRow>,
}

/// Construit les lignes de couverture à partir des motifs et de la demande.
///
/// Un jour de départ couvre le jour `d` dès lors que `d` n'appartient pas à
/// ses jours de repos ; c'est la même caractérisation que « `d` appartient
/// aux jours travaillés » puisque les deux ensembles partitionnent la
/// semaine.
pub(super) fn build_problem(patterns: &[ShiftPattern], demand: &Demand) -> StaffingProblem {
    let rows = (0..DAYS_PER_WEEK)
        .map(|day| CoverageRow {
            day,
            covering: patterns
                .iter()
                .filter(|p| !p.rests(day))
                .map(|p| p.start)
                .collect(),
            required: demand.get(day),
        })
        .collect();

    StaffingProblem { rows }
}
