use super::pattern::ShiftPattern;
use super::types::PlanError;
use crate::model::{CoverageMatrix, DaySummary, Demand, DAYS_PER_WEEK};
use crate::solver::RawSolution;

/// Écart maximal toléré entre une valeur renvoyée par le solveur et
/// l'entier le plus proche.
pub(super) const INT_TOLERANCE: f64 = 1e-6;

/// Convertit les valeurs du solveur en comptes entiers exacts, indexés par
/// jour de départ. Toute valeur fractionnaire ou hors domaine est une
/// violation de contrat du solveur, jamais arrondie en silence.
pub(super) fn decode_counts(raw: &RawSolution) -> Result<Vec<u32>, PlanError> {
    raw.values
        .iter()
        .enumerate()
        .map(|(day, &value)| {
            let rounded = value.round();
            if (value - rounded).abs() > INT_TOLERANCE || rounded < 0.0 {
                return Err(PlanError::NonIntegerSolution { day, value });
            }
            Ok(rounded as u32)
        })
        .collect()
}

/// Déploie les comptes par jour de départ en matrice de couverture 7×7.
pub(super) fn coverage_matrix(patterns: &[ShiftPattern], counts: &[u32]) -> CoverageMatrix {
    let rows = patterns
        .iter()
        .map(|pattern| {
            (0..DAYS_PER_WEEK)
                .map(|day| {
                    if pattern.covers(day) {
                        counts[pattern.start]
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();

    CoverageMatrix::new(rows)
}

/// Synthèse par jour calendaire : demande, couverture, marge.
pub(super) fn summarize(matrix: &CoverageMatrix, demand: &Demand) -> Vec<DaySummary> {
    matrix
        .column_sums()
        .into_iter()
        .enumerate()
        .map(|(day, supply)| DaySummary {
            day,
            demand: demand.get(day),
            supply,
            slack: i64::from(supply) - i64::from(demand.get(day)),
        })
        .collect()
}
