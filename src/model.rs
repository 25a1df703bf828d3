use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nombre de jours du cycle hebdomadaire.
pub const DAYS_PER_WEEK: usize = 7;
/// Jours travaillés consécutifs d'une rotation.
pub const WORKED_DAYS: usize = 5;
/// Jours de repos consécutifs qui suivent.
pub const REST_DAYS: usize = 2;

/// Identifiant fort pour un plan calculé
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(String);

impl PlanId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Demande journalière (toujours 7 valeurs, lundi → dimanche ou tout ordre fixe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand(Vec<u32>);

impl Demand {
    /// Construit une demande en validant la longueur.
    pub fn new(values: Vec<u32>) -> Result<Self, String> {
        if values.len() != DAYS_PER_WEEK {
            return Err(format!(
                "expected {DAYS_PER_WEEK} daily values, got {}",
                values.len()
            ));
        }
        Ok(Self(values))
    }

    /// Construit une demande depuis des entiers signés (import CSV, CLI).
    pub fn from_signed(values: &[i64]) -> Result<Self, String> {
        if values.len() != DAYS_PER_WEEK {
            return Err(format!(
                "expected {DAYS_PER_WEEK} daily values, got {}",
                values.len()
            ));
        }
        let mut out = Vec::with_capacity(DAYS_PER_WEEK);
        for (day, &v) in values.iter().enumerate() {
            if v < 0 {
                return Err(format!("day {day} has negative value {v}"));
            }
            out.push(v as u32);
        }
        Ok(Self(out))
    }

    pub fn get(&self, day: usize) -> u32 {
        self.0[day]
    }

    pub fn values(&self) -> &[u32] {
        &self.0
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }
}

/// Libellés d'affichage des 7 jours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekLabels(Vec<String>);

impl WeekLabels {
    pub fn new(labels: Vec<String>) -> Result<Self, String> {
        if labels.len() != DAYS_PER_WEEK {
            return Err(format!(
                "expected {DAYS_PER_WEEK} day labels, got {}",
                labels.len()
            ));
        }
        Ok(Self(labels))
    }

    pub fn get(&self, day: usize) -> &str {
        &self.0[day]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for WeekLabels {
    fn default() -> Self {
        Self(
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        )
    }
}

/// Statut renvoyé par le solveur externe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    NotSolved,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded => "unbounded",
            SolveStatus::NotSolved => "not solved",
        };
        f.write_str(s)
    }
}

/// Matrice de couverture 7×7 : ligne = jour de départ, colonne = jour calendaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    rows: Vec<Vec<u32>>,
}

impl CoverageMatrix {
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        debug_assert_eq!(rows.len(), DAYS_PER_WEEK);
        debug_assert!(rows.iter().all(|r| r.len() == DAYS_PER_WEEK));
        Self { rows }
    }

    pub fn cell(&self, start: usize, day: usize) -> u32 {
        self.rows[start][day]
    }

    pub fn row(&self, start: usize) -> &[u32] {
        &self.rows[start]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Somme de chaque colonne : couverture totale par jour calendaire.
    pub fn column_sums(&self) -> Vec<u32> {
        let mut sums = vec![0u32; DAYS_PER_WEEK];
        for row in &self.rows {
            for (day, &count) in row.iter().enumerate() {
                sums[day] += count;
            }
        }
        sums
    }
}

/// Ligne de synthèse pour un jour calendaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: usize,
    pub demand: u32,
    pub supply: u32,
    /// supply − demand ; jamais négatif pour un statut optimal.
    pub slack: i64,
}

/// Plan d'effectif complet, prêt à afficher ou exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingPlan {
    pub id: PlanId,
    pub solved_at: DateTime<Utc>,
    pub status: SolveStatus,
    /// Objectif : effectif total embauché.
    pub total_staff: u64,
    pub labels: WeekLabels,
    pub demand: Demand,
    /// Nombre de travailleurs démarrant leur bloc de 5 jours sur chaque jour.
    pub shift_counts: Vec<u32>,
    pub coverage: CoverageMatrix,
    pub summary: Vec<DaySummary>,
}

impl StaffingPlan {
    /// Jours en déficit (marge négative). Vide pour tout plan optimal.
    pub fn deficits(&self) -> Vec<&DaySummary> {
        self.summary.iter().filter(|s| s.slack < 0).collect()
    }
}
