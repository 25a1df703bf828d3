use crate::model::{DAYS_PER_WEEK, REST_DAYS, WORKED_DAYS};

/// Motif de rotation pour un jour de départ donné : les 5 jours travaillés
/// et les 2 jours de repos qui suivent, en indices de jour canoniques [0,6].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftPattern {
    pub start: usize,
    pub on_duty: Vec<usize>,
    pub off_duty: Vec<usize>,
}

impl ShiftPattern {
    /// Le jour calendaire `day` est-il travaillé par cette rotation ?
    pub fn covers(&self, day: usize) -> bool {
        self.on_duty.contains(&day)
    }

    /// Le jour calendaire `day` est-il chômé par cette rotation ?
    pub fn rests(&self, day: usize) -> bool {
        self.off_duty.contains(&day)
    }
}

/// Génère les 7 motifs de rotation, un par jour de départ possible.
///
/// La séquence des jours est étendue cycliquement (3 semaines mises bout à
/// bout) puis découpée par fenêtre glissante, ce qui évite toute gestion de
/// bord au passage du dimanche au lundi.
pub fn week_patterns() -> Vec<ShiftPattern> {
    let extended: Vec<usize> = (0..DAYS_PER_WEEK)
        .cycle()
        .take(DAYS_PER_WEEK * 3)
        .collect();

    (0..DAYS_PER_WEEK)
        .map(|start| ShiftPattern {
            start,
            on_duty: extended[start..start + WORKED_DAYS].to_vec(),
            off_duty: extended[start + WORKED_DAYS..start + WORKED_DAYS + REST_DAYS].to_vec(),
        })
        .collect()
}
