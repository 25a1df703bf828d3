use crate::model::StaffingPlan;

/// Permet de customiser le rendu du plan (texte, HTML, etc.).
pub trait ReportRenderer {
    fn render(&self, plan: &StaffingPlan) -> String;
}

/// Rendu texte aligné : statut, effectif total, tableau de couverture et
/// synthèse journalière.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(&self, plan: &StaffingPlan) -> String {
        let labels: Vec<&str> = plan.labels.iter().collect();
        let label_w = labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(&format!("Statut : {}\n", plan.status));
        out.push_str(&format!("Effectif total : {}\n", plan.total_staff));
        out.push('\n');

        out.push_str("Couverture (travailleurs par jour de départ)\n");
        let row_w = label_w + "Shift: ".len();
        let mut header = format!("{:<row_w$}", "");
        for label in &labels {
            header.push_str(&format!("  {:>w$}", label, w = label.len().max(3)));
        }
        out.push_str(header.trim_end());
        out.push('\n');
        for (start, row) in plan.coverage.rows().enumerate() {
            let mut line = format!("{:<row_w$}", format!("Shift: {}", labels[start]));
            for (day, &count) in row.iter().enumerate() {
                line.push_str(&format!("  {:>w$}", count, w = labels[day].len().max(3)));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');

        out.push_str("Synthèse journalière\n");
        let day_w = label_w.max("Jour".len());
        out.push_str(&format!(
            "{:<day_w$}  {:>7}  {:>10}  {:>5}\n",
            "Jour", "Demande", "Couverture", "Marge"
        ));
        for row in &plan.summary {
            out.push_str(&format!(
                "{:<day_w$}  {:>7}  {:>10}  {:>5}\n",
                labels[row.day], row.demand, row.supply, row.slack
            ));
        }

        out
    }
}
