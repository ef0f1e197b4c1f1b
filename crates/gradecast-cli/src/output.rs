use gradecast_core::{
    FormState, GpaBandRow, GradecastError, RangeRow, ResultView, StatsRow, ViewState,
};

pub fn bar(width_pct: f64, bar_width: usize) -> String {
    let filled = ((width_pct / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);
    format!("{}{}", "█".repeat(filled), "░".repeat(bar_width - filled))
}

pub fn result_table(view: &ResultView, bar_width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Prediction: {} [{}]\n", view.badge.text, view.badge.style));
    out.push_str(&format!("{:-<50}\n", ""));

    out.push_str("Probabilities:\n");
    let label_width = view.bars.iter().map(|b| b.category.len()).max().unwrap_or(0);
    for b in &view.bars {
        out.push_str(&format!(
            "  {:<lw$}  {}  {}\n",
            b.category,
            bar(b.width, bar_width),
            b.label,
            lw = label_width
        ));
    }

    if !view.features.is_empty() {
        out.push_str("Features used:\n");
        for f in &view.features {
            out.push_str(&format!("  {}: {}\n", f.name, f.value));
        }
    }
    out
}

pub fn error_banner(error: &GradecastError) -> String {
    let mut out = format!("Error: {}\n", error);
    for detail in error.details() {
        out.push_str(&format!("  - {}\n", detail));
    }
    out
}

pub fn view_state(view: &ViewState, bar_width: usize) -> String {
    match view {
        ViewState::Idle => "Ready.\n".to_string(),
        ViewState::Loading => "Predicting...\n".to_string(),
        ViewState::Result(_) => view
            .result_view()
            .map(|v| result_table(&v, bar_width))
            .unwrap_or_default(),
        ViewState::Error(e) => error_banner(e),
    }
}

pub fn range_table(rows: &[RangeRow]) -> String {
    if rows.is_empty() {
        return "No range information available.\n".to_string();
    }
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|r| format!("  {:<w$}  {}\n", r.name, r.range, w = width))
        .collect()
}

/// Current values with inline diagnostics for flagged fields.
pub fn form_table(form: &FormState) -> String {
    let width = form
        .schema()
        .fields
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in &form.schema().fields {
        let value = form.value(&field.name).unwrap_or_default();
        let value = if value.is_empty() { "-" } else { value };
        let marker = match form.result(&field.name).and_then(|r| r.diagnostic()) {
            Some(diagnostic) => format!("  ! {}", diagnostic),
            None => String::new(),
        };
        out.push_str(&format!(
            "  {:<w$}  {:<8}{}\n",
            field.label,
            value,
            marker,
            w = width
        ));
    }
    out
}

pub fn gpa_table(rows: &[GpaBandRow]) -> String {
    rows.iter()
        .map(|r| format!("  {:<10} {:<16} {}\n", r.category, r.range, r.description))
        .collect()
}

pub fn stats_table(rows: &[StatsRow]) -> String {
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(4).max(4);
    let mut out = format!(
        "  {:<w$}  {:>8} {:>8} {:>8} {:>8} {:>8}\n",
        "Feature",
        "Min",
        "Max",
        "Mean",
        "Median",
        "Std",
        w = width
    );
    for r in rows {
        out.push_str(&format!(
            "  {:<w$}  {:>8} {:>8} {:>8} {:>8} {:>8}\n",
            r.name,
            r.min,
            r.max,
            r.mean,
            r.median,
            r.std,
            w = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradecast_core::{decode_prediction, render, Controller};

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(50.0, 10), "█████░░░░░");
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(100.0, 4), "████");
    }

    #[test]
    fn test_result_table() {
        let response = decode_prediction(
            200,
            r#"{"prediction":"Pass","probabilities":{"Pass":"82%","Fail":"18%"},"features_used":{"study_hours":5}}"#,
        )
        .unwrap();
        let text = result_table(&render(&response), 10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Prediction: Pass [pass]");
        assert_eq!(lines[3], "  Pass  ████████░░  82%");
        assert_eq!(lines[4], "  Fail  ██░░░░░░░░  18%");
        assert_eq!(lines[6], "  Study Hours: 5");
    }

    #[test]
    fn test_error_banner_details() {
        let err = GradecastError::Server {
            status: 400,
            message: "Validation failed".into(),
            details: vec!["Missing value for lab_credits".into()],
        };
        assert_eq!(
            error_banner(&err),
            "Error: Validation failed\n  - Missing value for lab_credits\n"
        );
    }

    #[test]
    fn test_form_table_marks_invalid() {
        let mut c = Controller::default();
        c.input("attendance_percentage", "150");
        let text = form_table(c.form());
        let line = text
            .lines()
            .find(|l| l.contains("Attendance Percentage"))
            .unwrap();
        assert!(line.contains("150"));
        assert!(line.ends_with("! Value must be between 0 and 100"));
    }

    #[test]
    fn test_empty_ranges() {
        assert_eq!(range_table(&[]), "No range information available.\n");
    }
}
