//! Pure projections from response data to view structures.
//!
//! Every call builds a fresh view, so showing a second prediction can never
//! leave bars or rows from the first one behind.

use serde::Serialize;

use super::types::{PredictionResponse, RangeSummary};
use crate::format::{display_value, humanize, parse_percent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub text: String,
    /// Lower-cased label, used as the style variant.
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityBar {
    pub category: String,
    /// Percentage exactly as the server formatted it.
    pub label: String,
    /// Bar width in percent, `[0, 100]`.
    pub width: f64,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub badge: Badge,
    pub bars: Vec<ProbabilityBar>,
    pub features: Vec<FeatureRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeRow {
    pub name: String,
    pub range: String,
}

pub fn style_key(label: &str) -> String {
    label.to_lowercase()
}

pub fn render(response: &PredictionResponse) -> ResultView {
    let badge = Badge {
        text: response.prediction.clone(),
        style: style_key(&response.prediction),
    };

    let bars = response
        .probabilities
        .iter()
        .map(|(category, label)| ProbabilityBar {
            category: category.to_string(),
            label: label.clone(),
            width: parse_percent(label).unwrap_or(0.0),
            style: style_key(category),
        })
        .collect();

    let features = response
        .features_used
        .iter()
        .map(|(name, value)| FeatureRow {
            name: humanize(name),
            value: display_value(value),
        })
        .collect();

    ResultView {
        badge,
        bars,
        features,
    }
}

pub fn render_ranges(ranges: &RangeSummary) -> Vec<RangeRow> {
    ranges
        .iter()
        .map(|(name, constraint)| RangeRow {
            name: humanize(name),
            range: constraint.describe(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::decode_prediction;

    fn response(body: &str) -> PredictionResponse {
        decode_prediction(200, body).unwrap()
    }

    #[test]
    fn test_render_pass_fail() {
        let view = render(&response(
            r#"{"prediction":"Pass","probabilities":{"Pass":"82%","Fail":"18%"},"features_used":{"study_hours":5}}"#,
        ));

        assert_eq!(view.badge.text, "Pass");
        assert_eq!(view.badge.style, "pass");

        let bars: Vec<(&str, &str, f64)> = view
            .bars
            .iter()
            .map(|b| (b.category.as_str(), b.label.as_str(), b.width))
            .collect();
        assert_eq!(bars, vec![("Pass", "82%", 82.0), ("Fail", "18%", 18.0)]);
        assert_eq!(view.bars[1].style, "fail");

        assert_eq!(
            view.features,
            vec![FeatureRow {
                name: "Study Hours".to_string(),
                value: "5".to_string()
            }]
        );
    }

    #[test]
    fn test_render_keeps_server_order() {
        let view = render(&response(
            r#"{"prediction":"Average","probabilities":{"Poor":"10.0%","Excellent":"30.5%","Average":"59.5%"},"features_used":{}}"#,
        ));
        let order: Vec<&str> = view.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(order, vec!["Poor", "Excellent", "Average"]);
        assert!(view.features.is_empty());
    }

    #[test]
    fn test_unparsable_percentage_keeps_label() {
        let view = render(&response(
            r#"{"prediction":"Pass","probabilities":{"Pass":"n/a"},"features_used":{}}"#,
        ));
        assert_eq!(view.bars[0].label, "n/a");
        assert_eq!(view.bars[0].width, 0.0);
    }

    #[test]
    fn test_render_ranges() {
        let ranges: RangeSummary = serde_json::from_str(
            r#"{"attendance_percentage":{"min":0,"max":100,"step":1},"sleep_time_hours":{"min":0,"max":24,"step":0.1}}"#,
        )
        .unwrap();
        let rows = render_ranges(&ranges);
        assert_eq!(rows[0].name, "Attendance Percentage");
        assert_eq!(rows[0].range, "0 to 100");
        assert_eq!(rows[1].range, "0 to 24");
    }
}
