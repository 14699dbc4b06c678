//! Terminal rendering for detection reports and history.
//!
//! Builders return plain strings so they can be tested; the `print_*`
//! functions add colour.

use colored::Colorize;
use moodlens_application::DetectionReport;
use moodlens_core::config::DisplayConfig;
use moodlens_core::history::{HistoryEntry, HistoryStore};
use moodlens_core::inference::InferenceResult;

const CHART_WIDTH: usize = 40;
const HISTORY_TEXT_WIDTH: usize = 40;

pub fn headline(report: &DetectionReport) -> String {
    format!(
        "Detected Emotion: {} {}",
        report.top_label().to_uppercase(),
        report.annotation.emoji
    )
}

pub fn confidence_line(confidence_percent: f64) -> String {
    format!("Confidence: {:.2}%", confidence_percent)
}

pub fn suggestion_line(suggestion: &str) -> String {
    format!("💡 Suggestion: {}", suggestion)
}

/// Two-column table of every label with its percentage, highest first.
pub fn score_table(result: &InferenceResult) -> String {
    let rows = result.percent_table();
    let label_width = column_width("Emotion", rows.iter().map(|(label, _)| label.as_str()));

    let mut out = format!("{:<label_width$}  {:>9}\n", "Emotion", "Score (%)");
    out.push_str(&format!("{}  {}\n", "-".repeat(label_width), "-".repeat(9)));
    for (label, percent) in rows {
        out.push_str(&format!("{:<label_width$}  {:>9.2}\n", label, percent));
    }
    out
}

/// Horizontal bar per label, scaled so a score of 1.0 fills `width` cells.
pub fn score_chart(result: &InferenceResult, width: usize) -> String {
    let label_width = result
        .ranked_scores()
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for score in result.ranked_scores() {
        let filled = (score.score.clamp(0.0, 1.0) * width as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_width$} |{}{}| {:>6.2}%\n",
            score.label,
            "█".repeat(filled),
            " ".repeat(width - filled),
            score.percent()
        ));
    }
    out
}

/// Table of history entries in insertion order.
pub fn history_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No history yet.\n".to_string();
    }

    let rows: Vec<(String, String, String, String)> = entries
        .iter()
        .map(|e| {
            (
                e.timestamp().to_string(),
                shorten(e.input_text(), HISTORY_TEXT_WIDTH),
                e.emotion().to_string(),
                format!("{:.2}", e.confidence_percent()),
            )
        })
        .collect();

    let w_time = column_width("Time", rows.iter().map(|r| r.0.as_str()));
    let w_text = column_width("Text", rows.iter().map(|r| r.1.as_str()));
    let w_emotion = column_width("Emotion", rows.iter().map(|r| r.2.as_str()));
    let w_conf = column_width("Confidence(%)", rows.iter().map(|r| r.3.as_str()));

    let mut out = format!(
        "{:<w_time$}  {:<w_text$}  {:<w_emotion$}  {:>w_conf$}\n",
        "Time", "Text", "Emotion", "Confidence(%)"
    );
    out.push_str(&format!(
        "{}  {}  {}  {}\n",
        "-".repeat(w_time),
        "-".repeat(w_text),
        "-".repeat(w_emotion),
        "-".repeat(w_conf)
    ));
    for (time, text, emotion, confidence) in rows {
        out.push_str(&format!(
            "{:<w_time$}  {:<w_text$}  {:<w_emotion$}  {:>w_conf$}\n",
            time, text, emotion, confidence
        ));
    }
    out
}

/// Bar per detected emotion, scaled so the most frequent one fills `width`.
pub fn history_chart(counts: &[(String, usize)], width: usize) -> String {
    let label_width = counts
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let most = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut out = String::new();
    for (label, count) in counts {
        let filled = if most == 0 {
            0
        } else {
            (*count as f64 / most as f64 * width as f64).round() as usize
        };
        out.push_str(&format!(
            "{:<label_width$} |{}{}| {}\n",
            label,
            "█".repeat(filled),
            " ".repeat(width - filled),
            count
        ));
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

/// Single-line preview of `text`, cut to `max` characters.
fn shorten(text: &str, max: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        return flat;
    }
    let mut cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn print_report(report: &DetectionReport, display: &DisplayConfig) {
    println!("{}", headline(report).bright_green().bold());
    println!("{}", confidence_line(report.confidence_percent()).bright_white());
    println!("{}", suggestion_line(&report.annotation.suggestion).bright_yellow());

    if display.show_table {
        println!();
        print!("{}", score_table(&report.result));
    }
    if display.show_chart {
        println!();
        print!("{}", score_chart(&report.result, CHART_WIDTH).bright_blue());
    }
}

pub fn print_history(history: &HistoryStore, display: &DisplayConfig) {
    print!("{}", history_table(history.entries()));

    if display.show_chart && !history.is_empty() {
        println!();
        print!(
            "{}",
            history_chart(&history.emotion_counts(), CHART_WIDTH).bright_blue()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use moodlens_core::emotion::annotate;
    use moodlens_core::inference::EmotionScore;

    fn result() -> InferenceResult {
        InferenceResult::from_scores(vec![
            EmotionScore::new("joy", 0.021),
            EmotionScore::new("fear", 0.874),
            EmotionScore::new("sadness", 0.105),
        ])
        .unwrap()
    }

    fn report() -> DetectionReport {
        let result = result();
        let annotation = annotate(result.top_label());
        DetectionReport {
            result,
            annotation,
            recorded: None,
        }
    }

    #[test]
    fn test_headline_uppercases_label_with_emoji() {
        assert_eq!(headline(&report()), "Detected Emotion: FEAR 😨");
    }

    #[test]
    fn test_confidence_has_two_decimals() {
        assert_eq!(confidence_line(87.4), "Confidence: 87.40%");
        assert_eq!(confidence_line(33.33333), "Confidence: 33.33%");
    }

    #[test]
    fn test_score_table_lists_labels_highest_first() {
        let table = score_table(&result());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Emotion"));
        assert!(lines[0].ends_with("Score (%)"));
        assert!(lines[2].starts_with("fear") && lines[2].ends_with("87.40"));
        assert!(lines[3].starts_with("sadness") && lines[3].ends_with("10.50"));
        assert!(lines[4].starts_with("joy") && lines[4].ends_with("2.10"));
    }

    #[test]
    fn test_score_chart_scales_bars() {
        let chart = score_chart(&result(), 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('█').count(), 9);
        assert_eq!(lines[1].matches('█').count(), 1);
        assert_eq!(lines[2].matches('█').count(), 0);
        assert!(lines[0].ends_with("87.40%"));
    }

    #[test]
    fn test_history_table_flattens_and_shortens_text() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let entries = vec![
            HistoryEntry::at(at, "line one\nline two", "joy", 91.234).unwrap(),
            HistoryEntry::at(at, "x".repeat(60), "anger", 50.0).unwrap(),
        ];

        let table = history_table(&entries);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Time"));
        assert!(lines[2].contains("line one line two"));
        assert!(lines[2].ends_with("91.23"));
        assert!(lines[3].contains(&format!("{}…", "x".repeat(39))));
        assert!(lines[3].ends_with("50.00"));
    }

    #[test]
    fn test_history_table_empty() {
        assert_eq!(history_table(&[]), "No history yet.\n");
    }

    #[test]
    fn test_history_chart_scales_to_most_frequent() {
        let at = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut store = HistoryStore::new();
        for emotion in ["joy", "fear", "joy", "joy", "sadness", "fear"] {
            store.append(HistoryEntry::at(at, "text", emotion, 80.0).unwrap());
        }

        let chart = history_chart(&store.emotion_counts(), 9);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("joy") && lines[0].ends_with("| 3"));
        assert_eq!(lines[0].matches('█').count(), 9);
        assert_eq!(lines[1].matches('█').count(), 6);
        assert_eq!(lines[2].matches('█').count(), 3);
    }

    #[test]
    fn test_history_chart_empty() {
        assert_eq!(history_chart(&[], 10), "");
    }
}
