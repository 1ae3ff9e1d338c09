use super::{bar, render_summary, BAR_WIDTH};
use phonecheck_core::{BatchSummary, LineTypeCount};

fn summary() -> BatchSummary {
    BatchSummary {
        total: 4,
        valid: 3,
        invalid: 1,
        mobile: 2,
        non_mobile: 2,
        line_types: vec![
            LineTypeCount {
                label: "Mobile".to_string(),
                count: 2,
            },
            LineTypeCount {
                label: "Invalid".to_string(),
                count: 1,
            },
            LineTypeCount {
                label: "Landline".to_string(),
                count: 1,
            },
        ],
    }
}

#[test]
fn summary_lists_counts_and_percentages() {
    let text = render_summary(&summary(), false);
    assert!(text.contains("total:   4"));
    assert!(text.contains("valid:   3 (75.0%)"));
    assert!(text.contains("invalid: 1 (25.0%)"));
    assert!(text.contains("line types:"));
    assert!(!text.contains("mobile vs non-mobile"));
}

#[test]
fn summary_includes_mobile_split_when_requested() {
    let text = render_summary(&summary(), true);
    assert!(text.contains("mobile:  2"));
    assert!(text.contains("mobile vs non-mobile:"));
    assert!(text.contains("Non-Mobile"));
}

#[test]
fn bars_scale_to_total() {
    assert_eq!(bar(4, 4).len(), BAR_WIDTH);
    assert_eq!(bar(2, 4).len(), BAR_WIDTH / 2);
    assert_eq!(bar(1, 1000).len(), 1);
    assert!(bar(0, 4).is_empty());
}

#[test]
fn bar_rows_align_labels() {
    let text = render_summary(&summary(), false);
    let line = text
        .lines()
        .find(|line| line.trim_start().starts_with("Mobile"))
        .expect("mobile row");
    assert!(line.starts_with("  Mobile    "));
    assert!(line.ends_with(" 2"));
}

#[test]
fn empty_summary_says_so() {
    let empty = BatchSummary {
        total: 0,
        valid: 0,
        invalid: 0,
        mobile: 0,
        non_mobile: 0,
        line_types: vec![],
    };
    assert_eq!(render_summary(&empty, true), "no rows processed");
}
