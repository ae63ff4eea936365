use super::*;

#[test]
fn completion_shares_sum_to_one_hundred() {
    let total: u32 = COMPLETION_BREAKDOWN.iter().map(|s| s.share).sum();
    assert_eq!(total, 100);
}

#[test]
fn profit_is_revenue_minus_expenses() {
    let march = MONTHLY_METRICS[2];
    assert_eq!(march.profit(), -7800);
    let december = MONTHLY_METRICS[11];
    assert_eq!(december.profit(), 4000);
}

#[test]
fn team_scores_are_percentages() {
    assert!(TEAM_PERFORMANCE.iter().all(|t| t.performance <= 100));
}

#[test]
fn default_view_is_financial() {
    assert_eq!(KpiView::default(), KpiView::Financial);
}
