// ═══════════════════════════════════════════════════════════════════
// Data Shaper Tests — ProgressService: cumulative series, ranked
// project totals, audit totals
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, Utc};

use progress_profile_core::models::transaction::{Transaction, TransactionKind};
use progress_profile_core::services::progress_service::ProgressService;

const PREFIX: &str = "/johvi/div-01/";

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn xp(amount: i64, at: &str, project: &str) -> Transaction {
    Transaction::new(
        amount,
        ts(at),
        format!("{PREFIX}{project}"),
        TransactionKind::Xp,
    )
}

fn audit(amount: i64, kind: TransactionKind) -> Transaction {
    Transaction::new(amount, ts("2024-01-01T00:00:00Z"), "/johvi/piscine/x", kind)
}

// ═══════════════════════════════════════════════════════════════════
// Cumulative series
// ═══════════════════════════════════════════════════════════════════

mod cumulative_series {
    use super::*;

    #[test]
    fn empty_input_yields_empty_series() {
        let svc = ProgressService::new();
        assert!(svc.cumulative_series(&[], PREFIX).is_empty());
    }

    #[test]
    fn starts_with_synthetic_zero_at_earliest_timestamp() {
        let svc = ProgressService::new();
        let series = svc.cumulative_series(
            &[
                xp(1000, "2024-01-01T10:00:00Z", "go-reloaded"),
                xp(2000, "2024-01-03T10:00:00Z", "ascii-art"),
            ],
            PREFIX,
        );

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].cumulative, 0);
        assert_eq!(series[0].at, ts("2024-01-01T10:00:00Z"));
        assert!(series[0].path.is_none());
    }

    #[test]
    fn running_sum_is_non_decreasing_for_non_negative_amounts() {
        let svc = ProgressService::new();
        let series = svc.cumulative_series(
            &[
                xp(500, "2024-02-01T00:00:00Z", "a"),
                xp(0, "2024-02-02T00:00:00Z", "b"),
                xp(2500, "2024-02-05T00:00:00Z", "c"),
                xp(100, "2024-02-09T00:00:00Z", "d"),
            ],
            PREFIX,
        );

        for pair in series.windows(2) {
            assert!(pair[1].cumulative >= pair[0].cumulative);
            assert!(pair[1].at >= pair[0].at);
        }
        assert_eq!(series.last().unwrap().cumulative, 3100);
    }

    #[test]
    fn out_of_order_input_is_resorted_by_time() {
        let svc = ProgressService::new();
        let series = svc.cumulative_series(
            &[
                xp(2000, "2024-01-03T00:00:00Z", "later"),
                xp(1000, "2024-01-01T00:00:00Z", "earlier"),
            ],
            PREFIX,
        );

        assert_eq!(series[0].at, ts("2024-01-01T00:00:00Z"));
        assert_eq!(series[1].path.as_deref(), Some("/johvi/div-01/earlier"));
        assert_eq!(series[2].cumulative, 3000);
    }

    #[test]
    fn filters_out_non_xp_and_foreign_paths() {
        let svc = ProgressService::new();
        let mut rows = vec![xp(1000, "2024-01-01T00:00:00Z", "kept")];
        rows.push(audit(9999, TransactionKind::Up));
        rows.push(Transaction::new(
            7777,
            ts("2024-01-02T00:00:00Z"),
            "/johvi/piscine-js/quest-01",
            TransactionKind::Xp,
        ));

        let series = svc.cumulative_series(&rows, PREFIX);
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().cumulative, 1000);
    }

    #[test]
    fn points_carry_full_paths_for_hover_labels() {
        let svc = ProgressService::new();
        let series = svc.cumulative_series(&[xp(100, "2024-01-01T00:00:00Z", "graphql")], PREFIX);
        assert_eq!(series[1].path.as_deref(), Some("/johvi/div-01/graphql"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Ranked project totals
// ═══════════════════════════════════════════════════════════════════

mod project_totals {
    use super::*;

    #[test]
    fn empty_input_yields_no_totals() {
        let svc = ProgressService::new();
        assert!(svc.project_totals(&[], PREFIX).is_empty());
    }

    #[test]
    fn groups_by_first_segment_after_prefix() {
        let svc = ProgressService::new();
        let totals = svc.project_totals(
            &[
                xp(100, "2024-01-01T00:00:00Z", "netfix/part-one"),
                xp(200, "2024-01-02T00:00:00Z", "netfix/part-two"),
                xp(50, "2024-01-03T00:00:00Z", "ascii-art"),
            ],
            PREFIX,
        );

        assert_eq!(totals.len(), 2);
        // ascending: ascii-art (50) before netfix (300)
        assert_eq!(totals[0].label, "ascii-art");
        assert_eq!(totals[0].amount, 50);
        assert_eq!(totals[1].label, "netfix");
        assert_eq!(totals[1].amount, 300);
    }

    #[test]
    fn partition_law_totals_sum_to_input_sum() {
        let svc = ProgressService::new();
        let rows = vec![
            xp(120, "2024-01-01T00:00:00Z", "a"),
            xp(340, "2024-01-02T00:00:00Z", "b"),
            xp(560, "2024-01-03T00:00:00Z", "a"),
            xp(780, "2024-01-04T00:00:00Z", "c"),
        ];

        let input_sum: i64 = rows.iter().map(|t| t.amount).sum();
        let totals = svc.project_totals(&rows, PREFIX);
        let ranked_sum: i64 = totals.iter().map(|t| t.amount).sum();

        assert_eq!(ranked_sum, input_sum);
    }

    #[test]
    fn ignores_rows_outside_the_prefix() {
        let svc = ProgressService::new();
        let mut rows = vec![xp(100, "2024-01-01T00:00:00Z", "kept")];
        rows.push(Transaction::new(
            500,
            ts("2024-01-02T00:00:00Z"),
            "/other/div-01/ignored",
            TransactionKind::Xp,
        ));
        rows.push(audit(400, TransactionKind::Down));

        let totals = svc.project_totals(&rows, PREFIX);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].label, "kept");
    }

    #[test]
    fn sorted_ascending_by_amount() {
        let svc = ProgressService::new();
        let totals = svc.project_totals(
            &[
                xp(900, "2024-01-01T00:00:00Z", "big"),
                xp(100, "2024-01-02T00:00:00Z", "small"),
                xp(500, "2024-01-03T00:00:00Z", "mid"),
            ],
            PREFIX,
        );

        let amounts: Vec<i64> = totals.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100, 500, 900]);
    }

    #[test]
    fn equal_totals_keep_first_seen_order() {
        let svc = ProgressService::new();
        let totals = svc.project_totals(
            &[
                xp(250, "2024-01-01T00:00:00Z", "first"),
                xp(250, "2024-01-02T00:00:00Z", "second"),
                xp(250, "2024-01-03T00:00:00Z", "third"),
            ],
            PREFIX,
        );

        let labels: Vec<&str> = totals.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Audit totals
// ═══════════════════════════════════════════════════════════════════

mod audit_totals {
    use super::*;

    #[test]
    fn empty_input_is_all_zero() {
        let svc = ProgressService::new();
        let totals = svc.audit_totals(&[]);
        assert_eq!(totals.earned, 0);
        assert_eq!(totals.received, 0);
        assert_eq!(totals.ratio, 0.0);
    }

    #[test]
    fn partitions_by_direction() {
        let svc = ProgressService::new();
        let totals = svc.audit_totals(&[
            audit(30000, TransactionKind::Up),
            audit(10000, TransactionKind::Down),
            audit(15000, TransactionKind::Up),
            audit(5000, TransactionKind::Down),
        ]);

        assert_eq!(totals.earned, 45000);
        assert_eq!(totals.received, 15000);
        assert!((totals.ratio - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partition_law_earned_plus_received_equals_input_sum() {
        let rows = vec![
            audit(100, TransactionKind::Up),
            audit(200, TransactionKind::Down),
            audit(300, TransactionKind::Up),
        ];
        let input_sum: i64 = rows.iter().map(|t| t.amount).sum();

        let svc = ProgressService::new();
        let totals = svc.audit_totals(&rows);
        assert_eq!(totals.earned + totals.received, input_sum);
    }

    #[test]
    fn xp_rows_do_not_leak_into_audit_sums() {
        let svc = ProgressService::new();
        let totals = svc.audit_totals(&[
            audit(100, TransactionKind::Up),
            xp(99999, "2024-01-01T00:00:00Z", "project"),
        ]);
        assert_eq!(totals.earned, 100);
        assert_eq!(totals.received, 0);
    }

    #[test]
    fn ranked_form_labels_earned_then_received() {
        let svc = ProgressService::new();
        let ranked = svc
            .audit_totals(&[
                audit(100, TransactionKind::Up),
                audit(40, TransactionKind::Down),
            ])
            .as_ranked();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "Audits Earned");
        assert_eq!(ranked[0].amount, 100);
        assert_eq!(ranked[1].label, "Audits Received");
        assert_eq!(ranked[1].amount, 40);
    }

    #[test]
    fn zero_received_pins_ratio_to_zero() {
        let svc = ProgressService::new();
        let totals = svc.audit_totals(&[audit(100, TransactionKind::Up)]);
        assert_eq!(totals.ratio, 0.0);
    }
}
