use super::*;

use chrono::{DateTime, TimeZone};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;
use shared::models::{Campaign, CampaignStatus, Payment};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
    Kolkata.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn payment(amount: f64, name: &str, created_at: DateTime<Tz>) -> Payment {
    Payment {
        id: created_at.timestamp_millis(),
        to_user: "asha".into(),
        name: Some(name.into()),
        email: None,
        user_id: None,
        amount,
        message: None,
        campaign_id: None,
        campaign_title: None,
        done: true,
        status: None,
        anonymous: false,
        created_at: created_at.timestamp_millis(),
    }
}

fn campaign(id: i64, status: CampaignStatus) -> Campaign {
    Campaign {
        id,
        creator_id: 1,
        title: format!("Campaign {id}"),
        description: None,
        goal_amount: None,
        status,
        created_at: 0,
        updated_at: 0,
    }
}

#[test]
fn test_zero_input_payload_shape() {
    let now = at(2025, 8, 25, 12, 0);
    let data = empty_dashboard(now);

    for stats in [
        &data.stats.today,
        &data.stats.week,
        &data.stats.month,
        &data.stats.all_time,
    ] {
        assert_eq!(stats.earnings, 0.0);
        assert_eq!(stats.supporters, 0);
        assert_eq!(stats.campaigns, 0);
        assert_eq!(stats.avg_donation, 0);
        assert_eq!(stats.earnings_change, 0);
        assert_eq!(stats.supporters_change, 0);
        assert_eq!(stats.campaigns_change, 0);
        assert_eq!(stats.avg_donation_change, 0);
    }

    assert_eq!(data.chart_data.hourly.len(), 24);
    assert_eq!(data.chart_data.daily.len(), 30);
    assert_eq!(data.chart_data.monthly.len(), 12);
    assert!(data.chart_data.hourly.iter().all(|p| p.amount == 0.0));
    assert!(data.chart_data.daily.iter().all(|p| p.amount == 0.0));
    assert!(data.chart_data.monthly.iter().all(|p| p.amount == 0.0));
    assert!(data.activities.is_empty());
}

#[test]
fn test_window_subsets_are_monotone() {
    let now = at(2025, 8, 25, 12, 0);
    // Newest first
    let payments = vec![
        payment(100.0, "Ravi", at(2025, 8, 25, 9, 0)),   // today
        payment(200.0, "Meera", at(2025, 8, 22, 9, 0)),  // this week
        payment(300.0, "Kiran", at(2025, 8, 5, 9, 0)),   // this month
        payment(400.0, "Divya", at(2025, 5, 1, 9, 0)),   // older
    ];
    let data = build_dashboard(&[], &payments, now);

    assert_eq!(data.stats.today.earnings, 100.0);
    assert_eq!(data.stats.week.earnings, 300.0);
    assert_eq!(data.stats.month.earnings, 600.0);
    assert_eq!(data.stats.all_time.earnings, 1000.0);

    assert!(data.stats.today.earnings <= data.stats.week.earnings);
    assert!(data.stats.week.earnings <= data.stats.month.earnings);
    assert!(data.stats.month.earnings <= data.stats.all_time.earnings);

    assert_eq!(data.stats.today.supporters, 1);
    assert_eq!(data.stats.week.supporters, 2);
    assert_eq!(data.stats.month.supporters, 3);
    assert_eq!(data.stats.all_time.supporters, 4);
}

#[test]
fn test_end_to_end_scenario() {
    // One ₹100 payment today at 09:00 (done flag), one ₹200 payment
    // yesterday at 09:00 (gateway status), now is noon.
    let now = at(2025, 8, 25, 12, 0);
    let mut yesterday_payment = payment(200.0, "Meera", at(2025, 8, 24, 9, 0));
    yesterday_payment.done = false;
    yesterday_payment.status = Some("success".into());

    let payments = vec![
        payment(100.0, "Ravi", at(2025, 8, 25, 9, 0)),
        yesterday_payment,
    ];
    let campaigns = vec![campaign(1, CampaignStatus::Active)];

    let data = build_dashboard(&campaigns, &payments, now);

    // Today vs yesterday
    assert_eq!(data.stats.today.earnings, 100.0);
    assert_eq!(data.stats.today.earnings_change, -50);
    assert_eq!(data.stats.today.supporters, 1);
    assert_eq!(data.stats.today.supporters_change, 0);
    assert_eq!(data.stats.today.avg_donation, 100);
    assert_eq!(data.stats.today.avg_donation_change, -50);

    // Week holds both; the week before was empty
    assert_eq!(data.stats.week.earnings, 300.0);
    assert_eq!(data.stats.week.earnings_change, 100);
    assert_eq!(data.stats.week.supporters, 2);

    // All-time compares against the empty pre-history window
    assert_eq!(data.stats.all_time.earnings, 300.0);
    assert_eq!(data.stats.all_time.earnings_change, 100);

    // Campaign snapshot identical everywhere, including change fields
    for stats in [
        &data.stats.today,
        &data.stats.week,
        &data.stats.month,
        &data.stats.all_time,
    ] {
        assert_eq!(stats.campaigns, 1);
        assert_eq!(stats.campaigns_change, 0);
    }

    // Charts
    assert_eq!(data.chart_data.hourly[9].amount, 100.0);
    let hourly_total: f64 = data.chart_data.hourly.iter().map(|p| p.amount).sum();
    assert_eq!(hourly_total, 100.0);
    assert_eq!(data.chart_data.daily[29].amount, 100.0);
    assert_eq!(data.chart_data.daily[28].amount, 200.0);
    assert_eq!(data.chart_data.monthly[11].amount, 300.0);

    // Feed keeps newest-first input order
    assert_eq!(data.activities.len(), 2);
    assert_eq!(
        data.activities[0].text,
        "Ravi supported your campaign with ₹100"
    );
    assert_eq!(
        data.activities[1].text,
        "Meera supported your campaign with ₹200"
    );
}

#[test]
fn test_campaign_snapshot_ignores_paused_and_deleted() {
    let now = at(2025, 8, 25, 12, 0);
    let campaigns = vec![
        campaign(1, CampaignStatus::Active),
        campaign(2, CampaignStatus::Active),
        campaign(3, CampaignStatus::Paused),
        campaign(4, CampaignStatus::Completed),
    ];
    let data = build_dashboard(&campaigns, &[], now);
    assert_eq!(data.stats.today.campaigns, 2);
    assert_eq!(data.stats.all_time.campaigns, 2);
}

#[test]
fn test_future_payment_counts_in_open_windows_only() {
    // Unbounded window tops let a future-dated record into the stats;
    // the charts drop it once it falls outside their buckets.
    let now = at(2025, 8, 25, 12, 0);
    let payments = vec![payment(500.0, "Ravi", at(2025, 8, 26, 10, 0))];
    let data = build_dashboard(&[], &payments, now);

    assert_eq!(data.stats.today.earnings, 500.0);
    assert_eq!(data.stats.all_time.earnings, 500.0);

    let hourly_total: f64 = data.chart_data.hourly.iter().map(|p| p.amount).sum();
    let daily_total: f64 = data.chart_data.daily.iter().map(|p| p.amount).sum();
    assert_eq!(hourly_total, 0.0);
    assert_eq!(daily_total, 0.0);
    // Still inside the current calendar month
    assert_eq!(data.chart_data.monthly[11].amount, 500.0);
}

#[test]
fn test_activity_feed_caps_at_limit() {
    let now = at(2025, 8, 25, 12, 0);
    let payments: Vec<Payment> = (0..9)
        .map(|i| {
            let mut p = payment(10.0, "Ravi", at(2025, 8, 25, 9, 0));
            p.id = i;
            p
        })
        .collect();
    let data = build_dashboard(&[], &payments, now);
    assert_eq!(data.activities.len(), ACTIVITY_LIMIT);
}
