use std::io::Write as _;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salary_ledger::{
    engine::{compute_cumulative, fill_gaps, group},
    entities::{user, DataIssue, MonthKey, Payment, RecordFormat, RecordType, SalaryLedger, WorkDay},
    ledger_config::LedgerConfig,
    util::SalaryLedgerUtil,
};

fn money(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn work_day(id: &str, d: &str, salary: &str, bonus: &str) -> WorkDay {
    WorkDay::new(id, date(d), money(salary), money(bonus), "Work day")
}

fn payment(id: &str, d: &str, amount: &str) -> Payment {
    Payment::new(id, date(d), money(amount), "Payment")
}

fn util() -> SalaryLedgerUtil {
    SalaryLedgerUtil::new(&LedgerConfig::default()).unwrap()
}

const WORK_DAYS_CSV: &str = "\
id,work_date,salary,bonus,description
1,2024-01-10,1000,,Shift
2,2024-02-05,1000,100,Shift with bonus
";

const PAYMENTS_CSV: &str = "\
id,payment_date,amount,description
p1,2024-01-20,1000,January salary
";

#[test]
fn test_scenario_a_month_paid_in_full_then_unpaid_month() {
    let ledger = SalaryLedger::build(
        user("u1"),
        &[
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("2", "2024-02-05", "1000", "100"),
        ],
        &[payment("p1", "2024-01-20", "1000")],
    );

    assert_eq!(ledger.months.len(), 2);
    let (january, february) = (&ledger.months[0], &ledger.months[1]);
    assert_eq!(january.cumulative_balance, Decimal::ZERO);
    assert_eq!(february.bucket.monthly_balance, money("1000"));
    assert_eq!(february.cumulative_balance, money("1000"));
    assert_eq!(february.bucket.total_income, money("1100"));
}

#[test]
fn test_scenario_b_payment_only_month_reduces_later_balances() {
    let ledger = SalaryLedger::build(
        user("u1"),
        &[
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("2", "2024-03-10", "1000", "0"),
        ],
        &[payment("p1", "2024-02-15", "400")],
    );

    let balances: Vec<_> = ledger
        .months
        .iter()
        .map(|m| (m.bucket.key, m.bucket.monthly_balance, m.cumulative_balance))
        .collect();
    assert_eq!(
        balances,
        vec![
            (MonthKey { year: 2024, month: 1 }, money("1000"), money("1000")),
            (MonthKey { year: 2024, month: 2 }, money("-400"), money("600")),
            (MonthKey { year: 2024, month: 3 }, money("1000"), money("1600")),
        ]
    );
}

#[test]
fn test_zero_input_identity() {
    let ledger = SalaryLedger::build(user("u1"), &[], &[]);
    assert!(ledger.months.is_empty());
    assert_eq!(ledger.current_balance(), Decimal::ZERO);

    let report = ledger.annual_report(2024);
    assert_eq!(report.monthly_details.len(), 12);
    assert_eq!(report.total_income, Decimal::ZERO);
    assert_eq!(report.average_monthly_income, Decimal::ZERO);
}

#[test]
fn test_bonus_never_changes_balance() {
    let without_bonus = SalaryLedger::build(
        user("u1"),
        &[work_day("1", "2024-01-10", "1000", "0")],
        &[payment("p1", "2024-01-20", "300")],
    );
    let with_bonus = SalaryLedger::build(
        user("u1"),
        &[work_day("1", "2024-01-10", "1000", "5000")],
        &[payment("p1", "2024-01-20", "300")],
    );
    assert_eq!(without_bonus.current_balance(), with_bonus.current_balance());
    assert_eq!(with_bonus.months[0].bucket.total_income, money("6000"));
}

#[test]
fn test_grouping_ignores_input_order() {
    let work_days = vec![
        work_day("1", "2023-12-31", "900", "0"),
        work_day("2", "2024-01-01", "1000", "50"),
        work_day("3", "2024-01-31", "1000", "0"),
    ];
    let payments = vec![
        payment("p1", "2024-01-15", "500"),
        payment("p2", "2023-12-01", "900"),
    ];
    let mut reversed_days = work_days.clone();
    reversed_days.reverse();
    let mut reversed_payments = payments.clone();
    reversed_payments.reverse();

    let forward = compute_cumulative(group(&work_days, &payments));
    let backward = compute_cumulative(group(&reversed_days, &reversed_payments));
    let totals = |months: &[salary_ledger::entities::BalancedMonth]| {
        months
            .iter()
            .map(|m| {
                (
                    m.bucket.key,
                    m.bucket.total_salary,
                    m.bucket.total_paid,
                    m.cumulative_balance,
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(totals(forward.as_slice()), totals(backward.as_slice()));
}

#[test]
fn test_current_month_summary_matches_fold() {
    let ledger = SalaryLedger::build(
        user("u1"),
        &[
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("2", "2024-04-10", "1200", "0"),
        ],
        &[payment("p1", "2024-02-01", "700"), payment("p2", "2024-04-30", "100")],
    );

    let summary = ledger.current_month_summary(date("2024-04-15"));
    assert_eq!(summary.previous_debt, money("300"));
    assert_eq!(summary.current_month_balance, money("1100"));
    assert_eq!(summary.current_balance, ledger.current_balance());
}

#[test]
fn test_fill_gaps_keeps_cumulative_balance() {
    let buckets = group(
        &[
            work_day("1", "2024-01-10", "1000", "0"),
            work_day("2", "2024-04-10", "1000", "0"),
        ],
        &[],
    );
    let sparse = compute_cumulative(buckets.clone());
    let continuous = compute_cumulative(fill_gaps(buckets));

    assert_eq!(sparse.len(), 2);
    assert_eq!(continuous.len(), 4);
    assert_eq!(continuous[2].cumulative_balance, money("1000"));
    assert_eq!(
        continuous.last().unwrap().cumulative_balance,
        sparse.last().unwrap().cumulative_balance
    );
}

#[test]
fn test_monthly_detailed_report_rejects_month_out_of_range() {
    let ledger = SalaryLedger::build(user("u1"), &[], &[]);
    assert!(ledger.monthly_detailed_report(2024, 0).is_err());
    assert!(ledger.monthly_detailed_report(2024, 13).is_err());
    assert_eq!(
        ledger.monthly_detailed_report(2024, 12).unwrap().days_count,
        0
    );
}

#[tokio::test]
async fn test_load_csv_strings() {
    let (ledger, warnings) = util()
        .from_csv_strings(&user("u1"), WORK_DAYS_CSV, PAYMENTS_CSV)
        .await
        .unwrap();

    assert!(warnings.is_empty());
    assert_eq!(ledger.current_balance(), money("1000"));
    assert_eq!(ledger.annual_report(2024).average_monthly_income, money("1050.00"));
}

#[tokio::test]
async fn test_load_json_strings_with_bad_records() {
    let work_days = r#"[
        {"id": 1, "workDate": "2024-03-01T09:30:00", "salary": 1500.5, "bonus": null, "description": "Shift"},
        {"id": 2, "workDate": "2024-03-32", "salary": "1500"},
        {"id": 3, "workDate": "2024-03-02", "salary": "abc", "bonus": "200"}
    ]"#;
    let payments = r#"[
        {"id": "p1", "paymentDate": "2024-03-31T18:00:00.000Z", "amount": "1,000.50"}
    ]"#;

    let (ledger, warnings) = util()
        .from_json_strings(&user("u1"), work_days, payments)
        .await
        .unwrap();

    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].record_type, RecordType::WorkDay);
    assert_eq!(warnings[0].record_id, "2");
    assert!(warnings[0].skips_record());
    assert_eq!(
        warnings[1].issue,
        DataIssue::MalformedAmount {
            field: "salary".to_string(),
            raw: "abc".to_string()
        }
    );

    let march = ledger.monthly_detailed_report(2024, 3).unwrap();
    assert_eq!(march.days_count, 2);
    assert_eq!(march.total_salary, money("1500.5"));
    assert_eq!(march.total_bonus, money("200"));
    assert_eq!(ledger.current_balance(), money("500.0"));
}

#[tokio::test]
async fn test_huge_amount_is_flagged_instead_of_aggregated() {
    let work_days = "\
id,work_date,salary,bonus,description
1,2024-01-10,79228162514264337593543950335,0,
2,2024-01-11,1,0,
";
    let (ledger, warnings) = util()
        .from_csv_strings(&user("u1"), work_days, "id,payment_date,amount,description\n")
        .await
        .unwrap();

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].record_id, "1");
    assert_eq!(
        warnings[0].issue,
        DataIssue::AmountOutOfRange {
            field: "salary".to_string(),
            raw: "79228162514264337593543950335".to_string()
        }
    );
    assert_eq!(ledger.months[0].bucket.days_count, 2);
    assert_eq!(ledger.current_balance(), money("1"));
    assert_eq!(ledger.statistics().total_earned, money("1"));
}

#[tokio::test]
async fn test_fail_on_invalid_dates() {
    let config = LedgerConfig {
        fail_on_invalid_dates: true,
        ..LedgerConfig::default()
    };
    let util = SalaryLedgerUtil::new(&config).unwrap();
    let work_days = "id,work_date,salary,bonus,description\n9,2024-02-30,1000,,\n";

    assert!(util
        .from_csv_strings(&user("u1"), work_days, PAYMENTS_CSV)
        .await
        .is_err());
}

#[tokio::test]
async fn test_load_files_and_render() {
    let mut work_days = tempfile::NamedTempFile::new().unwrap();
    work_days.write_all(WORK_DAYS_CSV.as_bytes()).unwrap();
    let mut payments = tempfile::NamedTempFile::new().unwrap();
    payments.write_all(PAYMENTS_CSV.as_bytes()).unwrap();

    let util = util();
    let (ledger, _) = util
        .from_files(
            &user("u1"),
            work_days.path(),
            payments.path(),
            RecordFormat::Csv,
        )
        .await
        .unwrap();

    let months = util.render_months(&ledger);
    assert!(months.contains("2024-02"));
    assert!(months.contains("Current balance"));
    let annual = util.render_annual_report(&ledger, 2024);
    assert!(annual.contains("February 2024"));
    assert!(util
        .render_monthly_detailed_report(&ledger, 2024, 2)
        .unwrap()
        .contains("Shift with bonus"));
    assert!(util.render_statistics(&ledger).contains("Salary balance"));
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let result = util()
        .from_files(
            &user("u1"),
            "/nonexistent/workdays.csv",
            "/nonexistent/payments.csv",
            RecordFormat::Csv,
        )
        .await;
    assert!(result.is_err());
}

#[test]
fn test_ledger_serializes_camel_case_with_string_money() {
    let ledger = SalaryLedger::build(
        user("u1"),
        &[work_day("1", "2024-02-05", "1000.50", "0")],
        &[],
    );
    let value = serde_json::to_value(&ledger).unwrap();
    let month = &value["months"][0];

    assert_eq!(value["userId"], "u1");
    assert_eq!(month["year"], 2024);
    assert_eq!(month["month"], 2);
    assert_eq!(month["totalSalary"], "1000.50");
    assert_eq!(month["cumulativeBalance"], "1000.50");
    assert_eq!(month["workdays"][0]["workDate"], "2024-02-05");
}
