//! Static sample dataset and dashboard metrics.
//!
//! Records are generated deterministically from a seed so the table always
//! shows the same 25 users; a few rows deliberately lack a field to exercise
//! the missing-value sort policy.

use chrono::{Days, NaiveDate};

use crate::domain::table::{CellValue, Column, Record};

const FIRST_NAMES: [&str; 10] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Radia", "Ken", "Frances", "Dennis",
];
const LAST_NAMES: [&str; 10] = [
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Perlman", "Thompson",
    "Allen", "Ritchie",
];
const ROLES: [&str; 4] = ["Admin", "Editor", "Viewer", "Support"];
const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];

fn sample_user(seed: u64) -> Record {
    let first = FIRST_NAMES[(seed * 7 % 10) as usize];
    let last = LAST_NAMES[(seed * 3 % 10) as usize];
    let name = format!("{first} {last}");
    let email = format!(
        "{}.{}{}@example.com",
        first.to_lowercase(),
        last.to_lowercase(),
        seed
    );

    let mut record = Record::new()
        .with("id", seed)
        .with("name", name)
        .with("email", email)
        .with("role", ROLES[(seed % 4) as usize])
        .with("status", STATUSES[(seed % 3) as usize]);

    // Every eighth row has no revenue yet; it must sort after all priced rows.
    if seed % 8 != 5 {
        let revenue = 1_200 + (seed * 317) % 90_000;
        record = record.with("revenue", revenue);
    }

    if seed % 9 != 0 {
        let signed_up = NaiveDate::from_ymd_opt(2023, 1, 7)
            .and_then(|base| base.checked_add_days(Days::new(seed * 13 % 600)));
        if let Some(date) = signed_up {
            record = record.with("created_at", date.format("%Y-%m-%d").to_string());
        }
    }

    record
}

pub fn sample_users() -> Vec<Record> {
    (1..=25).map(sample_user).collect()
}

pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("ID", "id"),
        Column::new("Name", "name"),
        Column::new("Email", "email").hidden_when_narrow(),
        Column::new("Role", "role"),
        Column::new("Status", "status").with_render(render_status),
        Column::new("Revenue", "revenue").with_render(render_revenue),
        Column::new("Signed Up", "created_at").hidden_when_narrow(),
    ]
}

fn render_status(value: &CellValue, _record: &Record) -> String {
    let text = value.display();
    if text.is_empty() {
        return text;
    }
    format!("● {text}")
}

fn render_revenue(value: &CellValue, _record: &Record) -> String {
    match value.as_number() {
        Some(n) => format!("${}", group_thousands(n as i64)),
        None => value.display(),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// One labeled metric for the dashboard card row.
#[derive(Debug, Clone)]
pub struct SummaryMetric {
    pub title: &'static str,
    pub value: String,
    pub growth: Option<&'static str>,
    pub icon: &'static str,
}

pub fn summary_metrics(records: &[Record]) -> Vec<SummaryMetric> {
    let total = records.len() as i64;
    let active = records
        .iter()
        .filter(|r| r.get("status").display() == "Active")
        .count() as i64;
    let revenue: f64 = records
        .iter()
        .filter_map(|r| r.get("revenue").as_number())
        .sum();

    vec![
        SummaryMetric {
            title: "Total Users",
            value: group_thousands(total),
            growth: Some("+12%"),
            icon: "◎",
        },
        SummaryMetric {
            title: "Active Users",
            value: group_thousands(active),
            growth: Some("+5%"),
            icon: "◉",
        },
        SummaryMetric {
            title: "Revenue",
            value: format!("${}", group_thousands(revenue as i64)),
            growth: Some("+8%"),
            icon: "$",
        },
        SummaryMetric {
            title: "Growth",
            value: "+23.5%".to_string(),
            growth: Some("+4.2%"),
            icon: "↗",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_25_rows() {
        assert_eq!(sample_users().len(), 25);
    }

    #[test]
    fn some_rows_lack_revenue() {
        let users = sample_users();
        let missing = users
            .iter()
            .filter(|u| u.get("revenue").is_missing())
            .count();
        assert!(missing > 0);
        assert!(missing < users.len());
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(45_678), "45,678");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn revenue_renders_as_currency() {
        let users = sample_users();
        let columns = user_columns();
        let revenue_col = columns
            .iter()
            .find(|c| c.accessor == "revenue")
            .expect("revenue column");
        let priced = users
            .iter()
            .find(|u| !u.get("revenue").is_missing())
            .expect("a priced row");
        assert!(revenue_col.display(priced).starts_with('$'));
    }

    #[test]
    fn metrics_cover_the_card_row() {
        let metrics = summary_metrics(&sample_users());
        assert_eq!(metrics.len(), 4);
        assert!(metrics.iter().all(|m| !m.value.is_empty()));
    }
}
