use chrono::NaiveDate;

/// Current UTC time
pub fn now_utc() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}

/// Group an amount in thousands with commas (`1500` -> `"1,500"`).
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a calendar date as `DD Mon YYYY` (e.g. `28 Oct 2026`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
