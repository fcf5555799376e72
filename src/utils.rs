use chrono::NaiveDate;

pub fn format_date(date: &NaiveDate) -> String {
    const DATE_FMT: &str = "%Y-%m-%d";

    date.format(DATE_FMT).to_string()
}

pub fn format_date_opt(date: Option<&NaiveDate>, missing: &str) -> String {
    date.map_or_else(|| missing.to_string(), format_date)
}
