use api::ArticleSummary;

/// "Monday, May 6, 2024", or the raw date string when it can't be parsed.
pub fn long_date(article: &ArticleSummary) -> String {
    match article.published_on() {
        Some(day) => day.format("%A, %B %-d, %Y").to_string(),
        None => article.date.clone(),
    }
}

/// "May 6, 2024", or the raw date string when it can't be parsed.
pub fn short_date(article: &ArticleSummary) -> String {
    match article.published_on() {
        Some(day) => day.format("%b %-d, %Y").to_string(),
        None => article.date.clone(),
    }
}

pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}
