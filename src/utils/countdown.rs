use chrono::{DateTime, Utc};

/// 倒计时展示文本，格式与前端倒计时组件一致:
/// 进行中为 "{d}d {h}h {m}m {s}s"，已结束为 "Time's up!"
pub fn format_countdown(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = end - now;
    if diff.num_seconds() <= 0 {
        return "Time's up!".to_string();
    }
    let days = diff.num_days();
    let hours = diff.num_hours() % 24;
    let minutes = diff.num_minutes() % 60;
    let seconds = diff.num_seconds() % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}

/// 截止日期展示文本，如 "June 30, 2024"
pub fn format_end_date(date: DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
