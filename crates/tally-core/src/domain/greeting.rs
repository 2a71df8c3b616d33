//! Time-of-day greeting.

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Full greeting line for `name`.
pub fn greet(name: &str, hour: u32) -> String {
    format!("{}, {}", greeting_for_hour(hour), name.trim())
}
