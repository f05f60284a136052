// Styling helpers for form feedback

pub fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-error"
    } else {
        "input-field"
    }
}

pub fn checklist_item_class(met: bool) -> &'static str {
    if met {
        "checklist-item met"
    } else {
        "checklist-item unmet"
    }
}

pub fn checklist_marker(met: bool) -> &'static str {
    if met {
        "✓"
    } else {
        "○"
    }
}

/// Progress dot class for `index` given the active step position
pub fn step_dot_class(index: i32, position: i32) -> &'static str {
    if index < position {
        "step-dot done"
    } else if index == position {
        "step-dot current"
    } else {
        "step-dot"
    }
}

pub fn theme_class(dark_mode: bool) -> &'static str {
    if dark_mode {
        "theme-dark"
    } else {
        "theme-light"
    }
}

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The hundred selectable birth years, newest first
pub fn year_options(current_year: i32) -> Vec<String> {
    (0..100).map(|i| (current_year - i).to_string()).collect()
}

pub fn day_options() -> Vec<String> {
    (1..=31).map(|d| d.to_string()).collect()
}

/// `(value, label)` pairs; the value is the 1-based month number
pub fn month_options() -> Vec<(String, String)> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| ((i + 1).to_string(), name.to_string()))
        .collect()
}
