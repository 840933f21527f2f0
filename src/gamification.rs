use crate::models::{GamificationState, Task};
use chrono::{DateTime, Duration, Local, NaiveDate};

pub const FIRST_STEP: &str = "FIRST_STEP";
pub const FIVE_A_DAY: &str = "FIVE_A_DAY";
pub const STREAK_3: &str = "STREAK_3";
pub const CAT_MASTER: &str = "CAT_MASTER";

pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATALOG: [Achievement; 4] = [
    Achievement {
        id: FIRST_STEP,
        name: "First Step",
        description: "Completed your first task.",
    },
    Achievement {
        id: FIVE_A_DAY,
        name: "On Fire",
        description: "Completed five tasks in a single day.",
    },
    Achievement {
        id: STREAK_3,
        name: "Three-Day Streak",
        description: "Opened the planner three days in a row.",
    },
    Achievement {
        id: CAT_MASTER,
        name: "Master Organizer",
        description: "Created your fourth category.",
    },
];

/// Appends `id` to the unlocked set when the condition holds and the id is
/// not already present. The set only ever grows. Returns true on a new
/// unlock.
pub fn unlock_if(state: &mut GamificationState, id: &str, satisfied: bool) -> bool {
    if satisfied && !state.unlocked.iter().any(|unlocked| unlocked == id) {
        state.unlocked.push(id.to_string());
        return true;
    }
    false
}

pub fn track_visit(state: &mut GamificationState) -> bool {
    track_visit_at(Local::now().date_naive(), state)
}

/// Advances the visit streak for `today`: a repeat visit on the same day is
/// a no-op, a visit the day after the last one increments the streak, and
/// anything else resets it to 1. Returns whether the state changed.
pub fn track_visit_at(today: NaiveDate, state: &mut GamificationState) -> bool {
    let today_key = today.to_string();
    if state.last_visit_date.as_deref() == Some(today_key.as_str()) {
        return false;
    }

    let yesterday_key = (today - Duration::days(1)).to_string();
    if state.last_visit_date.as_deref() == Some(yesterday_key.as_str()) {
        state.streak += 1;
    } else {
        state.streak = 1;
    }
    state.last_visit_date = Some(today_key);
    true
}

pub fn completed_today(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| {
            task.completed_at
                .and_then(local_date_of_millis)
                .is_some_and(|date| date == today)
        })
        .count()
}

/// Local calendar day of a unix-millisecond timestamp.
pub fn local_date_of_millis(millis: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(millis).map(|at| at.with_timezone(&Local).date_naive())
}
