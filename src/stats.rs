use crate::gamification::local_date_of_millis;
use crate::models::{
    CategorySlice, DailyCompletion, PlannerDocument, StatsResponse, TodayProgress,
};
use chrono::{Duration, Local, NaiveDate};

const UNCATEGORIZED_NAME: &str = "Uncategorized";
const UNCATEGORIZED_COLOR: &str = "#64748b";

pub fn build_stats(document: &PlannerDocument) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), document)
}

pub fn build_stats_at(today: NaiveDate, document: &PlannerDocument) -> StatsResponse {
    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset as i64);
        let completed = document
            .tasks
            .iter()
            .filter(|task| {
                task.completed
                    && task
                        .completed_at
                        .and_then(local_date_of_millis)
                        .is_some_and(|day| day == date)
            })
            .count() as u64;
        last_7_days.push(DailyCompletion {
            date: date.to_string(),
            completed,
        });
    }

    let mut categories = Vec::with_capacity(document.categories.len());
    for category in &document.categories {
        let count = document
            .tasks
            .iter()
            .filter(|task| task.category_id == category.id)
            .count() as u64;
        categories.push(CategorySlice {
            name: category.name.clone(),
            color: category.color.clone(),
            count,
        });
    }
    let orphaned = document
        .tasks
        .iter()
        .filter(|task| {
            !document
                .categories
                .iter()
                .any(|category| category.id == task.category_id)
        })
        .count() as u64;
    if orphaned > 0 {
        categories.push(CategorySlice {
            name: UNCATEGORIZED_NAME.to_string(),
            color: UNCATEGORIZED_COLOR.to_string(),
            count: orphaned,
        });
    }

    let created_today: Vec<_> = document
        .tasks
        .iter()
        .filter(|task| {
            local_date_of_millis(task.created_at).is_some_and(|day| day == today)
        })
        .collect();
    let created = created_today.len() as u64;
    let completed = created_today.iter().filter(|task| task.completed).count() as u64;
    let percent = if created > 0 {
        completed as f64 / created as f64 * 100.0
    } else {
        0.0
    };

    StatsResponse {
        last_7_days,
        categories,
        today: TodayProgress {
            created,
            completed,
            percent,
        },
    }
}
