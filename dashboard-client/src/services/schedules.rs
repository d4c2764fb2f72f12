use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiResult};
use crate::models::{NewSchedule, RescheduleRequest, Schedule};

#[derive(Debug, Serialize)]
struct ConflictQuery<'a> {
    teacher_id: &'a str,
    class_id: &'a str,
    date: &'a str,
    time: &'a str,
}

#[derive(Debug, Deserialize)]
struct ConflictResponse {
    #[serde(default)]
    conflicts: Vec<Schedule>,
}

#[derive(Clone)]
pub struct ScheduleService {
    api: ApiClient,
}

impl ScheduleService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_schedule(&self, schedule: &NewSchedule) -> ApiResult<()> {
        self.api.post_unit("/schedule/create", schedule).await
    }

    pub async fn schedule_by_id(&self, schedule_id: &str) -> ApiResult<Schedule> {
        self.api.get_json(&format!("/schedule/{schedule_id}")).await
    }

    pub async fn all_schedules(&self) -> ApiResult<Vec<Schedule>> {
        self.api.get_json("/schedule/all").await
    }

    pub async fn schedules_by_teacher(&self, teacher_id: &str) -> ApiResult<Vec<Schedule>> {
        self.api
            .get_json(&format!("/schedule/teacher/{teacher_id}"))
            .await
    }

    pub async fn schedules_by_class(&self, class_id: &str) -> ApiResult<Vec<Schedule>> {
        self.api
            .get_json(&format!("/schedule/class/{class_id}"))
            .await
    }

    pub async fn today_schedules(&self) -> ApiResult<Vec<Schedule>> {
        self.api.get_json("/schedule/today").await
    }

    pub async fn week_schedules(&self, start_date: Option<&str>) -> ApiResult<Vec<Schedule>> {
        let path = match start_date {
            Some(start) => format!("/schedule/week?start_date={start}"),
            None => "/schedule/week".to_string(),
        };
        self.api.get_json(&path).await
    }

    pub async fn upcoming_schedules(&self, teacher_id: &str, days: u32) -> ApiResult<Vec<Schedule>> {
        self.api
            .get_json(&format!("/schedule/upcoming/{teacher_id}?days={days}"))
            .await
    }

    /// Asks the backend for slot collisions before creating a schedule.
    pub async fn check_conflicts(&self, candidate: &NewSchedule) -> ApiResult<Vec<Schedule>> {
        let query = ConflictQuery {
            teacher_id: &candidate.teacher_id,
            class_id: &candidate.class_id,
            date: &candidate.date,
            time: &candidate.time,
        };
        let response: ConflictResponse = self
            .api
            .post_json("/schedule/check-conflicts", &query)
            .await?;
        Ok(response.conflicts)
    }

    pub async fn reschedule(&self, schedule_id: &str, request: &RescheduleRequest) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/schedule/reschedule/{schedule_id}"), request)
            .await
    }

    pub async fn update_schedule(&self, schedule_id: &str, schedule: &NewSchedule) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/schedule/update/{schedule_id}"), schedule)
            .await
    }

    pub async fn delete_schedule(&self, schedule_id: &str) -> ApiResult<()> {
        self.api
            .delete_unit(&format!("/schedule/delete/{schedule_id}"))
            .await
    }

    pub async fn schedules_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<Schedule>> {
        let schedules = self.all_schedules().await?;
        Ok(schedules
            .into_iter()
            .filter(|schedule| {
                day_of(&schedule.date).is_some_and(|day| day >= start && day <= end)
            })
            .collect())
    }

    pub async fn teacher_schedule_for_day(
        &self,
        teacher_id: &str,
        date: &str,
    ) -> ApiResult<Vec<Schedule>> {
        let schedules = self.schedules_by_teacher(teacher_id).await?;
        Ok(schedules
            .into_iter()
            .filter(|schedule| same_day(&schedule.date, date))
            .collect())
    }
}

/// Local linear scan for slot collisions in an already-fetched schedule
/// list: same teacher or class, same day, same time.
pub fn find_conflicts<'a>(schedules: &'a [Schedule], candidate: &NewSchedule) -> Vec<&'a Schedule> {
    schedules
        .iter()
        .filter(|schedule| {
            (schedule.teacher_id == candidate.teacher_id
                || schedule.class_id == candidate.class_id)
                && same_day(&schedule.date, &candidate.date)
                && schedule.time == candidate.time
        })
        .collect()
}

fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or_default()
}

fn same_day(a: &str, b: &str) -> bool {
    date_part(a) == date_part(b)
}

fn day_of(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(value), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(id: &str, teacher: &str, class: &str, date: &str, time: &str) -> Schedule {
        Schedule {
            id: id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            teacher_id: teacher.to_string(),
            lesson_id: "math".to_string(),
            class_id: class.to_string(),
        }
    }

    fn candidate(teacher: &str, class: &str, date: &str, time: &str) -> NewSchedule {
        NewSchedule {
            date: date.to_string(),
            time: time.to_string(),
            teacher_id: teacher.to_string(),
            lesson_id: "math".to_string(),
            class_id: class.to_string(),
        }
    }

    #[test]
    fn conflict_on_same_teacher_and_slot() {
        let existing = vec![
            schedule("1", "t1", "c1", "2025-03-10T00:00:00", "09:00"),
            schedule("2", "t2", "c2", "2025-03-10", "09:00"),
        ];

        let hits = find_conflicts(&existing, &candidate("t1", "c9", "2025-03-10", "09:00"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn conflict_on_same_class_different_teacher() {
        let existing = vec![schedule("1", "t1", "c1", "2025-03-10", "09:00")];
        let hits = find_conflicts(&existing, &candidate("t9", "c1", "2025-03-10", "09:00"));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn different_time_is_not_a_conflict() {
        let existing = vec![schedule("1", "t1", "c1", "2025-03-10", "09:00")];
        assert!(find_conflicts(&existing, &candidate("t1", "c1", "2025-03-10", "10:00")).is_empty());
        assert!(find_conflicts(&existing, &candidate("t1", "c1", "2025-03-11", "09:00")).is_empty());
    }

    #[test]
    fn day_comparison_ignores_time_component() {
        assert!(same_day("2025-03-10T08:30:00", "2025-03-10"));
        assert!(!same_day("2025-03-10", "2025-03-11"));
    }

    #[test]
    fn day_of_parses_iso_dates_only() {
        assert_eq!(
            day_of("2025-03-10T08:30:00"),
            NaiveDate::from_ymd_opt(2025, 3, 10)
        );
        assert_eq!(day_of("next tuesday"), None);
    }
}
