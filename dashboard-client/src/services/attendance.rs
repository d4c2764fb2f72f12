use crate::api::{ApiClient, ApiResult};
use crate::models::{Attendance, MarkAttendanceRequest, NewAttendance};

#[derive(Clone)]
pub struct AttendanceService {
    api: ApiClient,
}

impl AttendanceService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_attendance(&self, attendance: &NewAttendance) -> ApiResult<()> {
        self.api.post_unit("/attendance/create", attendance).await
    }

    pub async fn attendance_by_id(&self, attendance_id: &str) -> ApiResult<Attendance> {
        self.api
            .get_json(&format!("/attendance/{attendance_id}"))
            .await
    }

    pub async fn attendance_by_student(&self, student_id: &str) -> ApiResult<Vec<Attendance>> {
        self.api
            .get_json(&format!("/attendance/student/{student_id}"))
            .await
    }

    pub async fn attendance_by_schedule(&self, schedule_id: &str) -> ApiResult<Vec<Attendance>> {
        self.api
            .get_json(&format!("/attendance/schedule/{schedule_id}"))
            .await
    }

    pub async fn mark_attendance(
        &self,
        student_id: &str,
        schedule_id: &str,
        is_present: bool,
    ) -> ApiResult<()> {
        let request = MarkAttendanceRequest {
            student_id: student_id.to_string(),
            schedule_id: schedule_id.to_string(),
            is_present,
        };
        self.api.post_unit("/attendance/mark", &request).await
    }

    /// Marks a whole class for one schedule slot. Stops at the first
    /// failure; already-marked entries stand.
    pub async fn mark_bulk_attendance(
        &self,
        schedule_id: &str,
        entries: &[(String, bool)],
    ) -> ApiResult<()> {
        for (student_id, is_present) in entries {
            self.mark_attendance(student_id, schedule_id, *is_present)
                .await?;
        }
        Ok(())
    }

    pub async fn update_attendance(
        &self,
        attendance_id: &str,
        attendance: &NewAttendance,
    ) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/attendance/update/{attendance_id}"), attendance)
            .await
    }

    pub async fn delete_attendance(&self, attendance_id: &str) -> ApiResult<()> {
        self.api
            .delete_unit(&format!("/attendance/delete/{attendance_id}"))
            .await
    }

    /// Percentage of records where the student was present, rounded to the
    /// nearest whole point. An empty history counts as 0.
    pub async fn attendance_rate(&self, student_id: &str) -> ApiResult<u8> {
        let records = self.attendance_by_student(student_id).await?;
        Ok(rate_of(&records))
    }
}

fn rate_of(records: &[Attendance]) -> u8 {
    if records.is_empty() {
        return 0;
    }
    let present = records.iter().filter(|record| record.here).count();
    ((present as f64 / records.len() as f64) * 100.0).round() as u8
}
