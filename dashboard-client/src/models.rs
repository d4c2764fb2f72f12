use common_identity::Role;
use serde::{Deserialize, Serialize};

/// Account payload for self-service registration and admin user management.
/// camelCase on the wire like the rest of the user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_phone: Option<String>,
}

/// A class group taught by one teacher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub class_name: String,
    pub teacher_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClass {
    pub class_name: String,
    pub teacher_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub lesson_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLesson {
    pub lesson_name: String,
}

/// Homework assignment. `due_date` travels as the backend's ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub teacher_id: String,
    pub lesson_id: String,
    pub class_id: String,
    pub title: String,
    pub content: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHomework {
    pub teacher_id: String,
    pub lesson_id: String,
    pub class_id: String,
    pub title: String,
    pub content: String,
    pub due_date: String,
}

/// One lesson slot on the timetable. `date` is ISO-8601, `time` is `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub date: String,
    pub time: String,
    pub teacher_id: String,
    pub lesson_id: String,
    pub class_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchedule {
    pub date: String,
    pub time: String,
    pub teacher_id: String,
    pub lesson_id: String,
    pub class_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RescheduleRequest {
    pub new_date: String,
    pub new_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: String,
    pub student_id: String,
    pub schedule_id: String,
    pub here: bool,
    pub counter: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendance {
    pub student_id: String,
    pub schedule_id: String,
    pub here: bool,
    pub counter: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkAttendanceRequest {
    pub student_id: String,
    pub schedule_id: String,
    pub is_present: bool,
}
