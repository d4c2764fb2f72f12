use serde::Serialize;

use crate::api::{ApiClient, ApiResult};
use crate::models::{Homework, NewHomework};

#[derive(Debug, Serialize)]
struct ExtendDueDateRequest<'a> {
    new_due_date: &'a str,
}

#[derive(Clone)]
pub struct HomeworkService {
    api: ApiClient,
}

impl HomeworkService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_homework(&self, homework: &NewHomework) -> ApiResult<()> {
        self.api.post_unit("/homework/create", homework).await
    }

    pub async fn homework_by_id(&self, homework_id: &str) -> ApiResult<Homework> {
        self.api.get_json(&format!("/homework/{homework_id}")).await
    }

    pub async fn all_homework(&self) -> ApiResult<Vec<Homework>> {
        self.api.get_json("/homework/all").await
    }

    pub async fn homework_by_teacher(&self, teacher_id: &str) -> ApiResult<Vec<Homework>> {
        self.api
            .get_json(&format!("/homework/teacher/{teacher_id}"))
            .await
    }

    pub async fn homework_by_lesson(&self, lesson_id: &str) -> ApiResult<Vec<Homework>> {
        self.api
            .get_json(&format!("/homework/lesson/{lesson_id}"))
            .await
    }

    pub async fn homework_by_class(&self, class_id: &str) -> ApiResult<Vec<Homework>> {
        self.api
            .get_json(&format!("/homework/class/{class_id}"))
            .await
    }

    /// Assignments whose due date has not passed.
    pub async fn active_homework(&self) -> ApiResult<Vec<Homework>> {
        self.api.get_json("/homework/active").await
    }

    pub async fn overdue_homework(&self) -> ApiResult<Vec<Homework>> {
        self.api.get_json("/homework/overdue").await
    }

    pub async fn homework_due_soon(&self, hours: u32) -> ApiResult<Vec<Homework>> {
        self.api
            .get_json(&format!("/homework/due-soon?hours={hours}"))
            .await
    }

    pub async fn update_homework(&self, homework_id: &str, homework: &NewHomework) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/homework/update/{homework_id}"), homework)
            .await
    }

    pub async fn delete_homework(&self, homework_id: &str) -> ApiResult<()> {
        self.api
            .delete_unit(&format!("/homework/delete/{homework_id}"))
            .await
    }

    pub async fn extend_due_date(&self, homework_id: &str, new_due_date: &str) -> ApiResult<()> {
        self.api
            .put_unit(
                &format!("/homework/extend/{homework_id}"),
                &ExtendDueDateRequest { new_due_date },
            )
            .await
    }
}
