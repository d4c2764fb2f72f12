use crate::api::{ApiClient, ApiResult};
use crate::models::{Class, NewClass};

#[derive(Clone)]
pub struct ClassService {
    api: ApiClient,
}

impl ClassService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_class(&self, class: &NewClass) -> ApiResult<()> {
        self.api.post_unit("/class/create", class).await
    }

    pub async fn all_classes(&self) -> ApiResult<Vec<Class>> {
        self.api.get_json("/class/all").await
    }

    pub async fn classes_by_teacher(&self, teacher_id: &str) -> ApiResult<Vec<Class>> {
        self.api
            .get_json(&format!("/class/teacher/{teacher_id}"))
            .await
    }

    pub async fn update_class(&self, class_id: &str, class: &NewClass) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/class/update/{class_id}"), class)
            .await
    }

    pub async fn delete_class(&self, class_id: &str) -> ApiResult<()> {
        self.api
            .delete_unit(&format!("/class/delete/{class_id}"))
            .await
    }
}
