use crate::api::{ApiClient, ApiResult};
use crate::cache::QueryCache;
use crate::models::{Lesson, NewLesson};

const ALL_LESSONS_KEY: &str = "lesson/all";

#[derive(Clone)]
pub struct LessonService {
    api: ApiClient,
    cache: QueryCache,
}

impl LessonService {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    pub async fn create_lesson(&self, lesson: &NewLesson) -> ApiResult<()> {
        self.api.post_unit("/lesson/create", lesson).await?;
        self.cache.remove(ALL_LESSONS_KEY);
        Ok(())
    }

    pub async fn lesson_by_id(&self, lesson_id: &str) -> ApiResult<Lesson> {
        self.api.get_json(&format!("/lesson/{lesson_id}")).await
    }

    pub async fn all_lessons(&self) -> ApiResult<Vec<Lesson>> {
        if let Some(lessons) = self.cache.get::<Vec<Lesson>>(ALL_LESSONS_KEY) {
            return Ok(lessons);
        }
        let lessons: Vec<Lesson> = self.api.get_json("/lesson/all").await?;
        self.cache.put(ALL_LESSONS_KEY, &lessons);
        Ok(lessons)
    }

    pub async fn update_lesson(&self, lesson_id: &str, lesson: &NewLesson) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/lesson/update/{lesson_id}"), lesson)
            .await?;
        self.cache.remove(ALL_LESSONS_KEY);
        Ok(())
    }

    pub async fn delete_lesson(&self, lesson_id: &str) -> ApiResult<()> {
        self.api
            .delete_unit(&format!("/lesson/delete/{lesson_id}"))
            .await?;
        self.cache.remove(ALL_LESSONS_KEY);
        Ok(())
    }

    /// Case-insensitive name search over the cached lesson list.
    pub async fn search_lessons(&self, term: &str) -> ApiResult<Vec<Lesson>> {
        let term = term.to_lowercase();
        let lessons = self.all_lessons().await?;
        Ok(lessons
            .into_iter()
            .filter(|lesson| lesson.lesson_name.to_lowercase().contains(&term))
            .collect())
    }
}
