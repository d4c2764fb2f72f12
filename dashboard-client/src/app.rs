use std::sync::Arc;

use anyhow::Result;

use crate::api::{ApiClient, Navigator};
use crate::auth::Authenticator;
use crate::cache::QueryCache;
use crate::config::ClientConfig;
use crate::services::{
    AttendanceService, ClassService, HomeworkService, LessonService, ScheduleService, UserService,
};
use crate::session::SessionStore;

/// Everything the application root owns: the session context plus the
/// collaborators wired to it. Built once at startup and handed down, so the
/// single-writer discipline on the session store is visible in the wiring
/// rather than hidden behind a global.
#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub auth: Authenticator,
    pub users: UserService,
    pub classes: ClassService,
    pub lessons: LessonService,
    pub homework: HomeworkService,
    pub schedules: ScheduleService,
    pub attendance: AttendanceService,
}

impl AppContext {
    pub fn new(config: &ClientConfig, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let session = SessionStore::open(&config.session_file);
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        let api = ApiClient::with_http_client(http, &config.base_url, session.clone(), navigator);
        Ok(Self::wire(
            session,
            api,
            QueryCache::default(),
            &config.register_path,
        ))
    }

    /// Wires an already-built client. Used by tests with an in-memory
    /// session store.
    pub fn wire(
        session: SessionStore,
        api: ApiClient,
        cache: QueryCache,
        register_path: &str,
    ) -> Self {
        Self {
            auth: Authenticator::new(api.clone(), cache.clone()).with_register_path(register_path),
            users: UserService::new(api.clone(), cache.clone()),
            classes: ClassService::new(api.clone()),
            lessons: LessonService::new(api.clone(), cache),
            homework: HomeworkService::new(api.clone()),
            schedules: ScheduleService::new(api.clone()),
            attendance: AttendanceService::new(api),
            session,
        }
    }
}
