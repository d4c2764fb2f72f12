use common_identity::{Identity, Role};

use crate::api::{ApiClient, ApiResult};
use crate::cache::QueryCache;
use crate::models::RegisterRequest;

const ALL_USERS_KEY: &str = "user/allusers";

/// User-management endpoints plus the client-side filters the admin pages
/// build on top of the full user list.
#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
    cache: QueryCache,
}

impl UserService {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    pub async fn all_users(&self) -> ApiResult<Vec<Identity>> {
        if let Some(users) = self.cache.get::<Vec<Identity>>(ALL_USERS_KEY) {
            return Ok(users);
        }
        let users: Vec<Identity> = self.api.get_json("/user/allusers").await?;
        self.cache.put(ALL_USERS_KEY, &users);
        Ok(users)
    }

    pub async fn user_by_id(&self, user_id: &str) -> ApiResult<Identity> {
        self.api
            .get_json(&format!("/user/currentuser/{user_id}"))
            .await
    }

    pub async fn create_user(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.api.post_unit("/user/create", request).await?;
        self.cache.remove(ALL_USERS_KEY);
        Ok(())
    }

    pub async fn update_user(&self, user_id: &str, request: &RegisterRequest) -> ApiResult<()> {
        self.api
            .put_unit(&format!("/user/update/{user_id}"), request)
            .await?;
        self.cache.remove(ALL_USERS_KEY);
        Ok(())
    }

    pub async fn delete_user(&self, user_id: &str) -> ApiResult<()> {
        self.api
            .delete_unit(&format!("/user/delete/{user_id}"))
            .await?;
        self.cache.remove(ALL_USERS_KEY);
        Ok(())
    }

    pub async fn users_by_role(&self, role: Role) -> ApiResult<Vec<Identity>> {
        let users = self.all_users().await?;
        Ok(users.into_iter().filter(|user| user.role == role).collect())
    }

    /// Teachers available for class assignment.
    pub async fn teachers(&self) -> ApiResult<Vec<Identity>> {
        self.users_by_role(Role::Teacher).await
    }

    /// Students for attendance and class management.
    pub async fn students(&self) -> ApiResult<Vec<Identity>> {
        self.users_by_role(Role::Student).await
    }

    pub async fn students_by_class(&self, class_id: &str) -> ApiResult<Vec<Identity>> {
        self.api
            .get_json(&format!("/class/{class_id}/students"))
            .await
    }

    /// Case-insensitive substring search over names, username, and email.
    pub async fn search_users(&self, term: &str) -> ApiResult<Vec<Identity>> {
        let term = term.to_lowercase();
        let users = self.all_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| {
                user.first_name.to_lowercase().contains(&term)
                    || user.last_name.to_lowercase().contains(&term)
                    || user.username.to_lowercase().contains(&term)
                    || user.email.to_lowercase().contains(&term)
            })
            .collect())
    }
}
