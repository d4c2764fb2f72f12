use common_identity::Role;

use crate::session::Session;

/// Navigable locations in the dashboard shell, with the role each one
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    AdminClasses,
    AdminUsers,
    TeacherClasses,
    TeacherHomework,
    StudentHome,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/",
            Route::AdminClasses => "/admin/classes",
            Route::AdminUsers => "/admin/users",
            Route::TeacherClasses => "/teacher/classes",
            Route::TeacherHomework => "/teacher/homework",
            Route::StudentHome => "/student",
        }
    }

    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Role required beyond being signed in; `None` admits any
    /// authenticated user.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Login | Route::Register | Route::Dashboard => None,
            Route::AdminClasses | Route::AdminUsers => Some(Role::Admin),
            Route::TeacherClasses | Route::TeacherHomework => Some(Role::Teacher),
            Route::StudentHome => Some(Role::Student),
        }
    }
}

/// Outcome of gating one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route's content.
    Render,
    /// Not signed in; terminal for this navigation attempt.
    RedirectToLogin,
    /// Signed in but the role does not match; back to the landing route.
    RedirectToDashboard,
}

/// Route guard, re-evaluated on every navigation. A pure function of the
/// session snapshot and the requested route; it holds no state of its own.
pub fn authorize(session: &Session, route: Route) -> RouteDecision {
    if route.is_public() {
        return RouteDecision::Render;
    }

    if !session.is_authenticated {
        return RouteDecision::RedirectToLogin;
    }

    match (route.required_role(), session.identity.as_ref()) {
        (None, _) => RouteDecision::Render,
        (Some(required), Some(identity)) if identity.role == required => RouteDecision::Render,
        (Some(_), _) => RouteDecision::RedirectToDashboard,
    }
}

/// Top-level dashboards, one per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Teacher,
    Student,
}

/// Chooses the dashboard for the signed-in role. `None` means the caller
/// must send the user to the login entry point — there is no default view.
pub fn select_dashboard(session: &Session) -> Option<DashboardView> {
    if !session.is_authenticated {
        return None;
    }

    session.identity.as_ref().map(|identity| match identity.role {
        Role::Admin => DashboardView::Admin,
        Role::Teacher => DashboardView::Teacher,
        Role::Student => DashboardView::Student,
    })
}
