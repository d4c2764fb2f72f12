use std::env;
use std::sync::Arc;

use anyhow::{bail, Result};
use dashboard_client::api::LoggingNavigator;
use dashboard_client::config::load_client_config;
use dashboard_client::routing::{select_dashboard, DashboardView};
use dashboard_client::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = load_client_config()?;
    let app = AppContext::new(&config, Arc::new(LoggingNavigator))?;

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("login") => {
            let (Some(username), Some(password)) = (args.get(1), args.get(2)) else {
                bail!("usage: dashboard-client login <username> <password>");
            };
            let identity = app.auth.login(username, password).await?;
            println!("signed in as {} ({})", identity.username, identity.role);
        }
        Some("logout") => {
            app.auth.logout().await;
            println!("signed out");
        }
        Some("whoami") => match app.session.identity() {
            Some(identity) => {
                println!("{} <{}>", identity.full_name(), identity.email);
                println!("role: {}", identity.role);
            }
            None => println!("not signed in"),
        },
        Some("status") | None => {
            let session = app.session.snapshot();
            match select_dashboard(&session) {
                Some(view) => {
                    let landing = match view {
                        DashboardView::Admin => "admin dashboard",
                        DashboardView::Teacher => "teacher dashboard",
                        DashboardView::Student => "student dashboard",
                    };
                    println!("signed in, landing view: {landing}");
                }
                None => println!("not signed in"),
            }
        }
        Some(other) => bail!("unknown command '{other}', expected login|logout|whoami|status"),
    }

    Ok(())
}
