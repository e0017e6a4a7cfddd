//! Application state shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AdminService, AuthService, CatalogService, IntakeService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub intake_service: Arc<dyn IntakeService>,
    pub admin_service: Arc<dyn AdminService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.clone());
        Self::with_services(&container, database, config)
    }

    /// Create application state from any service container.
    pub fn with_services(
        container: &dyn ServiceContainer,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            catalog_service: container.catalog(),
            intake_service: container.intake(),
            admin_service: container.admin(),
            database,
            config: Arc::new(config),
        }
    }

    /// Where `/` and logout send the browser.
    pub fn landing_url(&self) -> &str {
        self.config
            .client_url
            .as_deref()
            .unwrap_or(crate::config::ADMIN_LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADMIN_LOGIN_PATH, DEV_SESSION_SECRET};
    use crate::services::MockServiceContainer;

    #[tokio::test]
    async fn test_state_takes_services_from_container() {
        let path = std::env::temp_dir().join(format!("salon-state-{}.db", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let mut config = Config::new(url, DEV_SESSION_SECRET).unwrap();
        let database = Arc::new(Database::connect(&config).await.unwrap());
        let real = Services::from_connection(database.get_connection(), config.clone());

        let mut container = MockServiceContainer::new();
        container.expect_auth().times(1).return_const(real.auth());
        container.expect_catalog().times(1).return_const(real.catalog());
        container.expect_intake().times(1).return_const(real.intake());
        container.expect_admin().times(1).return_const(real.admin());

        let state = AppState::with_services(&container, database.clone(), config.clone());
        assert_eq!(state.landing_url(), ADMIN_LOGIN_PATH);

        config.client_url = Some("https://salon.example".into());
        let state = AppState::with_services(&real, database, config);
        assert_eq!(state.landing_url(), "https://salon.example");
    }
}
