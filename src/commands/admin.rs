//! Admin command - account management from the shell.

use std::sync::Arc;

use crate::cli::args::{AdminAction, AdminArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence};
use crate::services::{AuthService, Authenticator};

/// Execute the admin command
pub async fn execute(args: AdminArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let auth = Authenticator::new(Arc::new(Persistence::new(db.get_connection())), config);

    match args.action {
        AdminAction::Create { username, password } => {
            let identity = auth.create_admin(&username, &password).await?;
            println!("Created admin '{}' (id {})", identity.username(), identity.user_id());
        }
        AdminAction::Verify { username, password } => {
            match auth.authenticate(&username, &password).await {
                Ok(identity) => println!("Credentials valid for '{}'", identity.username()),
                Err(AppError::InvalidCredentials) => println!("Credentials rejected"),
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
