//! Add-user command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};
use biblio::{MembershipStatus, NewUser};
use clap::Args;
use serde_json::json;

/// Register a library user.
#[derive(Args)]
pub struct AddUserCommand {
    /// The user's name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Contact details (email or phone)
    #[arg(long, value_name = "CONTACT")]
    pub contact: String,

    /// Membership status: active, suspended, or expired
    #[arg(long, value_name = "STATUS", default_value = "active")]
    pub membership_status: String,
}

impl AddUserCommand {
    /// Execute the add-user command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let status = MembershipStatus::parse(&self.membership_status)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let user = NewUser::new(&self.name, &self.contact, status)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = db.insert_user(&user).map_err(CliError::from)?;

        print_json(&json!({
            "message": "User added successfully",
            "user_id": id.value(),
        }))
    }
}
