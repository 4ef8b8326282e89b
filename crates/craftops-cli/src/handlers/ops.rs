use crate::output;
use anyhow::Result;
use craftops_runtime::{AuthService, Authorization, Capability};

pub fn grant(auth: &AuthService, operator: &str, user: &str) -> Result<()> {
    if let Authorization::Denied { reason } = auth.authorize(operator, Capability::Owner)? {
        output::deny(&reason);
        return Ok(());
    }

    if auth.grant(user)? {
        output::confirm(&format!("Granted privileges to {user}."));
    } else {
        println!("{user} already has privileges.");
    }
    Ok(())
}

pub fn revoke(auth: &AuthService, operator: &str, user: &str) -> Result<()> {
    if let Authorization::Denied { reason } = auth.authorize(operator, Capability::Owner)? {
        output::deny(&reason);
        return Ok(());
    }

    if auth.revoke(user)? {
        output::confirm(&format!("Revoked privileges from {user}."));
    } else {
        println!("{user} does not have privileges.");
    }
    Ok(())
}
