// src/bin/hash_password.rs
use anyhow::{Context, Result, bail};
use article_manager::{
    application::ports::security::PasswordHasher,
    infrastructure::security::password::Argon2PasswordHasher,
};
use std::io::{self, BufRead};

/// Prints an argon2 hash suitable for `ADMIN_PASSWORD_HASH`.
///
/// The password is taken from the first argument, or from the first line of
/// stdin when no argument is given.
#[tokio::main]
async fn main() -> Result<()> {
    let password = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        bail!("password must not be empty");
    }

    let hash = Argon2PasswordHasher.hash(&password).await?;
    println!("{hash}");
    Ok(())
}
