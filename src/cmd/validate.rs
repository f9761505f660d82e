use crate::calc::validation::{validate_user, SignupUser};
use anyhow::{bail, Result};

/// The new-mailbox signup form.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ValidateArgs {
    #[arg(long, default_value = "")]
    pub domain: String,
    #[arg(long, default_value = "")]
    pub mailbox: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
}

pub fn run(args: &ValidateArgs) -> Result<()> {
    let user = SignupUser::new(&args.domain, &args.mailbox, &args.first_name, &args.last_name);
    let validated = validate_user(&user);
    write_validation(&validated, &mut std::io::stdout())?;
    if !validated.is_valid() {
        bail!("signup form has errors");
    }
    Ok(())
}

pub(crate) fn write_validation<W: std::io::Write>(user: &SignupUser, out: &mut W) -> Result<()> {
    for (label, field) in user.fields() {
        match &field.error {
            Some(err) => writeln!(out, "  {:<12} ✗ {}", label, err)?,
            None => writeln!(out, "  {:<12} ✓ {}", label, field.value)?,
        }
    }
    if user.is_valid() {
        writeln!(out, "---")?;
        writeln!(out, "Email: {}", user.email())?;
    }
    Ok(())
}
