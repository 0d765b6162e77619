use delta_core::responses::{LoginResponse, WhoamiResponse};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn login(
    username: &str,
    password: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.store.login(username, password)?;
    output(&LoginResponse { user }, flags.format)
}

pub fn logout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.logout();
    output(&WhoamiResponse { user: None }, flags.format)
}

pub fn whoami(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.store.current_user().cloned();
    output(&WhoamiResponse { user }, flags.format)
}
