//! # Theme Commands
//!
//! Writes are fire-and-forget: the response reflects the new mode as soon
//! as it is set, whether or not the background write succeeds.

use serde::Serialize;
use storefront_core::ThemeMode;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeResponse {
    pub mode: ThemeMode,
}

pub fn get_theme(ctx: &AppContext) -> ThemeResponse {
    debug!("get_theme command");
    ThemeResponse {
        mode: ctx.theme.current(),
    }
}

pub fn toggle_theme(ctx: &mut AppContext) -> ThemeResponse {
    debug!(from = %ctx.theme.current(), "toggle_theme command");
    // The completion handle is dropped; the controller still tracks the write.
    let _ = ctx.theme.toggle();
    get_theme(ctx)
}

/// Sets the mode from user input (`"dark"`, `"Light"`, ...).
pub fn set_theme(ctx: &mut AppContext, mode: &str) -> Result<ThemeResponse, ApiError> {
    debug!(mode = %mode, "set_theme command");

    let mode: ThemeMode = mode.parse()?;
    let _ = ctx.theme.set(mode);
    Ok(get_theme(ctx))
}
