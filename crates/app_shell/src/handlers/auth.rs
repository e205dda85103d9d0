//! Sign-in and sign-out

use tracing::{info, instrument};

use domain_auth::Route;

use crate::error::AppError;
use crate::AppContext;

/// Signs in and navigates to the identity's dashboard
///
/// Returns the route navigated to.
#[instrument(skip(ctx, password))]
pub async fn sign_in(ctx: &AppContext, login_name: &str, password: &str) -> Result<Route, AppError> {
    let identity = ctx.session.authenticate(login_name, password).await?;
    let home = Route::home_for(Some(&identity));
    info!(id = %identity.id, route = %home, "Sign-in complete");
    ctx.navigator.navigate(home);
    Ok(home)
}

/// Signs out; the session store sends the user to the login surface
pub fn sign_out(ctx: &AppContext) {
    ctx.session.end_session();
}

/// Where the current identity belongs; the landing page when signed out
pub fn home_route(ctx: &AppContext) -> Route {
    Route::home_for(ctx.session.current_identity().as_ref())
}
