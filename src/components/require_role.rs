//! Route guard for role-restricted pages.
//!
//! UX only: the backend authorizes every request on its own.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use session::{Role, RouteDecision};

use crate::state::session::use_session;
use crate::util::auth::install_role_guard;

/// Render `children` only while the session may open the current route.
///
/// Without `role`, any signed-in role is accepted.
#[component]
pub fn RequireRole(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let location = use_location();
    let target = Signal::derive(move || location.pathname.get());

    install_role_guard(session, role, target, navigate);

    let allowed = move || matches!(session.authorize(role, &target.get()), RouteDecision::Allow);

    view! {
        <Show when=allowed>
            {children()}
        </Show>
    }
}
