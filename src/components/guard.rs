use crate::components::layout::LoadingSpinner;
use crate::state::auth::use_session;
use leptos::*;

/// Presence-only gate: a stored token renders the children, its absence
/// redirects to the login page. Whether the token is still valid is only
/// discovered when a request comes back 401.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let is_authenticated = create_memo(move |_| session.get().is_authenticated);
    create_effect(move |_| {
        if session.get().is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_protected(is_authenticated.get())
            fallback=move || view! { <LoadingSpinner /> }
        >
            {children()}
        </Show>
    }
}

/// Inverse gate for the login page: an already-present session goes
/// straight to the dashboard.
#[component]
pub fn RedirectIfSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let is_authenticated = create_memo(move |_| session.get().is_authenticated);
    create_effect(move |_| {
        if !session.get().is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/dashboard");
        }
    });
    view! {
        <Show
            when=move || should_render_public(is_authenticated.get())
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

fn should_render_protected(is_authenticated: bool) -> bool {
    is_authenticated
}

fn should_render_public(is_authenticated: bool) -> bool {
    !is_authenticated
}

#[cfg(test)]
mod tests {
    use super::{should_render_protected, should_render_public};

    #[test]
    fn protected_content_needs_a_session() {
        assert!(should_render_protected(true));
        assert!(!should_render_protected(false));
    }

    #[test]
    fn login_page_hides_once_a_session_exists() {
        assert!(should_render_public(false));
        assert!(!should_render_public(true));
    }
}
