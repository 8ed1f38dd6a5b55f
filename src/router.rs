use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RedirectIfSession, RequireSession},
    pages::{
        accounts::AccountsPage, certificates::CertificatesPage, events::EventsPage,
        login::LoginPage, matches::MatchesPage, overview::OverviewPage, patients::PatientsPage,
        questionnaires::{QuestionnaireEditorPage, QuestionnairesPage},
        therapists::TherapistsPage,
    },
    state::auth::{use_session, SessionProvider},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/accounts",
    "/therapists",
    "/patients",
    "/certificates",
    "/events",
    "/matches",
    "/questionnaires",
    "/questionnaires/new",
    "/questionnaires/:id/edit",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/accounts",
    "/therapists",
    "/patients",
    "/certificates",
    "/events",
    "/matches",
    "/questionnaires",
    "/questionnaires/new",
    "/questionnaires/:id/edit",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=RootRedirect/>
                    <Route path="/login" view=PublicLogin/>
                    <Route path="/dashboard" view=ProtectedOverview/>
                    <Route path="/accounts" view=ProtectedAccounts/>
                    <Route path="/therapists" view=ProtectedTherapists/>
                    <Route path="/patients" view=ProtectedPatients/>
                    <Route path="/certificates" view=ProtectedCertificates/>
                    <Route path="/events" view=ProtectedEvents/>
                    <Route path="/matches" view=ProtectedMatches/>
                    <Route path="/questionnaires" view=ProtectedQuestionnaires/>
                    <Route path="/questionnaires/new" view=ProtectedQuestionnaireNew/>
                    <Route path="/questionnaires/:id/edit" view=ProtectedQuestionnaireEdit/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

/// Landing route: session presence decides between dashboard and login.
#[component]
fn RootRedirect() -> impl IntoView {
    let (session, _) = use_session();
    create_effect(move |_| {
        let target = if session.get().is_authenticated {
            "/dashboard"
        } else {
            "/login"
        };
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! { <crate::components::layout::LoadingSpinner /> }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <RedirectIfSession><LoginPage/></RedirectIfSession> }
}

#[component]
fn ProtectedOverview() -> impl IntoView {
    view! { <RequireSession><OverviewPage/></RequireSession> }
}

#[component]
fn ProtectedAccounts() -> impl IntoView {
    view! { <RequireSession><AccountsPage/></RequireSession> }
}

#[component]
fn ProtectedTherapists() -> impl IntoView {
    view! { <RequireSession><TherapistsPage/></RequireSession> }
}

#[component]
fn ProtectedPatients() -> impl IntoView {
    view! { <RequireSession><PatientsPage/></RequireSession> }
}

#[component]
fn ProtectedCertificates() -> impl IntoView {
    view! { <RequireSession><CertificatesPage/></RequireSession> }
}

#[component]
fn ProtectedEvents() -> impl IntoView {
    view! { <RequireSession><EventsPage/></RequireSession> }
}

#[component]
fn ProtectedMatches() -> impl IntoView {
    view! { <RequireSession><MatchesPage/></RequireSession> }
}

#[component]
fn ProtectedQuestionnaires() -> impl IntoView {
    view! { <RequireSession><QuestionnairesPage/></RequireSession> }
}

#[component]
fn ProtectedQuestionnaireNew() -> impl IntoView {
    view! { <RequireSession><QuestionnaireEditorPage/></RequireSession> }
}

#[component]
fn ProtectedQuestionnaireEdit() -> impl IntoView {
    view! { <RequireSession><QuestionnaireEditorPage/></RequireSession> }
}
