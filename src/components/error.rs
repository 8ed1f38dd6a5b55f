use crate::api::types::ApiError;
use leptos::*;

/// Whether an error deserves pixels. Superseded responses are an artifact
/// of request sequencing, not something the operator can act on.
pub fn should_display(error: &ApiError) -> bool {
    !error.is_superseded()
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    let visible = create_memo(move |_| {
        error
            .get()
            .map(|e| should_display(&e))
            .unwrap_or(false)
    });
    view! {
        <Show when=move || visible.get() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = e.code.clone();
                    if code != "UNKNOWN" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Page-level error strip shown above a table when its resource failed to
/// load.
#[component]
pub fn ErrorBanner(error: Signal<Option<ApiError>>) -> impl IntoView {
    let message = create_memo(move |_| {
        error
            .get()
            .filter(should_display)
            .map(|e| e.error)
    });
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border-l-4 border-red-400 p-4 mb-4 rounded" role="alert">
                <p class="text-sm text-red-700">{move || message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_errors_are_suppressed() {
        assert!(!should_display(&ApiError::superseded()));
        assert!(should_display(&ApiError::status(500)));
        assert!(should_display(&ApiError::network("offline")));
    }
}
