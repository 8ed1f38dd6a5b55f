use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal shell shared by every create/edit form. The caller owns the open
/// signal and the form body; the shell owns backdrop and escape handling.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let close_on_backdrop = on_close;
    let close_on_esc = on_close;
    let title_text = Signal::derive(move || title.get());
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center p-4 overflow-y-auto">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/40"
                    on:click=move |_| close_on_backdrop.call(())
                ></button>
                <div
                    class="relative z-[41] w-full max-w-lg rounded-lg bg-white shadow-xl border border-gray-200 p-6 space-y-4 max-h-[90vh] overflow-y-auto"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close_on_esc.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-gray-900">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-gray-400 hover:text-gray-600"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <label class="block">
            <span class="text-sm font-medium text-gray-700">{label}</span>
            <input
                type=input_type
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-indigo-500 focus:outline-none"
                placeholder=placeholder.unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-gray-700">{label}</span>
            <textarea
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-indigo-500 focus:outline-none"
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            >
                {value.get_untracked()}
            </textarea>
        </label>
    }
}

/// Options are `(value, label)` pairs rendered in input order.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm font-medium text-gray-700">{label}</span>
            <select
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-indigo-500 focus:outline-none"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected = value.get_untracked() == option_value;
                        view! {
                            <option value=option_value selected=selected>{option_label}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn CheckboxField(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="inline-flex items-center gap-2">
            <input
                type="checkbox"
                class="h-4 w-4 rounded border-gray-300 text-indigo-600"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            <span class="text-sm text-gray-700">{label}</span>
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_children_only_when_open() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <Modal is_open=is_open title="Edit therapist" on_close=Callback::new(|_| {})>
                    {|| view! { <p>"modal-body"</p> }}
                </Modal>
            }
        });
        assert!(html.contains("Edit therapist"));
        assert!(html.contains("modal-body"));

        let closed = render_to_string(move || {
            let is_open = Signal::derive(|| false);
            view! {
                <Modal is_open=is_open title="Edit therapist" on_close=Callback::new(|_| {})>
                    {|| view! { <p>"modal-body"</p> }}
                </Modal>
            }
        });
        assert!(!closed.contains("modal-body"));
    }

    #[test]
    fn select_field_marks_the_current_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("therapist".to_string());
            view! {
                <SelectField
                    label="Role"
                    value=value
                    options=vec![
                        ("admin".to_string(), "Admin".to_string()),
                        ("therapist".to_string(), "Therapist".to_string()),
                    ]
                />
            }
        });
        assert!(html.contains("Role"));
        assert!(html.contains("Therapist"));
        assert!(html.contains("selected"));
    }
}
