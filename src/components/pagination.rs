use leptos::*;

use crate::state::query::PAGE_SIZE;

/// Number of pages for a server-reported total, never below one.
pub fn page_count(total: i64) -> usize {
    let total = total.max(0) as usize;
    (total.div_ceil(PAGE_SIZE)).max(1)
}

pub fn can_go_prev(page: usize) -> bool {
    page > 1
}

pub fn can_go_next(page: usize, total: i64) -> bool {
    page < page_count(total)
}

#[component]
pub fn Pagination(
    page: Signal<usize>,
    total: Signal<i64>,
    on_page: Callback<usize>,
) -> impl IntoView {
    let go_prev = on_page;
    let go_next = on_page;
    view! {
        // Single-page collections need no footer.
        <Show when=move || { page_count(total.get()) > 1 }>
        <div class="flex items-center justify-between mt-4">
            <p class="text-sm text-gray-500">
                {move || format!("Page {} of {} ({} total)", page.get(), page_count(total.get()), total.get().max(0))}
            </p>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="rounded-md border border-gray-300 px-3 py-1.5 text-sm font-medium text-gray-700 disabled:opacity-50"
                    disabled=move || !can_go_prev(page.get())
                    on:click=move |_| go_prev.call(page.get_untracked().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    class="rounded-md border border-gray-300 px-3 py-1.5 text-sm font-medium text-gray-700 disabled:opacity-50"
                    disabled=move || !can_go_next(page.get(), total.get())
                    on:click=move |_| go_next.call(page.get_untracked() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up_and_never_hits_zero() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(20), 1);
        assert_eq!(page_count(21), 2);
        assert_eq!(page_count(40), 2);
        assert_eq!(page_count(41), 3);
        assert_eq!(page_count(-5), 1);
    }

    #[test]
    fn boundaries_disable_the_matching_button() {
        assert!(!can_go_prev(1));
        assert!(can_go_prev(2));
        assert!(can_go_next(1, 21));
        assert!(!can_go_next(2, 21));
        assert!(!can_go_next(1, 0));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn footer_hidden_when_everything_fits_one_page() {
        let html = render_to_string(|| {
            view! {
                <Pagination
                    page=Signal::derive(|| 1)
                    total=Signal::derive(|| 12)
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("Next"));
    }

    #[test]
    fn footer_shows_page_position_for_longer_collections() {
        let html = render_to_string(|| {
            view! {
                <Pagination
                    page=Signal::derive(|| 2)
                    total=Signal::derive(|| 45)
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Page 2 of 3 (45 total)"));
        assert!(html.contains("Previous"));
    }
}
