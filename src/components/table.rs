use std::rc::Rc;

use leptos::*;

use crate::components::empty_state::EmptyState;

/// One column of a data table. The cell closure renders a row's value;
/// action columns return buttons instead of text.
#[derive(Clone)]
pub struct Column<T> {
    pub header: &'static str,
    cell: Rc<dyn Fn(&T) -> View>,
}

impl<T> Column<T> {
    pub fn new(header: &'static str, cell: impl Fn(&T) -> View + 'static) -> Self {
        Self {
            header,
            cell: Rc::new(cell),
        }
    }

    pub fn text(header: &'static str, cell: impl Fn(&T) -> String + 'static) -> Self {
        Self::new(header, move |row| cell(row).into_view())
    }

    pub fn render(&self, row: &T) -> View {
        (self.cell)(row)
    }
}

/// Rows render in the order the server returned them; no client-side
/// sorting happens here.
#[component]
pub fn DataTable<T: Clone + 'static>(
    columns: Vec<Column<T>>,
    rows: Signal<Vec<T>>,
    #[prop(into)] empty_title: String,
    #[prop(optional, into)] empty_description: Option<String>,
) -> impl IntoView {
    let headers = columns
        .iter()
        .map(|column| view! { <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase tracking-wider">{column.header}</th> })
        .collect_view();
    let body_columns = columns.clone();

    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=move || {
                view! {
                    <EmptyState
                        title=empty_title.clone()
                        description=empty_description.clone()
                    />
                }
            }
        >
            <div class="overflow-x-auto rounded-lg border border-gray-200 bg-white shadow-sm">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>{headers.clone()}</tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {
                            let body_columns = body_columns.clone();
                            move || {
                                let body_columns = body_columns.clone();
                                rows.get()
                                    .iter()
                                    .map(|row| {
                                        view! {
                                            <tr class="hover:bg-gray-50">
                                                {body_columns
                                                    .iter()
                                                    .map(|column| {
                                                        view! {
                                                            <td class="px-4 py-3 text-sm text-gray-700">
                                                                {column.render(row)}
                                                            </td>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }
                        }
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[derive(Clone)]
    struct Row {
        name: String,
        score: i32,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::text("Name", |row: &Row| row.name.clone()),
            Column::text("Score", |row: &Row| row.score.to_string()),
        ]
    }

    #[test]
    fn renders_rows_in_input_order() {
        let html = render_to_string(move || {
            let rows = Signal::derive(|| {
                vec![
                    Row { name: "zeta".into(), score: 1 },
                    Row { name: "alpha".into(), score: 2 },
                ]
            });
            view! {
                <DataTable columns=columns() rows=rows empty_title="No rows" />
            }
        });
        let zeta = html.find("zeta").unwrap();
        let alpha = html.find("alpha").unwrap();
        assert!(zeta < alpha, "rows must keep the order the server returned");
        assert!(html.contains("Name"));
        assert!(html.contains("Score"));
    }

    #[test]
    fn empty_rows_show_the_empty_state() {
        let html = render_to_string(move || {
            let rows = Signal::derive(Vec::<Row>::new);
            view! {
                <DataTable
                    columns=columns()
                    rows=rows
                    empty_title="No rows"
                    empty_description="Nothing matched your filters"
                />
            }
        });
        assert!(html.contains("No rows"));
        assert!(html.contains("Nothing matched your filters"));
        assert!(!html.contains("<table"));
    }
}
