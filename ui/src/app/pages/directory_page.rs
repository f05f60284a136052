use dioxus::prelude::*;

use crate::app::use_app_config;
use crate::components::display::LoadingIndicator;
use crate::components::layout::NavBar;
use crate::directory::{fetch_page, today, DirectoryAction, DirectoryState, FilterColumn};
use crate::services::client::ITribeClient;
use crate::{console_error, console_info};

#[component]
pub fn DirectoryPage() -> Element {
    let config = use_app_config();
    let mut state = use_signal(DirectoryState::default);
    let mut sidebar_open = use_signal(|| false);

    let dispatch = EventHandler::new(move |action: DirectoryAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let load_more = EventHandler::new(move |_: ()| {
        let Some(page) = state.with_mut(|s| s.begin_load()) else {
            return;
        };
        let client = ITribeClient::new(&config);
        console_info!("[Directory] Loading page {}", page);

        spawn(async move {
            let action = fetch_page(&client, page, today()).await;
            if let DirectoryAction::PageFailed(error) = &action {
                console_error!("[Directory] {}", error);
            }
            dispatch.call(action);
        });
    });

    // First page on mount
    use_effect(move || load_more.call(()));

    let current = state();
    let options = current.filter_options();
    let rows: Vec<_> = current
        .visible()
        .into_iter()
        .map(|row| {
            let age = row.age.map(|age| age.to_string()).unwrap_or_default();
            (row.member.clone(), age)
        })
        .collect();
    let summary_line = current.summary();

    rsx! {
        NavBar {}
        div {
            class: "directory-page",
            if sidebar_open() {
                aside {
                    class: "filter-sidebar",
                    h2 { "Filter Options" }
                    for (column, values) in options {
                        details {
                            key: "{column.label()}",
                            summary { "{column.label()}" }
                            for value in values {
                                FilterCheckbox {
                                    key: "{value}",
                                    column,
                                    checked: current.is_selected(column, &value),
                                    value: value.clone(),
                                    dispatch,
                                }
                            }
                        }
                    }
                    div {
                        class: "filter-actions",
                        button {
                            onclick: move |_| dispatch.call(DirectoryAction::ResetFilters),
                            "Reset"
                        }
                        button {
                            onclick: move |_| sidebar_open.set(false),
                            "Close"
                        }
                    }
                }
            }
            main {
                class: "directory",
                div {
                    class: "directory-header",
                    h1 { "People of iTribe" }
                    button {
                        class: "filter-toggle",
                        onclick: move |_| sidebar_open.set(!sidebar_open()),
                        "Filter Options"
                    }
                }
                table {
                    class: "member-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Age" }
                            th { "Gender" }
                            th { "Village" }
                            th { "City" }
                            th { "Community" }
                            th { "State" }
                            th { "Country" }
                        }
                    }
                    tbody {
                        for (idx, (member, age)) in rows.into_iter().enumerate() {
                            tr {
                                key: "{idx}",
                                td { "{member.name}" }
                                td { "{age}" }
                                td { "{member.gender}" }
                                td { "{member.village}" }
                                td { "{member.city}" }
                                td { "{member.community}" }
                                td { "{member.state}" }
                                td { "{member.country}" }
                            }
                        }
                    }
                }
                if let Some(error) = current.error.clone() {
                    p { class: "error-message", "{error}" }
                }
                if current.is_loading {
                    LoadingIndicator { message: "Loading members...".to_string() }
                } else if current.has_more() {
                    button {
                        class: "load-more",
                        onclick: move |_| load_more.call(()),
                        "Load more"
                    }
                }
                p { class: "directory-summary", "{summary_line}" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct FilterCheckboxProps {
    column: FilterColumn,
    value: String,
    checked: bool,
    dispatch: EventHandler<DirectoryAction>,
}

#[component]
fn FilterCheckbox(props: FilterCheckboxProps) -> Element {
    let column = props.column;
    let value = props.value.clone();
    let dispatch = props.dispatch;

    rsx! {
        label {
            class: "filter-option",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |event: FormEvent| {
                    dispatch.call(DirectoryAction::ToggleFilter {
                        column,
                        value: value.clone(),
                        checked: event.checked(),
                    })
                },
            }
            "{props.value}"
        }
    }
}
