use dioxus::prelude::*;

use crate::dashboard::{format_grouped, StatCardData};

#[derive(Props, PartialEq, Clone)]
pub struct StatCardProps {
    pub stat: StatCardData,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let mut pinned = use_signal(|| false);
    let stat = props.stat;
    let total = stat.count.map(format_grouped);

    rsx! {
        div {
            class: if pinned() { "stat-card pinned" } else { "stat-card" },
            div {
                class: "stat-card-header",
                button {
                    class: "pin-button",
                    title: if pinned() { "Unpin" } else { "Pin" },
                    onclick: move |_| pinned.set(!pinned()),
                    "📌"
                }
                h2 { class: "stat-title", "{stat.title}" }
            }
            if let Some(total) = total {
                p { class: "stat-line", "Total: {total}" }
            }
            if let Some(growth) = stat.growth {
                p { class: "stat-line", "Growth: {growth}%" }
            }
            for item in stat.items.iter() {
                p {
                    key: "{item.name}",
                    class: "stat-line",
                    "{item.name}: {item.percentage}%"
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct UserTotalsBoxProps {
    pub registered: u64,
    pub verified: u64,
}

#[component]
pub fn UserTotalsBox(props: UserTotalsBoxProps) -> Element {
    let registered = format_grouped(props.registered);
    let verified = format_grouped(props.verified);

    rsx! {
        div {
            class: "user-totals",
            h2 { "User Stats" }
            div {
                class: "user-totals-row",
                h3 { "Registered Users:" }
                p { "{registered}" }
            }
            div {
                class: "user-totals-row",
                h3 { "Verified Users:" }
                p { "{verified}" }
            }
        }
    }
}
