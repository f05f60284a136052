use dioxus::prelude::*;

use crate::components::display::PollCard;
use crate::components::layout::NavBar;
use crate::polls::{PollBoard, PollFilter};

#[component]
pub fn PollsPage() -> Element {
    let board = use_signal(PollBoard::seeded);
    let mut filter = use_signal(PollFilter::default);

    let visible: Vec<_> = board
        .read()
        .filtered(filter())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        NavBar {}
        div {
            class: "polls-page",
            aside {
                class: "poll-filters",
                h2 { "Filter Polls" }
                for option in PollFilter::ALL {
                    button {
                        key: "{option.label()}",
                        class: if filter() == option { "filter-button active" } else { "filter-button" },
                        onclick: move |_| filter.set(option),
                        "{option.label()}"
                    }
                }
            }
            div {
                class: "poll-list",
                for poll in visible {
                    PollCard { key: "{poll.id}", poll, board }
                }
            }
        }
    }
}
