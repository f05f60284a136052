use dioxus::prelude::*;

use crate::console_warn;
use crate::polls::{Poll, PollBoard, COMMUNITY_SIZE};

#[derive(Props, PartialEq, Clone)]
pub struct PollCardProps {
    pub poll: Poll,
    pub board: Signal<PollBoard>,
}

#[component]
pub fn PollCard(props: PollCardProps) -> Element {
    let poll = props.poll;
    let mut board = props.board;
    let mut show_results = use_signal(|| false);
    let mut pinned = use_signal(|| false);

    let ballot = board.read().ballot(&poll.id).map(str::to_string);
    let results_visible = show_results() || !poll.is_active();
    let participation = format!("{:.2}", poll.participation_percentage(COMMUNITY_SIZE));
    let rows: Vec<(String, String, String)> = poll
        .options
        .iter()
        .map(|option| {
            let share = poll.option_percentage(option);
            (
                option.clone(),
                format!("{} ({:.2}%)", poll.count_for(option), share),
                format!("width: {}%", share),
            )
        })
        .collect();

    rsx! {
        div {
            class: "poll-card",
            div {
                class: "poll-status",
                "status: "
                span { class: "poll-status-{poll.status.as_str()}", "{poll.status.as_str()}" }
            }
            button {
                class: if pinned() { "pin-button pinned" } else { "pin-button" },
                onclick: move |_| pinned.set(!pinned()),
                "📌"
            }
            h2 { class: "poll-title", "{poll.title}" }
            p { class: "poll-created", "Created {poll.time_created}" }
            p { class: "poll-question", "{poll.question}" }

            if ballot.is_some() && !show_results() {
                button {
                    class: "poll-see-results",
                    onclick: move |_| show_results.set(true),
                    "See Results"
                }
            } else if !results_visible {
                div {
                    class: "poll-options",
                    for option in poll.options.iter().cloned() {
                        button {
                            key: "{option}",
                            class: "poll-option",
                            onclick: {
                                let poll_id = poll.id.clone();
                                let option = option.clone();
                                move |_| {
                                    if let Err(e) = board.write().vote(&poll_id, &option) {
                                        console_warn!("[Polls] {}", e);
                                    }
                                }
                            },
                            "{option}"
                        }
                    }
                }
            }

            if results_visible {
                div {
                    class: "poll-results",
                    if show_results() {
                        button {
                            class: "poll-results-close",
                            onclick: move |_| show_results.set(false),
                            "✕"
                        }
                    }
                    for (option, tally, width) in rows.iter() {
                        div {
                            key: "{option}",
                            class: "poll-result-row",
                            p {
                                span { "{option}" }
                                span { "{tally}" }
                            }
                            div {
                                class: "poll-bar",
                                div {
                                    class: "poll-bar-fill",
                                    style: "{width}",
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "poll-footer",
                p { "{poll.voters_count} voters" }
                p { "{participation}% of users voted" }
            }
        }
    }
}
