use dioxus::prelude::*;

use crate::registration::PasswordChecklist;
use crate::utils::{checklist_item_class, checklist_marker};

#[derive(Props, PartialEq, Clone)]
pub struct PasswordChecklistViewProps {
    pub checklist: PasswordChecklist,
}

#[component]
pub fn PasswordChecklistView(props: PasswordChecklistViewProps) -> Element {
    rsx! {
        ul {
            class: "password-checklist",
            for (label, met) in props.checklist.items() {
                li {
                    key: "{label}",
                    class: checklist_item_class(met),
                    span { class: "checklist-marker", {checklist_marker(met)} }
                    "{label}"
                }
            }
        }
    }
}
