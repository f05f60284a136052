use dioxus::prelude::*;

use crate::registration::WizardStep;
use crate::utils::step_dot_class;

#[derive(Props, PartialEq, Clone)]
pub struct StepProgressProps {
    pub position: i32,
}

/// Step dots plus the "Step n of 5" caption; hidden once registration completes
#[component]
pub fn StepProgress(props: StepProgressProps) -> Element {
    let position = props.position;
    let total = WizardStep::VISIBLE.len() as i32;
    let in_wizard = (0..total).contains(&position);
    let caption = position + 1;

    rsx! {
        div {
            class: "step-progress",
            ol {
                class: "step-dots",
                for step in WizardStep::VISIBLE.iter() {
                    li {
                        key: "{step.position()}",
                        class: step_dot_class(step.position(), position),
                        span { class: "step-number", {(step.position() + 1).to_string()} }
                        span { class: "step-title", "{step.title()}" }
                    }
                }
            }
            if in_wizard {
                p {
                    class: "step-caption",
                    "Step {caption} of {total}"
                }
            }
        }
    }
}
