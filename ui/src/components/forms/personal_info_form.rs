use dioxus::prelude::*;

use super::{update_field, StepNavigation, WizardStepProps};
use crate::components::inputs::{FormField, InputType, SelectInput, ValidatedInput};
use crate::registration::Gender;
use crate::utils::{day_options, month_options, year_options};

#[component]
pub fn PersonalInfoForm(props: WizardStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let draft = state().draft().clone();
    let current_year = js_sys::Date::new_0().get_full_year() as i32;

    rsx! {
        div {
            class: "wizard-form personal-info-form",
            h2 { class: "form-title", "Personal Information" }

            div {
                class: "form-row",
                FormField {
                    label: "First Name",
                    html_for: "firstname",
                    ValidatedInput {
                        name: "firstname",
                        value: draft.first_name.clone(),
                        placeholder: "Enter your first name",
                        input_type: InputType::Text,
                        on_change: move |value: String| update_field(dispatch, "firstname", value),
                    }
                }
                FormField {
                    label: "Last Name",
                    html_for: "lastname",
                    ValidatedInput {
                        name: "lastname",
                        value: draft.last_name.clone(),
                        placeholder: "Enter your last name",
                        input_type: InputType::Text,
                        on_change: move |value: String| update_field(dispatch, "lastname", value),
                    }
                }
            }

            FormField {
                label: "Username",
                html_for: "username",
                ValidatedInput {
                    name: "username",
                    value: draft.username.clone(),
                    placeholder: "Choose a username",
                    input_type: InputType::Text,
                    on_change: move |value: String| update_field(dispatch, "username", value),
                }
            }

            FormField {
                label: "Email Address",
                html_for: "email",
                ValidatedInput {
                    name: "email",
                    value: draft.email.clone(),
                    placeholder: "Enter your email",
                    input_type: InputType::Email,
                    on_change: move |value: String| update_field(dispatch, "email", value),
                }
            }

            FormField {
                label: "Date of Birth",
                html_for: "date",
                div {
                    class: "form-row date-of-birth",
                    SelectInput {
                        name: "date",
                        value: draft.day.clone(),
                        placeholder: "Day",
                        options: crate::components::inputs::plain_options(day_options()),
                        on_change: move |value: String| update_field(dispatch, "date", value),
                    }
                    SelectInput {
                        name: "month",
                        value: draft.month.clone(),
                        placeholder: "Month",
                        options: month_options(),
                        on_change: move |value: String| update_field(dispatch, "month", value),
                    }
                    SelectInput {
                        name: "year",
                        value: draft.year.clone(),
                        placeholder: "Year",
                        options: crate::components::inputs::plain_options(year_options(current_year)),
                        on_change: move |value: String| update_field(dispatch, "year", value),
                    }
                }
            }

            FormField {
                label: "Gender",
                div {
                    class: "gender-options",
                    for gender in [Gender::Male, Gender::Female] {
                        button {
                            key: "{gender.as_str()}",
                            r#type: "button",
                            class: if draft.gender == Some(gender) { "gender-option selected" } else { "gender-option" },
                            onclick: move |_| update_field(dispatch, "gender", gender.as_str().to_string()),
                            if gender == Gender::Male { "Male" } else { "Female" }
                        }
                    }
                }
            }

            if let Some(error) = state().step_error {
                p { class: "step-error", "{error}" }
            }

            StepNavigation { dispatch: dispatch }
        }
    }
}
