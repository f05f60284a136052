use dioxus::prelude::*;

use super::{update_field, StepNavigation, WizardStepProps};
use crate::components::inputs::{
    plain_options, FieldError, FormField, InputType, SelectInput, ValidatedInput,
};
use crate::registration::{LocationField, Village};

#[component]
pub fn LocationForm(props: WizardStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();
    let draft = current.draft().clone();
    let errors = current.location_errors.clone();
    let error_for = |field: LocationField| errors.get(field).map(str::to_string);
    let village_value = draft.village.map(|v| v.name().to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "wizard-form location-form",
            h2 { class: "form-title", "Additional Information" }

            FormField {
                label: "Country",
                html_for: "country",
                ValidatedInput {
                    name: "country",
                    value: draft.country.clone(),
                    placeholder: "Enter your country",
                    input_type: InputType::Text,
                    has_error: error_for(LocationField::Country).is_some(),
                    on_change: move |value: String| update_field(dispatch, "country", value),
                }
                if let Some(message) = error_for(LocationField::Country) {
                    FieldError { message: message }
                }
            }

            div {
                class: "form-row",
                FormField {
                    label: "State",
                    html_for: "state",
                    ValidatedInput {
                        name: "state",
                        value: draft.state.clone(),
                        placeholder: "Enter your state",
                        input_type: InputType::Text,
                        has_error: error_for(LocationField::State).is_some(),
                        on_change: move |value: String| update_field(dispatch, "state", value),
                    }
                    if let Some(message) = error_for(LocationField::State) {
                        FieldError { message: message }
                    }
                }
                FormField {
                    label: "City",
                    html_for: "city",
                    ValidatedInput {
                        name: "city",
                        value: draft.city.clone(),
                        placeholder: "Enter your city",
                        input_type: InputType::Text,
                        has_error: error_for(LocationField::City).is_some(),
                        on_change: move |value: String| update_field(dispatch, "city", value),
                    }
                    if let Some(message) = error_for(LocationField::City) {
                        FieldError { message: message }
                    }
                }
            }

            FormField {
                label: "Village",
                html_for: "village",
                SelectInput {
                    name: "village",
                    value: village_value,
                    placeholder: "Select your village",
                    options: plain_options(Village::ALL.iter().map(|v| v.name())),
                    has_error: error_for(LocationField::Village).is_some(),
                    on_change: move |value: String| update_field(dispatch, "village", value),
                }
                if let Some(message) = error_for(LocationField::Village) {
                    FieldError { message: message }
                }
            }

            FormField {
                label: "Community",
                html_for: "community",
                ValidatedInput {
                    name: "community",
                    value: draft.community.clone(),
                    placeholder: "Enter your community",
                    input_type: InputType::Text,
                    has_error: error_for(LocationField::Community).is_some(),
                    on_change: move |value: String| update_field(dispatch, "community", value),
                }
                if let Some(message) = error_for(LocationField::Community) {
                    FieldError { message: message }
                }
            }

            StepNavigation { dispatch: dispatch }
        }
    }
}
