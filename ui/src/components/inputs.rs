//! Input components for form entry and inline validation feedback

use crate::utils::field_class;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormFieldProps {
    #[props(into)]
    pub label: String,
    /// Input id the label points at
    #[props(into, default)]
    pub html_for: String,
    pub children: Element,
}

#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: "{props.html_for}",
                "{props.label}"
            }
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    #[props(into)]
    pub message: String,
}

#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    rsx! {
        p {
            class: "field-error",
            "{props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    #[props(into)]
    pub name: String,
    #[props(into)]
    pub value: String,
    #[props(into)]
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default)]
    pub has_error: bool,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.name}",
            name: "{props.name}",
            class: field_class(props.has_error),
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectInputProps {
    #[props(into)]
    pub name: String,
    #[props(into)]
    pub value: String,
    /// Label of the empty first option
    #[props(into)]
    pub placeholder: String,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    #[props(default)]
    pub has_error: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SelectInput(props: SelectInputProps) -> Element {
    rsx! {
        select {
            id: "{props.name}",
            name: "{props.name}",
            class: field_class(props.has_error),
            value: "{props.value}",
            onchange: move |event| props.on_change.call(event.value()),
            option {
                value: "",
                selected: props.value.is_empty(),
                "{props.placeholder}"
            }
            for (value, label) in props.options.iter() {
                option {
                    key: "{value}",
                    value: "{value}",
                    selected: *value == props.value,
                    "{label}"
                }
            }
        }
    }
}

/// Labels double as values
pub fn plain_options<I, S>(values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|v| {
            let v = v.into();
            (v.clone(), v)
        })
        .collect()
}
