use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::app::use_app_config;
use crate::components::inputs::{FormField, InputType, SelectInput, ValidatedInput};
use crate::components::layout::NavBar;
use crate::map::{run_lookup, MapAction, MapFilterState, MapLookup, VILLAGE_SEARCH_DEBOUNCE_MS};
use crate::services::client::{ITribeClient, MapApi, RegionOption};
use crate::{console_error, console_info};

fn region_options(regions: &[RegionOption]) -> Vec<(String, String)> {
    regions
        .iter()
        .map(|region| (region.id.clone(), region.name.clone()))
        .collect()
}

fn selection(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[component]
pub fn MapPage() -> Element {
    let config = use_app_config();
    let mut state = use_signal(MapFilterState::default);

    let lookup_config = config.clone();
    let run = EventHandler::new(move |lookup: MapLookup| {
        let client = ITribeClient::new(&lookup_config);
        spawn(async move {
            match run_lookup(&client, lookup).await {
                Ok(action) => state.with_mut(|s| {
                    s.reduce_in_place(action);
                }),
                Err(e) => console_error!("[Map] Lookup failed: {}", e),
            }
        });
    });

    let dispatch = EventHandler::new(move |action: MapAction| {
        if let Some(lookup) = state.with_mut(|s| s.reduce_in_place(action)) {
            run.call(lookup);
        }
    });

    // Suggestions are only fetched once typing pauses
    let on_village_input = move |term: String| {
        let Some(lookup) = state.with_mut(|s| s.reduce_in_place(MapAction::SetVillageTerm(term)))
        else {
            return;
        };
        spawn(async move {
            TimeoutFuture::new(VILLAGE_SEARCH_DEBOUNCE_MS).await;
            if state.peek().village_lookup().as_ref() == Some(&lookup) {
                run.call(lookup);
            }
        });
    };

    use_effect(move || {
        let client = ITribeClient::new(&config);
        spawn(async move {
            match client.countries().await {
                Ok(countries) => dispatch.call(MapAction::CountriesLoaded(countries)),
                Err(e) => console_error!("[Map] Could not load countries: {}", e),
            }
            match client.communities().await {
                Ok(communities) => {
                    console_info!("[Map] {} communities loaded", communities.len());
                    dispatch.call(MapAction::CommunitiesLoaded(communities));
                }
                Err(e) => console_error!("[Map] Could not load communities: {}", e),
            }
        });
    });

    let current = state();
    let visible: Vec<(String, String)> = current
        .visible_communities()
        .into_iter()
        .map(|c| (c.village_name.clone(), c.village_name.clone()))
        .collect();
    let suggestions: Vec<(String, String, RegionOption)> = current
        .suggestions
        .iter()
        .map(|v| (v.id.clone(), v.name.clone(), v.clone()))
        .collect();
    let selected = current.selected_community().cloned();

    rsx! {
        NavBar {}
        div {
            class: "map-page",
            aside {
                class: "map-filters",
                div {
                    class: "map-filters-header",
                    h2 { "Location Filters" }
                    button {
                        onclick: move |_| dispatch.call(MapAction::Reset),
                        "Reset"
                    }
                }
                FormField {
                    label: "Country",
                    html_for: "country",
                    SelectInput {
                        name: "country",
                        value: current.country_id.clone().unwrap_or_default(),
                        placeholder: "Select a country",
                        options: region_options(&current.countries),
                        on_change: move |value| dispatch.call(MapAction::SelectCountry(selection(value))),
                    }
                }
                FormField {
                    label: "Province",
                    html_for: "province",
                    SelectInput {
                        name: "province",
                        value: current.province_id.clone().unwrap_or_default(),
                        placeholder: current.province_placeholder(),
                        options: region_options(&current.provinces),
                        on_change: move |value| dispatch.call(MapAction::SelectProvince(selection(value))),
                    }
                }
                FormField {
                    label: "District",
                    html_for: "district",
                    SelectInput {
                        name: "district",
                        value: current.district_id.clone().unwrap_or_default(),
                        placeholder: current.district_placeholder(),
                        options: region_options(&current.districts),
                        on_change: move |value| dispatch.call(MapAction::SelectDistrict(selection(value))),
                    }
                }
                FormField {
                    label: "Village Search",
                    html_for: "village-search",
                    ValidatedInput {
                        name: "village-search",
                        value: current.village_term.clone(),
                        placeholder: "Search for a village...",
                        input_type: InputType::Text,
                        on_change: on_village_input,
                    }
                }
                if !suggestions.is_empty() {
                    ul {
                        class: "village-suggestions",
                        for (id, label, village) in suggestions {
                            li {
                                key: "{id}",
                                button {
                                    onclick: move |_| dispatch.call(MapAction::PickVillage(village.clone())),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
            main {
                class: "community-map",
                input {
                    class: "community-search",
                    r#type: "text",
                    placeholder: "Search villages",
                    value: "{current.search}",
                    oninput: move |event| dispatch.call(MapAction::SetSearch(event.value())),
                }
                ul {
                    class: "community-list",
                    for (label, name) in visible {
                        li {
                            key: "{label}",
                            button {
                                onclick: move |_| dispatch.call(MapAction::SelectCommunity(Some(name.clone()))),
                                "{label}"
                            }
                        }
                    }
                }
                if let Some(community) = selected {
                    div {
                        class: "information-box",
                        h3 { "{community.village_name}" }
                        p { "Province: {community.province}" }
                        p { "District: {community.district}" }
                        p { "Population: {community.population}" }
                        button {
                            onclick: move |_| dispatch.call(MapAction::SelectCommunity(None)),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
