//! Map filters: the country → province → district cascade, the village
//! search box, and the name search over plotted communities.
//!
//! Drawing the map itself is left to the page; this module only decides
//! which communities are visible and which lookups to issue next.

use tracing::debug;

use crate::services::client::{ClientResult, Community, MapApi, RegionOption};

/// Delay before a village search term is sent to the backend
pub const VILLAGE_SEARCH_DEBOUNCE_MS: u32 = 300;

/// Lookup the page should issue after an action
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MapLookup {
    Provinces { country_id: String },
    Districts { province_id: String },
    Villages {
        term: String,
        district_id: Option<String>,
    },
}

#[derive(Clone, Debug)]
pub enum MapAction {
    CountriesLoaded(Vec<RegionOption>),
    SelectCountry(Option<String>),
    ProvincesLoaded {
        country_id: String,
        provinces: Vec<RegionOption>,
    },
    SelectProvince(Option<String>),
    DistrictsLoaded {
        province_id: String,
        districts: Vec<RegionOption>,
    },
    SelectDistrict(Option<String>),
    SetVillageTerm(String),
    SuggestionsLoaded {
        term: String,
        villages: Vec<RegionOption>,
    },
    PickVillage(RegionOption),
    CommunitiesLoaded(Vec<Community>),
    SetSearch(String),
    SelectCommunity(Option<String>),
    Reset,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct MapFilterState {
    pub countries: Vec<RegionOption>,
    pub provinces: Vec<RegionOption>,
    pub districts: Vec<RegionOption>,
    pub country_id: Option<String>,
    pub province_id: Option<String>,
    pub district_id: Option<String>,
    pub village_id: Option<String>,
    pub village_term: String,
    pub suggestions: Vec<RegionOption>,
    communities: Vec<Community>,
    /// Free-text search over community names
    pub search: String,
    /// Village name of the community whose details are shown
    pub selected: Option<String>,
}

impl MapFilterState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity).
    ///
    /// Returns the lookup the action calls for, if any.
    pub fn reduce_in_place(&mut self, action: MapAction) -> Option<MapLookup> {
        match action {
            MapAction::CountriesLoaded(countries) => {
                self.countries = countries;
                None
            }
            MapAction::SelectCountry(country_id) => {
                self.country_id = country_id.clone();
                self.province_id = None;
                self.district_id = None;
                self.provinces.clear();
                self.districts.clear();
                country_id.map(|country_id| MapLookup::Provinces { country_id })
            }
            MapAction::ProvincesLoaded {
                country_id,
                provinces,
            } => {
                if self.country_id.as_deref() == Some(country_id.as_str()) {
                    self.provinces = provinces;
                } else {
                    debug!("Dropping provinces for deselected country {}", country_id);
                }
                None
            }
            MapAction::SelectProvince(province_id) => {
                self.province_id = province_id.clone();
                self.district_id = None;
                self.districts.clear();
                province_id.map(|province_id| MapLookup::Districts { province_id })
            }
            MapAction::DistrictsLoaded {
                province_id,
                districts,
            } => {
                if self.province_id.as_deref() == Some(province_id.as_str()) {
                    self.districts = districts;
                } else {
                    debug!("Dropping districts for deselected province {}", province_id);
                }
                None
            }
            MapAction::SelectDistrict(district_id) => {
                self.district_id = district_id;
                self.village_lookup()
            }
            MapAction::SetVillageTerm(term) => {
                self.village_term = term;
                self.village_id = None;
                let lookup = self.village_lookup();
                if lookup.is_none() {
                    self.suggestions.clear();
                }
                lookup
            }
            MapAction::SuggestionsLoaded { term, villages } => {
                if term == self.village_term.trim() {
                    self.suggestions = villages;
                }
                None
            }
            MapAction::PickVillage(village) => {
                self.village_id = Some(village.id);
                self.village_term = village.name;
                self.suggestions.clear();
                None
            }
            MapAction::CommunitiesLoaded(communities) => {
                self.communities = communities;
                None
            }
            MapAction::SetSearch(search) => {
                self.search = search;
                None
            }
            MapAction::SelectCommunity(village_name) => {
                self.selected = village_name;
                None
            }
            MapAction::Reset => {
                let countries = std::mem::take(&mut self.countries);
                let communities = std::mem::take(&mut self.communities);
                *self = Self {
                    countries,
                    communities,
                    ..Self::default()
                };
                None
            }
        }
    }

    /// Village search to issue for the current term and district
    pub fn village_lookup(&self) -> Option<MapLookup> {
        let term = self.village_term.trim();
        if term.is_empty() {
            return None;
        }
        Some(MapLookup::Villages {
            term: term.to_string(),
            district_id: self.district_id.clone(),
        })
    }

    /// Communities that can be plotted and whose name contains the search text
    pub fn visible_communities(&self) -> Vec<&Community> {
        let needle = self.search.to_lowercase();
        self.communities
            .iter()
            .filter(|c| c.village_name.to_lowercase().contains(&needle))
            .filter(|c| c.has_coordinates())
            .collect()
    }

    pub fn selected_community(&self) -> Option<&Community> {
        let name = self.selected.as_deref()?;
        self.communities.iter().find(|c| c.village_name == name)
    }

    pub fn province_placeholder(&self) -> &'static str {
        if self.country_id.is_some() {
            "Select a province"
        } else {
            "Select a country first"
        }
    }

    pub fn district_placeholder(&self) -> &'static str {
        if self.province_id.is_some() {
            "Select a district"
        } else {
            "Select a province first"
        }
    }
}

/// Run a lookup against the backend and turn the reply into the action that applies it
pub async fn run_lookup<A>(api: &A, lookup: MapLookup) -> ClientResult<MapAction>
where
    A: MapApi + ?Sized,
{
    let action = match lookup {
        MapLookup::Provinces { country_id } => MapAction::ProvincesLoaded {
            provinces: api.provinces(&country_id).await?,
            country_id,
        },
        MapLookup::Districts { province_id } => MapAction::DistrictsLoaded {
            districts: api.districts(&province_id).await?,
            province_id,
        },
        MapLookup::Villages { term, district_id } => MapAction::SuggestionsLoaded {
            villages: api.search_villages(&term, district_id.as_deref()).await?,
            term,
        },
    };
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;

    fn region(id: &str, name: &str) -> RegionOption {
        RegionOption {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn community(name: &str, coordinates: Option<(f64, f64)>) -> Community {
        Community {
            village_name: name.to_string(),
            province: "Rift Valley".to_string(),
            district: "Nakuru".to_string(),
            longitude: coordinates.map(|c| c.0),
            latitude: coordinates.map(|c| c.1),
            population: 1200,
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        calls: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl MapApi for RecordingBackend {
        async fn countries(&self) -> ClientResult<Vec<RegionOption>> {
            Ok(vec![region("1", "Kenya")])
        }

        async fn provinces(&self, country_id: &str) -> ClientResult<Vec<RegionOption>> {
            self.calls.borrow_mut().push(format!("provinces/{}", country_id));
            Ok(vec![region("10", "Rift Valley")])
        }

        async fn districts(&self, province_id: &str) -> ClientResult<Vec<RegionOption>> {
            self.calls.borrow_mut().push(format!("districts/{}", province_id));
            Ok(vec![region("100", "Nakuru")])
        }

        async fn search_villages(
            &self,
            term: &str,
            district_id: Option<&str>,
        ) -> ClientResult<Vec<RegionOption>> {
            self.calls
                .borrow_mut()
                .push(format!("villages/{}/{}", term, district_id.unwrap_or("")));
            Ok(vec![region("1000", "Njoro")])
        }

        async fn communities(&self) -> ClientResult<Vec<Community>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut state = MapFilterState::default();
        state.reduce_in_place(MapAction::CommunitiesLoaded(vec![
            community("Njoro", Some((35.9, -0.3))),
            community("Molo", Some((35.7, -0.2))),
            community("Njokerio", None),
        ]));
        assert_eq!(state.visible_communities().len(), 2);

        state.reduce_in_place(MapAction::SetSearch("NJO".to_string()));
        let names: Vec<&str> = state
            .visible_communities()
            .iter()
            .map(|c| c.village_name.as_str())
            .collect();
        assert_eq!(names, vec!["Njoro"]);

        state.reduce_in_place(MapAction::SetSearch("olo".to_string()));
        assert_eq!(state.visible_communities()[0].village_name, "Molo");
    }

    #[test]
    fn test_changing_country_clears_lower_levels() {
        let mut state = MapFilterState::default();
        let lookup = state.reduce_in_place(MapAction::SelectCountry(Some("1".to_string())));
        assert_eq!(
            lookup,
            Some(MapLookup::Provinces {
                country_id: "1".to_string()
            })
        );
        state.reduce_in_place(MapAction::ProvincesLoaded {
            country_id: "1".to_string(),
            provinces: vec![region("10", "Rift Valley")],
        });
        state.reduce_in_place(MapAction::SelectProvince(Some("10".to_string())));
        state.reduce_in_place(MapAction::DistrictsLoaded {
            province_id: "10".to_string(),
            districts: vec![region("100", "Nakuru")],
        });
        state.reduce_in_place(MapAction::SelectDistrict(Some("100".to_string())));
        assert_eq!(state.district_placeholder(), "Select a district");

        assert_eq!(state.reduce_in_place(MapAction::SelectCountry(None)), None);
        assert_eq!(state.province_id, None);
        assert_eq!(state.district_id, None);
        assert!(state.provinces.is_empty());
        assert!(state.districts.is_empty());
        assert_eq!(state.province_placeholder(), "Select a country first");
    }

    #[test]
    fn test_late_provinces_for_another_country_are_dropped() {
        let mut state = MapFilterState::default();
        state.reduce_in_place(MapAction::SelectCountry(Some("1".to_string())));
        state.reduce_in_place(MapAction::SelectCountry(Some("2".to_string())));
        state.reduce_in_place(MapAction::ProvincesLoaded {
            country_id: "1".to_string(),
            provinces: vec![region("10", "Rift Valley")],
        });
        assert!(state.provinces.is_empty());
    }

    #[test]
    fn test_village_term_drives_suggestions() {
        let mut state = MapFilterState::default();
        assert_eq!(
            state.reduce_in_place(MapAction::SetVillageTerm("   ".to_string())),
            None
        );

        let lookup = state.reduce_in_place(MapAction::SetVillageTerm(" njo ".to_string()));
        assert_eq!(
            lookup,
            Some(MapLookup::Villages {
                term: "njo".to_string(),
                district_id: None
            })
        );
        state.reduce_in_place(MapAction::SuggestionsLoaded {
            term: "nj".to_string(),
            villages: vec![region("999", "Njabini")],
        });
        assert!(state.suggestions.is_empty());
        state.reduce_in_place(MapAction::SuggestionsLoaded {
            term: "njo".to_string(),
            villages: vec![region("1000", "Njoro")],
        });
        assert_eq!(state.suggestions.len(), 1);

        state.reduce_in_place(MapAction::PickVillage(region("1000", "Njoro")));
        assert_eq!(state.village_id.as_deref(), Some("1000"));
        assert_eq!(state.village_term, "Njoro");
        assert!(state.suggestions.is_empty());

        state.reduce_in_place(MapAction::SetVillageTerm(String::new()));
        assert_eq!(state.village_id, None);
    }

    #[test]
    fn test_reset_keeps_loaded_reference_data() {
        let mut state = MapFilterState::default();
        state.reduce_in_place(MapAction::CountriesLoaded(vec![region("1", "Kenya")]));
        state.reduce_in_place(MapAction::CommunitiesLoaded(vec![community(
            "Njoro",
            Some((35.9, -0.3)),
        )]));
        state.reduce_in_place(MapAction::SelectCountry(Some("1".to_string())));
        state.reduce_in_place(MapAction::SetVillageTerm("nj".to_string()));
        state.reduce_in_place(MapAction::SelectCommunity(Some("Njoro".to_string())));
        assert_eq!(state.selected_community().map(|c| c.population), Some(1200));

        state.reduce_in_place(MapAction::Reset);
        assert_eq!(state.country_id, None);
        assert_eq!(state.village_term, "");
        assert_eq!(state.selected, None);
        assert_eq!(state.countries.len(), 1);
        assert_eq!(state.visible_communities().len(), 1);
    }

    #[tokio::test]
    async fn test_cascade_against_backend() {
        let backend = RecordingBackend::default();
        let mut state = MapFilterState::default();

        let lookup = state
            .reduce_in_place(MapAction::SelectCountry(Some("1".to_string())))
            .unwrap();
        let action = run_lookup(&backend, lookup).await.unwrap();
        state.reduce_in_place(action);
        assert_eq!(state.provinces, vec![region("10", "Rift Valley")]);

        let lookup = state
            .reduce_in_place(MapAction::SelectProvince(Some("10".to_string())))
            .unwrap();
        let action = run_lookup(&backend, lookup).await.unwrap();
        state.reduce_in_place(action);
        assert_eq!(state.districts, vec![region("100", "Nakuru")]);

        state.reduce_in_place(MapAction::SelectDistrict(Some("100".to_string())));
        let lookup = state
            .reduce_in_place(MapAction::SetVillageTerm("njo".to_string()))
            .unwrap();
        let action = run_lookup(&backend, lookup).await.unwrap();
        state.reduce_in_place(action);
        assert_eq!(state.suggestions, vec![region("1000", "Njoro")]);

        assert_eq!(
            *backend.calls.borrow(),
            vec!["provinces/1", "districts/10", "villages/njo/100"]
        );
    }
}
