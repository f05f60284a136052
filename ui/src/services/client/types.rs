// Wire types for the iTribe REST backend
use serde::{Deserialize, Deserializer, Serialize};

use crate::registration::{Gender, MemberType, RegistrationDraft, Village};

/// Body of `POST /register`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub dateofbirth: String,
    pub gender: Option<Gender>,
    pub village: Option<Village>,
    pub community: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(rename = "memberType")]
    pub member_type: Option<MemberType>,
}

impl RegisterRequest {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            firstname: draft.first_name.clone(),
            lastname: draft.last_name.clone(),
            username: draft.username.clone(),
            email: draft.email.clone(),
            password: draft.password.clone(),
            dateofbirth: draft.date_of_birth().unwrap_or_default(),
            gender: draft.gender,
            village: draft.village,
            community: draft.community.clone(),
            city: draft.city.clone(),
            state: draft.state.clone(),
            country: draft.country.clone(),
            member_type: draft.member_type,
        }
    }
}

/// Body of `POST /login`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Every backend endpoint answers with `{ "message": ... }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ApiMessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiMessageResponse {
    pub fn with_message(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }
}

/// One row of `GET /users?page=N`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DirectoryMember {
    pub name: String,
    pub dateofbirth: String,
    pub gender: String,
    pub village: String,
    pub city: String,
    pub community: String,
    pub state: String,
    pub country: String,
}

/// Body of `GET /users?page=N`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UsersPageResponse {
    #[serde(default)]
    pub users: Vec<DirectoryMember>,
    #[serde(default)]
    pub total: u64,
}

/// A country, province, district or village offered by the map filters
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
}

/// A geographic village community plotted on the map
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Community {
    pub village_name: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub population: u64,
}

impl Community {
    pub fn has_coordinates(&self) -> bool {
        self.longitude.is_some() && self.latitude.is_some()
    }
}

// The backend sends numeric ids for some lookups and string ids for others
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_wire_shape() {
        let draft = RegistrationDraft {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            username: "adaobi".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            day: "5".to_string(),
            month: "10".to_string(),
            year: "1988".to_string(),
            gender: Some(Gender::Female),
            village: Some(Village::Asher),
            community: "Riverside".to_string(),
            city: "Lagos".to_string(),
            state: "Lagos".to_string(),
            country: "Nigeria".to_string(),
            member_type: Some(MemberType::CommunityMember),
        };

        let value = serde_json::to_value(RegisterRequest::from_draft(&draft)).unwrap();
        assert_eq!(
            value,
            json!({
                "firstname": "Ada",
                "lastname": "Obi",
                "username": "adaobi",
                "email": "ada@example.com",
                "password": "Abcdef1!",
                "dateofbirth": "1988-10-05",
                "gender": "female",
                "village": "Asher",
                "community": "Riverside",
                "city": "Lagos",
                "state": "Lagos",
                "country": "Nigeria",
                "memberType": "community member"
            })
        );
    }

    #[test]
    fn test_message_response_tolerates_missing_message() {
        let response: ApiMessageResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.message, None);

        let response: ApiMessageResponse =
            serde_json::from_value(json!({ "message": "ok", "extra": 1 })).unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_region_ids_accept_numbers_and_strings() {
        let regions: Vec<RegionOption> = serde_json::from_value(json!([
            { "id": 7, "name": "Kenya" },
            { "id": "12", "name": "Uganda" }
        ]))
        .unwrap();
        assert_eq!(regions[0].id, "7");
        assert_eq!(regions[1].id, "12");
    }

    #[test]
    fn test_users_page_decodes_partial_rows() {
        let page: UsersPageResponse = serde_json::from_value(json!({
            "users": [{ "name": "Ada Obi", "dateofbirth": "1990-03-07", "city": "Lagos" }],
            "total": 240
        }))
        .unwrap();
        assert_eq!(page.total, 240);
        assert_eq!(page.users[0].city, "Lagos");
        assert_eq!(page.users[0].village, "");
    }

    #[test]
    fn test_community_without_coordinates() {
        let community: Community = serde_json::from_value(json!({
            "village_name": "Kibera",
            "province": "Nairobi",
            "district": "Langata",
            "longitude": null,
            "latitude": -1.31
        }))
        .unwrap();
        assert!(!community.has_coordinates());
        assert_eq!(community.population, 0);
    }
}
