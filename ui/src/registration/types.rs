// Core types for the registration wizard - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Gender as collected on the personal info step
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Account type chosen on the first step
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MemberType {
    #[serde(rename = "community member")]
    CommunityMember,
    #[serde(rename = "community leader")]
    CommunityLeader,
}

impl MemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::CommunityMember => "community member",
            MemberType::CommunityLeader => "community leader",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "community member" => Some(MemberType::CommunityMember),
            "community leader" => Some(MemberType::CommunityLeader),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MemberType::CommunityMember => "Community Member",
            MemberType::CommunityLeader => "Community Leader",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MemberType::CommunityMember => {
                "Join as a regular member to connect with others and participate in community activities."
            }
            MemberType::CommunityLeader => {
                "Join as a leader to create and manage communities, organize events, and guide members."
            }
        }
    }
}

/// The closed list of village affiliations offered at registration.
///
/// Not related to the geographic villages shown on the map.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Village {
    Reuben,
    Simeon,
    Levi,
    Judah,
    Dan,
    Naphtali,
    Gad,
    Asher,
    Issachar,
    Zebulun,
    Joseph,
    Benjamin,
}

impl Village {
    pub const ALL: [Village; 12] = [
        Village::Reuben,
        Village::Simeon,
        Village::Levi,
        Village::Judah,
        Village::Dan,
        Village::Naphtali,
        Village::Gad,
        Village::Asher,
        Village::Issachar,
        Village::Zebulun,
        Village::Joseph,
        Village::Benjamin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Village::Reuben => "Reuben",
            Village::Simeon => "Simeon",
            Village::Levi => "Levi",
            Village::Judah => "Judah",
            Village::Dan => "Dan",
            Village::Naphtali => "Naphtali",
            Village::Gad => "Gad",
            Village::Asher => "Asher",
            Village::Issachar => "Issachar",
            Village::Zebulun => "Zebulun",
            Village::Joseph => "Joseph",
            Village::Benjamin => "Benjamin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == value)
    }
}

/// The accumulating record for one in-progress registration
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub gender: Option<Gender>,
    pub village: Option<Village>,
    pub community: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub member_type: Option<MemberType>,
}

impl RegistrationDraft {
    pub fn has_date_of_birth(&self) -> bool {
        !self.day.is_empty() && !self.month.is_empty() && !self.year.is_empty()
    }

    /// Date of birth as `YYYY-MM-DD`, or `None` until all three parts are set
    pub fn date_of_birth(&self) -> Option<String> {
        if !self.has_date_of_birth() {
            return None;
        }
        Some(format!(
            "{}-{}-{}",
            self.year.trim(),
            pad_two(&self.month),
            pad_two(&self.day)
        ))
    }

    /// Date of birth as the user picked it, for the confirmation screen
    pub fn date_of_birth_display(&self) -> Option<String> {
        if !self.has_date_of_birth() {
            return None;
        }
        Some(format!("{}/{}/{}", self.day, self.month, self.year))
    }

    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::FirstName(value) => self.first_name = value,
            DraftField::LastName(value) => self.last_name = value,
            DraftField::Username(value) => self.username = value,
            DraftField::Email(value) => self.email = value,
            DraftField::Password(value) => self.password = value,
            DraftField::Day(value) => self.day = value,
            DraftField::Month(value) => self.month = value,
            DraftField::Year(value) => self.year = value,
            DraftField::Gender(value) => self.gender = value,
            DraftField::Village(value) => self.village = value,
            DraftField::Community(value) => self.community = value,
            DraftField::City(value) => self.city = value,
            DraftField::State(value) => self.state = value,
            DraftField::Country(value) => self.country = value,
            DraftField::MemberType(value) => self.member_type = value,
        }
    }
}

fn pad_two(value: &str) -> String {
    let value = value.trim();
    if value.len() == 1 {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// A single field write against the draft
#[derive(Clone, PartialEq, Debug)]
pub enum DraftField {
    FirstName(String),
    LastName(String),
    Username(String),
    Email(String),
    Password(String),
    Day(String),
    Month(String),
    Year(String),
    Gender(Option<Gender>),
    Village(Option<Village>),
    Community(String),
    City(String),
    State(String),
    Country(String),
    MemberType(Option<MemberType>),
}

impl DraftField {
    /// Map an HTML input `name` and its value to a draft field.
    ///
    /// Enum inputs accept an empty value as "unset". Unknown names yield `None`.
    pub fn from_input(name: &str, value: String) -> Option<Self> {
        let field = match name {
            "firstname" => DraftField::FirstName(value),
            "lastname" => DraftField::LastName(value),
            "username" => DraftField::Username(value),
            "email" => DraftField::Email(value),
            "date" => DraftField::Day(value),
            "month" => DraftField::Month(value),
            "year" => DraftField::Year(value),
            "gender" => DraftField::Gender(Gender::parse(&value)),
            "village" => DraftField::Village(Village::parse(&value)),
            "community" => DraftField::Community(value),
            "city" => DraftField::City(value),
            "state" => DraftField::State(value),
            "country" => DraftField::Country(value),
            "memberType" => DraftField::MemberType(MemberType::parse(&value)),
            _ => return None,
        };
        Some(field)
    }
}

/// Partial update merged into the draft; fields not listed are left alone
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DraftUpdate {
    pub fields: Vec<DraftField>,
}

impl DraftUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: DraftField) -> Self {
        self.fields.push(field);
        self
    }
}

impl From<DraftField> for DraftUpdate {
    fn from(field: DraftField) -> Self {
        Self {
            fields: vec![field],
        }
    }
}

impl FromIterator<DraftField> for DraftUpdate {
    fn from_iter<I: IntoIterator<Item = DraftField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// Form step management
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WizardStep {
    AccountType,
    PersonalInfo,
    Location,
    Password,
    Confirmation,
    Success,
}

impl WizardStep {
    pub const VISIBLE: [WizardStep; 5] = [
        WizardStep::AccountType,
        WizardStep::PersonalInfo,
        WizardStep::Location,
        WizardStep::Password,
        WizardStep::Confirmation,
    ];

    pub fn from_position(position: i32) -> Option<Self> {
        match position {
            0 => Some(WizardStep::AccountType),
            1 => Some(WizardStep::PersonalInfo),
            2 => Some(WizardStep::Location),
            3 => Some(WizardStep::Password),
            4 => Some(WizardStep::Confirmation),
            5 => Some(WizardStep::Success),
            _ => None,
        }
    }

    pub fn position(&self) -> i32 {
        match self {
            WizardStep::AccountType => 0,
            WizardStep::PersonalInfo => 1,
            WizardStep::Location => 2,
            WizardStep::Password => 3,
            WizardStep::Confirmation => 4,
            WizardStep::Success => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::AccountType => "Account Type",
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Location => "Additional Info",
            WizardStep::Password => "Security",
            WizardStep::Confirmation => "Confirmation",
            WizardStep::Success => "Complete",
        }
    }
}
