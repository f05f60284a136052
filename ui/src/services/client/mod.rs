// Client-side access to the iTribe REST backend
//
// - `api`: traits the app state is written against
// - `itribe_client`: reqwest implementation of those traits
// - `types`: request and response bodies
// - `errors`: client error taxonomy

pub mod api;
pub mod errors;
pub mod itribe_client;
pub mod types;

pub use api::{AuthApi, DirectoryApi, MapApi, RegistrationApi};
pub use errors::{ClientError, ClientResult};
pub use itribe_client::{parse_json_response, parse_message_response, ITribeClient};
pub use types::{
    ApiMessageResponse, Community, DirectoryMember, LoginRequest, RegionOption, RegisterRequest,
    UsersPageResponse,
};
