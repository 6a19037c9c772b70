use serde::Deserialize;

/// Generic Wargaming.net API response.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Response<T> {
    Data { data: T },
    Error { error: Error },
}

#[derive(Deserialize, Debug)]
pub struct Error {
    #[serde(default)]
    pub message: Message,

    #[serde(default)]
    pub code: u16,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default)]
pub enum Message {
    #[serde(rename = "NOT_ENOUGH_SEARCH_LENGTH")]
    NotEnoughSearchLength,

    #[serde(rename = "SEARCH_NOT_SPECIFIED")]
    SearchNotSpecified,

    #[serde(rename = "ACCOUNT_ID_NOT_SPECIFIED")]
    AccountIdNotSpecified,

    #[serde(rename = "REQUEST_LIMIT_EXCEEDED")]
    RequestLimitExceeded,

    #[serde(rename = "INVALID_APPLICATION_ID")]
    InvalidApplicationId,

    #[serde(rename = "SOURCE_NOT_AVAILABLE")]
    SourceNotAvailable,

    #[default]
    #[serde(other)]
    Other,
}
