pub use self::account_info::*;
pub use self::stats::*;
pub use self::tank_stats::*;
pub use self::vehicle::*;

pub mod account_info;
pub mod stats;
pub mod tank_stats;
pub mod vehicle;

use serde::Deserialize;

use crate::wargaming::AccountId;

/// Account search result item.
#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct FoundAccount {
    #[serde(rename = "account_id")]
    pub id: AccountId,

    pub nickname: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn found_accounts_ok() -> Result {
        let accounts = serde_json::from_str::<Vec<FoundAccount>>(
            // language=JSON
            r#"[{"nickname": "Straik", "account_id": 73892}]"#,
        )?;
        assert_eq!(
            accounts,
            vec![FoundAccount {
                id: 73892,
                nickname: "Straik".to_string(),
            }],
        );
        Ok(())
    }
}
