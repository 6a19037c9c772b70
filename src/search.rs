use crate::opts::SearchOpts;
use crate::prelude::*;
use crate::wargaming::WargamingApi;

pub async fn run(opts: SearchOpts) -> Result {
    let api = WargamingApi::new(opts.api.game, &opts.api.application_id)?;
    let accounts = api.search_accounts(&opts.query).await?;
    if accounts.is_empty() {
        println!("no accounts found");
        return Ok(());
    }
    for account in accounts {
        println!("{:>10}  {}", account.id, account.nickname);
    }
    Ok(())
}
