use anyhow::Result;

use wso2_rs::Wso2Client;

use crate::cli::SubscriptionCommands;
use crate::commands::authorize;
use crate::config::Config;
use crate::report;
use crate::workflow::Sequencer;

pub async fn run(command: SubscriptionCommands, client: &mut Wso2Client, cfg: &Config) -> Result<()> {
    match command {
        SubscriptionCommands::Create { application_id, api_id, tier } => {
            let tier = tier.unwrap_or_else(|| cfg.default_tier.clone());
            let mut seq = Sequencer::new("subscription create", 2);
            authorize(&mut seq, client).await?;
            let sub = seq
                .step(
                    &format!("subscribe {application_id} to {api_id}"),
                    client.create_subscription(&application_id, &api_id, &tier),
                )
                .await?;
            seq.finish();
            println!("subscription_id: {}", sub.subscription_id);
            println!("{sub}");
        }
        SubscriptionCommands::List { application_id } => {
            let mut seq = Sequencer::new("subscription list", 2);
            authorize(&mut seq, client).await?;
            let subs = seq
                .step("list subscriptions", client.list_subscriptions(&application_id))
                .await?;
            seq.finish();
            report::print_subscriptions(&subs.list);
        }
    }
    Ok(())
}
