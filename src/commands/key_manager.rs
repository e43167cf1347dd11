use anyhow::Result;

use wso2_rs::{Wso2Client, Wso2Error};

use crate::cli::KeyManagerCommands;
use crate::commands::{authorize, health::ensure_key_manager};
use crate::config::Config;
use crate::report;
use crate::workflow::Sequencer;

pub async fn run(command: KeyManagerCommands, client: &mut Wso2Client, cfg: &Config) -> Result<()> {
    match command {
        KeyManagerCommands::Setup => {
            let mut seq = Sequencer::new("key-manager setup", 2);
            authorize(&mut seq, client).await?;
            if let Some(km) = ensure_key_manager(&mut seq, client, cfg).await? {
                println!("key manager: {km}");
            }
            seq.finish();
        }
        KeyManagerCommands::List => {
            let mut seq = Sequencer::new("key-manager list", 2);
            authorize(&mut seq, client).await?;
            let list = seq.step("list key managers", client.list_key_managers()).await?;
            report::print_key_managers(&list.list);
            seq.finish();
        }
        KeyManagerCommands::Delete { name } => {
            let mut seq = Sequencer::new("key-manager delete", 3);
            authorize(&mut seq, client).await?;
            let km = seq
                .step(&format!("look up key manager {name}"), async {
                    client
                        .find_key_manager(&name)
                        .await?
                        .ok_or_else(|| Wso2Error::Other(format!("no key manager named {name}")))
                })
                .await?;
            seq.step("delete key manager", client.delete_key_manager(&km.id)).await?;
            println!("deleted key manager {km}");
            seq.finish();
        }
    }
    Ok(())
}
