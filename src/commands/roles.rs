use anyhow::Result;

use wso2_rs::Wso2Client;

use crate::cli::RoleCommands;
use crate::report;
use crate::workflow::Sequencer;

pub async fn run(command: RoleCommands, client: &Wso2Client) -> Result<()> {
    match command {
        RoleCommands::Create { name, permissions } => {
            let mut seq = Sequencer::new("role create", 1);
            let created = seq
                .step_tolerating_conflict(
                    &format!("create role {name}"),
                    client.create_role(&name, &permissions),
                )
                .await?;
            seq.finish();
            match created {
                Some(role) => println!("role_id: {}", role.id),
                None => println!("role {name} already exists"),
            }
        }
        RoleCommands::List => {
            let mut seq = Sequencer::new("role list", 1);
            let roles = seq.step("list roles", client.list_roles()).await?;
            seq.finish();
            report::print_roles(&roles.resources);
        }
        RoleCommands::Delete { name } => {
            let mut seq = Sequencer::new("role delete", 2);
            let role_id = seq
                .step(&format!("look up role {name}"), client.find_role_id(&name))
                .await?;
            seq.step("delete role", client.delete_role(&role_id)).await?;
            seq.finish();
            println!("deleted role {name} ({role_id})");
        }
    }
    Ok(())
}
