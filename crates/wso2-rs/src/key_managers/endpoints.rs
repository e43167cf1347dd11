//! Key_managers module endpoints.

use crate::client::Wso2Client;
use crate::errors::Wso2Error;
use crate::helpers::parse_json;
use crate::key_managers::models::{KeyManager, KeyManagerList, KeyManagerRequest};
use reqwest::Method;


const KEY_MANAGERS: &str = "/api/am/admin/v4/key-managers";
const KEY_MANAGER: &str = "/api/am/admin/v4/key-managers/{}";

impl Wso2Client {
    /// GET /api/am/admin/v4/key-managers
    pub async fn list_key_managers(&self) -> Result<KeyManagerList, Wso2Error> {
        let (_, body) = self.management_request::<str>(Method::GET, KEY_MANAGERS, None).await?;
        parse_json(&body)
    }


    /// Look a key manager up by name from the list
    pub async fn find_key_manager(&self, name: &str) -> Result<Option<KeyManager>, Wso2Error> {
        let list = self.list_key_managers().await?;
        Ok(list.list.into_iter().find(|km| km.name == name))
    }


    /// POST /api/am/admin/v4/key-managers
    /// A duplicate name is rejected with 409 (see `Wso2Error::is_already_exists`)
    pub async fn create_key_manager(
        &self,
        req: &KeyManagerRequest,
    ) -> Result<KeyManager, Wso2Error> {
        let (_, body) = self.management_request(Method::POST, KEY_MANAGERS, Some(req)).await?;
        parse_json(&body)
    }


    /// DELETE /api/am/admin/v4/key-managers/{id}
    pub async fn delete_key_manager(&self, id: &str) -> Result<(), Wso2Error> {
        let url = KEY_MANAGER.replace("{}", id);
        self.management_request::<str>(Method::DELETE, &url, None).await?;
        Ok(())
    }
}
