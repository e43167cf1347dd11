use wiremock::MockServer;
use wso2_rs::{AdminAccount, ClientConfig, Wso2Client};

pub const TEST_TOKEN: &str = "test-token";


/// Client whose three base URLs all point at the mock server.
pub fn client_for(server: &MockServer) -> Wso2Client {
    let config = ClientConfig {
        identity_server_url: server.uri(),
        api_manager_url: server.uri(),
        gateway_url: server.uri(),
        accept_invalid_certs: true,
        timeout: None,
    };
    Wso2Client::new_with_config(AdminAccount::new("admin", "admin"), config)
        .expect("Failed to build client")
}


/// Mock server plus a client already holding a management token.
pub async fn setup_client() -> (MockServer, Wso2Client) {
    let server = MockServer::start().await;
    let mut client = client_for(&server);
    client.set_management_token(TEST_TOKEN);
    (server, client)
}
