use clap::{Parser, Subcommand, ValueEnum};

/// wso2ctl: set up and operate the WSO2 Identity Server and API Manager pair
#[derive(Parser, Debug)]
#[command(name = "wso2ctl", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe both products
    Health,

    /// First-time setup: health, key manager registration, default roles
    Setup {
        /// Roles to create (already existing ones are skipped)
        #[arg(long, value_delimiter = ',', default_value = "api_consumer,api_publisher")]
        roles: Vec<String>,
    },

    /// Manage the Identity Server key manager in API Manager
    KeyManager {
        #[command(subcommand)]
        command: KeyManagerCommands,
    },

    /// Check or fix certificate trust between the products
    Cert {
        #[command(subcommand)]
        command: CertCommands,
    },

    /// Manage devportal applications
    App {
        #[command(subcommand)]
        command: AppCommands,
    },

    /// Manage Identity Server roles
    Role {
        #[command(subcommand)]
        command: RoleCommands,
    },

    /// Issue OAuth2 tokens
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },

    /// Create, publish and deploy APIs
    Api {
        #[command(subcommand)]
        command: ApiCommands,
    },

    /// Manage subscriptions
    Subscription {
        #[command(subcommand)]
        command: SubscriptionCommands,
    },

    /// Manage Identity Server users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeyManagerCommands {
    /// Register the Identity Server as key manager (skipped if present)
    Setup,
    /// List key managers
    List,
    /// Delete a key manager by name
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
pub enum CertCommands {
    /// Confirm the truststore holds the Identity Server certificate
    Check {
        #[arg(long, default_value = "wso2is")]
        alias: String,
        /// keytool binary
        #[arg(long, default_value = "keytool")]
        keytool: String,
        /// Also attempt verified TLS connections to every endpoint
        #[arg(long)]
        tls: bool,
    },
    /// Import a PEM certificate into the configured truststore with keytool
    Fix {
        /// Certificate to trust
        pem_file: String,
        #[arg(long, default_value = "wso2is")]
        alias: String,
        /// keytool binary
        #[arg(long, default_value = "keytool")]
        keytool: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppCommands {
    /// Create an application and generate its production keys
    Create {
        name: String,
        /// Defaults to WSO2_CALLBACK_URL
        callback_url: Option<String>,
        #[arg(
            long,
            value_delimiter = ',',
            default_value = "password,client_credentials,refresh_token,authorization_code"
        )]
        grant_types: Vec<String>,
    },
    /// List applications
    List,
    /// Show one application
    Get { application_id: String },
    /// Delete an application
    Delete { application_id: String },
    /// Create an application, subscribe it to an API, get a token and call the gateway
    Onboard {
        name: String,
        api_id: String,
        callback_url: Option<String>,
        /// Resource to call after the API context and version
        #[arg(long, default_value = "/")]
        resource: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoleCommands {
    /// Create a role (already existing is a warning)
    Create {
        name: String,
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// List roles
    List,
    /// Delete a role by name
    Delete { name: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenServer {
    /// Identity Server (external key manager)
    Is,
    /// API Manager (resident key manager)
    Am,
}

#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Resource owner password grant
    Password {
        client_id: String,
        client_secret: String,
        username: String,
        password: String,
        #[arg(long = "scope", default_value = "openid")]
        scopes: Vec<String>,
        #[arg(long, value_enum, default_value = "is")]
        server: TokenServer,
    },
    /// Client credentials grant
    ClientCredentials {
        client_id: String,
        client_secret: String,
        #[arg(long = "scope")]
        scopes: Vec<String>,
        #[arg(long, value_enum, default_value = "is")]
        server: TokenServer,
    },
    /// Refresh token grant
    Refresh {
        client_id: String,
        client_secret: String,
        refresh_token: String,
        #[arg(long, value_enum, default_value = "is")]
        server: TokenServer,
    },
    /// Authorization code grant (code obtained in a browser)
    AuthorizationCode {
        client_id: String,
        client_secret: String,
        code: String,
        redirect_uri: String,
        #[arg(long, value_enum, default_value = "is")]
        server: TokenServer,
    },
    /// Show the userinfo claims for an access token
    Userinfo { access_token: String },
}

#[derive(Subcommand, Debug)]
pub enum ApiCommands {
    /// Create an HTTP API
    Create {
        name: String,
        version: String,
        context: String,
        backend_url: String,
    },
    /// Move an API to the Published lifecycle state
    Publish { api_id: String },
    /// Create a revision
    Revision {
        api_id: String,
        #[arg(long, default_value = "created by wso2ctl")]
        description: String,
    },
    /// Deploy a revision to the configured gateway environment
    Deploy { api_id: String, revision_id: String },
    /// List APIs
    List,
    /// Show one API
    Get { api_id: String },
    /// Report which revision is deployed to the gateway environment
    Status { api_id: String },
    /// Create, publish, revision, deploy, then verify the deployment
    Rollout {
        name: String,
        version: String,
        context: String,
        backend_url: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SubscriptionCommands {
    /// Subscribe an application to an API
    Create {
        application_id: String,
        api_id: String,
        /// Defaults to WSO2_DEFAULT_TIER
        #[arg(long)]
        tier: Option<String>,
    },
    /// List an application's subscriptions
    List { application_id: String },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a user (already existing is a warning)
    Register {
        username: String,
        password: String,
        email: String,
        #[arg(long)]
        given_name: Option<String>,
        #[arg(long)]
        family_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "role")]
        roles: Vec<String>,
    },
    /// Activate a user account
    Activate { username: String },
    /// Deactivate a user account
    Deactivate { username: String },
    /// List users
    List {
        #[arg(long, default_value_t = 50)]
        count: u32,
    },
    /// Show one user
    Get { username: String },
    /// Delete a user
    Delete { username: String },
    /// Replace a user's password
    ResetPassword { username: String, new_password: String },
    /// Change profile attributes
    Update {
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        given_name: Option<String>,
        #[arg(long)]
        family_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Register (tolerating existing), activate, then obtain a password-grant token
    Onboard {
        username: String,
        password: String,
        email: String,
        client_id: String,
        client_secret: String,
    },
}
