use serde::Serialize;

/// Everything read from the config file. Built once by the parser and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupConfig {
    pub user: String,
    pub password: String,
    pub server: String,
    pub directories: Vec<String>,
}

/// Client configuration consumed by the put tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialsDocument {
    pub auth: String,
    pub server: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    User,
    Password,
    Server,
}

impl Directive {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "user" => Some(Directive::User),
            "password" => Some(Directive::Password),
            "server" => Some(Directive::Server),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::User => "user",
            Directive::Password => "password",
            Directive::Server => "server",
        }
    }
}
