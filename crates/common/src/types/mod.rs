use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Banner returned by the service root.
#[derive(Serialize, Debug)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}
