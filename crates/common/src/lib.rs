//! Shared building blocks for the restaurant platform crates.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_serializes_status() {
        let json = serde_json::to_value(types::Health { status: "ok" }).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
