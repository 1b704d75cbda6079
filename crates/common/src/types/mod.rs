use serde::Serialize;

/// Liveness payload for `/health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let json = serde_json::to_value(Health::ok()).unwrap();
        assert_eq!(json["status"], "ok");
    }
}
