//! JSON response envelope.

use serde::{Deserialize, Serialize};

/// Wraps every successful payload under a `Results` key.
///
/// `T` is a single record for item endpoints and a `Vec` for collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "Results")]
    pub results: T,
}

impl<T> Envelope<T> {
    pub fn new(results: T) -> Self {
        Self { results }
    }

    pub fn into_inner(self) -> T {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::Envelope;
    use listd_core::List;

    #[test]
    fn serializes_payload_under_results_key() {
        let single = serde_json::to_value(Envelope::new(List::new(1, "Foo"))).unwrap();
        assert_eq!(single, serde_json::json!({ "Results": { "ID": 1, "Name": "Foo" } }));

        let empty = serde_json::to_value(Envelope::new(Vec::<List>::new())).unwrap();
        assert_eq!(empty, serde_json::json!({ "Results": [] }));
    }
}
