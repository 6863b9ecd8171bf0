use memberwise::{MemberwiseEq, MemberwiseHash};

/// Markers mix freely with attributes of other derives and lints.
#[derive(Debug, Clone, MemberwiseEq, MemberwiseHash)]
#[allow(non_snake_case)]
struct Record {
    /// Primary key.
    id: u64,
    #[allow(dead_code)]
    #[memberwise(ignore)]
    #[doc = "Cached rendering."]
    Rendered: String,
}

fn main() {
    let a = Record { id: 1, Rendered: String::from("a") };
    let b = Record { id: 1, Rendered: String::new() };
    assert_eq!(a, b.clone());
}
