use memberwise::{Memberwise, MemberwiseEq, MemberwiseHash};

#[derive(Debug, MemberwiseEq, MemberwiseHash, Memberwise)]
struct Point {
    #[memberwise(ignore)]
    x: i32,
    y: i32,
}

fn main() {
    assert_eq!(Point { x: 1, y: 5 }, Point { x: 2, y: 5 });
    assert!(Point::is_ignored("x"));
}
