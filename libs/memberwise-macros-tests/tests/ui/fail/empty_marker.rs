use memberwise::MemberwiseEq;

#[derive(MemberwiseEq)]
struct Point {
    #[memberwise()]
    x: i32,
    y: i32,
}

fn main() {
    let p = Point { x: 1, y: 2 };
    let _ = (p.x, p.y);
}
