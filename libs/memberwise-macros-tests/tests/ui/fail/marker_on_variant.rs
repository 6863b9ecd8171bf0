use memberwise::MemberwiseHash;

#[derive(MemberwiseHash)]
enum Shape {
    #[memberwise(ignore)]
    Circle(u32),
    Square(u32),
}

fn main() {
    for shape in [Shape::Circle(1), Shape::Square(2)] {
        match shape {
            Shape::Circle(r) | Shape::Square(r) => {
                let _ = r;
            }
        }
    }
}
