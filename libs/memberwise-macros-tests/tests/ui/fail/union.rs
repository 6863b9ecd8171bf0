use memberwise::Memberwise;

#[derive(Memberwise)]
#[allow(dead_code)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
