// The marker is a derive helper; on any other item it is an unknown attribute.

#[memberwise(ignore)]
fn checksum() -> u32 {
    0
}

fn main() {
    let _ = checksum();
}
