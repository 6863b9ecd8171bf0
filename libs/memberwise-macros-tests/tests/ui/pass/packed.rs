use memberwise::{Memberwise, MemberwiseEq, MemberwiseHash};

#[derive(Clone, Copy, MemberwiseEq, MemberwiseHash, Memberwise)]
#[repr(packed)]
struct Packed {
    a: u32,
    #[memberwise(ignore)]
    b: u8,
}

#[derive(Clone, Copy, MemberwiseEq, MemberwiseHash)]
#[repr(C, packed(2))]
struct Frame(u16, u64, #[memberwise(ignore)] u8);

fn main() {
    assert!(Packed { a: 1, b: 2 } == Packed { a: 1, b: 3 });
    assert!(Packed { a: 1, b: 2 }.memberwise_eq(&Packed { a: 1, b: 9 }));
    assert!(Frame(1, 2, 3) != Frame(1, 3, 3));
}
