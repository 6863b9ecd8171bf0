use std::cell::Cell;

use memberwise::{Memberwise, MemberwiseEq, MemberwiseHash};

#[derive(MemberwiseEq, MemberwiseHash, Memberwise)]
enum Event<'a, T, const N: usize> {
    Empty,
    Tick(#[memberwise(ignore)] Cell<u64>, [T; N]),
    Named {
        name: &'a str,
        #[memberwise(ignore)]
        seen: Cell<bool>,
    },
}

#[derive(MemberwiseEq, MemberwiseHash, Memberwise)]
enum Never {}

fn main() {
    let a: Event<'_, u8, 2> = Event::Tick(Cell::new(1), [1, 2]);
    let b: Event<'_, u8, 2> = Event::Tick(Cell::new(2), [1, 2]);
    assert!(a == b);

    let c: Event<'_, u8, 2> = Event::Named { name: "n", seen: Cell::new(false) };
    assert!(c != Event::Empty);
    if let Event::Named { seen, .. } = &c {
        seen.set(true);
    }
    assert_eq!(<Event<'_, u8, 2> as Memberwise>::FIELDS.len(), 4);
    assert!(<Never as Memberwise>::FIELDS.is_empty());
}
