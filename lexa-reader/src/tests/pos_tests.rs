use crate::{Location, Pos, Reader};

struct SourceLocation {
    row: usize,
    col: usize,
}

impl Location for SourceLocation {
    fn line(&self) -> usize {
        self.row
    }

    fn column(&self) -> usize {
        self.col
    }
}

#[test]
fn test_default_pos() {
    assert_eq!(Pos::new(0, 0), Pos::default());
}

#[test]
fn test_pos_from_external_location() {
    let location = SourceLocation { row: 4, col: 7 };
    let pos = Pos::from(&location);

    assert_eq!(4, pos.line());
    assert_eq!(7, pos.column());
    assert_eq!(pos, Pos::of(&location));
}

#[test]
fn test_pos_is_a_snapshot() {
    let mut reader = Reader::new("a\nb");
    let before = reader.pos();

    reader.consume_while(|_| true);

    assert_eq!(Pos::new(0, 0), before);
    assert_eq!(Pos::new(1, 1), reader.pos());
    assert_eq!(reader.pos(), Pos::from(&reader));
}

#[test]
fn test_pos_display_and_order() {
    let a = Pos::new(1, 9);
    let b = Pos::new(2, 0);

    assert_eq!("1:9", a.to_string());
    assert!(a < b);
}
