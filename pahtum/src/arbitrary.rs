use quickcheck::{Arbitrary, Gen};

use crate::{Board, Cell, Player};

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Player::One, Player::Two]).unwrap()
    }
}

impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        // Weighted towards stones, so that lines actually show up
        match u8::arbitrary(g) % 8 {
            0 => Cell::Empty,
            1 => Cell::BlackHole,
            _ => Cell::Stone(Player::arbitrary(g)),
        }
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::from(u8::arbitrary(g) % 9) + 1;
        let mut rows = vec![vec![Cell::Empty; size]; size];
        for row in rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Cell::arbitrary(g);
            }
        }
        Board::from_rows(&rows)
    }
}
