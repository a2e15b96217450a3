use crate::{Card, Color, Rank, ALL_COLORS, MAX_PLAYERS};

/// The number of members of a ring, between one and the maximum number of players.
#[derive(Clone, Copy, Debug)]
pub struct RingSize(pub usize);

impl quickcheck::Arbitrary for RingSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        RingSize(usize::arbitrary(g) % MAX_PLAYERS + 1)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((1..self.0).rev().map(RingSize))
    }
}

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&ALL_COLORS).unwrap()
    }
}

impl quickcheck::Arbitrary for Rank {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let number = Rank::Number(u8::arbitrary(g) % 10);
        *g.choose(&[
            number,
            Rank::Skip,
            Rank::Reverse,
            Rank::DrawTwo,
        ])
        .unwrap()
    }
}

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            color: Color::arbitrary(g),
            rank: Rank::arbitrary(g),
        }
    }
}
