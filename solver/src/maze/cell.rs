#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
    Start,
    End,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Open | Self::Start | Self::End)
    }
}
