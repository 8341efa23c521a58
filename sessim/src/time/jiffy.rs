use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub},
};

/// Virtual time unit of the session simulator: one jiffy is one millisecond.
#[derive(PartialEq, PartialOrd, Ord, Eq, Copy, Clone, Default, Hash)]
pub struct Jiffies(pub usize);

impl Jiffies {
    pub const ZERO: Jiffies = Jiffies(0);

    pub const fn from_secs(secs: usize) -> Self {
        Jiffies(secs * 1000)
    }

    pub const fn from_millis(millis: usize) -> Self {
        Jiffies(millis)
    }

    pub fn saturating_sub(self, rhs: Jiffies) -> Jiffies {
        Jiffies(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Jiffies {
    type Output = Jiffies;

    fn add(self, rhs: Self) -> Self::Output {
        Jiffies(self.0 + rhs.0)
    }
}

impl Sub for Jiffies {
    type Output = Jiffies;

    fn sub(self, rhs: Self) -> Self::Output {
        Jiffies(self.0 - rhs.0)
    }
}

impl AddAssign<Jiffies> for Jiffies {
    fn add_assign(&mut self, rhs: Jiffies) {
        self.0 += rhs.0
    }
}

impl Display for Jiffies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl Debug for Jiffies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Jiffies({})", self.0)
    }
}
