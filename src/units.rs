//! Length units used throughout layout. Everything is converted into [Pt]
//! (1/72 of an inch, the native PDF user-space unit) before it reaches the
//! layout code.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// Points, 1/72 of an inch
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, Display, From, Into,
)]
pub struct Pt(pub f32);

/// Centimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct Cm(pub f32);

impl From<Cm> for Pt {
    fn from(value: Cm) -> Self {
        Pt(value.0 * 72.0 / 2.54)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}
