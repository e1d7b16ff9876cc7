//! TCO 비교 엔진 모듈 모음.

pub mod compare;
pub mod energy;
pub mod loan;
pub mod result;

pub use compare::*;
pub use result::*;
