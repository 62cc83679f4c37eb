//! Cover problem models.
//!
//! Provides the core data types shared by every solver.
//!
//! | Type | Role |
//! |------|------|
//! | [`Matrix`] | Validated input; row `r` covers column `c` when `(r, c)` is nonzero |
//! | [`RowSet`] | Candidate or final selection of rows, ascending |
//! | [`AlgorithmResult`] | Selection plus wall-clock duration of one run |
//! | [`ResultStore`] | Caller-owned results keyed by algorithm |

mod matrix;
mod result;
mod row_set;

pub use matrix::Matrix;
pub use result::{AlgorithmResult, ResultStore};
pub use row_set::RowSet;
