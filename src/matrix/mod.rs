pub mod dense;
pub mod io;
pub mod traits;
pub mod view;

pub use self::dense::Matrix;
pub use self::traits::{MatrixView, MatrixViewMut, Rows, RowsMut};
pub use self::view::MatrixRef;
