pub trait MatrixView {
    type Elem: Copy;

    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    fn row(&self, r: usize) -> &[Self::Elem];

    fn iter_rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { matrix: self, r: 0 }
    }

    fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    fn as_slice(&self) -> Option<&[Self::Elem]> {
        None
    }
}

pub trait MatrixViewMut: MatrixView {
    fn row_mut(&mut self, r: usize) -> &mut [Self::Elem];

    fn iter_rows_mut(&mut self) -> RowsMut<'_, Self>
    where
        Self: Sized,
    {
        RowsMut { matrix: self, r: 0 }
    }

    fn as_mut_slice(&mut self) -> Option<&mut [Self::Elem]> {
        None
    }
}

pub struct Rows<'a, M: ?Sized + MatrixView> {
    matrix: &'a M,
    r: usize,
}

impl<'a, M: MatrixView> Iterator for Rows<'a, M> {
    type Item = &'a [M::Elem];

    fn next(&mut self) -> Option<Self::Item> {
        if self.r >= self.matrix.rows() {
            return None;
        }
        let r = self.r;
        self.r += 1;
        Some(self.matrix.row(r))
    }
}

pub struct RowsMut<'a, M: ?Sized + MatrixViewMut> {
    matrix: &'a mut M,
    r: usize,
}

impl<'a, M: MatrixViewMut> Iterator for RowsMut<'a, M> {
    type Item = &'a mut [M::Elem];

    fn next(&mut self) -> Option<Self::Item> {
        if self.r >= self.matrix.rows() {
            return None;
        }
        // Reborrow trick to obtain a new &mut for each row
        let r = self.r;
        self.r += 1;
        let ptr = self.matrix as *mut M;
        // SAFETY: Each row r is returned at most once and rows do not alias.
        Some(unsafe { (&mut *ptr).row_mut(r) })
    }
}
