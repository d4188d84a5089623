/// Read-only access to a row-major image with an optional row stride.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }

    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }

    /// Number of pixels (`width * height`).
    fn len(&self) -> usize {
        self.width() * self.height()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(width, height)` pair, handy for shape comparisons.
    fn dims(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Visit every pixel in row-major order.
    fn for_each_pixel<F: FnMut(Self::Pixel)>(&self, mut f: F)
    where
        Self: Sized,
    {
        match self.as_slice() {
            Some(slice) => slice.iter().copied().for_each(f),
            None => {
                for row in self.rows() {
                    row.iter().copied().for_each(&mut f);
                }
            }
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
