/// Groups the items of an iterator two by two.
///
/// A dangling last item is not yielded, but is kept around and can be
/// inspected through [`Pairs::leftover`] once the iterator is exhausted.
pub struct Pairs<I>
where
    I: Iterator + ?Sized,
{
    leftover: Option<I::Item>,
    inner: I,
}

pub trait IntoPairs: Iterator {
    fn pairs(self) -> Pairs<Self>;
}

impl<I: Iterator> IntoPairs for I {
    fn pairs(self) -> Pairs<Self> { Pairs { leftover: None, inner: self } }
}

impl<I: Iterator> Pairs<I> {
    pub fn leftover(&self) -> Option<&I::Item> { self.leftover.as_ref() }
}

impl<T, I: Iterator<Item = T>> Iterator for Pairs<I> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let left = self.inner.next()?;
        match self.inner.next() {
            Some(right) => Some((left, right)),
            None => {
                self.leftover = Some(left);
                None
            }
        }
    }
}
