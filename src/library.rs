use std::iter::FusedIterator;

use num::Num;

#[derive(Debug)]
pub struct UseOksAdapter<'a, I, E> {
    iter: I,
    error: &'a mut Result<(), E>,
}

impl<I: Iterator<Item = Result<T, E>>, T, E> Iterator for UseOksAdapter<'_, I, E> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.error.as_ref().ok()?;
        self.iter
            .next()?
            .map_err(|err| {
                *self.error = Err(err);
            })
            .ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match *self.error {
            Err(_) => (0, Some(0)),
            Ok(()) => {
                let (_, max) = self.iter.size_hint();
                (0, max)
            }
        }
    }
}

impl<I, T, E> FusedIterator for UseOksAdapter<'_, I, E>
where
    I: Iterator<Item = Result<T, E>>,
    I: FusedIterator,
{
}

pub trait IterExt: Iterator + Sized {
    fn use_oks<T, U, E, F>(self, body: F) -> Result<U, E>
    where
        Self: Iterator<Item = Result<T, E>>,
        F: for<'a> FnOnce(UseOksAdapter<'a, Self, E>) -> U,
    {
        let mut err = Ok(());

        let value = body(UseOksAdapter {
            iter: self,
            error: &mut err,
        });

        err.map(|()| value)
    }
}

impl<I: Iterator> IterExt for I {}


pub trait StrExt {
    fn parse_radix<N: Num>(&self, radix: u32) -> Result<N, N::FromStrRadixErr>;
}

impl StrExt for str {
    fn parse_radix<N: Num>(&self, radix: u32) -> Result<N, N::FromStrRadixErr> {
        N::from_str_radix(self, radix)
    }
}
