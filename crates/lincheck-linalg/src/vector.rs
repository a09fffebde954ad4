use std::{array, fmt};

use crate::{traits::Number, Zero};

mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements; a [`From`] impl allows conversion to an array of the same length.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lincheck_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, [2, 2, 2]);
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use lincheck_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, [100, 101, 102]);
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lincheck_linalg::*;
    /// let v = Vector::from([1, 2, 3]).map(|i| i * 10);
    /// assert_eq!(v, [10, 20, 30]);
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lincheck_linalg::*;
    /// let a = Vector::from([1, 2]);
    /// let b = Vector::from(["1", "2"]);
    /// assert_eq!(a.zip(b), [(1, "1"), (2, "2")]);
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lincheck_linalg::*;
    /// let a = Vector::from([1, 3, -5]);
    /// let b = Vector::from([4, -2, -1]);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(arr: [T; N]) -> Self {
        Self(arr)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne};

    use super::*;

    #[test]
    fn eq() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v, [1, 2, 3].as_slice());
        assert_eq!(v, Vector::from([1, 2, 3]));
        assert_ne!(v, [3, 2, 1]);
    }

    #[test]
    fn arith() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([0.5, -2.0]);
        assert_eq!(a + b, [1.5, 0.0]);
        assert_eq!(a - b, [0.5, 4.0]);
        assert_eq!(-a, [-1.0, -2.0]);
        assert_eq!(a * 2.0, [2.0, 4.0]);

        let mut c = a;
        c += b;
        assert_eq!(c, [1.5, 0.0]);
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, [2.0, 4.0]);
    }

    #[test]
    fn dot() {
        let a = Vector::from([1.0, 0.0]);
        let b = Vector::from([0.0, 1.0]);
        assert_approx_eq!(a.dot(b), 0.0);
        assert_approx_eq!(a.dot(a), 1.0);
    }

    #[test]
    fn approx() {
        let a = Vector::from([1.0, 2.0]);
        assert_approx_eq!(a, Vector::from([1.0, 2.0 + 1e-9])).abs(1e-6);
        assert_approx_ne!(a, Vector::from([1.0, 2.1])).abs(1e-6);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", Vector::from([1, 2, 3])), "[1, 2, 3]");
    }
}
