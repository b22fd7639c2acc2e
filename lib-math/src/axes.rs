use core::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub};

/// One of the three measurement axes of the sensor.
/// 
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis
{
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All axes in register order.
    /// 
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed size per-axis container, every stage of the pipeline keeps its values in one of these so
/// the three axes are always processed identically.
/// 
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes<T>
{
    values: [T; 3],
}

impl<T: Copy> Axes<T>
{
    pub const fn new(x: T, y: T, z: T) -> Self {
        Axes { values: [x, y, z] }
    }

    /// Creates a container with the same value on every axis.
    /// 
    pub const fn splat(value: T) -> Self {
        Axes { values: [value; 3] }
    }

    /// Applies `f` to every axis and collects the results.
    /// 
    pub fn map<U, F: FnMut(T) -> U>(&self, mut f: F) -> Axes<U> {
        Axes { values: [f(self.values[0]), f(self.values[1]), f(self.values[2])] }
    }

    /// Combines two containers axis by axis.
    /// 
    pub fn zip_with<U: Copy, V, F: FnMut(T, U) -> V>(&self, other: &Axes<U>, mut f: F) -> Axes<V> {
        Axes {
            values: [
                f(self.values[0], other.values[0]),
                f(self.values[1], other.values[1]),
                f(self.values[2], other.values[2]),
            ],
        }
    }

    /// Iterates over `(axis, value)` pairs in register order.
    /// 
    pub fn iter(&self) -> impl Iterator<Item = (Axis, T)> + '_ {
        Axis::ALL.into_iter().map(move |axis| (axis, self.values[axis.index()]))
    }
}

impl Axes<f64>
{
    /// Returns an all zero container.
    /// 
    pub const fn zero() -> Self {
        Axes { values: [0.0; 3] }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Axes<f64>, tol: f64) -> bool {
        self.values.iter()
            .zip(other.values.iter())
            .all(|(a, b)| crate::approx_eq(*a, *b, tol))
    }
}

impl<T> Index<Axis> for Axes<T>
{
    type Output = T;

    #[inline]
    fn index(&self, axis: Axis) -> &T {
        &self.values[axis.index()]
    }
}

impl<T> IndexMut<Axis> for Axes<T>
{
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.values[axis.index()]
    }
}

impl Add for Axes<f64>
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.zip_with(&other, |a, b| a + b)
    }
}

impl AddAssign for Axes<f64>
{
    fn add_assign(&mut self, other: Self) {
        for axis in Axis::ALL {
            self[axis] += other[axis];
        }
    }
}

impl Sub for Axes<f64>
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.zip_with(&other, |a, b| a - b)
    }
}

impl Mul<f64> for Axes<f64>
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        self.map(|v| v * other)
    }
}

impl Div<f64> for Axes<f64>
{
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        self.map(|v| v / other)
    }
}
