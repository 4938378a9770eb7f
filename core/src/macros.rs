/// Creates a [`Vector`](crate::Vector) on the global heap.
///
/// ```
/// use growvec_core::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let v = vector![0u8; 4];
/// assert_eq!(v, [0, 0, 0, 0]);
///
/// let v: growvec_core::Vector<i32> = vector![];
/// assert!(v.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}
