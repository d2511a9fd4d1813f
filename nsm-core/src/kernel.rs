//! Elementwise array kernel.
//!
//! Every value in a model is a [`Field`]: an N-dimensional array of `f64` that shares a
//! common shape with the other values of the same model instance.
//! Scalars are zero-dimensional arrays and broadcast against any shape.
//!
//! Processes are written as scalar functions and lifted over fields with [`map_n`],
//! which handles the broadcasting.
//! The scalar helpers in this module ([`where_`], [`minimum`], [`maximum`], ...) follow
//! IEEE-754 semantics so that guards such as `where_(isnan(x), fallback, x)` behave the
//! same for every cell.

use ndarray::{arr0, ArrayD, ArrayViewD, IxDyn};

/// An N-dimensional array of values.
pub type Field = ArrayD<f64>;

/// Create a zero-dimensional field holding a single value.
pub fn scalar(value: f64) -> Field {
    arr0(value).into_dyn()
}

/// Determine the shape produced by broadcasting a set of shapes together.
///
/// Shapes are aligned on their trailing axes and an axis of length 1 is stretched to
/// match the other shapes.
/// Returns `None` if any pair of axes is incompatible.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Option<Vec<usize>> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut result = vec![1; ndim];

    for shape in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let current = &mut result[offset + axis];
            if *current == 1 {
                *current = len;
            } else if len != 1 && len != *current {
                return None;
            }
        }
    }
    Some(result)
}

/// Broadcast a field to the given shape, returning an owned copy.
pub fn broadcast_to(field: &Field, shape: &[usize]) -> Option<Field> {
    field.broadcast(IxDyn(shape)).map(|view| view.to_owned())
}

/// Apply a scalar function elementwise across a set of broadcast-compatible fields.
///
/// The function receives one value per input, in the same order as `inputs`.
/// Returns `None` if the input shapes cannot be broadcast together.
pub fn map_n<F>(inputs: &[&Field], mut f: F) -> Option<Field>
where
    F: FnMut(&[f64]) -> f64,
{
    let shapes: Vec<&[usize]> = inputs.iter().map(|field| field.shape()).collect();
    let shape = broadcast_shape(&shapes)?;

    let views = inputs
        .iter()
        .map(|field| field.broadcast(IxDyn(&shape)))
        .collect::<Option<Vec<ArrayViewD<f64>>>>()?;
    let mut iters: Vec<_> = views.iter().map(|view| view.iter()).collect();

    let size = shape.iter().product::<usize>();
    let mut args = vec![0.0; inputs.len()];
    let mut values = Vec::with_capacity(size);
    for _ in 0..size {
        for (arg, iter) in args.iter_mut().zip(iters.iter_mut()) {
            *arg = iter.next().copied().unwrap_or(f64::NAN);
        }
        values.push(f(&args));
    }

    ArrayD::from_shape_vec(IxDyn(&shape), values).ok()
}

/// Returns true iff the value is an IEEE-754 NaN.
#[inline]
pub fn isnan(x: f64) -> bool {
    x.is_nan()
}

/// Ternary selection.
///
/// Both `a` and `b` are evaluated by the caller before selection,
/// so a NaN or infinite value in the unselected branch is simply discarded.
#[inline]
pub fn where_(cond: bool, a: f64, b: f64) -> f64 {
    if cond {
        a
    } else {
        b
    }
}

/// Elementwise minimum which propagates NaN from either argument.
#[inline]
pub fn minimum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Elementwise maximum which propagates NaN from either argument.
#[inline]
pub fn maximum(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Clamp a value to `[lower, upper]`, propagating NaN.
#[inline]
pub fn clip(x: f64, lower: f64, upper: f64) -> f64 {
    minimum(maximum(x, lower), upper)
}

/// Interpret a static option flag.
///
/// Flags are stored as floating point values so any non-zero value is on.
#[inline]
pub fn enabled(flag: f64) -> bool {
    flag != 0.0
}

/// Convert a flag into a 0/1 mask used to gate additive terms.
#[inline]
pub fn mask(flag: f64) -> f64 {
    where_(enabled(flag), 1.0, 0.0)
}

/// Interpret a static option selector (e.g. a formula index) as an integer.
#[inline]
pub fn option(value: f64) -> i64 {
    value.round() as i64
}

/// Field level ternary selection, `a` where `cond` is non-zero and `b` elsewhere.
pub fn select(cond: &Field, a: &Field, b: &Field) -> Option<Field> {
    map_n(&[cond, a, b], |v| where_(enabled(v[0]), v[1], v[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn broadcast_shapes() {
        assert_eq!(broadcast_shape(&[&[], &[3]]), Some(vec![3]));
        assert_eq!(broadcast_shape(&[&[2, 1], &[3]]), Some(vec![2, 3]));
        assert_eq!(broadcast_shape(&[&[4, 1, 2], &[3, 1]]), Some(vec![4, 3, 2]));
        assert_eq!(broadcast_shape(&[&[2], &[3]]), None);
        assert_eq!(broadcast_shape(&[]), Some(vec![]));
    }

    #[test]
    fn map_scalars() {
        let a = scalar(2.0);
        let b = scalar(3.0);
        let result = map_n(&[&a, &b], |v| v[0] * v[1]).unwrap();
        assert_eq!(result.ndim(), 0);
        assert_eq!(result.sum(), 6.0);
    }

    #[test]
    fn map_broadcasts_scalar_against_array() {
        let a = Array1::from(vec![1.0, 2.0, 3.0]).into_dyn();
        let b = scalar(10.0);
        let result = map_n(&[&a, &b], |v| v[0] + v[1]).unwrap();
        assert_eq!(result, array![11.0, 12.0, 13.0].into_dyn());
    }

    #[test]
    fn map_broadcasts_trailing_axes() {
        let a = array![[1.0], [2.0]].into_dyn();
        let b = array![10.0, 20.0, 30.0].into_dyn();
        let result = map_n(&[&a, &b], |v| v[0] * v[1]).unwrap();
        assert_eq!(
            result,
            array![[10.0, 20.0, 30.0], [20.0, 40.0, 60.0]].into_dyn()
        );
    }

    #[test]
    fn map_incompatible_shapes() {
        let a = array![1.0, 2.0].into_dyn();
        let b = array![1.0, 2.0, 3.0].into_dyn();
        assert!(map_n(&[&a, &b], |v| v[0] + v[1]).is_none());
    }

    #[test]
    fn map_without_inputs() {
        let result = map_n(&[], |_| 4.0).unwrap();
        assert_eq!(result, scalar(4.0));
    }

    #[test]
    fn where_evaluates_both_branches() {
        let x = 0.0_f64;
        let ratio = x / x;
        assert!(isnan(ratio));
        assert_eq!(where_(isnan(ratio), 0.5, ratio), 0.5);
        assert_eq!(where_(false, 1.0 / x, 2.0), 2.0);
    }

    #[test]
    fn nan_propagation() {
        assert!(minimum(f64::NAN, 1.0).is_nan());
        assert!(maximum(1.0, f64::NAN).is_nan());
        assert!(clip(f64::NAN, 0.0, 1.0).is_nan());
        assert_eq!(clip(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clip(-0.5, 0.0, 1.0), 0.0);
    }

    #[test]
    fn flags() {
        assert!(enabled(1.0));
        assert!(!enabled(0.0));
        assert_eq!(mask(1.0), 1.0);
        assert_eq!(mask(0.0), 0.0);
        assert_eq!(option(2.0000001), 2);
    }

    #[test]
    fn select_fields() {
        let cond = array![1.0, 0.0, 1.0].into_dyn();
        let a = scalar(1.0);
        let b = array![5.0, 6.0, 7.0].into_dyn();
        let result = select(&cond, &a, &b).unwrap();
        assert_eq!(result, array![1.0, 6.0, 1.0].into_dyn());
    }

    #[test]
    fn broadcast_field_to_shape() {
        let value = broadcast_to(&scalar(2.0), &[2, 2]).unwrap();
        assert_eq!(value.shape(), &[2, 2]);
        assert!(broadcast_to(&array![1.0, 2.0].into_dyn(), &[3]).is_none());
    }
}
