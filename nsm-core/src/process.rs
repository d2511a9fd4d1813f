//! Pure process functions and the [`process!`](crate::process!) declaration macro.
//!
//! A process is a scalar function together with the ordered list of variable names it
//! reads.
//! The executor looks each name up in the evaluation environment, broadcasts the
//! resulting fields together and applies the function elementwise.

use std::fmt;

/// Signature of the scalar function behind a [`Process`].
///
/// The arguments are supplied positionally in the order of [`Process::inputs`].
pub type ProcessFn = fn(&[f64]) -> f64;

/// A pure elementwise function and the names of the variables it consumes.
#[derive(Clone, Copy)]
pub struct Process {
    inputs: &'static [&'static str],
    func: ProcessFn,
}

impl Process {
    pub const fn new(inputs: &'static [&'static str], func: ProcessFn) -> Self {
        Self { inputs, func }
    }

    /// Names of the variables read by this process, in argument order.
    pub fn inputs(&self) -> &'static [&'static str] {
        self.inputs
    }

    /// Evaluate the process for a single cell.
    pub fn evaluate(&self, args: &[f64]) -> f64 {
        (self.func)(args)
    }
}

impl fmt::Debug for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Process")
            .field("inputs", &self.inputs)
            .finish()
    }
}

/// Declare a [`Process`] from a closure-like expression.
///
/// The parameter names of the closure are the names of the variables the process reads,
/// so the dependency list can never drift from the function body.
/// Parameters are `f64` values for a single cell.
///
/// ```
/// use nsm_core::process;
///
/// let growth = process!(|mu_max_20, TwaterC| mu_max_20 * 1.047_f64.powf(TwaterC - 20.0));
/// assert_eq!(growth.inputs(), &["mu_max_20", "TwaterC"]);
/// assert_eq!(growth.evaluate(&[2.0, 20.0]), 2.0);
/// ```
///
/// The body is compiled as a free function, so it can call other functions in scope but
/// cannot capture local variables.
#[macro_export]
macro_rules! process {
    (|| $body:expr) => {
        $crate::process::Process::new(&[], {
            fn evaluate(_: &[f64]) -> f64 {
                $body
            }
            evaluate
        })
    };
    (|$($arg:ident),+ $(,)?| $body:expr) => {
        $crate::process::Process::new(&[$(stringify!($arg)),+], {
            #[allow(non_snake_case, unused_variables)]
            fn evaluate(args: &[f64]) -> f64 {
                let mut values = args.iter().copied();
                $(let $arg: f64 = values.next().unwrap_or(f64::NAN);)+
                $body
            }
            evaluate
        })
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{isnan, where_};

    fn double(x: f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn inputs_follow_parameter_order() {
        let p = process!(|b, a, TwaterC| a - b + TwaterC);
        assert_eq!(p.inputs(), &["b", "a", "TwaterC"]);
        assert_eq!(p.evaluate(&[1.0, 3.0, 10.0]), 12.0);
    }

    #[test]
    fn constant_process() {
        let p = process!(|| 4.5);
        assert!(p.inputs().is_empty());
        assert_eq!(p.evaluate(&[]), 4.5);
    }

    #[test]
    fn calls_functions_in_scope() {
        let p = process!(|x| double(x));
        assert_eq!(p.evaluate(&[2.5]), 5.0);
    }

    #[test]
    fn guards_with_where() {
        let p = process!(|num, den| {
            let ratio = num / den;
            where_(isnan(ratio), 0.5, ratio)
        });
        assert_eq!(p.evaluate(&[0.0, 0.0]), 0.5);
        assert_eq!(p.evaluate(&[1.0, 4.0]), 0.25);
    }

    #[test]
    fn missing_arguments_are_nan() {
        let p = process!(|a, b| a + b);
        assert!(p.evaluate(&[1.0]).is_nan());
    }

    #[test]
    fn debug_lists_inputs() {
        let p = process!(|Ap, depth| Ap / depth);
        assert_eq!(
            format!("{:?}", p),
            r#"Process { inputs: ["Ap", "depth"] }"#
        );
    }
}
